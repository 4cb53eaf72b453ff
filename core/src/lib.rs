//! Blocking client for the name division API.
//!
//! # Overview
//! `DivisionClient` sends a list of full names to `POST {base_url}/divide`
//! and returns one `DividedName` per input, in input order. The division
//! itself happens on the server; this crate only speaks the wire contract.
//!
//! # Design
//! - Every operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`). Hosts that do their own I/O
//!   (the C ABI, tests) use the halves directly.
//! - `divide` / `health` glue the halves together over a shared `ureq::Agent`.
//! - One call, one round trip. No retries, no partial results.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod transport;
pub mod types;

pub use client::DivisionClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{DividedName, DivisionRequest, DivisionResponse, HealthStatus, DEFAULT_MODE, MODE_BASIC, MODE_GBDT};
