//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String` and raw pointer + length instead of
//! `Vec`. Conversion functions live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use namedivider_client::{ApiError, DividedName, HttpMethod, HttpRequest};

/// Opaque handle to a `DivisionClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiDivisionClient {
    pub(crate) inner: namedivider_client::DivisionClient,
}

/// Convert to a C string, dropping interior NULs rather than failing.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let s = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(s).unwrap_or_default().into_raw()
}

/// Hand a `Vec` to C as pointer + length. Empty vectors become null.
pub(crate) fn into_raw_parts<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let boxed = items.into_boxed_slice();
    let len = boxed.len() as u32;
    (Box::into_raw(boxed) as *mut T, len)
}

/// Reclaim a buffer produced by `into_raw_parts`.
///
/// # Safety
/// `ptr` and `len` must come from one `into_raw_parts` call and must not
/// have been reclaimed before.
pub(crate) unsafe fn from_raw_parts<T>(ptr: *mut T, len: u32) -> Vec<T> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    let slice = std::ptr::slice_from_raw_parts_mut(ptr, len as usize);
    unsafe { Box::from_raw(slice) }.into_vec()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `namedivider_build_divide`. The C caller executes the request
/// and passes the response back through `namedivider_parse_divide`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers: Vec<FfiHeader> = req
            .headers
            .into_iter()
            .map(|(k, v)| FfiHeader {
                key: to_c_string(k),
                value: to_c_string(v),
            })
            .collect();
        let (headers, headers_len) = into_raw_parts(headers);

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: to_c_string(req.url),
            headers,
            headers_len,
            body: req.body.map(to_c_string).unwrap_or(std::ptr::null_mut()),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing a request and
/// passes a pointer to `namedivider_parse_divide`. The FFI layer reads but
/// does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiDivisionResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Serialization = 1,
    Transport = 2,
    UnexpectedStatus = 3,
    ResponseRead = 4,
    Deserialization = 5,
    Panic = 6,
    NullArg = 7,
}

/// One divided name exposed to C.
#[repr(C)]
pub struct FfiDividedName {
    pub family: *mut c_char,
    pub given: *mut c_char,
    pub separator: *mut c_char,
    pub score: f64,
    pub algorithm: *mut c_char,
}

impl FfiDividedName {
    fn from_core(name: DividedName) -> Self {
        FfiDividedName {
            family: to_c_string(name.family),
            given: to_c_string(name.given),
            separator: to_c_string(name.separator),
            score: name.score,
            algorithm: to_c_string(name.algorithm),
        }
    }
}

/// Result envelope for every divide call.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `names`
/// points to `len` entries (null when `len` is 0).
/// On failure `error_code` describes the stage that failed,
/// `error_message` is a human-readable C string, `http_status` is set for
/// `UnexpectedStatus`, and `names` is null.
#[repr(C)]
pub struct FfiDivisionResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub names: *mut FfiDividedName,
    pub len: u32,
}

impl FfiDivisionResult {
    pub(crate) fn ok(names: Vec<DividedName>) -> *mut Self {
        let (names, len) = into_raw_parts(names.into_iter().map(FfiDividedName::from_core).collect());
        Box::into_raw(Box::new(FfiDivisionResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            names,
            len,
        }))
    }

    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let error_code = match &err {
            ApiError::SerializationError(_) => FfiErrorCode::Serialization,
            ApiError::TransportError(_) => FfiErrorCode::Transport,
            ApiError::UnexpectedStatus { .. } => FfiErrorCode::UnexpectedStatus,
            ApiError::ResponseReadError(_) => FfiErrorCode::ResponseRead,
            ApiError::DeserializationError(_) => FfiErrorCode::Deserialization,
        };
        Self::failure(error_code, err.status().unwrap_or(0), err.to_string())
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, 0, msg.to_string())
    }

    fn failure(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiDivisionResult {
            error_code,
            error_message: to_c_string(msg),
            http_status,
            names: std::ptr::null_mut(),
            len: 0,
        }))
    }
}

/// Free the C-string fields of an `FfiDividedName` (but not the struct itself).
pub(crate) fn free_divided_name_fields(name: &FfiDividedName) {
    for field in [name.family, name.given, name.separator, name.algorithm] {
        if !field.is_null() {
            drop(unsafe { CString::from_raw(field) });
        }
    }
}
