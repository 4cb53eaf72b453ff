//! C-ABI wrapper around `namedivider-client`.
//!
//! # Overview
//! Exposes the division client through `extern "C"` functions so any
//! language with a C FFI can either let Rust perform the HTTP call
//! (`namedivider_divide*`) or execute it itself between
//! `namedivider_build_divide` and `namedivider_parse_divide`.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiDivisionResult` envelope carries either the divided names
//!   or an error code, message, and HTTP status.
//! - The C caller owns all returned pointers and must call the matching
//!   `namedivider_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use namedivider_client::{DivisionClient, HttpResponse, MODE_BASIC, MODE_GBDT};

use types::*;

/// Borrow a C string as `&str`; null and invalid UTF-8 read as empty.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn str_or_empty<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().unwrap_or("")
}

/// Copy a C string's bytes, without requiring UTF-8; null reads as empty.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn bytes_or_empty(ptr: *const c_char) -> Vec<u8> {
    if ptr.is_null() {
        return Vec::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_bytes().to_vec()
}

/// Copy a C array of C strings into owned Rust strings.
///
/// Returns `None` when `names` is null but `names_len` is non-zero, or when
/// any element is null.
///
/// # Safety
/// `names` must be null or point to `names_len` readable pointers.
unsafe fn collect_names(names: *const *const c_char, names_len: u32) -> Option<Vec<String>> {
    if names_len == 0 {
        return Some(Vec::new());
    }
    if names.is_null() {
        return None;
    }
    let ptrs = unsafe { std::slice::from_raw_parts(names, names_len as usize) };
    ptrs.iter()
        .map(|&p| (!p.is_null()).then(|| unsafe { str_or_empty(p) }.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client bound to `base_url`.
///
/// A null or empty `base_url` selects `http://localhost:8000`. Returns null
/// only if an internal panic occurs. Free with `namedivider_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_client_new(base_url: *const c_char) -> *mut FfiDivisionClient {
    catch_unwind(|| {
        let url = unsafe { str_or_empty(base_url) };
        Box::into_raw(Box::new(FfiDivisionClient {
            inner: DivisionClient::new(url),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `namedivider_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_client_free(client: *mut FfiDivisionClient) {
    if !client.is_null() {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(client) });
        }));
    }
}

// ---------------------------------------------------------------------------
// Host-does-IO
// ---------------------------------------------------------------------------

/// Build the `POST /divide` request for `names`.
///
/// A null or empty `mode` means `"basic"`. Returns null if `client` is null,
/// if `names` cannot be read, or if serialization fails.
/// Free with `namedivider_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_build_divide(
    client: *const FfiDivisionClient,
    names: *const *const c_char,
    names_len: u32,
    mode: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let Some(names) = (unsafe { collect_names(names, names_len) }) else {
            return std::ptr::null_mut();
        };
        let mode = unsafe { str_or_empty(mode) };
        match client.inner.build_divide(&names, mode) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Parse the response to a request built by `namedivider_build_divide`.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_parse_divide(
    client: *const FfiDivisionClient,
    response: *const FfiHttpResponse,
) -> *mut FfiDivisionResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiDivisionResult::null_arg("client");
        }
        if response.is_null() {
            return FfiDivisionResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = HttpResponse::new(resp.status, unsafe { bytes_or_empty(resp.body) });
        match client.inner.parse_divide(core_resp) {
            Ok(names) => FfiDivisionResult::ok(names),
            Err(e) => FfiDivisionResult::from_error(e),
        }
    }))
    .unwrap_or_else(|_| FfiDivisionResult::panic("panic in namedivider_parse_divide"))
}

// ---------------------------------------------------------------------------
// Full round trip
// ---------------------------------------------------------------------------

fn divide_with(
    client: *const FfiDivisionClient,
    names: *const *const c_char,
    names_len: u32,
    mode: &str,
) -> *mut FfiDivisionResult {
    if client.is_null() {
        return FfiDivisionResult::null_arg("client");
    }
    let client = unsafe { &*client };
    let Some(names) = (unsafe { collect_names(names, names_len) }) else {
        return FfiDivisionResult::null_arg("names");
    };
    match client.inner.divide(&names, mode) {
        Ok(divided) => FfiDivisionResult::ok(divided),
        Err(e) => FfiDivisionResult::from_error(e),
    }
}

/// Divide `names` with the given `mode` (null or empty means `"basic"`),
/// performing the HTTP call. Blocks until the server answers or the
/// transport fails. Free the result with `namedivider_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_divide(
    client: *const FfiDivisionClient,
    names: *const *const c_char,
    names_len: u32,
    mode: *const c_char,
) -> *mut FfiDivisionResult {
    catch_unwind(AssertUnwindSafe(|| {
        divide_with(client, names, names_len, unsafe { str_or_empty(mode) })
    }))
    .unwrap_or_else(|_| FfiDivisionResult::panic("panic in namedivider_divide"))
}

/// Same as `namedivider_divide` with mode `"basic"`.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_divide_basic(
    client: *const FfiDivisionClient,
    names: *const *const c_char,
    names_len: u32,
) -> *mut FfiDivisionResult {
    catch_unwind(AssertUnwindSafe(|| divide_with(client, names, names_len, MODE_BASIC)))
        .unwrap_or_else(|_| FfiDivisionResult::panic("panic in namedivider_divide_basic"))
}

/// Same as `namedivider_divide` with mode `"gbdt"`.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_divide_gbdt(
    client: *const FfiDivisionClient,
    names: *const *const c_char,
    names_len: u32,
) -> *mut FfiDivisionResult {
    catch_unwind(AssertUnwindSafe(|| divide_with(client, names, names_len, MODE_GBDT)))
        .unwrap_or_else(|_| FfiDivisionResult::panic("panic in namedivider_divide_gbdt"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `namedivider_build_divide`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        for s in [req.url, req.body] {
            if !s.is_null() {
                drop(unsafe { CString::from_raw(s) });
            }
        }
        for h in unsafe { from_raw_parts(req.headers, req.headers_len) } {
            for s in [h.key, h.value] {
                if !s.is_null() {
                    drop(unsafe { CString::from_raw(s) });
                }
            }
        }
    });
}

/// Free an `FfiDivisionResult` returned by any divide or parse function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn namedivider_free_result(result: *mut FfiDivisionResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        for name in unsafe { from_raw_parts(result.names, result.len) } {
            free_divided_name_fields(&name);
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
