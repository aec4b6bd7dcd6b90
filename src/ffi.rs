//! C ABI shim over the field parser.
//!
//! The crate also builds as a `cdylib` so that callers in other languages
//! (ENDF tooling tends to live in Python or Fortran) can use [`parse_float`]
//! without a Rust toolchain. This module only marshals; all behavior lives
//! in [`crate::parsing`].
use std::ffi::CStr;
use std::os::raw::c_char;

use crate::parsing::parse_float;

/// Converts a NUL-terminated ENDF-6 floating point field into a double.
///
/// A null pointer, a non-UTF-8 string, or any field [`parse_float`] cannot
/// make sense of yields 0.0, matching the parser's never-fail contract.
///
/// # Safety
///
/// `field` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn endf_parse_float(field: *const c_char) -> f64 {
    if field.is_null() {
        return 0.0;
    }
    match CStr::from_ptr(field).to_str() {
        Ok(s) => parse_float(s),
        Err(_) => 0.0,
    }
}
