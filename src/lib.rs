//! Parse and format the 11-character numeric fields used by the ENDF-6
//! nuclear data exchange format.
//!
//! ENDF-6 predates most sensible conventions for writing real numbers down:
//! fields may contain interior blanks, may be entirely blank (meaning zero),
//! and usually drop the exponent marker letter to buy an extra digit of
//! precision (`6.022+23` rather than `6.022E+23`). The [`parsing`] module
//! accepts all of that; the [`formatting`] module writes it back out.
pub mod endf_error;
pub mod ffi;
pub mod formatting;
pub mod parsing;
