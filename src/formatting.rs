//! Render numbers back into 11-character ENDF-6 fields.
//!
//! Output follows the convention most ENDF writers use: the exponent keeps
//! its sign but drops the marker letter, which frees one more character for
//! significand digits. The significand precision flexes with the exponent
//! width so the field always comes out exactly 11 characters.
use ryu_floating_decimal::d2d;

use crate::parsing::ENDF_FIELD_WIDTH;

/// Renders an `f64` as an 11-character ENDF-6 floating point field.
///
/// Values use the e-less form `[-]d.dddddd±e`, e.g. `6.023000+23` or
/// `-1.0000-300`. Significand digits past the available precision are
/// truncated, not rounded. Zero (either sign) renders as ` 0.000000+0`;
/// a non-finite value fills the field with `*`, since ENDF-6 has no way
/// to write one.
pub fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return "*".repeat(ENDF_FIELD_WIDTH);
    }
    if v == 0.0 {
        return " 0.000000+0".to_string();
    }

    let v_is_neg = v < 0.0;
    let dec = d2d(v);
    let mut b = itoa::Buffer::new();
    let m_bytes = b.format(dec.mantissa).as_bytes();
    // exponent once the significand is written as d.ddd...
    let exponent = dec.exponent + m_bytes.len() as i32 - 1;
    let mut b = itoa::Buffer::new();
    let e_str = b.format(exponent.abs());

    // sign + leading digit + '.' + precision + exponent sign + exponent
    // digits add up to the fixed field width, so the precision flexes
    let nsign = if v_is_neg { 1 } else { 0 };
    let precision = ENDF_FIELD_WIDTH - nsign - 3 - e_str.len();

    let mut out = String::with_capacity(ENDF_FIELD_WIDTH);
    if v_is_neg {
        out.push('-');
    }
    out.push(m_bytes[0] as char);
    out.push('.');
    for i in 1..=precision {
        let c = m_bytes.get(i).copied().unwrap_or(b'0');
        out.push(c as char);
    }
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(e_str);
    out
}

/// Renders an `i64` as an 11-character ENDF-6 integer field,
/// right-justified. A value too wide for the field fills it with `*`.
pub fn format_int(v: i64) -> String {
    let mut b = itoa::Buffer::new();
    let s = b.format(v);
    if s.len() > ENDF_FIELD_WIDTH {
        return "*".repeat(ENDF_FIELD_WIDTH);
    }
    format!("{s:>width$}", width = ENDF_FIELD_WIDTH)
}
