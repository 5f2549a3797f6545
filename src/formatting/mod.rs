//! Scientific notation rendering for `f64` sequences.
//!
//! Every value is written with [`MAX_DIGITS10`] significant digits, which is
//! enough for the text to parse back into the exact same bit pattern. The
//! exponent always carries a sign and at least two digits:
//!
//! ```rust
//! use vecfmt::formatting::format_values;
//!
//! assert_eq!(format_values(&[]), "");
//! assert_eq!(
//!     format_values(&[2.0, -0.5]),
//!     "2.0000000000000000e+00,-5.0000000000000000e-01"
//! );
//! ```
//!
//! Non-finite values use Rust's own spelling (`NaN`, `inf`, `-inf`).
//!
//! C++ `std::scientific` with `setprecision(max_digits10)` counts *fractional*
//! digits and so prints 18 significant digits. This module prints 17, the
//! minimum that still round-trips, so its fields are one digit shorter.

use std::fmt::{self, Write};

/// Significant decimal digits needed to round-trip any `f64`.
pub const MAX_DIGITS10: usize = f64::DIGITS as usize + 2;

/// Digits written after the radix point.
const FRACTION_DIGITS: usize = MAX_DIGITS10 - 1;

/// Minimum number of exponent digits, zero padded.
const EXPONENT_WIDTH: usize = 2;

const SEPARATOR: char = ',';

/// Format `values` as comma separated scientific notation.
///
/// Returns an empty string for an empty slice.
#[must_use]
pub fn format_values(values: &[f64]) -> String {
    // One field is at most 24 bytes ("-d." + 16 digits + "e+ddd").
    let mut out = String::with_capacity(values.len() * (MAX_DIGITS10 + 8));
    // Writing into a String cannot fail.
    let _ = write_values(&mut out, values);
    out
}

/// Format a single value the same way [`format_values`] formats each field.
#[must_use]
pub fn format_scientific(value: f64) -> String {
    let mut out = String::with_capacity(MAX_DIGITS10 + 8);
    let _ = write_scientific(&mut out, value);
    out
}

/// Append the formatted list to an existing writer.
pub fn write_values<W: Write>(out: &mut W, values: &[f64]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.write_char(SEPARATOR)?;
        }
        write_scientific(out, *value)?;
    }
    Ok(())
}

fn write_scientific<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return write!(out, "{value}");
    }

    let mut fixup = ExponentFixup::new(out);
    write!(fixup, "{:.*e}", FRACTION_DIGITS, value)?;
    fixup.finish()
}

/// Streams Rust's `{:e}` output through, turning `e-4` into `e-04` and `e0`
/// into `e+00`.
///
/// The mantissa is forwarded as it arrives; only the exponent (at most three
/// digits for `f64`) is held back until [`ExponentFixup::finish`].
struct ExponentFixup<'a, W: Write> {
    out: &'a mut W,
    in_exponent: bool,
    negative: bool,
    digits: [u8; 3],
    len: usize,
}

impl<'a, W: Write> ExponentFixup<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self {
            out,
            in_exponent: false,
            negative: false,
            digits: [0; 3],
            len: 0,
        }
    }

    fn finish(self) -> fmt::Result {
        if !self.in_exponent {
            return Ok(());
        }

        self.out.write_char('e')?;
        self.out.write_char(if self.negative { '-' } else { '+' })?;
        for _ in self.len..EXPONENT_WIDTH {
            self.out.write_char('0')?;
        }
        for digit in &self.digits[..self.len] {
            self.out.write_char(char::from(*digit))?;
        }
        Ok(())
    }
}

impl<W: Write> Write for ExponentFixup<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let exponent = if self.in_exponent {
            s
        } else {
            match s.split_once('e') {
                Some((mantissa, exponent)) => {
                    self.out.write_str(mantissa)?;
                    self.in_exponent = true;
                    exponent
                }
                None => return self.out.write_str(s),
            }
        };

        for byte in exponent.bytes() {
            match byte {
                b'-' if self.len == 0 => self.negative = true,
                b'0'..=b'9' if self.len < self.digits.len() => {
                    self.digits[self.len] = byte;
                    self.len += 1;
                }
                _ => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}

/// Borrowed [`fmt::Display`] adapter over a slice of values.
///
/// Lets the list go straight into `format!`, `println!` or `write!` without
/// building an intermediate `String`.
#[derive(Debug, Clone, Copy)]
pub struct ScientificList<'a>(pub &'a [f64]);

impl fmt::Display for ScientificList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.0)
    }
}
