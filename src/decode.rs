//! CSD decoders.
//!
//! Strict inverses of the encoders: integral digits accumulate by doubling,
//! fractional digits accumulate at a halving scale starting from one half.
//! Characters outside the CSD alphabet and duplicate separators are
//! rejected rather than skipped.

use crate::error::CsdError;

/// Decode a CSD string to its numeric value.
///
/// Accepts an optional single '.' separator; without one the whole string
/// is read as integral digits. The empty string decodes to zero.
///
/// # Arguments
/// * `csd` - CSD string over `{'+', '-', '0', '.'}`
///
/// # Returns
/// The decoded value, [`CsdError::InvalidDigit`] for a character outside
/// the alphabet, or [`CsdError::DuplicateSeparator`] for a second '.'.
///
/// # Examples
/// ```
/// assert_eq!(csd::decode("+00-00.+").unwrap(), 28.5);
/// assert_eq!(csd::decode("0.-").unwrap(), -0.5);
/// assert_eq!(csd::decode("0").unwrap(), 0.0);
/// ```
pub fn decode(csd: &str) -> Result<f64, CsdError> {
    let mut total = 0.0f64;
    // Zero while scanning integral digits, then the positional scale of the
    // next fractional digit.
    let mut scale = 0.0f64;

    for (position, digit) in csd.char_indices() {
        let signum = match digit {
            '0' => 0.0,
            '+' => 1.0,
            '-' => -1.0,
            '.' => {
                if scale > 0.0 {
                    return Err(CsdError::DuplicateSeparator { position });
                }
                scale = 0.5;
                continue;
            }
            other => {
                return Err(CsdError::InvalidDigit {
                    digit: other,
                    position,
                })
            }
        };

        if scale > 0.0 {
            total += signum * scale;
            scale /= 2.0;
        } else {
            total = total * 2.0 + signum;
        }
    }

    Ok(total)
}

/// Decode a separator-free CSD string to an integer.
///
/// # Arguments
/// * `csd` - CSD string over `{'+', '-', '0'}`
///
/// # Returns
/// The decoded value, [`CsdError::InvalidDigit`] for any other character
/// (including '.'), or [`CsdError::Overflow`] past the `i64` range.
///
/// # Examples
/// ```
/// assert_eq!(csd::decode_int("+00-00").unwrap(), 28);
/// assert_eq!(csd::decode_int("-000+").unwrap(), -15);
/// ```
pub fn decode_int(csd: &str) -> Result<i64, CsdError> {
    let mut total = 0i64;

    for (position, digit) in csd.char_indices() {
        let signum: i64 = match digit {
            '0' => 0,
            '+' => 1,
            '-' => -1,
            other => {
                return Err(CsdError::InvalidDigit {
                    digit: other,
                    position,
                })
            }
        };

        total = total
            .checked_mul(2)
            .and_then(|t| t.checked_add(signum))
            .ok_or(CsdError::Overflow)?;
    }

    Ok(total)
}
