//! Verilog generation for CSD constant multipliers.
//!
//! Maps a separator-free CSD string onto adder/subtractor hardware: every
//! non-zero digit becomes one sign-extended shifted copy of the input and
//! one add or subtract in the result expression.

use crate::decode::decode_int;
use crate::error::CsdError;

/// Operation contributed by a non-zero CSD digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitOp {
    /// '+' digit: the shifted input is added
    Add,
    /// '-' digit: the shifted input is subtracted
    Sub,
}

/// Extract the (power, operation) pairs of a CSD string, most significant
/// digit first.
///
/// # Arguments
/// * `csd` - Separator-free CSD string over `{'+', '-', '0'}`
/// * `highest_power` - Power of two carried by the first digit
///
/// # Returns
/// The non-zero terms, [`CsdError::LengthMismatch`] if the string length
/// is not `highest_power + 1`, or [`CsdError::InvalidDigit`] for a
/// character outside the alphabet.
pub fn digit_terms(csd: &str, highest_power: usize) -> Result<Vec<(usize, DigitOp)>, CsdError> {
    let len = csd.chars().count();
    if len != highest_power + 1 {
        return Err(CsdError::LengthMismatch {
            expected: highest_power + 1,
            actual: len,
        });
    }

    let mut terms = Vec::new();
    for (position, digit) in csd.chars().enumerate() {
        let power = highest_power - position;
        match digit {
            '+' => terms.push((power, DigitOp::Add)),
            '-' => terms.push((power, DigitOp::Sub)),
            '0' => {}
            other => {
                return Err(CsdError::InvalidDigit {
                    digit: other,
                    position,
                })
            }
        }
    }

    Ok(terms)
}

/// Generate a Verilog module multiplying a signed input by the constant a
/// CSD string encodes.
///
/// One sign-extended shift wire is emitted per distinct power, then a
/// single adder/subtractor chain forms the result. An all-zero pattern
/// assigns a constant zero result.
///
/// # Arguments
/// * `csd` - Separator-free CSD string over `{'+', '-', '0'}`
/// * `input_width` - Bit width of the multiplier input `x`
/// * `highest_power` - Power of two carried by the first digit
///
/// # Returns
/// The Verilog module text, or the same validation errors as
/// [`digit_terms`].
///
/// # Panics
/// Panics if `input_width` is zero.
pub fn generate_multiplier(
    csd: &str,
    input_width: usize,
    highest_power: usize,
) -> Result<String, CsdError> {
    assert!(input_width > 0);

    let terms = digit_terms(csd, highest_power)?;
    let value = decode_int(csd)?;

    let msb = input_width - 1;
    let result_msb = input_width + highest_power - 1;

    let mut v = String::new();
    v.push_str(&format!(
        "// CSD multiplier for pattern: {csd} (value: {value})\n"
    ));
    v.push_str("module csd_multiplier (\n");
    v.push_str(&format!("    input signed [{msb}:0] x,\n"));
    v.push_str(&format!("    output signed [{result_msb}:0] result\n"));
    v.push_str(");\n");

    if terms.is_empty() {
        v.push_str("\n    assign result = 0;\n");
    } else {
        v.push_str("\n    // Sign-extended shifted copies of x\n");
        let mut powers: Vec<usize> = terms.iter().map(|&(power, _)| power).collect();
        powers.sort_unstable();
        powers.dedup();
        for &power in powers.iter().rev() {
            let replication = highest_power - power;
            v.push_str(&format!(
                "    wire signed [{result_msb}:0] x_shift{power} = \
                 $signed({{ {{{replication}{{x[{msb}]}}}}, x }}) << {power};\n"
            ));
        }

        v.push_str("\n    assign result = ");
        for (index, &(power, op)) in terms.iter().enumerate() {
            match (index, op) {
                (0, DigitOp::Add) => v.push_str(&format!("x_shift{power}")),
                (0, DigitOp::Sub) => v.push_str(&format!("-x_shift{power}")),
                (_, DigitOp::Add) => v.push_str(&format!(" + x_shift{power}")),
                (_, DigitOp::Sub) => v.push_str(&format!(" - x_shift{power}")),
            }
        }
        v.push_str(";\n");
    }

    v.push_str("endmodule\n");
    Ok(v)
}
