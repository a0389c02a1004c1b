//! # CSD Conversion Library
//!
//! Conversion between standard numeric representation and Canonical Signed
//! Digit (CSD) form: a positional representation over the digit alphabet
//! `{-1, 0, +1}`, written `{'-', '0', '+'}`, in which no two adjacent
//! digits are both non-zero. CSD minimizes the non-zero digit count for a
//! given magnitude, and each non-zero digit costs one adder or subtractor
//! in a hardware constant multiplier, which is what makes the form
//! interesting to digital-filter coefficient encoders.
//!
//! ## Design
//!
//! - **Pure functions** - No shared state; every call is independently
//!   thread-safe
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//! - **Strict parsing** - Malformed CSD input is rejected with a typed
//!   error, never skipped
//!
//! ## API Overview
//!
//! ### Encoding
//!
//! - [`encode()`] - Value to CSD with a fixed fractional place count
//! - [`encode_int()`] - Integer to CSD, no separator
//! - [`encode_nnz()`] / [`encode_nnz_int()`] - Budgeted variants capping
//!   the non-zero digit count
//!
//! ### Decoding
//!
//! - [`decode()`] - CSD string to value
//! - [`decode_int()`] - Separator-free CSD string to integer
//!
//! ### Pattern analysis
//!
//! - [`longest_repeated_substring()`] - Longest non-overlapping repeated
//!   digit pattern, for partial-product sharing
//!
//! ### Hardware generation
//!
//! - [`digit_terms()`] - (power, operation) pairs of a CSD string
//! - [`generate_multiplier()`] - Verilog constant-multiplier module
//!
//! ## Usage
//!
//! ```rust
//! let csd = csd::encode(28.5, 2).unwrap();
//! assert_eq!(csd, "+00-00.+0");
//!
//! let value = csd::decode(&csd).unwrap();
//! assert_eq!(value, 28.5);
//!
//! // Cap the hardware cost at two adders.
//! assert_eq!(csd::encode_nnz_int(37, 2), "+00+00");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod decode;
mod encode;
mod error;
mod nnz;
mod pattern;
mod verilog;

pub use decode::{decode, decode_int};
pub use encode::{encode, encode_int};
pub use error::CsdError;
pub use nnz::{encode_nnz, encode_nnz_int};
pub use pattern::longest_repeated_substring;
pub use verilog::{digit_terms, generate_multiplier, DigitOp};

#[cfg(test)]
mod tests {
    #[test]
    fn test_round_trip_smoke() {
        let csd = crate::encode(28.5, 2).unwrap();
        assert_eq!(crate::decode(&csd).unwrap(), 28.5);
    }
}
