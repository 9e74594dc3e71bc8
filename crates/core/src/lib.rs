#![cfg_attr(not(test), no_std)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Bounded stack-based nesting validator for `()`, `{}` and `[]`.
//!
//! ```
//! use balance_check_core::{validate_str, ValidationResult};
//!
//! assert_eq!(validate_str("([{}])"), ValidationResult::Valid);
//! assert_eq!(
//!     validate_str("(]"),
//!     ValidationResult::Mismatch { expected: '(', found: ']' }
//! );
//! ```

extern crate alloc;

pub mod config;
pub mod outcome;
pub mod stack;
pub mod symbol;
pub mod validator;

pub use config::ValidatorConfig;
pub use outcome::{Report, ValidationResult};
pub use stack::{BoundedStack, StackError};
pub use symbol::{Bracket, Symbol, classify};
pub use validator::{State, Step, Validator, validate, validate_str};
