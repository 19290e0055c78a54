//! Field-level constraint checks for schema-described records.
//!
//! Each rule kind (required, numeric range, enum membership, string format)
//! is a plain function returning `Result<_, Violation>`. Records implement
//! [`Validate`] by running every field through a [`Validator`], which keeps
//! going after the first failure and hands back all violations at once.

mod rules;
mod validator;
mod violation;

pub use rules::{format_of, ipv4, one_of, range, required, required_str, FORMAT_IPV4};
pub use validator::{Validate, Validator};
pub use violation::{Bound, ValidationErrors, Violation};
