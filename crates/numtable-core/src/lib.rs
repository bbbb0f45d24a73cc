//! Computational core of the number-table explorer.
//!
//! Everything here is a pure function of its inputs: the table generator,
//! the property calculator, input validation, and the session transition
//! that ties them together for front ends.

pub mod properties;
pub mod session;
pub mod table;
pub mod validate;

pub use properties::{compute_properties, digit_sum, divisors, prime_factorization};
pub use session::evaluate;
pub use table::generate_table;
pub use validate::parse_base;
