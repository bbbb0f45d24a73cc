//! Derived number properties.

use serde::{Deserialize, Serialize};

/// Read-only property snapshot for a validated positive integer.
///
/// `divisors` is ascending and always contains 1 and the number itself.
/// `prime_factorization` holds (prime, exponent) pairs in ascending prime
/// order; it is empty for 1, whose factorization has no terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberProperties {
    pub is_even: bool,
    pub is_prime: bool,
    pub divisors: Vec<u64>,
    pub prime_factorization: Vec<(u64, u32)>,
    pub digit_sum: u32,
}

impl NumberProperties {
    /// Number of divisors.
    pub fn divisor_count(&self) -> usize {
        self.divisors.len()
    }

    /// Render the factorization as `p1^e1 × p2^e2 × ... = n`, omitting the
    /// exponent when it is 1. For 1 the left side is empty and the
    /// expression degenerates to `= 1`.
    pub fn factorization_expression(&self, base: u64) -> String {
        let parts: Vec<String> = self
            .prime_factorization
            .iter()
            .map(|(prime, exponent)| {
                if *exponent > 1 {
                    format!("{prime}^{exponent}")
                } else {
                    prime.to_string()
                }
            })
            .collect();
        if parts.is_empty() {
            format!("= {base}")
        } else {
            format!("{} = {base}", parts.join(" × "))
        }
    }
}
