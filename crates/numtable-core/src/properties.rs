//! Number property calculation.

use numtable_model::NumberProperties;

/// Compute the property snapshot for a validated positive integer.
///
/// Callers must validate first (see [`crate::validate::parse_base`]); this
/// function assumes `base >= 1`.
pub fn compute_properties(base: u64) -> NumberProperties {
    let divisors = divisors(base);
    // Prime iff exactly two divisors: 1 and the number itself. This
    // classifies 1 (one divisor) as non-prime without a special case.
    let is_prime = divisors.len() == 2;
    NumberProperties {
        is_even: base % 2 == 0,
        is_prime,
        divisors,
        prime_factorization: prime_factorization(base),
        digit_sum: digit_sum(base),
    }
}

/// All divisors of `n` in ascending order.
///
/// Full 1..=n scan. O(n), which is fine for interactively typed numbers;
/// a faster algorithm must still return divisors ascending.
pub fn divisors(n: u64) -> Vec<u64> {
    (1..=n).filter(|d| n % d == 0).collect()
}

/// Prime factorization of `n` as (prime, exponent) pairs, ascending.
///
/// Trial division with the candidate advancing by 1; composites can never
/// divide the remaining quotient because their prime factors were already
/// divided out. Empty for `n == 1`.
pub fn prime_factorization(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    let mut divisor = 2;
    while n > 1 {
        let mut exponent = 0u32;
        while n % divisor == 0 {
            exponent += 1;
            n /= divisor;
        }
        if exponent > 0 {
            factors.push((divisor, exponent));
        }
        divisor += 1;
    }
    factors
}

/// Sum of the base-10 digits of `n`.
pub fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0u32;
    loop {
        sum += (n % 10) as u32;
        n /= 10;
        if n == 0 {
            return sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_of_twelve() {
        let props = compute_properties(12);
        assert_eq!(props.divisors, vec![1, 2, 3, 4, 6, 12]);
        assert!(!props.is_prime);
        assert!(props.is_even);
        assert_eq!(props.prime_factorization, vec![(2, 2), (3, 1)]);
        assert_eq!(props.digit_sum, 3);
    }

    #[test]
    fn test_properties_of_thirteen() {
        let props = compute_properties(13);
        assert_eq!(props.divisors, vec![1, 13]);
        assert!(props.is_prime);
        assert!(!props.is_even);
        assert_eq!(props.prime_factorization, vec![(13, 1)]);
        assert_eq!(props.digit_sum, 4);
    }

    #[test]
    fn test_one_is_not_prime() {
        let props = compute_properties(1);
        assert_eq!(props.divisors, vec![1]);
        assert!(!props.is_prime);
        assert!(props.prime_factorization.is_empty());
    }

    #[test]
    fn test_two_is_prime() {
        let props = compute_properties(2);
        assert_eq!(props.divisors, vec![1, 2]);
        assert!(props.is_prime);
        assert!(props.is_even);
    }

    #[test]
    fn test_factorization_of_prime_power() {
        assert_eq!(prime_factorization(8), vec![(2, 3)]);
        assert_eq!(prime_factorization(360), vec![(2, 3), (3, 2), (5, 1)]);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(12), 3);
        assert_eq!(digit_sum(999), 27);
        assert_eq!(digit_sum(1000), 1);
    }
}
