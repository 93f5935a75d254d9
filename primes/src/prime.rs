//! Primality and ordinal helpers

/// Whether `n` is prime, by trial division up to its integer square root.
///
/// Total over `i64`: anything below 2 is not prime.
///
/// ```
/// use prime_time::prime::is_prime;
///
/// assert!(is_prime(17));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }

    (2..=n.isqrt()).all(|divisor| n % divisor != 0)
}

/// English ordinal suffix for `n` ("st", "nd", "rd" or "th").
///
/// Only 11, 12 and 13 themselves are special-cased, so 111 reads "111st".
#[must_use]
pub const fn ordinal_suffix(n: i64) -> &'static str {
    match (n % 10, n) {
        (1, _) if n != 11 => "st",
        (2, _) if n != 12 => "nd",
        (3, _) if n != 13 => "rd",
        _ => "th",
    }
}

/// `n` followed by its ordinal suffix, e.g. `"7th"`
#[must_use]
pub fn ordinal(n: i64) -> String {
    format!("{n}{}", ordinal_suffix(n))
}
