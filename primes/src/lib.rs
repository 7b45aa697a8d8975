//! Exact primality testing for signed integers.
//!
//! Everything here works on integers only: candidate divisors are bounded by the integer square
//! root, so there is no floating-point rounding to worry about near the top of the `i64` range.

/// Returns `true` if `n` is prime.
///
/// Zero, one and all negative numbers are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        // 2 and 3.
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let root = n.isqrt();
    let mut d = 3;
    while d <= root {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Filters a sequence of integers down to the primes, keeping their order.
pub fn primes_in<I>(iter: I) -> impl Iterator<Item = i64>
where
    I: IntoIterator<Item = i64>,
{
    iter.into_iter().filter(|&n| is_prime(n))
}
