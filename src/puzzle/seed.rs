//! Deterministic seeding for daily puzzles
//!
//! Seeds are built by writing numbers next to each other in decimal: the day
//! 2024-03-07 gives `202437`, and attempt 12 of that day gives `20243712`.
//! Nothing here is cryptographic; the only contract is same seed, same output.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Base seed for a calendar day: year, month and day digits concatenated
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use word_chains::puzzle::day_seed;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(day_seed(day), 202437);
///
/// let day = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert_eq!(day_seed(day), 20241225);
/// ```
#[must_use]
pub fn day_seed(date: NaiveDate) -> u64 {
    let year = u64::from(date.year().unsigned_abs());
    // Year, month and day are small enough that this never overflows
    concat_digits(year, u64::from(date.month()))
        .and_then(|seed| concat_digits(seed, u64::from(date.day())))
        .unwrap_or(year)
}

/// Seed for one selection attempt of a day
///
/// Returns `None` once the combined number no longer fits in a `u64`.
#[must_use]
pub fn attempt_seed(base: u64, attempt: u64) -> Option<u64> {
    concat_digits(base, attempt)
}

/// Pseudo-random value in `[0, 1)` fully determined by `seed`
#[must_use]
pub fn seeded_random(seed: u64) -> f64 {
    StdRng::seed_from_u64(seed).random::<f64>()
}

/// Index in `0..len` picked by `seed`, as `floor(random × len)`
///
/// Returns `None` when `len` is zero.
#[must_use]
pub fn seeded_index(seed: u64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (seeded_random(seed) * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

fn concat_digits(head: u64, tail: u64) -> Option<u64> {
    let mut shift: u64 = 10;
    while shift <= tail {
        shift = shift.checked_mul(10)?;
    }
    head.checked_mul(shift)?.checked_add(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_seed_concatenates_unpadded_digits() {
        assert_eq!(day_seed(day(2024, 1, 1)), 202_411);
        assert_eq!(day_seed(day(2024, 10, 5)), 2_024_105);
        assert_eq!(day_seed(day(2024, 12, 31)), 20_241_231);
    }

    #[test]
    fn attempt_seed_appends_counter() {
        assert_eq!(attempt_seed(202_437, 0), Some(2_024_370));
        assert_eq!(attempt_seed(202_437, 7), Some(2_024_377));
        assert_eq!(attempt_seed(202_437, 12), Some(20_243_712));
        assert_eq!(attempt_seed(202_437, 100), Some(202_437_100));
    }

    #[test]
    fn attempt_seed_overflow() {
        assert_eq!(attempt_seed(u64::MAX / 2, 5), None);
        assert_eq!(attempt_seed(1, u64::MAX), None);
    }

    #[test]
    fn seeded_random_is_deterministic() {
        for seed in [0, 1, 2_024_370, u64::MAX] {
            assert_eq!(seeded_random(seed).to_bits(), seeded_random(seed).to_bits());
        }
    }

    #[test]
    fn seeded_random_in_unit_interval() {
        for seed in 0..1000 {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
        }
    }

    #[test]
    fn seeded_random_varies_with_seed() {
        let values: Vec<u64> = (0..20).map(|s| seeded_random(s).to_bits()).collect();
        let mut unique = values.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() > 15);
    }

    #[test]
    fn seeded_index_bounds() {
        assert_eq!(seeded_index(42, 0), None);
        assert_eq!(seeded_index(42, 1), Some(0));
        for seed in 0..500 {
            assert!(seeded_index(seed, 7).unwrap() < 7);
        }
    }

    #[test]
    fn seeded_index_covers_range() {
        let mut seen = [false; 5];
        for seed in 0..500 {
            seen[seeded_index(seed, 5).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
