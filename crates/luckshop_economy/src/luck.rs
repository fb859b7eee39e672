//! # Luck Roll
//!
//! A d20 plus the customer's bonus, clamped at zero.
//!
//! Randomness is always passed in. Production code seeds a [`ShopRng`] from
//! the OS; tests and golden runs seed it from a number.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Faces on the luck die.
pub const D20_SIDES: u8 = 20;

/// The random source used by the shop binary.
///
/// ChaCha8 is portable across platforms and releases, so a seed printed in
/// one run reproduces the same basket anywhere.
pub type ShopRng = ChaCha8Rng;

/// Creates a reproducible random source.
#[must_use]
pub fn seeded_rng(seed: u64) -> ShopRng {
    ShopRng::seed_from_u64(seed)
}

/// Creates a random source seeded from the operating system.
#[must_use]
pub fn entropy_rng() -> ShopRng {
    ShopRng::from_entropy()
}

/// Rolls the luck die, `1..=20`.
pub fn roll_d20<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=D20_SIDES)
}

/// Combines a die roll and a bonus into a luck total, never below zero.
#[inline]
#[must_use]
pub fn luck_total(d20: u8, bonus: i32) -> u32 {
    let total = (i64::from(d20) + i64::from(bonus)).max(0);
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// One luck roll, kept whole so it can be shown to the customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LuckRoll {
    /// The die result, `1..=20`.
    pub d20: u8,
    /// The customer's bonus (may be negative).
    pub bonus: i32,
    /// `max(0, d20 + bonus)`.
    pub total: u32,
}

impl LuckRoll {
    /// Rolls the die and applies the bonus.
    pub fn roll<R: Rng + ?Sized>(bonus: i32, rng: &mut R) -> Self {
        Self::from_parts(roll_d20(rng), bonus)
    }

    /// Builds a roll from a known die result.
    #[must_use]
    pub fn from_parts(d20: u8, bonus: i32) -> Self {
        Self {
            d20,
            bonus,
            total: luck_total(d20, bonus),
        }
    }

    /// Returns true for a natural 20.
    #[must_use]
    pub const fn is_natural_twenty(&self) -> bool {
        self.d20 == D20_SIDES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_clamps_at_zero() {
        assert_eq!(luck_total(3, -10), 0);
        assert_eq!(luck_total(1, -1), 0);
        assert_eq!(luck_total(1, 0), 1);
        assert_eq!(luck_total(20, 5), 25);
        assert_eq!(luck_total(20, i32::MIN), 0);
        assert_eq!(luck_total(20, i32::MAX), 2_147_483_667);
    }

    #[test]
    fn test_d20_stays_in_range() {
        let mut rng = seeded_rng(11);
        let mut seen = [false; 21];
        for _ in 0..2000 {
            let roll = roll_d20(&mut rng);
            assert!((1..=20).contains(&roll), "rolled {roll}");
            seen[roll as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s), "every face should come up in 2000 rolls");
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let mut a = seeded_rng(99);
        let mut b = seeded_rng(99);
        for _ in 0..100 {
            assert_eq!(LuckRoll::roll(2, &mut a), LuckRoll::roll(2, &mut b));
        }
    }

    #[test]
    fn test_from_parts() {
        let roll = LuckRoll::from_parts(20, -3);
        assert_eq!(roll.total, 17);
        assert!(roll.is_natural_twenty());
        assert!(!LuckRoll::from_parts(19, 1).is_natural_twenty());
    }
}
