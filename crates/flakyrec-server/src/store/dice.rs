use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// Uniform integer source used to pick the fault branch.
pub trait FaultDice: Send + Sync {
    /// Uniform integer in `[0, sides)`.
    fn roll(&self, sides: u32) -> u32;
}

/// Production dice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngDice;

impl FaultDice for ThreadRngDice {
    fn roll(&self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..sides)
    }
}

/// Replays a fixed sequence of rolls, then keeps returning `fallback`.
///
/// Values are reduced modulo `sides` so a script never leaves the range.
#[derive(Debug)]
pub struct ScriptedDice {
    rolls: Mutex<VecDeque<u32>>,
    fallback: u32,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>, fallback: u32) -> Self {
        Self {
            rolls: Mutex::new(rolls.into_iter().collect()),
            fallback,
        }
    }

    /// Every roll returns `value`.
    pub fn always(value: u32) -> Self {
        Self::new([], value)
    }

    /// Rolls not consumed yet.
    pub fn remaining(&self) -> usize {
        match self.rolls.lock() {
            Ok(q) => q.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl FaultDice for ScriptedDice {
    fn roll(&self, sides: u32) -> u32 {
        let next = match self.rolls.lock() {
            Ok(mut q) => q.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        if sides == 0 {
            return 0;
        }
        next.unwrap_or(self.fallback) % sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range_and_hits_every_face() {
        let dice = ThreadRngDice;
        let mut seen = [0u32; 6];
        for _ in 0..1200 {
            let r = dice.roll(6);
            assert!(r < 6);
            seen[r as usize] += 1;
        }
        // each face expected ~200 times
        for (face, hits) in seen.iter().enumerate() {
            assert!((100..=300).contains(hits), "face {face} hit {hits} times");
        }
    }

    #[test]
    fn scripted_replays_then_falls_back() {
        let dice = ScriptedDice::new([4, 5, 1], 0);
        assert_eq!(dice.roll(6), 4);
        assert_eq!(dice.roll(6), 5);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(6), 1);
        assert_eq!(dice.roll(6), 0);
        assert_eq!(dice.roll(6), 0);
    }

    #[test]
    fn zero_sides_rolls_zero() {
        assert_eq!(ThreadRngDice.roll(0), 0);
        assert_eq!(ScriptedDice::always(5).roll(0), 0);
    }
}
