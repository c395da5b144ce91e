//! Dice sources.
//!
//! The engine never reaches for ambient randomness. Every roll comes
//! from a [`DiceSource`] handed in by the caller, so tests can script
//! exact sequences and separate runs never share a generator.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::entities::{DiceRoll, Face};

/// Something that throws two dice.
pub trait DiceSource {
    /// Throws both dice once. Each face must be uniform over `1..=6`
    /// for real play; scripted sources may return anything valid.
    fn roll(&mut self) -> DiceRoll;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> DiceRoll {
        (**self).roll()
    }
}

/// Dice backed by any `rand` generator.
#[derive(Debug)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    fn face(&mut self) -> Face {
        self.rng.random_range(1..=6)
    }
}

impl RngDice<StdRng> {
    /// Reproducible dice. The same seed always yields the same rolls.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngDice<rand::rngs::ThreadRng> {
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll(&mut self) -> DiceRoll {
        let die1 = self.face();
        let die2 = self.face();
        match DiceRoll::new(die1, die2) {
            Some(roll) => roll,
            // random_range(1..=6) can't produce anything else
            None => unreachable!("face out of range: {die1}, {die2}"),
        }
    }
}

/// Replays a fixed list of rolls, starting over once it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<DiceRoll>,
    idx: usize,
}

impl ScriptedDice {
    /// # Panics
    ///
    /// Panics if `rolls` is empty.
    #[must_use]
    pub fn new(rolls: Vec<DiceRoll>) -> Self {
        assert!(!rolls.is_empty(), "scripted dice need at least one roll");
        Self { rolls, idx: 0 }
    }

    /// Convenience constructor from face pairs.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty or contains a face outside `1..=6`.
    #[must_use]
    pub fn from_faces(faces: &[(Face, Face)]) -> Self {
        let rolls = faces
            .iter()
            .map(|&(die1, die2)| {
                DiceRoll::new(die1, die2)
                    .unwrap_or_else(|| panic!("invalid scripted faces: {die1}, {die2}"))
            })
            .collect();
        Self::new(rolls)
    }

    /// Number of rolls handed out so far, counting past the wrap-around.
    #[must_use]
    pub fn rolls_thrown(&self) -> usize {
        self.idx
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        let roll = self.rolls[self.idx % self.rolls.len()];
        self.idx += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rng_dice_faces_in_range() {
        let mut dice = RngDice::from_seed(7);
        for _ in 0..1000 {
            let roll = dice.roll();
            assert!((1..=6).contains(&roll.die1()));
            assert!((1..=6).contains(&roll.die2()));
            assert_eq!(roll.total(), roll.die1() + roll.die2());
        }
    }

    #[test]
    fn test_rng_dice_covers_all_totals() {
        let mut dice = RngDice::from_seed(42);
        let totals: HashSet<Face> = (0..2000).map(|_| dice.roll().total()).collect();
        assert_eq!(totals.len(), 11);
    }

    #[test]
    fn test_seeded_dice_are_reproducible() {
        let mut a = RngDice::from_seed(1234);
        let mut b = RngDice::from_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_thread_dice_vary() {
        let mut dice = RngDice::thread();
        let totals: HashSet<Face> = (0..50).map(|_| dice.roll().total()).collect();
        assert!(totals.len() > 1);
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::from_faces(&[(3, 4), (1, 1)]);
        let totals: Vec<Face> = (0..5).map(|_| dice.roll().total()).collect();
        assert_eq!(totals, vec![7, 2, 7, 2, 7]);
        assert_eq!(dice.rolls_thrown(), 5);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn throw(mut source: impl DiceSource) -> Face {
            source.roll().total()
        }

        let mut dice = ScriptedDice::from_faces(&[(6, 5)]);
        assert_eq!(throw(&mut dice), 11);
        assert_eq!(dice.rolls_thrown(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one roll")]
    fn test_scripted_dice_reject_empty() {
        let _ = ScriptedDice::new(Vec::new());
    }

    #[test]
    #[should_panic(expected = "invalid scripted faces")]
    fn test_scripted_dice_reject_bad_faces() {
        let _ = ScriptedDice::from_faces(&[(0, 7)]);
    }
}
