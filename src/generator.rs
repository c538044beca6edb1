//! Random board generation
//!
//! Shuffles one of the two standard 16-die sets and rolls each die. The `q`
//! face stands for the `qu` tile.

use crate::core::{Board, CELL_COUNT};
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

/// Faces on each die
pub const FACES: usize = 6;

/// Dice from the classic 1976 set
pub const OLD_DICE: [&str; CELL_COUNT] = [
    "aaciot", "abilty", "abjmoq", "acdemp", "acelrs", "adenvz", "ahmors", "biforx", "denosw",
    "dknotu", "eefhiy", "egkluy", "egintv", "ehinps", "elpstu", "gilruw",
];

/// Dice from the revised set
pub const NEW_DICE: [&str; CELL_COUNT] = [
    "aaeegn", "abbjoo", "achops", "affkps", "aoottw", "cimotu", "deilrx", "delrvy", "distty",
    "eeghnw", "eeinsu", "ehrtvw", "eiosst", "elrtty", "himnuq", "hlnnrz",
];

/// Which die set to roll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoardType {
    Old,
    #[default]
    New,
}

impl BoardType {
    /// Parse a board type name
    ///
    /// Supported names: "old", "new". Defaults to new if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("old") {
            Self::Old
        } else {
            Self::New
        }
    }

    /// The die faces for this set
    #[must_use]
    pub const fn dice(self) -> &'static [&'static str; CELL_COUNT] {
        match self {
            Self::Old => &OLD_DICE,
            Self::New => &NEW_DICE,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Old => "OLD",
            Self::New => "NEW",
        }
    }
}

/// One die as it landed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieRoll {
    /// Index of the die in its set
    pub die: usize,
    /// Face that came up (0..6)
    pub face: usize,
    /// Letter on that face
    pub letter: u8,
}

/// Rolls boards from a fixed die set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardGenerator {
    board_type: BoardType,
}

impl BoardGenerator {
    #[must_use]
    pub const fn new(board_type: BoardType) -> Self {
        Self { board_type }
    }

    #[must_use]
    pub const fn board_type(&self) -> BoardType {
        self.board_type
    }

    /// Shuffle the dice into the 16 cells and roll each one
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> [DieRoll; CELL_COUNT] {
        let dice = self.board_type.dice();
        let mut order: [usize; CELL_COUNT] = std::array::from_fn(|i| i);
        order.shuffle(rng);

        order.map(|die| {
            let face = rng.random_range(0..FACES);
            DieRoll {
                die,
                face,
                letter: dice[die].as_bytes()[face],
            }
        })
    }

    /// Roll a new board
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::generator::{BoardGenerator, BoardType};
    ///
    /// let board = BoardGenerator::new(BoardType::Old).generate(&mut rand::rng());
    /// assert_eq!(board.letters().len(), 16);
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let rolls = self.roll(rng);
        let board = Board::from_letters(rolls.map(|roll| roll.letter));
        trace!(
            "Got dice in {} style. Letters:: {}",
            self.board_type.name(),
            board.as_string()
        );
        board
    }

    /// Roll a new board with the thread-local generator
    #[must_use]
    pub fn generate_random(&self) -> Board {
        self.generate(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn dice_have_six_lowercase_faces() {
        for dice in [OLD_DICE, NEW_DICE] {
            for die in dice {
                assert_eq!(die.len(), FACES, "die {die}");
                assert!(die.bytes().all(|b| b.is_ascii_lowercase()), "die {die}");
            }
        }
    }

    #[test]
    fn from_name_defaults_to_new() {
        assert_eq!(BoardType::from_name("old"), BoardType::Old);
        assert_eq!(BoardType::from_name("OLD"), BoardType::Old);
        assert_eq!(BoardType::from_name("new"), BoardType::New);
        assert_eq!(BoardType::from_name("vintage"), BoardType::New);
        assert_eq!(BoardType::default(), BoardType::New);
    }

    #[test]
    fn roll_uses_each_die_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for board_type in [BoardType::Old, BoardType::New] {
            let rolls = BoardGenerator::new(board_type).roll(&mut rng);
            let dice: FxHashSet<usize> = rolls.iter().map(|r| r.die).collect();
            assert_eq!(dice.len(), CELL_COUNT);

            for roll in rolls {
                let die = board_type.dice()[roll.die];
                assert!(roll.face < FACES);
                assert_eq!(die.as_bytes()[roll.face], roll.letter);
            }
        }
    }

    #[test]
    fn generate_returns_sixteen_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        for board_type in [BoardType::Old, BoardType::New] {
            let board = BoardGenerator::new(board_type).generate(&mut rng);
            assert_eq!(board.letters().len(), CELL_COUNT);
            assert!(board.letters().iter().all(u8::is_ascii_lowercase));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let generator = BoardGenerator::default();
        let first = generator.generate(&mut StdRng::seed_from_u64(99));
        let second = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_varies_die_order() {
        let generator = BoardGenerator::new(BoardType::New);
        let mut rng = StdRng::seed_from_u64(1);
        let orders: FxHashSet<Vec<usize>> = (0..10)
            .map(|_| generator.roll(&mut rng).iter().map(|r| r.die).collect())
            .collect();
        assert!(orders.len() > 1);
    }
}
