//! Board generation command

use crate::core::{Board, CELL_COUNT};
use crate::generator::{BoardGenerator, BoardType, DieRoll};
use rand::Rng;

/// A freshly rolled board with the dice that made it
pub struct GeneratedBoard {
    pub board_type: BoardType,
    pub rolls: [DieRoll; CELL_COUNT],
    pub board: Board,
}

/// Roll a board of the given type
pub fn generate_board<R: Rng + ?Sized>(board_type: BoardType, rng: &mut R) -> GeneratedBoard {
    let rolls = BoardGenerator::new(board_type).roll(rng);
    let board = Board::from_letters(rolls.map(|roll| roll.letter));

    GeneratedBoard {
        board_type,
        rolls,
        board,
    }
}
