//! Boggle board representation
//!
//! A Board stores the 16 letters of a 4×4 grid, row-major, with cells numbered
//! 1 through 16:
//!
//! ```text
//!  [01][02][03][04]
//!  [05][06][07][08]
//!  [09][10][11][12]
//!  [13][14][15][16]
//! ```
//!
//! The `q` cell stands for the `qu` tile.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Number of rows (and columns) on the board
pub const BOARD_SIDE: usize = 4;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A 1-based cell number (1..=16)
pub type Cell = usize;

/// Iterate over every cell number in board order
pub fn cells() -> impl Iterator<Item = Cell> + Clone {
    1..=CELL_COUNT
}

/// Error type for boards that cannot be solved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Fewer or more than 16 letters were submitted; carries the letters as given
    Incomplete(Vec<String>),
    /// At least one token is not a single alphabetic character
    InvalidCharacters,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete(letters) => write!(
                f,
                "The board is incomplete, please make sure 16 letters are submitted.: {}",
                letters.join(",")
            ),
            Self::InvalidCharacters => {
                write!(f, "Please make sure to only submit letter characters.")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A validated 4×4 Boggle board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    letters: [u8; CELL_COUNT],
}

impl Board {
    /// Create a board from 16 single-letter tokens
    ///
    /// Letters are normalized to lower case. The token `qu` is accepted as the
    /// q tile.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The token count is not exactly 16
    /// - Any token is not a single ASCII letter
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::new("densWODExkvjzyfm".chars().map(String::from)).unwrap();
    /// assert_eq!(board.letter(5), b'w');
    ///
    /// assert!(Board::new(["a", "b"]).is_err());
    /// ```
    pub fn new<I, S>(tokens: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        if tokens.len() != CELL_COUNT {
            return Err(BoardError::Incomplete(tokens));
        }

        let mut letters = [0u8; CELL_COUNT];
        for (slot, token) in letters.iter_mut().zip(&tokens) {
            *slot = parse_tile(token).ok_or(BoardError::InvalidCharacters)?;
        }

        Ok(Self { letters })
    }

    /// Build a board directly from lower-case letter bytes
    ///
    /// # Panics
    /// Panics if any byte is not an ASCII lower-case letter.
    #[must_use]
    pub fn from_letters(letters: [u8; CELL_COUNT]) -> Self {
        assert!(
            letters.iter().all(u8::is_ascii_lowercase),
            "board letters must be lower-case ASCII"
        );
        Self { letters }
    }

    /// Get the letter at a cell (1..=16)
    ///
    /// # Panics
    /// Panics if the cell is outside 1..=16
    #[inline]
    #[must_use]
    pub fn letter(&self, cell: Cell) -> u8 {
        assert!((1..=CELL_COUNT).contains(&cell), "cell {cell} is off the board");
        self.letters[cell - 1]
    }

    /// Get all letters in cell order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; CELL_COUNT] {
        &self.letters
    }

    /// Letters as owned single-character strings, in cell order
    #[must_use]
    pub fn letter_strings(&self) -> Vec<String> {
        self.letters
            .iter()
            .map(|&b| char::from(b).to_string())
            .collect()
    }

    /// Check if any cell holds the given letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Check if the board has a `qu` tile
    #[inline]
    #[must_use]
    pub fn has_q(&self) -> bool {
        self.contains(b'q')
    }

    /// Map each letter to the cells holding it, in ascending cell order
    #[must_use]
    pub fn positions(&self) -> FxHashMap<u8, Vec<Cell>> {
        let mut map: FxHashMap<u8, Vec<Cell>> = FxHashMap::default();
        for (i, &letter) in self.letters.iter().enumerate() {
            map.entry(letter).or_default().push(i + 1);
        }
        map
    }

    /// The letters rendered as a 16-character string
    #[must_use]
    pub fn as_string(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }
}

/// Parse a single board token into a tile letter
fn parse_tile(token: &str) -> Option<u8> {
    let lower = token.trim().to_ascii_lowercase();
    match lower.as_bytes() {
        [b] if b.is_ascii_lowercase() => Some(*b),
        b"qu" => Some(b'q'),
        _ => None,
    }
}

/// Split user input into board tokens
///
/// Input containing commas or whitespace is split on them; otherwise every
/// character is its own token.
///
/// # Examples
/// ```
/// use boggle_solver::core::split_tokens;
///
/// assert_eq!(split_tokens("ab"), vec!["a", "b"]);
/// assert_eq!(split_tokens("qu, a"), vec!["qu", "a"]);
/// ```
#[must_use]
pub fn split_tokens(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.contains(|c: char| c == ',' || c.is_whitespace()) {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        input.chars().map(String::from).collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse `"abcd..."`, `"a,b,c,..."` or `"a b c ..."` into a board
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(split_tokens(s))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.letters.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = chunk
                .iter()
                .map(|&b| match b {
                    b'q' => "Qu".to_string(),
                    _ => char::from(b).to_ascii_uppercase().to_string(),
                })
                .map(|tile| format!("{tile:<2}"))
                .collect();
            write!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
