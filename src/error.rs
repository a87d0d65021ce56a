//! This module contains some error and result definitions used in this crate.

/// An enumeration of the errors that may occur when parsing a [Board]
/// from its 81-character line representation.
///
/// [Board]: ../struct.Board.html
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the puzzle line does not consist of exactly 81
    /// characters, one per cell.
    WrongLength,

    /// Indicates that the puzzle line contains a character other than the
    /// digits `'1'` to `'9'` and the placeholder `'.'`.
    InvalidCharacter
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;
