//! Game history with undo/redo
//!
//! Positions are values, so the history is just the list of every position
//! reached plus a cursor into it.

use crate::board::{Color, Move, Position, Vertex};
use crate::error::TaratiError;
use crate::rules::{is_terminal, try_apply_move, winner};

/// A game in progress.
///
/// # Example
///
/// ```
/// use tarati::board::Vertex;
/// use tarati::Game;
///
/// let mut game = Game::new();
/// game.play(Vertex::C1, Vertex::B1).unwrap();
/// assert!(game.play(Vertex::C1, Vertex::B1).is_err());
///
/// game.undo();
/// assert_eq!(game.ply(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Position>,
    cursor: usize,
}

impl Game {
    /// Start from the initial layout
    pub fn new() -> Self {
        Self::from_position(Position::initial())
    }

    /// Start from an arbitrary position
    pub fn from_position(pos: Position) -> Self {
        Self {
            history: vec![pos],
            cursor: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Position {
        &self.history[self.cursor]
    }

    /// Plies played up to the current position
    #[inline]
    pub fn ply(&self) -> usize {
        self.cursor
    }

    /// Play a move, discarding any positions that could have been redone.
    ///
    /// An illegal move leaves the game unchanged.
    pub fn play(&mut self, from: Vertex, to: Vertex) -> Result<&Position, TaratiError> {
        let next = try_apply_move(self.current(), from, to)
            .ok_or(TaratiError::IllegalMove { from, to })?;
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor += 1;
        Ok(self.current())
    }

    /// [`Game::play`] taking a [`Move`]
    pub fn play_move(&mut self, mv: Move) -> Result<&Position, TaratiError> {
        self.play(mv.from, mv.to)
    }

    /// Step back one ply; `false` at the start of the game
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one undone ply; `false` if nothing to redo
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn is_over(&self) -> bool {
        is_terminal(self.current())
    }

    pub fn winner(&self) -> Option<Color> {
        winner(self.current())
    }

    /// Positions from the start up to the current one
    pub fn positions(&self) -> &[Position] {
        &self.history[..=self.cursor]
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Checker;

    #[test]
    fn test_play_and_undo() {
        let mut game = Game::new();
        game.play(Vertex::C1, Vertex::B1).unwrap();
        game.play(Vertex::C7, Vertex::B4).unwrap();
        assert_eq!(game.ply(), 2);
        assert_eq!(game.current().side_to_move(), Color::White);

        assert!(game.undo());
        assert_eq!(game.current().side_to_move(), Color::Black);
        assert!(game.current().is_empty(Vertex::B4));

        assert!(game.undo());
        assert_eq!(*game.current(), Position::initial());
        assert!(!game.undo());
    }

    #[test]
    fn test_redo() {
        let mut game = Game::new();
        game.play(Vertex::C1, Vertex::B1).unwrap();
        let after = *game.current();

        assert!(!game.redo());
        game.undo();
        assert!(game.can_redo());
        assert!(game.redo());
        assert_eq!(*game.current(), after);
    }

    #[test]
    fn test_play_discards_redo_tail() {
        let mut game = Game::new();
        game.play(Vertex::C1, Vertex::B1).unwrap();
        game.undo();
        game.play(Vertex::C2, Vertex::C3).unwrap();
        assert!(!game.can_redo());
        assert_eq!(game.positions().len(), 2);
        assert!(game.current().get(Vertex::C1).is_some());
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut game = Game::new();
        let err = game.play(Vertex::D1, Vertex::C1).unwrap_err();
        assert!(matches!(
            err,
            TaratiError::IllegalMove { from: Vertex::D1, to: Vertex::C1 }
        ));
        assert_eq!(game.ply(), 0);
        assert_eq!(err.to_string(), "illegal move D1-C1");
    }

    #[test]
    fn test_game_over() {
        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::B1, Checker::new(Color::White));
        pos.place(Vertex::B3, Checker::new(Color::Black));
        pos.place(Vertex::B5, Checker::new(Color::Black));

        let mut game = Game::from_position(pos);
        assert!(!game.is_over());
        game.play_move(Move::new(Vertex::B1, Vertex::A1)).unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Color::White));
    }
}
