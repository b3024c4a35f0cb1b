//! Game session: board, history and status

use crate::attack;
use crate::board::{self, Board};
use crate::movegen;
use crate::moves::{Move, MoveParseError, Undo};
use crate::search;
use crate::types::{Color, Outcome, Square};

use log::debug;
use thiserror::Error;

/// Status of the game, derived from the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameStatus {
    /// Side to move
    pub turn: Color,
    pub game_over: bool,
    /// Winner of the game, if it ended with checkmate
    pub winner: Option<Color>,
    /// Whether the side to move is in check
    pub in_check: bool,
}

impl GameStatus {
    /// Computes the status of the game for the position on `b`
    pub fn compute(b: &Board) -> GameStatus {
        let turn = b.side();
        let outcome = attack::outcome(b, turn);
        GameStatus {
            turn,
            game_over: outcome.is_some(),
            winner: outcome.and_then(|o| o.winner()),
            in_check: attack::in_check(b, turn),
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        Some(match self.winner {
            Some(winner) => Outcome::Checkmate { winner },
            None => Outcome::Stalemate,
        })
    }
}

/// Reason to reject a move
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("piece on {src} belongs to {owner}, but it's {turn}'s turn")]
    WrongSide {
        src: Square,
        owner: Color,
        turn: Color,
    },
    #[error("move {0} is not legal")]
    NotLegal(Move),
    #[error("game is over")]
    GameOver,
}

/// Error parsing a list of moves, see [`Game::push_list()`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveListError {
    #[error("cannot parse move #{}: {}", .pos + 1, .source)]
    Parse { pos: usize, source: MoveParseError },
    #[error("cannot play move #{}: {}", .pos + 1, .source)]
    Play { pos: usize, source: MoveError },
}

/// Checks that `mv` can be played on `b` by the side to move
pub fn validate(b: &Board, mv: Move) -> Result<(), MoveError> {
    let src = mv.src();
    let owner = b.get(src).color().ok_or(MoveError::EmptySource(src))?;
    if owner != b.side() {
        return Err(MoveError::WrongSide {
            src,
            owner,
            turn: b.side(),
        });
    }
    if !movegen::legal_moves(b, src).contains(&mv.dst()) {
        return Err(MoveError::NotLegal(mv));
    }
    Ok(())
}

/// Returns a board with the initial position
#[inline]
pub fn new_game() -> Board {
    Board::initial()
}

/// Tries to move the piece from `src` to `dst` for the side to move
///
/// If the move is legal, it's made on the board, and the turn passes to the opponent.
/// Otherwise, the board is left unchanged. In both cases, returns whether the move was
/// accepted together with the resulting status of the game.
pub fn try_move(b: &mut Board, src: Square, dst: Square) -> (bool, GameStatus) {
    let mv = Move::new(src, dst);
    if let Err(e) = validate(b, mv) {
        debug!("rejected move {}: {}", mv, e);
        return (false, GameStatus::compute(b));
    }
    b.apply(mv);
    b.set_side(b.side().inv());
    let status = GameStatus::compute(b);
    debug!("accepted move {}, status {:?}", mv, status);
    (true, status)
}

/// Game with the history of moves
///
/// Unlike the bare board, the game remembers all the moves, so they can be taken back, and
/// refuses to go on after it's over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    stack: Vec<(Move, Undo)>,
    status: GameStatus,
}

impl Game {
    pub fn new(b: Board) -> Game {
        let status = GameStatus::compute(&b);
        Game {
            board: b,
            stack: Vec::new(),
            status,
        }
    }

    pub fn new_initial() -> Game {
        Game::new(Board::initial())
    }

    pub fn from_fen(s: &str) -> Result<Game, board::FenParseError> {
        Ok(Game::new(Board::from_fen(s)?))
    }

    /// Creates a game from `b` and plays the moves from the space-separated list `list`
    pub fn from_list(b: Board, list: &str) -> Result<Game, MoveListError> {
        let mut res = Game::new(b);
        res.push_list(list)?;
        Ok(res)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of moves played
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over the moves played, from the first one to the last one
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(mv, _)| *mv)
    }

    /// Plays `mv` if it's legal
    pub fn push(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status.game_over {
            return Err(MoveError::GameOver);
        }
        validate(&self.board, mv)?;
        let u = self.board.apply(mv);
        self.board.set_side(self.board.side().inv());
        self.stack.push((mv, u));
        self.status = GameStatus::compute(&self.board);
        debug!("move #{}: {}", self.stack.len(), mv);
        if let Some(outcome) = self.status.outcome() {
            debug!("game over: {}", outcome);
        }
        Ok(self.status)
    }

    /// Plays the moves from the space-separated list `list`, like `"e2e4 e7e5"`
    ///
    /// Stops at the first bad move, keeping the moves played before it.
    pub fn push_list(&mut self, list: &str) -> Result<(), MoveListError> {
        for (pos, token) in list.split_ascii_whitespace().enumerate() {
            let mv = Move::from_coords(token).map_err(|source| MoveListError::Parse { pos, source })?;
            self.push(mv)
                .map_err(|source| MoveListError::Play { pos, source })?;
        }
        Ok(())
    }

    /// Takes back the last move and returns it, or `None` if no moves were played
    pub fn pop(&mut self) -> Option<Move> {
        let (mv, u) = self.stack.pop()?;
        self.board.revert(mv, u);
        self.board.set_side(self.board.side().inv());
        self.status = GameStatus::compute(&self.board);
        debug!("took back {}", mv);
        Some(mv)
    }

    /// Starts a new game from the initial position
    pub fn restart(&mut self) {
        *self = Game::new_initial();
        debug!("game restarted");
    }

    /// Lets the engine choose a move for the side to move, searching `depth` plies ahead, and
    /// plays it
    pub fn play_ai(&mut self, depth: u8) -> Result<Move, MoveError> {
        if self.status.game_over {
            return Err(MoveError::GameOver);
        }
        let side = self.board.side();
        let mv = search::best_move(&mut self.board, side, depth).ok_or(MoveError::GameOver)?;
        self.push(mv)?;
        Ok(mv)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new_initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::from_str(s).unwrap()
    }

    #[test]
    fn test_try_move() {
        let mut b = new_game();
        let (ok, status) = try_move(&mut b, sq("e2"), sq("e4"));
        assert!(ok);
        assert_eq!(status.turn, Color::Black);
        assert!(!status.game_over);
        assert!(!status.in_check);
        assert_eq!(b.side(), Color::Black);

        // White cannot move twice
        let before = b.clone();
        let (ok, status) = try_move(&mut b, sq("d2"), sq("d4"));
        assert!(!ok);
        assert_eq!(status.turn, Color::Black);
        assert_eq!(b, before);

        // Empty source and illegal destination are rejected
        assert!(!try_move(&mut b, sq("e5"), sq("e4")).0);
        assert!(!try_move(&mut b, sq("e7"), sq("e4")).0);
        assert!(!try_move(&mut b, sq("b8"), sq("d7")).0);
        assert_eq!(b, before);

        assert!(try_move(&mut b, sq("e7"), sq("e5")).0);
        assert_eq!(b.side(), Color::White);
    }

    #[test]
    fn test_validate() {
        let b = new_game();
        assert_eq!(
            validate(&b, mv("e4e5")),
            Err(MoveError::EmptySource(sq("e4")))
        );
        assert_eq!(
            validate(&b, mv("e7e5")),
            Err(MoveError::WrongSide {
                src: sq("e7"),
                owner: Color::Black,
                turn: Color::White
            })
        );
        assert_eq!(validate(&b, mv("e2e5")), Err(MoveError::NotLegal(mv("e2e5"))));
        assert_eq!(validate(&b, mv("g1f3")), Ok(()));
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new_initial();
        game.push_list("f2f3 e7e5 g2g4").unwrap();
        assert!(!game.status().game_over);
        let status = game.push(mv("d8h4")).unwrap();
        assert_eq!(
            status,
            GameStatus {
                turn: Color::White,
                game_over: true,
                winner: Some(Color::Black),
                in_check: true,
            }
        );
        assert_eq!(
            status.outcome(),
            Some(Outcome::Checkmate {
                winner: Color::Black
            })
        );
        assert_eq!(game.push(mv("e1f2")), Err(MoveError::GameOver));
        assert_eq!(game.play_ai(2), Err(MoveError::GameOver));
        assert_eq!(
            game.history().map(|m| m.to_string()).collect::<Vec<_>>(),
            ["f2f3", "e7e5", "g2g4", "d8h4"]
        );
    }

    #[test]
    fn test_stalemate() {
        let game = Game::from_fen("7K/8/5n2/5n2/8/8/7k/8 w").unwrap();
        let status = game.status();
        assert!(status.game_over);
        assert!(!status.in_check);
        assert_eq!(status.winner, None);
        assert_eq!(status.outcome(), Some(Outcome::Stalemate));
    }

    #[test]
    fn test_pop() {
        let mut game = Game::new_initial();
        assert_eq!(game.pop(), None);
        game.push_list("e2e4 e7e5 g1f3").unwrap();
        let board = game.board().clone();
        game.push(mv("b8c6")).unwrap();
        assert_eq!(game.pop(), Some(mv("b8c6")));
        assert_eq!(game.board(), &board);
        assert_eq!(game.status().turn, Color::Black);
        while game.pop().is_some() {}
        assert_eq!(game, Game::new_initial());
        assert!(game.is_empty());
    }

    #[test]
    fn test_pop_after_mate() {
        let mut game = Game::from_list(Board::initial(), "f2f3 e7e5 g2g4 d8h4").unwrap();
        assert!(game.status().game_over);
        assert_eq!(game.pop(), Some(mv("d8h4")));
        assert!(!game.status().game_over);
        assert_eq!(game.status().turn, Color::Black);
    }

    #[test]
    fn test_push_list_errors() {
        let mut game = Game::new_initial();
        assert_eq!(
            game.push_list("e2e4 e7e5 e1e3"),
            Err(MoveListError::Play {
                pos: 2,
                source: MoveError::NotLegal(mv("e1e3"))
            })
        );
        assert_eq!(game.len(), 2);
        assert!(matches!(
            game.push_list("g1f3 xx"),
            Err(MoveListError::Parse { pos: 1, .. })
        ));
        assert_eq!(game.len(), 3);
    }

    #[test]
    fn test_restart() {
        let mut game = Game::from_list(Board::initial(), "d2d4 d7d5").unwrap();
        game.restart();
        assert_eq!(game, Game::default());
        assert_eq!(game.board(), &new_game());
    }

    #[test]
    fn test_play_ai() {
        let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w").unwrap();
        assert_eq!(game.play_ai(2), Ok(mv("a1a8")));
        let status = game.status();
        assert!(status.game_over);
        assert_eq!(status.winner, Some(Color::White));

        let mut game = Game::new_initial();
        for _ in 0..4 {
            game.play_ai(2).unwrap();
        }
        assert_eq!(game.len(), 4);
        assert_eq!(game.status().turn, Color::White);
    }

    #[test]
    fn test_promotion() {
        let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w").unwrap();
        game.push(mv("a7a8")).unwrap();
        assert_eq!(
            game.board().get(sq("a8")),
            crate::types::Cell::from_parts(Color::White, crate::types::Piece::Queen)
        );
        game.pop();
        assert_eq!(
            game.board().get(sq("a7")).piece(),
            Some(crate::types::Piece::Pawn)
        );
    }
}
