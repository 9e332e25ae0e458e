// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::castling::{can_castle, is_castling};
use super::check::{is_checkmate, is_in_check, is_stalemate, legal_destinations};
use super::coord::Coord;
use super::material::{Color, Occupant, Piece};
use super::moves::{is_valid_move, Move, MoveError, MoveRequest, Promotion, Special};
use super::pawns::{can_promote, is_en_passant, is_pawn_capture};
use super::position::{is_path_clear, Position};
use super::review::MoveId;
use super::Turn;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardResult {
    /// Carries the winner.
    CheckMate(Color),
    StaleMate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(Move),
    /// A pawn reached its last rank and no piece was chosen. Nothing has
    /// been applied yet; see [`GameState::promote`].
    PromotionPending,
}

/// Everything needed to continue a game: the position, whose turn it is
/// and the move log, plus status derived after each move.
#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    mover: Color,
    log: Vec<Move>,
    pending: Option<Move>,
    in_check: bool,
    result: Option<BoardResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_position(Position::default(), Color::White)
    }
}

impl Turn for GameState {
    #[inline]
    fn turn(&self) -> Color {
        self.mover
    }
}

impl AsRef<Position> for GameState {
    fn as_ref(&self) -> &Position {
        &self.position
    }
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self::from_position(config.position()?, Color::White))
    }

    /// Starts from an arbitrary position with `mover` to play. Check,
    /// checkmate and stalemate are evaluated immediately.
    pub fn from_position(position: Position, mover: Color) -> Self {
        let mut state = Self {
            position,
            mover,
            log: Vec::new(),
            pending: None,
            in_check: false,
            result: None,
        };
        state.update_status();
        state
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }
    #[inline]
    pub fn log(&self) -> &[Move] {
        &self.log
    }
    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.log.last()
    }
    #[inline]
    pub fn move_id(&self) -> MoveId {
        MoveId::START + self.log.len()
    }
    /// True if the side to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.in_check
    }
    #[inline]
    pub fn board_result(&self) -> Option<BoardResult> {
        self.result
    }
    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
    /// The pawn move waiting for a promotion choice, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<&Move> {
        self.pending.as_ref()
    }

    pub fn legal_destinations(&self, from: Coord) -> Vec<Coord> {
        match self.position.get(from) {
            Some(occupant) if occupant.color() == self.mover && !self.is_over() => {
                legal_destinations(&self.position, from, self.last_move())
            }
            _ => Vec::new(),
        }
    }

    /// Validates and applies a move for the side to play. A rejected move
    /// leaves the state untouched.
    pub fn submit_move(&mut self, request: impl Into<MoveRequest>) -> Result<MoveOutcome> {
        let request = request.into();
        let mv = match self.validate_move(&request) {
            Ok(mv) => mv,
            Err(err) => {
                debug!(from = %request.from, to = %request.to, reason = %err, "[MOVE] Rejected");
                return Err(err.into());
            }
        };
        let promoting = mv.piece.is_pawn() && can_promote(mv.to, self.mover, self.position.dims());
        if promoting && mv.special.is_none() {
            debug!(from = %mv.from, to = %mv.to, "[MOVE] Waiting for promotion choice");
            self.pending = Some(mv);
            return Ok(MoveOutcome::PromotionPending);
        }
        self.apply_move(mv);
        Ok(MoveOutcome::Applied(mv))
    }

    /// Completes a pending promotion with the chosen piece.
    pub fn promote(&mut self, choice: Promotion) -> Result<Move> {
        let Some(pending) = self.pending.take() else {
            return Err(MoveError::NoPromotionPending.into());
        };
        let mv = pending.with_special(Special::Promotion(choice));
        self.apply_move(mv);
        Ok(mv)
    }

    /// Drops a pending promotion. Returns false if there was none.
    pub fn cancel_promotion(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn validate_move(&self, request: &MoveRequest) -> Result<Move, MoveError> {
        use MoveError::*;
        if self.is_over() {
            return Err(GameOver);
        }
        if self.pending.is_some() {
            return Err(PromotionPending);
        }
        let MoveRequest { from, to, promotion } = *request;
        for coord in [from, to] {
            if !self.position.contains(coord) {
                return Err(OutOfBounds(coord));
            }
        }
        let occupant = *self.position.get(from).ok_or(NoPiece(from))?;
        let color = self.mover;
        if occupant.color() != color {
            return Err(NotYourTurn(color));
        }
        let piece = occupant.piece();

        if piece.is_king() {
            if let Some(castling) = is_castling(from, to, color, self.position.dims()) {
                let rook_has_moved = self
                    .position
                    .get(castling.rook_from)
                    .map_or(true, Occupant::has_moved);
                if !can_castle(&self.position, from, &castling, color, occupant.has_moved(), rook_has_moved) {
                    return Err(CastlingNotAllowed);
                }
                if promotion.is_some() {
                    return Err(PromotionNotAllowed);
                }
                return Ok(Move::new(from, to, piece).with_special(Special::Castling(castling.side)));
            }
        }

        let target = self.position.get(to).copied();
        let mut mv = Move::new(from, to, piece).capturing(target.map(|t| t.color()));
        if is_valid_move(piece, from, to, color, target.is_some(), occupant.has_moved()) {
            // the only pawn path is the square skipped by a double advance
            if (piece.is_slider() || piece.is_pawn()) && !is_path_clear(&self.position, from, to) {
                return Err(PathBlocked(from, to));
            }
        } else if piece.is_pawn() && target.is_none() && is_en_passant(self.last_move(), from, to, color) {
            mv = mv.capturing(Some(!color)).with_special(Special::EnPassant);
        } else if !(piece.is_pawn() && is_pawn_capture(from, to, color) && target.is_some()) {
            return Err(InvalidMove);
        }
        if target.is_some_and(|t| t.color() == color) {
            return Err(OwnPiece(to));
        }

        let mut after = self.position.after_move(from, to);
        if mv.special == Some(Special::EnPassant) {
            if let Some(last) = self.last_move() {
                let _ = after.remove(last.to);
            }
        }
        if is_in_check(&after, color) {
            return Err(LeavesKingInCheck);
        }

        match promotion {
            Some(choice) if piece.is_pawn() && can_promote(to, color, self.position.dims()) => {
                Ok(mv.with_special(Special::Promotion(choice)))
            }
            Some(_) => Err(PromotionNotAllowed),
            None => Ok(mv),
        }
    }

    fn apply_move(&mut self, mv: Move) {
        match mv.special {
            Some(Special::Castling(_)) => {
                if let Some(castling) = is_castling(mv.from, mv.to, self.mover, self.position.dims()) {
                    let _ = self.position.relocate(castling.rook_from, castling.rook_to);
                }
            }
            Some(Special::EnPassant) => {
                if let Some(last) = self.log.last().map(|m| m.to) {
                    let _ = self.position.remove(last);
                }
            }
            _ => {}
        }
        let _ = self.position.relocate(mv.from, mv.to);
        if let Some(Special::Promotion(choice)) = mv.special {
            if let Some(pawn) = self.position.remove(mv.to) {
                let _ = self.position.place(mv.to, pawn.promoted(Piece::from(choice)));
            }
        }
        debug!(mover = %self.mover, "[MOVE] Applied {}", mv);
        self.log.push(mv);
        self.mover = !self.mover;
        self.update_status();
    }

    fn update_status(&mut self) {
        use BoardResult::*;
        let color = self.mover;
        self.in_check = is_in_check(&self.position, color);
        // mate and stalemate are meaningless without a king to protect
        self.result = if self.position.find_king(color).is_none() {
            None
        } else if self.in_check {
            is_checkmate(&self.position, color).then_some(CheckMate(!color))
        } else {
            is_stalemate(&self.position, color).then_some(StaleMate)
        };
        // pawn captures, en passant and castling can still save the mover
        if self.result.is_some() && self.has_legal_move() {
            debug!("[GAME] {} escapes through a special move", color);
            self.result = None;
        }
        match self.result {
            Some(CheckMate(winner)) => info!("[GAME] Checkmate, {} wins", winner),
            Some(StaleMate) => info!("[GAME] Stalemate, {} cannot move", color),
            None if self.in_check => debug!("[GAME] {} is in check", color),
            None => {}
        }
    }

    fn has_legal_move(&self) -> bool {
        let last = self.log.last();
        self.position
            .pieces(self.mover)
            .any(|(from, _)| !legal_destinations(&self.position, from, last).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::Dimensions;
    use crate::board::material::Material;
    use crate::config::Layout;
    use Color::*;

    fn c(x: i32, y: i32, z: i32) -> Coord {
        Coord::new(x, y, z)
    }

    fn rejection(result: Result<MoveOutcome>) -> MoveError {
        result.unwrap_err().downcast::<MoveError>().unwrap()
    }

    fn kings() -> Position {
        Position::empty(Dimensions::STANDARD)
            .with(c(4, 0, 0), Material::WK)
            .with(c(4, 7, 0), Material::BK)
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        assert_eq!(state.turn(), White);
        assert_eq!(state.position().len(), 32);
        assert!(state.log().is_empty());
        assert!(!state.is_check());
        assert_eq!(state.board_result(), None);
        assert_eq!(state.move_id(), MoveId::START);
    }
    #[test]
    fn test_new_game_rejects_bad_config() {
        let config = GameConfig::new(Dimensions::new(6, 3), Layout::Standard);
        assert!(GameState::new(&config).is_err());
    }
    #[test]
    fn test_opening_moves() {
        let mut state = GameState::default();
        let outcome = state.submit_move((c(4, 1, 0), c(4, 3, 0))).unwrap();
        let MoveOutcome::Applied(mv) = outcome else {
            panic!("expected an applied move");
        };
        assert!(mv.is_double_advance());
        assert_eq!(state.turn(), Black);
        assert_eq!(state.position().material(c(4, 3, 0)), Some(Material::WP));
        assert!(state.position().is_vacant(c(4, 1, 0)));
        assert!(state.position().get(c(4, 3, 0)).unwrap().has_moved());

        state.submit_move((c(6, 7, 0), c(6, 5, 1))).unwrap();
        assert_eq!(state.turn(), White);
        assert_eq!(state.log().len(), 2);
        assert_eq!(state.move_id().move_number(), 2);
        assert_eq!(state.position().material(c(6, 5, 1)), Some(Material::BN));
    }
    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut state = GameState::default();
        let before = state.position().clone();
        assert_eq!(rejection(state.submit_move((c(4, 6, 0), c(4, 5, 0)))), MoveError::NotYourTurn(White));
        assert_eq!(rejection(state.submit_move((c(4, 4, 0), c(4, 5, 0)))), MoveError::NoPiece(c(4, 4, 0)));
        assert_eq!(rejection(state.submit_move((c(4, 1, 0), c(4, 1, 3)))), MoveError::OutOfBounds(c(4, 1, 3)));
        assert_eq!(rejection(state.submit_move((c(0, 0, 0), c(0, 4, 0)))), MoveError::PathBlocked(c(0, 0, 0), c(0, 4, 0)));
        assert_eq!(rejection(state.submit_move((c(0, 0, 0), c(0, 1, 0)))), MoveError::OwnPiece(c(0, 1, 0)));
        assert_eq!(rejection(state.submit_move((c(1, 0, 0), c(2, 1, 0)))), MoveError::InvalidMove);
        assert_eq!(state.position(), &before);
        assert_eq!(state.turn(), White);
        assert!(state.log().is_empty());
    }
    #[test]
    fn test_moves_between_levels() {
        let mut state = GameState::default();
        state.submit_move((c(3, 0, 0), c(3, 0, 2))).unwrap();
        state.submit_move((c(1, 7, 0), c(1, 6, 2))).unwrap();
        state.submit_move((c(3, 0, 2), c(7, 4, 2))).unwrap();
        assert_eq!(state.position().material(c(7, 4, 2)), Some(Material::WQ));
        assert_eq!(state.position().material(c(1, 6, 2)), Some(Material::BN));
    }
    #[test]
    fn test_pawn_double_advance_blocked() {
        let position = Position::default().with(c(4, 2, 0), Material::BN);
        let mut state = GameState::from_position(position, White);
        assert_eq!(rejection(state.submit_move((c(4, 1, 0), c(4, 3, 0)))), MoveError::PathBlocked(c(4, 1, 0), c(4, 3, 0)));
        assert_eq!(rejection(state.submit_move((c(4, 1, 0), c(4, 2, 0)))), MoveError::InvalidMove);
    }
    #[test]
    fn test_pawn_capture() {
        let position = kings()
            .with(c(4, 1, 0), Material::WP)
            .with(c(3, 2, 0), Material::BB);
        let mut state = GameState::from_position(position, White);
        let MoveOutcome::Applied(mv) = state.submit_move((c(4, 1, 0), c(3, 2, 0))).unwrap() else {
            panic!("expected an applied move");
        };
        assert_eq!(mv.captured, Some(Black));
        assert_eq!(state.position().material(c(3, 2, 0)), Some(Material::WP));
        assert_eq!(state.position().len(), 3);
    }
    #[test]
    fn test_pawn_cannot_capture_empty_diagonal() {
        let position = kings().with(c(4, 1, 0), Material::WP);
        let mut state = GameState::from_position(position, White);
        assert_eq!(rejection(state.submit_move((c(4, 1, 0), c(5, 2, 0)))), MoveError::InvalidMove);
    }
    #[test]
    fn test_pinned_piece_cannot_move() {
        let position = kings()
            .with(c(4, 3, 0), Material::WB)
            .with(c(4, 6, 0), Material::BR);
        let mut state = GameState::from_position(position, White);
        assert_eq!(rejection(state.submit_move((c(4, 3, 0), c(5, 4, 0)))), MoveError::LeavesKingInCheck);
        assert_eq!(state.position().material(c(4, 3, 0)), Some(Material::WB));
    }
    #[test]
    fn test_must_answer_check() {
        let position = kings()
            .with(c(4, 6, 0), Material::BR)
            .with(c(0, 1, 0), Material::WP)
            .with(c(2, 2, 0), Material::WB);
        let mut state = GameState::from_position(position, White);
        assert!(state.is_check());
        assert_eq!(rejection(state.submit_move((c(0, 1, 0), c(0, 2, 0)))), MoveError::LeavesKingInCheck);
        state.submit_move((c(2, 2, 0), c(4, 4, 0))).unwrap();
        assert!(!is_in_check(state.position(), White));
    }
    #[test]
    fn test_castling_kingside() {
        let position = kings().with(c(7, 0, 0), Material::WR);
        let mut state = GameState::from_position(position, White);
        let MoveOutcome::Applied(mv) = state.submit_move((c(4, 0, 0), c(6, 0, 0))).unwrap() else {
            panic!("expected an applied move");
        };
        assert_eq!(mv.special, Some(Special::Castling(crate::board::castling::CastlingSide::Kingside)));
        assert_eq!(state.position().material(c(6, 0, 0)), Some(Material::WK));
        assert_eq!(state.position().material(c(5, 0, 0)), Some(Material::WR));
        assert!(state.position().is_vacant(c(7, 0, 0)));
        assert!(state.position().get(c(5, 0, 0)).unwrap().has_moved());
        assert_eq!(state.turn(), Black);
    }
    #[test]
    fn test_castling_queenside_black() {
        let position = kings().with(c(0, 7, 0), Material::BR);
        let mut state = GameState::from_position(position, Black);
        state.submit_move((c(4, 7, 0), c(2, 7, 0))).unwrap();
        assert_eq!(state.position().material(c(2, 7, 0)), Some(Material::BK));
        assert_eq!(state.position().material(c(3, 7, 0)), Some(Material::BR));
    }
    #[test]
    fn test_castling_rejected() {
        let position = kings()
            .with(c(7, 0, 0), Material::WR)
            .with(c(5, 5, 0), Material::BR);
        let mut state = GameState::from_position(position, White);
        assert_eq!(rejection(state.submit_move((c(4, 0, 0), c(6, 0, 0)))), MoveError::CastlingNotAllowed);

        let position = kings().with_moved(c(7, 0, 0), Material::WR);
        let mut state = GameState::from_position(position, White);
        assert_eq!(rejection(state.submit_move((c(4, 0, 0), c(6, 0, 0)))), MoveError::CastlingNotAllowed);
    }
    #[test]
    fn test_no_castling_after_king_moves() {
        let position = kings()
            .with(c(7, 0, 0), Material::WR)
            .with(c(0, 6, 1), Material::BP);
        let mut state = GameState::from_position(position, White);
        state.submit_move((c(4, 0, 0), c(4, 0, 1))).unwrap();
        state.submit_move((c(0, 6, 1), c(0, 5, 1))).unwrap();
        state.submit_move((c(4, 0, 1), c(4, 0, 0))).unwrap();
        state.submit_move((c(0, 5, 1), c(0, 4, 1))).unwrap();
        assert_eq!(rejection(state.submit_move((c(4, 0, 0), c(6, 0, 0)))), MoveError::CastlingNotAllowed);
    }
    #[test]
    fn test_en_passant() {
        let position = kings()
            .with_moved(c(0, 4, 0), Material::WP)
            .with(c(1, 6, 0), Material::BP);
        let mut state = GameState::from_position(position, Black);
        state.submit_move((c(1, 6, 0), c(1, 4, 0))).unwrap();
        let MoveOutcome::Applied(mv) = state.submit_move((c(0, 4, 0), c(1, 5, 0))).unwrap() else {
            panic!("expected an applied move");
        };
        assert_eq!(mv.special, Some(Special::EnPassant));
        assert_eq!(mv.captured, Some(Black));
        assert_eq!(state.position().material(c(1, 5, 0)), Some(Material::WP));
        assert!(state.position().is_vacant(c(1, 4, 0)));
        assert_eq!(state.position().len(), 3);
    }
    #[test]
    fn test_en_passant_expires() {
        let position = kings()
            .with_moved(c(0, 4, 0), Material::WP)
            .with(c(1, 6, 0), Material::BP)
            .with(c(7, 1, 1), Material::WP)
            .with(c(7, 6, 1), Material::BP);
        let mut state = GameState::from_position(position, Black);
        state.submit_move((c(1, 6, 0), c(1, 4, 0))).unwrap();
        state.submit_move((c(7, 1, 1), c(7, 2, 1))).unwrap();
        state.submit_move((c(7, 6, 1), c(7, 5, 1))).unwrap();
        assert_eq!(rejection(state.submit_move((c(0, 4, 0), c(1, 5, 0)))), MoveError::InvalidMove);
    }
    #[test]
    fn test_promotion_pending_is_atomic() {
        let position = kings().with_moved(c(0, 6, 0), Material::WP);
        let mut state = GameState::from_position(position.clone(), White);
        let outcome = state.submit_move((c(0, 6, 0), c(0, 7, 0))).unwrap();
        assert_eq!(outcome, MoveOutcome::PromotionPending);
        assert_eq!(state.position(), &position);
        assert_eq!(state.turn(), White);
        assert!(state.log().is_empty());
        assert_eq!(state.pending_promotion().map(|m| m.to), Some(c(0, 7, 0)));
        assert_eq!(rejection(state.submit_move((c(4, 0, 0), c(4, 0, 1)))), MoveError::PromotionPending);

        let mv = state.promote(Promotion::Queen).unwrap();
        assert_eq!(mv.special, Some(Special::Promotion(Promotion::Queen)));
        assert_eq!(state.position().material(c(0, 7, 0)), Some(Material::WQ));
        assert!(state.position().is_vacant(c(0, 6, 0)));
        assert_eq!(state.turn(), Black);
        // the new queen attacks along the back rank
        assert!(state.is_check());
    }
    #[test]
    fn test_promotion_cancelled() {
        let position = kings().with_moved(c(0, 6, 0), Material::WP);
        let mut state = GameState::from_position(position, White);
        state.submit_move((c(0, 6, 0), c(0, 7, 0))).unwrap();
        assert!(state.cancel_promotion());
        assert!(!state.cancel_promotion());
        assert!(state.pending_promotion().is_none());
        state.submit_move((c(4, 0, 0), c(4, 0, 1))).unwrap();
        assert_eq!(state.turn(), Black);
    }
    #[test]
    fn test_promotion_with_choice() {
        let position = kings()
            .with_moved(c(1, 1, 2), Material::BP)
            .with(c(0, 0, 2), Material::WN);
        let mut state = GameState::from_position(position, Black);
        let request = MoveRequest::new(c(1, 1, 2), c(0, 0, 2), Some(Promotion::Knight));
        let MoveOutcome::Applied(mv) = state.submit_move(request).unwrap() else {
            panic!("expected an applied move");
        };
        assert_eq!(mv.captured, Some(White));
        assert_eq!(state.position().material(c(0, 0, 2)), Some(Material::BN));
    }
    #[test]
    fn test_promotion_choice_needs_last_rank() {
        let mut state = GameState::default();
        let request = MoveRequest::new(c(0, 1, 0), c(0, 2, 0), Some(Promotion::Queen));
        assert_eq!(rejection(state.submit_move(request)), MoveError::PromotionNotAllowed);
        let err = state.promote(Promotion::Queen).unwrap_err();
        assert_eq!(err.downcast::<MoveError>().unwrap(), MoveError::NoPromotionPending);
    }
    #[test]
    fn test_checkmate_ends_game() {
        let position = Position::empty(Dimensions::new(8, 1))
            .with(c(0, 0, 0), Material::WK)
            .with(c(0, 1, 0), Material::WR)
            .with(c(7, 7, 0), Material::BK)
            .with(c(6, 6, 0), Material::BP)
            .with(c(7, 6, 0), Material::BP);
        let mut state = GameState::from_position(position, White);
        state.submit_move((c(0, 1, 0), c(0, 7, 0))).unwrap();
        assert!(state.is_check());
        assert_eq!(state.board_result(), Some(BoardResult::CheckMate(White)));
        assert_eq!(rejection(state.submit_move((c(7, 6, 0), c(7, 5, 0)))), MoveError::GameOver);
        assert!(state.legal_destinations(c(7, 6, 0)).is_empty());
    }
    #[test]
    fn test_stalemate_ends_game() {
        let position = Position::empty(Dimensions::new(8, 1))
            .with(c(7, 7, 0), Material::BK)
            .with(c(6, 5, 0), Material::WK)
            .with(c(5, 4, 0), Material::WQ);
        let mut state = GameState::from_position(position, White);
        state.submit_move((c(5, 4, 0), c(5, 6, 0))).unwrap();
        assert!(!state.is_check());
        assert_eq!(state.board_result(), Some(BoardResult::StaleMate));
    }
    #[test]
    fn test_pawn_capture_prevents_stalemate() {
        let position = Position::empty(Dimensions::new(8, 1))
            .with(c(0, 0, 0), Material::WK)
            .with(c(2, 1, 0), Material::BQ)
            .with_moved(c(5, 3, 0), Material::WP)
            .with(c(5, 4, 0), Material::BP)
            .with(c(6, 4, 0), Material::BN);
        // only the diagonal capture is left, which the stalemate scan skips
        assert!(is_stalemate(&position, White));
        let mut state = GameState::from_position(position, White);
        assert_eq!(state.board_result(), None);
        assert_eq!(state.legal_destinations(c(5, 3, 0)), vec![c(6, 4, 0)]);
        state.submit_move((c(5, 3, 0), c(6, 4, 0))).unwrap();
        assert_eq!(state.position().material(c(6, 4, 0)), Some(Material::WP));
        assert_eq!(state.turn(), Black);
    }
    #[test]
    fn test_en_passant_cannot_expose_king() {
        let position = Position::empty(Dimensions::STANDARD)
            .with(c(7, 4, 0), Material::WK)
            .with(c(0, 7, 1), Material::BK)
            .with_moved(c(4, 4, 0), Material::WP)
            .with(c(0, 4, 0), Material::BR)
            .with(c(5, 6, 0), Material::BP);
        let mut state = GameState::from_position(position, Black);
        state.submit_move((c(5, 6, 0), c(5, 4, 0))).unwrap();
        assert!(!state.is_check());
        assert_eq!(state.legal_destinations(c(4, 4, 0)), vec![c(4, 5, 0)]);
        assert_eq!(rejection(state.submit_move((c(4, 4, 0), c(5, 5, 0)))), MoveError::LeavesKingInCheck);
        assert_eq!(state.position().material(c(5, 4, 0)), Some(Material::BP));
        assert_eq!(state.turn(), White);
    }
    #[test]
    fn test_kingless_layout_never_ends() {
        let config = GameConfig::new(Dimensions::STANDARD, Layout::Empty);
        let state = GameState::new(&config).unwrap();
        assert_eq!(state.board_result(), None);
    }
    #[test]
    fn test_legal_destinations_for_mover_only() {
        let state = GameState::default();
        assert_eq!(state.legal_destinations(c(4, 1, 0)).len(), 2);
        assert!(state.legal_destinations(c(4, 6, 0)).is_empty());
    }
    #[test]
    fn test_snapshot_is_independent() {
        let mut state = GameState::default();
        let snapshot = state.clone();
        state.submit_move((c(4, 1, 0), c(4, 3, 0))).unwrap();
        assert_eq!(snapshot.turn(), White);
        assert!(snapshot.position().is_occupied(c(4, 1, 0)));
    }
}
