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

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::castling::CastlingSide;
use super::coord::Coord;
use super::material::{Color, Piece};

use Piece::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Not a legal move")]
    InvalidMove,
    #[error("Coordinate {0} is off the board")]
    OutOfBounds(Coord),
    #[error("No piece at {0}")]
    NoPiece(Coord),
    #[error("It is {0}'s turn")]
    NotYourTurn(Color),
    #[error("Path from {0} to {1} is blocked")]
    PathBlocked(Coord, Coord),
    #[error("Destination {0} holds a piece of the same color")]
    OwnPiece(Coord),
    #[error("Castling is not allowed")]
    CastlingNotAllowed,
    #[error("Move would leave the king in check")]
    LeavesKingInCheck,
    #[error("A promotion choice is pending")]
    PromotionPending,
    #[error("No promotion is pending")]
    NoPromotionPending,
    #[error("Promotion is only possible on the last rank")]
    PromotionNotAllowed,
    #[error("The game is over")]
    GameOver,
}

/// Geometric legality of a move for a piece type, ignoring board occupancy.
///
/// Pawn captures are rejected here: diagonal captures are decided by
/// [`is_pawn_capture`](super::pawns::is_pawn_capture) and
/// [`is_en_passant`](super::pawns::is_en_passant).
pub fn is_valid_move(
    piece: Piece,
    from: Coord,
    to: Coord,
    color: Color,
    is_capture: bool,
    has_moved: bool,
) -> bool {
    if from == to {
        return false;
    }
    match piece {
        Rook => is_rook_move(from, to),
        Bishop => is_bishop_move(from, to),
        Queen => is_queen_move(from, to),
        Knight => is_knight_move(from, to),
        King => is_king_move(from, to),
        Pawn => is_pawn_move(from, to, color, is_capture, has_moved),
    }
}

/// Slide along exactly one axis.
pub fn is_rook_move(from: Coord, to: Coord) -> bool {
    from.delta(to).axes_moved() == 1
}

/// Planar diagonal `(0, n, n)` or space diagonal `(n, n, n)`.
pub fn is_bishop_move(from: Coord, to: Coord) -> bool {
    let [a, b, c] = from.delta(to).sorted_abs();
    (a == 0 && b == c && b > 0) || (a == b && b == c && a > 0)
}

pub fn is_queen_move(from: Coord, to: Coord) -> bool {
    is_rook_move(from, to) || is_bishop_move(from, to)
}

/// Any assignment of `(2, 1, 0)` to the three axes.
pub fn is_knight_move(from: Coord, to: Coord) -> bool {
    from.delta(to).sorted_abs() == [0, 1, 2]
}

pub fn is_king_move(from: Coord, to: Coord) -> bool {
    from.delta(to).max_abs() == 1
}

/// Pawns stay on their file and level and advance one rank, or two from
/// their starting square.
pub fn is_pawn_move(from: Coord, to: Coord, color: Color, is_capture: bool, has_moved: bool) -> bool {
    let d = from.delta(to);
    if d.z != 0 || d.x != 0 || is_capture {
        return false;
    }
    let forward = color.forward();
    d.y == forward || (!has_moved && d.y == 2 * forward)
}

/// A committed move as recorded in the move log.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
    pub captured: Option<Color>,
    pub special: Option<Special>,
}

impl Move {
    pub fn new(from: Coord, to: Coord, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            special: None,
        }
    }

    pub fn capturing(mut self, color: Option<Color>) -> Self {
        self.captured = color;
        self
    }

    pub fn with_special(mut self, special: Special) -> Self {
        self.special = Some(special);
        self
    }

    /// True for a pawn advancing two ranks on one file and level.
    pub fn is_double_advance(&self) -> bool {
        let d = self.from.delta(self.to);
        self.piece == Pawn && d.x == 0 && d.z == 0 && d.y.abs() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}→{}", self.piece, self.from, self.to)?;
        if let Some(color) = self.captured {
            write!(f, " x{}", color)?;
        }
        match self.special {
            Some(Special::Castling(CastlingSide::Kingside)) => write!(f, " O-O"),
            Some(Special::Castling(CastlingSide::Queenside)) => write!(f, " O-O-O"),
            Some(Special::EnPassant) => write!(f, " e.p."),
            Some(Special::Promotion(promotion)) => write!(f, " ={}", promotion),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    Castling(CastlingSide),
    EnPassant,
    Promotion(Promotion),
}

/// A move as submitted by a caller.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<Promotion>,
}

impl MoveRequest {
    pub fn new(from: Coord, to: Coord, promotion: Option<Promotion>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }
}

impl From<(Coord, Coord)> for MoveRequest {
    fn from((from, to): (Coord, Coord)) -> Self {
        Self::new(from, to, None)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl From<Promotion> for Piece {
    fn from(value: Promotion) -> Self {
        match value {
            Promotion::Queen => Piece::Queen,
            Promotion::Rook => Piece::Rook,
            Promotion::Bishop => Piece::Bishop,
            Promotion::Knight => Piece::Knight,
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Piece::from(*self))
    }
}
