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
use strum_macros::{Display, EnumIter};

use super::check::is_square_under_attack;
use super::coord::{Coord, Dimensions};
use super::material::Color;
use super::position::{between, is_path_clear, Position};

const KING_FILE: i32 = 4;
const QUEENSIDE_ROOK_FILE: i32 = 0;
const KINGSIDE_ROOK_DEST: i32 = 5;
const QUEENSIDE_ROOK_DEST: i32 = 3;

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// A castling attempt derived from a king's two-file displacement. All
/// squares share the king's rank and level.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling {
    pub side: CastlingSide,
    pub king_from: Coord,
    pub king_to: Coord,
    pub rook_from: Coord,
    pub rook_to: Coord,
}

impl Castling {
    /// Squares that must be empty: everything between king and rook.
    pub fn blocking_lane(&self) -> impl Iterator<Item = Coord> {
        between(self.king_from, self.rook_from)
    }

    /// Squares the king passes through or lands on.
    pub fn attacking_lane(&self) -> impl Iterator<Item = Coord> {
        between(self.king_from, self.king_to).chain(std::iter::once(self.king_to))
    }
}

/// Recognizes a castling attempt from the king's displacement alone.
pub fn is_castling(from: Coord, to: Coord, color: Color, dims: &Dimensions) -> Option<Castling> {
    let back_rank = color.back_rank(dims);
    let d = from.delta(to);
    if from.x != KING_FILE || from.y != back_rank || to.y != back_rank || d.z != 0 || d.x.abs() != 2 {
        return None;
    }
    let (side, rook_file, rook_dest) = if d.x > 0 {
        (CastlingSide::Kingside, dims.size - 1, KINGSIDE_ROOK_DEST)
    } else {
        (CastlingSide::Queenside, QUEENSIDE_ROOK_FILE, QUEENSIDE_ROOK_DEST)
    };
    Some(Castling {
        side,
        king_from: from,
        king_to: to,
        rook_from: Coord::new(rook_file, from.y, from.z),
        rook_to: Coord::new(rook_dest, from.y, from.z),
    })
}

/// Full castling legality on the pre-move board. The rook's destination is
/// not checked for attacks.
pub fn can_castle(
    position: &Position,
    king: Coord,
    castling: &Castling,
    color: Color,
    king_has_moved: bool,
    rook_has_moved: bool,
) -> bool {
    if king_has_moved || rook_has_moved {
        return false;
    }
    match position.get(castling.rook_from) {
        Some(rook) if rook.piece().is_rook() && rook.color() == color => {}
        _ => return false,
    }
    if !is_path_clear(position, king, castling.rook_from) {
        return false;
    }
    let them = !color;
    if is_square_under_attack(position, king, them) {
        return false;
    }
    !castling
        .attacking_lane()
        .any(|square| is_square_under_attack(position, square, them))
}
