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

//! Pawn-only rules: diagonal captures, en passant and promotion.

use super::coord::{Coord, Dimensions};
use super::material::Color;
use super::moves::Move;

/// Pawn attack geometry: one step diagonally forward on the same level.
/// This is also the shape of an ordinary pawn capture.
pub fn is_pawn_capture(from: Coord, to: Coord, color: Color) -> bool {
    let d = from.delta(to);
    d.z == 0 && d.x.abs() == 1 && d.y == color.forward()
}

/// True if the pawn of `color` on `current` may capture en passant by moving
/// to `target`, given the move played just before.
pub fn is_en_passant(last_move: Option<&Move>, current: Coord, target: Coord, color: Color) -> bool {
    let Some(last) = last_move else {
        return false;
    };
    if !last.is_double_advance() {
        return false;
    }
    let landed = last.to;
    let beside = current.y == landed.y && current.z == landed.z && (current.x - landed.x).abs() == 1;
    beside && target == Coord::new(landed.x, current.y + color.forward(), current.z)
}

pub fn can_promote(pos: Coord, color: Color, dims: &Dimensions) -> bool {
    pos.y == color.promotion_rank(dims)
}
