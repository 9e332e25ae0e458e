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

//! Attack detection and the check / checkmate / stalemate evaluator.
//!
//! Every function here is a pure query on a `&Position`. Hypothetical
//! moves are evaluated on a copy, so the caller's position is never
//! touched.

use super::castling::{can_castle, is_castling};
use super::coord::Coord;
use super::material::{Color, Occupant, Piece};
use super::moves::{is_bishop_move, is_king_move, is_knight_move, is_queen_move, is_rook_move};
use super::moves::{is_valid_move, Move};
use super::pawns::{is_en_passant, is_pawn_capture};
use super::position::{is_path_clear, Position};

use Piece::*;

/// True if the piece on `from` threatens `target`. Pawns threaten
/// diagonally forward only, kings one step only.
pub fn attacks(position: &Position, from: Coord, attacker: &Occupant, target: Coord) -> bool {
    if from == target {
        return false;
    }
    match attacker.piece() {
        Pawn => is_pawn_capture(from, target, attacker.color()),
        Knight => is_knight_move(from, target),
        King => is_king_move(from, target),
        Rook => is_rook_move(from, target) && is_path_clear(position, from, target),
        Bishop => is_bishop_move(from, target) && is_path_clear(position, from, target),
        Queen => is_queen_move(from, target) && is_path_clear(position, from, target),
    }
}

pub fn is_square_under_attack(position: &Position, target: Coord, attacker: Color) -> bool {
    position
        .pieces(attacker)
        .any(|(from, occupant)| attacks(position, from, occupant, target))
}

pub fn find_king(position: &Position, color: Color) -> Option<Coord> {
    position.find_king(color)
}

/// False when `color` has no king on the board.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.find_king(color) {
        Some(king) => is_square_under_attack(position, king, !color),
        None => false,
    }
}

/// Simulates `from -> to` on a copy and reports whether `color` would be
/// in check. Whatever stood on `to` is overwritten.
pub fn would_be_in_check_after_move(position: &Position, from: Coord, to: Coord, color: Color) -> bool {
    is_in_check(&position.after_move(from, to), color)
}

pub fn is_checkmate(position: &Position, color: Color) -> bool {
    is_in_check(position, color) && !has_escape(position, color)
}

pub fn is_stalemate(position: &Position, color: Color) -> bool {
    !is_in_check(position, color) && !has_escape(position, color)
}

/// Brute force over every piece of `color` and every cell of the volume.
fn has_escape(position: &Position, color: Color) -> bool {
    position.pieces(color).any(|(from, occupant)| {
        position
            .dims()
            .coords()
            .filter(|to| is_candidate(position, from, occupant, *to))
            .any(|to| !would_be_in_check_after_move(position, from, to, color))
    })
}

/// Movement geometry, clear path for sliders and no own piece on `to`.
/// Pawn captures and special moves are not candidates.
fn is_candidate(position: &Position, from: Coord, occupant: &Occupant, to: Coord) -> bool {
    let color = occupant.color();
    let target = position.get(to);
    if target.is_some_and(|t| t.color() == color) {
        return false;
    }
    let is_capture = target.is_some();
    if !is_valid_move(occupant.piece(), from, to, color, is_capture, occupant.has_moved()) {
        return false;
    }
    !occupant.piece().is_slider() || is_path_clear(position, from, to)
}

/// Every square the piece on `from` may legally move to, including pawn
/// captures, en passant and castling. Used to preview moves before they
/// are submitted.
pub fn legal_destinations(position: &Position, from: Coord, last_move: Option<&Move>) -> Vec<Coord> {
    let Some(occupant) = position.get(from).copied() else {
        return Vec::new();
    };
    let color = occupant.color();
    position
        .dims()
        .coords()
        .filter(|to| match occupant.piece() {
            King => match is_castling(from, *to, color, position.dims()) {
                Some(castling) => {
                    let rook_has_moved = position
                        .get(castling.rook_from)
                        .map_or(true, Occupant::has_moved);
                    can_castle(position, from, &castling, color, occupant.has_moved(), rook_has_moved)
                }
                None => is_safe_step(position, from, &occupant, *to),
            },
            Pawn => is_pawn_destination(position, from, &occupant, *to, last_move),
            _ => is_safe_step(position, from, &occupant, *to),
        })
        .collect()
}

fn is_safe_step(position: &Position, from: Coord, occupant: &Occupant, to: Coord) -> bool {
    is_candidate(position, from, occupant, to)
        && !would_be_in_check_after_move(position, from, to, occupant.color())
}

fn is_pawn_destination(
    position: &Position,
    from: Coord,
    pawn: &Occupant,
    to: Coord,
    last_move: Option<&Move>,
) -> bool {
    let color = pawn.color();
    if is_valid_move(Pawn, from, to, color, position.is_occupied(to), pawn.has_moved()) {
        return is_path_clear(position, from, to)
            && position.is_vacant(to)
            && !would_be_in_check_after_move(position, from, to, color);
    }
    if is_pawn_capture(from, to, color) && position.is_occupied_by(to, !color) {
        return !would_be_in_check_after_move(position, from, to, color);
    }
    if position.is_vacant(to) && is_en_passant(last_move, from, to, color) {
        if let Some(last) = last_move {
            let mut after = position.after_move(from, to);
            let _ = after.remove(last.to);
            return !is_in_check(&after, color);
        }
    }
    false
}
