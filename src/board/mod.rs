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

//! Rules engine for chess on stacked boards
//!
//! A _board_ here is a volume of `levels` stacked `size`-by-`size`
//! boards sharing one coordinate space. The engine decides whether a
//! move is legal and tracks the state of a game. The following
//! features are supported:
//!
//! [x] Piece movement across levels (planar and space diagonals)
//! [x] Check, checkmate and stalemate
//! [x] Castling on the back rank of any level
//! [x] En passant
//! [x] Pawn promotion, with or without an up-front choice
//! [x] Undo / redo through value snapshots
//! [ ] Threefold repetition and the fifty-move rule
//! [ ] Insufficient material
//!
//! Some of the key abstractions include:
//!
//! * A `Coord` is a cell `(x, y, z)`: file, rank and level. Subtracting
//!   two coordinates gives an `Offset`, and every movement rule is a
//!   predicate on that offset. `Dimensions` bounds the volume and can
//!   iterate over every cell in it.
//!
//! * `Material` represents a piece of a specific color. An `Occupant`
//!   is a `Material` sitting on the board together with its `has_moved`
//!   flag. `Promotion` has only the four variants a pawn can become.
//!
//! * A `Position` maps occupied coordinates to occupants. Rule queries
//!   (`is_path_clear`, `is_square_under_attack`, `is_checkmate`, ...)
//!   are free functions over a `&Position`; hypothetical moves are
//!   evaluated on a copy.
//!
//! * `GameState` owns a position, the side to move and the move log.
//!   `submit_move` runs a `MoveRequest` through validation and applies
//!   it atomically, or parks it as a pending promotion.
//!
//! * `ReviewState` holds a snapshot of the `GameState` after every
//!   move and a cursor into them, which is all undo and redo need.
//!

mod castling;
mod check;
mod coord;
mod material;
mod moves;
mod pawns;
mod play;
mod position;
mod review;

pub use castling::*;
pub use check::*;
pub use coord::*;
pub use material::*;
pub use moves::*;
pub use pawns::*;
pub use play::*;
pub use position::*;
pub use review::*;

pub trait Turn {
    fn turn(&self) -> Color;
}
