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
use std::ops::Not;
use strum_macros::Display;
use strum_macros::EnumIter;

use super::coord::Dimensions;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    color: Color,
    piece: Piece,
}

impl Material {
    pub const WK: Self = Self::white(King);
    pub const WQ: Self = Self::white(Queen);
    pub const WR: Self = Self::white(Rook);
    pub const WB: Self = Self::white(Bishop);
    pub const WN: Self = Self::white(Knight);
    pub const WP: Self = Self::white(Pawn);

    pub const BK: Self = Self::black(King);
    pub const BQ: Self = Self::black(Queen);
    pub const BR: Self = Self::black(Rook);
    pub const BB: Self = Self::black(Bishop);
    pub const BN: Self = Self::black(Knight);
    pub const BP: Self = Self::black(Pawn);

    #[inline]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Self { color, piece }
    }

    #[inline]
    pub const fn white(piece: Piece) -> Self {
        Self::new(White, piece)
    }

    #[inline]
    pub const fn black(piece: Piece) -> Self {
        Self::new(Black, piece)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Diagram letter: uppercase for white, lowercase for black.
    pub fn symbol(&self) -> char {
        let c = self.piece.letter();
        match self.color {
            White => c.to_ascii_uppercase(),
            Black => c,
        }
    }
}

/// A piece as it sits on the board. Its position is the key it is stored
/// under; `has_moved` flips to true the first time the piece is displaced
/// and never flips back.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    material: Material,
    has_moved: bool,
}

impl Occupant {
    #[inline]
    pub const fn new(material: Material, has_moved: bool) -> Self {
        Self {
            material,
            has_moved,
        }
    }

    #[inline]
    pub const fn unmoved(material: Material) -> Self {
        Self::new(material, false)
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.material.color()
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.material.piece()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// The same piece after being displaced.
    #[inline]
    pub fn moved(self) -> Self {
        Self::new(self.material, true)
    }

    /// The same piece with its type rewritten, as on promotion.
    #[inline]
    pub fn promoted(self, piece: Piece) -> Self {
        Self::new(Material::new(self.color(), piece), self.has_moved)
    }
}

impl From<Material> for Occupant {
    fn from(material: Material) -> Self {
        Self::unmoved(material)
    }
}

use Color::{Black, White};

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank direction pawns of this color advance in.
    #[inline]
    pub const fn forward(&self) -> i32 {
        match self {
            White => 1,
            Black => -1,
        }
    }

    #[inline]
    pub fn back_rank(&self, dims: &Dimensions) -> i32 {
        match self {
            White => 0,
            Black => dims.last_rank(),
        }
    }

    #[inline]
    pub fn pawn_rank(&self, dims: &Dimensions) -> i32 {
        self.back_rank(dims) + self.forward()
    }

    /// The rank where this color's pawns promote.
    #[inline]
    pub fn promotion_rank(&self, dims: &Dimensions) -> i32 {
        (!*self).back_rank(dims)
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
use Piece::{Bishop, King, Knight, Pawn, Queen, Rook};

impl Piece {
    pub fn letter(&self) -> char {
        match self {
            Pawn => 'p',
            Knight => 'n',
            Bishop => 'b',
            Rook => 'r',
            Queen => 'q',
            King => 'k',
        }
    }
    /// Rook, bishop and queen: pieces whose moves need a clear path.
    pub fn is_slider(&self) -> bool {
        matches!(*self, Rook | Bishop | Queen)
    }
    pub fn is_king(&self) -> bool {
        matches!(*self, King)
    }
    pub fn is_rook(&self) -> bool {
        matches!(*self, Rook)
    }
    pub fn is_pawn(&self) -> bool {
        matches!(*self, Pawn)
    }
}
