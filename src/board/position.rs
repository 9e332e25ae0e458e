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

use std::collections::HashMap;
use std::fmt;
use strum::IntoEnumIterator;

use super::coord::{Coord, Dimensions};
use super::material::{Color, Material, Occupant, Piece};

use Piece::*;

/// Back rank from file `0` to file `7`.
const BACK_RANK: [Piece; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

/// Piece placement on the board volume: occupied coordinates only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    dims: Dimensions,
    squares: HashMap<Coord, Occupant>,
}

impl Default for Position {
    fn default() -> Self {
        Self::standard(Dimensions::STANDARD)
    }
}

impl Position {
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            squares: HashMap::new(),
        }
    }

    /// The 32-piece opening setup on level 0. Files beyond the eighth are
    /// left empty.
    pub fn standard(dims: Dimensions) -> Self {
        let mut position = Self::empty(dims);
        for (file, piece) in BACK_RANK.into_iter().enumerate() {
            position.init_file(file as i32, piece);
        }
        position
    }

    fn init_file(&mut self, file: i32, piece: Piece) {
        for color in Color::iter() {
            let pawn = Coord::new(file, color.pawn_rank(&self.dims), 0);
            let _ = self.place(pawn, Material::new(color, Pawn).into());
            let back = Coord::new(file, color.back_rank(&self.dims), 0);
            let _ = self.place(back, Material::new(color, piece).into());
        }
    }

    /// The sample setup spread over three levels, without kings.
    pub fn prototype(dims: Dimensions) -> Self {
        Self::empty(dims)
            .with(Coord::new(0, 0, 0), Material::WR)
            .with(Coord::new(2, 2, 0), Material::WB)
            .with(Coord::new(1, 0, 0), Material::WN)
            .with(Coord::new(4, 4, 1), Material::BQ)
            .with(Coord::new(7, 7, 2), Material::BR)
    }

    /// Builder form of [`place`](Self::place) for an unmoved piece.
    pub fn with(mut self, coord: Coord, material: Material) -> Self {
        let _ = self.place(coord, material.into());
        self
    }

    /// Builder form of [`place`](Self::place) for a piece that has moved.
    pub fn with_moved(mut self, coord: Coord, material: Material) -> Self {
        let _ = self.place(coord, Occupant::new(material, true));
        self
    }

    #[inline]
    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.dims.contains(coord)
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&Occupant> {
        self.squares.get(&coord)
    }

    #[inline]
    pub fn material(&self, coord: Coord) -> Option<Material> {
        self.get(coord).map(Occupant::material)
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.squares.contains_key(&coord)
    }

    #[inline]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        !self.is_occupied(coord)
    }

    /// True if `coord` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, coord: Coord, color: Color) -> bool {
        self.get(coord).is_some_and(|o| o.color() == color)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Occupant)> {
        self.squares.iter().map(|(coord, occupant)| (*coord, occupant))
    }

    /// Pieces of one color, in no particular order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coord, &Occupant)> {
        self.iter().filter(move |(_, o)| o.color() == color)
    }

    /// Puts `occupant` on `coord`, returning whatever it replaced.
    pub fn place(&mut self, coord: Coord, occupant: Occupant) -> Option<Occupant> {
        debug_assert!(self.contains(coord), "{coord} is off the board");
        self.squares.insert(coord, occupant)
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Occupant> {
        self.squares.remove(&coord)
    }

    /// Relocates the piece on `from` to `to`, overwriting anything there and
    /// marking it as moved. Returns the overwritten piece.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> Option<Occupant> {
        match self.remove(from) {
            Some(occupant) => self.place(to, occupant.moved()),
            None => None,
        }
    }

    /// A copy of this position with the piece on `from` relocated to `to`.
    pub fn after_move(&self, from: Coord, to: Coord) -> Self {
        let mut copy = self.clone();
        let _ = copy.relocate(from, to);
        copy
    }

    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces(color)
            .find(|(_, o)| o.piece().is_king())
            .map(|(coord, _)| coord)
    }
}

/// Coordinates strictly between `from` and `to`, walking the per-axis unit
/// step. Empty when the two are adjacent or equal.
pub fn between(from: Coord, to: Coord) -> impl Iterator<Item = Coord> {
    let delta = from.delta(to);
    let step = delta.signum();
    let steps = delta.max_abs();
    (1..steps.max(1)).map(move |i| from + step * i)
}

/// True if no piece stands strictly between `from` and `to`.
pub fn is_path_clear(position: &Position, from: Coord, to: Coord) -> bool {
    between(from, to).all(|coord| position.is_vacant(coord))
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.dims.levels {
            writeln!(f, "level {z}")?;
            for y in (0..self.dims.size).rev() {
                for x in 0..self.dims.size {
                    let symbol = self
                        .material(Coord::new(x, y, z))
                        .map_or('.', |m| m.symbol());
                    write!(f, "{symbol}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
