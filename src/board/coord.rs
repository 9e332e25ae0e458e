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
use std::ops::{Add, Mul, Neg, Sub};

/// A cell in the stacked board volume. `x` is the file, `y` the rank and
/// `z` the level.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The offset that takes `self` to `to`.
    #[inline]
    pub fn delta(self, to: Coord) -> Offset {
        to - self
    }

    #[inline]
    pub fn abs_delta(self, to: Coord) -> Offset {
        (to - self).abs()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Coord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Offset {
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Per-axis sign, i.e. the unit step used to walk from one end of
    /// a line to the other.
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum(), self.z.signum())
    }

    /// Chebyshev length: the number of unit steps along a line.
    #[inline]
    pub fn max_abs(self) -> i32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Absolute components sorted ascending.
    pub fn sorted_abs(self) -> [i32; 3] {
        let mut values = [self.x.abs(), self.y.abs(), self.z.abs()];
        values.sort_unstable();
        values
    }

    /// Number of axes with a non-zero component.
    #[inline]
    pub fn axes_moved(self) -> usize {
        [self.x, self.y, self.z].iter().filter(|v| **v != 0).count()
    }
}

impl Add<Offset> for Coord {
    type Output = Coord;
    fn add(self, rhs: Offset) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coord {
    type Output = Offset;
    fn sub(self, rhs: Self) -> Self::Output {
        Offset::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Offset {
    type Output = Offset;
    fn add(self, rhs: Offset) -> Self::Output {
        Offset::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for Offset {
    type Output = Offset;
    fn neg(self) -> Self::Output {
        Offset::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for Offset {
    type Output = Offset;
    fn mul(self, rhs: i32) -> Self::Output {
        Offset::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Extent of the board volume: `levels` stacked `size`-by-`size` boards.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Dimensions {
    pub size: i32,
    pub levels: i32,
}

impl Dimensions {
    pub const STANDARD: Self = Self::new(8, 3);

    #[inline]
    pub const fn new(size: i32, levels: i32) -> Self {
        Self { size, levels }
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.size).contains(&coord.x)
            && (0..self.size).contains(&coord.y)
            && (0..self.levels).contains(&coord.z)
    }

    /// Highest rank index, i.e. black's back rank and white's promotion rank.
    #[inline]
    pub fn last_rank(&self) -> i32 {
        self.size - 1
    }

    /// Number of cells in the volume.
    #[inline]
    pub fn volume(&self) -> usize {
        (self.size.max(0) as usize).pow(2) * self.levels.max(0) as usize
    }

    /// Every coordinate in the volume, level by level, rank by rank.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let Self { size, levels } = *self;
        (0..levels).flat_map(move |z| {
            (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y, z)))
        })
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_and_abs() {
        let from = Coord::new(4, 2, 1);
        let to = Coord::new(1, 5, 1);
        assert_eq!(from.delta(to), Offset::new(-3, 3, 0));
        assert_eq!(from.abs_delta(to), Offset::new(3, 3, 0));
        assert_eq!(to - from, Offset::new(-3, 3, 0));
    }
    #[test]
    fn test_signum_steps_along_line() {
        let from = Coord::new(0, 0, 0);
        let to = Coord::new(3, 3, 3);
        let step = from.delta(to).signum();
        assert_eq!(step, Offset::new(1, 1, 1));
        assert_eq!(from.delta(to).max_abs(), 3);
        assert_eq!(from + step * 2, Coord::new(2, 2, 2));
    }
    #[test]
    fn test_sorted_abs() {
        let offset = Offset::new(-2, 0, 1);
        assert_eq!(offset.sorted_abs(), [0, 1, 2]);
        assert_eq!(offset.axes_moved(), 2);
        assert_eq!((-offset).abs(), Offset::new(2, 0, 1));
    }
    #[test]
    fn test_dimensions_contains() {
        let dims = Dimensions::STANDARD;
        assert!(dims.contains(Coord::new(0, 0, 0)));
        assert!(dims.contains(Coord::new(7, 7, 2)));
        assert!(!dims.contains(Coord::new(8, 0, 0)));
        assert!(!dims.contains(Coord::new(0, -1, 0)));
        assert!(!dims.contains(Coord::new(0, 0, 3)));
    }
    #[test]
    fn test_dimensions_coords_cover_volume() {
        let dims = Dimensions::new(4, 2);
        let coords: Vec<Coord> = dims.coords().collect();
        assert_eq!(coords.len(), dims.volume());
        assert_eq!(coords[0], Coord::new(0, 0, 0));
        assert_eq!(coords[31], Coord::new(3, 3, 1));
        assert!(coords.iter().all(|c| dims.contains(*c)));
    }
    #[test]
    fn test_display() {
        assert_eq!(Coord::new(1, 2, 0).to_string(), "(1,2,0)");
    }
}
