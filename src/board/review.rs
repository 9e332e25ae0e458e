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
use std::ops::{Add, Index};
use thiserror::Error;

use super::material::Color;
use super::play::GameState;
use super::Turn;

/// Ply counter: `0` is the starting position, each committed move adds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MoveId(usize);

impl MoveId {
    pub const START: MoveId = MoveId(0);

    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
    #[inline]
    pub fn move_count(&self) -> usize {
        self.value() / 2
    }
    /// Full-move number, counting from one.
    #[inline]
    pub fn move_number(&self) -> usize {
        1 + self.move_count()
    }
    #[inline]
    pub fn at_start(&self) -> bool {
        self.0 == 0
    }
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
    #[inline]
    pub fn prev(self) -> Self {
        Self(self.0 - 1)
    }
}

impl Default for MoveId {
    #[inline]
    fn default() -> Self {
        MoveId::START
    }
}

impl<T: Into<usize>> Add<T> for MoveId {
    type Output = MoveId;
    fn add(self, rhs: T) -> Self::Output {
        Self(self.0 + rhs.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to redo")]
    NothingToRedo,
}

#[allow(clippy::len_without_is_empty)]
pub trait Review {
    fn len(&self) -> usize;
    fn offset(&self) -> &MoveId;
    fn get(&self, offset: &MoveId) -> Option<&GameState>;
    fn current(&self) -> &GameState;

    #[inline]
    fn at_start(&self) -> bool {
        self.offset().at_start()
    }
    #[inline]
    fn at_end(&self) -> bool {
        self.offset().value() + 1 == self.len()
    }
    #[inline]
    fn can_undo(&self) -> bool {
        !self.at_start()
    }
    #[inline]
    fn can_redo(&self) -> bool {
        !self.at_end()
    }
}

pub trait ReviewMut: Review {
    fn set_offset(&mut self, offset: MoveId);

    /// Steps one snapshot back (undo).
    fn back(&mut self) -> Result<&GameState> {
        if self.at_start() {
            return Err(HistoryError::NothingToUndo.into());
        }
        self.set_offset(self.offset().prev());
        Ok(self.current())
    }
    /// Steps one snapshot forward (redo).
    fn forward(&mut self) -> Result<&GameState> {
        if self.at_end() {
            return Err(HistoryError::NothingToRedo.into());
        }
        self.set_offset(self.offset().next());
        Ok(self.current())
    }
    #[inline]
    fn skip_to_start(&mut self) {
        self.set_offset(MoveId::START);
    }
    #[inline]
    fn skip_to_end(&mut self) {
        let offset: MoveId = MoveId::START + (self.len() - 1);
        self.set_offset(offset);
    }
}

/// Value snapshots of a game, one per committed move, plus a cursor.
/// Never empty: the first snapshot is the starting state.
#[derive(Debug, Clone)]
pub struct ReviewState {
    offset: MoveId,
    history: Vec<GameState>,
}

impl ReviewState {
    pub fn new(initial: GameState) -> Self {
        Self {
            offset: MoveId::START,
            history: vec![initial],
        }
    }

    /// Records the state after a move. Anything ahead of the cursor is
    /// discarded first, so a new move after an undo drops the redo tail.
    pub fn push(&mut self, state: GameState) {
        self.truncate();
        self.history.push(state);
        self.offset = self.offset.next();
    }
    pub fn truncate(&mut self) {
        self.history.truncate(self.offset.value() + 1);
    }
}

impl Turn for ReviewState {
    fn turn(&self) -> Color {
        self.current().turn()
    }
}

impl Review for ReviewState {
    #[inline]
    fn len(&self) -> usize {
        self.history.len()
    }
    #[inline]
    fn offset(&self) -> &MoveId {
        &self.offset
    }
    #[inline]
    fn get(&self, offset: &MoveId) -> Option<&GameState> {
        self.history.get(offset.value())
    }
    #[inline]
    fn current(&self) -> &GameState {
        &self[self.offset]
    }
}

impl ReviewMut for ReviewState {
    #[inline]
    fn set_offset(&mut self, offset: MoveId) {
        debug_assert!(offset.value() < self.len());
        self.offset = offset;
    }
}

impl Index<MoveId> for ReviewState {
    type Output = GameState;
    fn index(&self, index: MoveId) -> &Self::Output {
        self.history.index(index.value())
    }
}
