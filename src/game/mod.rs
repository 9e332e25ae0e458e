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
#[cfg(feature = "random")]
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::{BoardResult, Color, GameConfig, GameState, Move, MoveError, MoveOutcome, MoveRequest};
use crate::{Promotion, Review, ReviewMut, ReviewState, Turn};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(u64);

impl GameId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
    #[cfg(feature = "random")]
    pub fn random() -> Self {
        Self(thread_rng().gen())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(Color, WinReason),
    Draw(DrawReason),
}

impl GameResult {
    /// Results decided by the players rather than the board. These
    /// survive undo.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            GameResult::Win(_, WinReason::Resigned) | GameResult::Draw(DrawReason::Agreed)
        )
    }
}

impl From<BoardResult> for GameResult {
    fn from(result: BoardResult) -> Self {
        match result {
            BoardResult::CheckMate(winner) => GameResult::Win(winner, WinReason::CheckMate),
            BoardResult::StaleMate => GameResult::Draw(DrawReason::StaleMate),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    CheckMate,
    Resigned,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Agreed,
    StaleMate,
}

/// A game in progress: the live state, its snapshot history and the
/// result once there is one.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    state: GameState,
    review: ReviewState,
    result: Option<GameResult>,
}

impl Turn for Game {
    #[inline]
    fn turn(&self) -> Color {
        self.state.turn()
    }
}

impl Game {
    pub fn new(id: GameId, config: &GameConfig) -> Result<Self> {
        let state = GameState::new(config)?;
        info!(
            "[GAME] Created game {} on a {}x{}x{} board ({} layout)",
            id, config.dimensions.size, config.dimensions.size, config.dimensions.levels, config.layout
        );
        Ok(Self::from_state(id, state))
    }

    /// Continues from an existing state, which becomes the first snapshot.
    pub fn from_state(id: GameId, state: GameState) -> Self {
        Self {
            id,
            review: ReviewState::new(state.clone()),
            result: state.board_result().map(GameResult::from),
            state,
        }
    }

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }
    #[inline]
    pub fn review(&self) -> &ReviewState {
        &self.review
    }
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn submit_move(&mut self, request: impl Into<MoveRequest>) -> Result<MoveOutcome> {
        self.ensure_playing()?;
        let outcome = self.state.submit_move(request)?;
        if let MoveOutcome::Applied(_) = outcome {
            self.record();
        }
        Ok(outcome)
    }

    pub fn promote(&mut self, choice: Promotion) -> Result<Move> {
        self.ensure_playing()?;
        let mv = self.state.promote(choice)?;
        self.record();
        Ok(mv)
    }

    pub fn cancel_promotion(&mut self) -> bool {
        self.state.cancel_promotion()
    }

    /// Steps back one move. Clears a checkmate or stalemate result but
    /// not a resignation or agreed draw.
    pub fn undo(&mut self) -> Result<()> {
        self.ensure_not_final()?;
        self.state = self.review.back()?.clone();
        self.result = self.state.board_result().map(GameResult::from);
        info!("[GAME] Undo to move {}", self.review.offset().value());
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        self.ensure_not_final()?;
        self.state = self.review.forward()?.clone();
        self.result = self.state.board_result().map(GameResult::from);
        info!("[GAME] Redo to move {}", self.review.offset().value());
        Ok(())
    }

    pub fn resign(&mut self, color: Color) -> Result<()> {
        self.ensure_playing()?;
        let result = GameResult::Win(!color, WinReason::Resigned);
        info!("[GAME] {} resigned", color);
        self.result = Some(result);
        Ok(())
    }

    pub fn agree_draw(&mut self) -> Result<()> {
        self.ensure_playing()?;
        info!("[GAME] Draw agreed");
        self.result = Some(GameResult::Draw(DrawReason::Agreed));
        Ok(())
    }

    fn record(&mut self) {
        self.review.push(self.state.clone());
        self.result = self.state.board_result().map(GameResult::from);
        if let Some(result) = self.result {
            info!("[GAME] Game {} ended: {:?}", self.id, result);
        }
    }

    fn ensure_playing(&self) -> Result<()> {
        match self.result {
            Some(_) => Err(MoveError::GameOver.into()),
            None => Ok(()),
        }
    }

    fn ensure_not_final(&self) -> Result<()> {
        match self.result {
            Some(result) if result.is_final() => Err(MoveError::GameOver.into()),
            _ => Ok(()),
        }
    }
}
