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

//! Game setup: board dimensions and the initial piece layout.
//!
//! A config can be built in code or read from JSON. Missing fields fall
//! back to the defaults, an 8x8x3 board with the standard layout:
//!
//! ```json
//! { "dimensions": { "size": 8, "levels": 3 }, "layout": "prototype" }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::debug;

use crate::board::{Dimensions, Position};

/// Smallest board edge that still leaves room for two back ranks.
const MIN_SIZE: i32 = 2;

#[derive(Debug, Default, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// Thirty-two pieces on level 0.
    #[default]
    Standard,
    /// A handful of pieces spread over three levels, without kings.
    Prototype,
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be at least 2, got {0}")]
    SizeTooSmall(i32),
    #[error("Board needs at least one level, got {0}")]
    NoLevels(i32),
    #[error("The {layout} layout does not fit a {size}x{size}x{levels} board")]
    LayoutMismatch { layout: Layout, size: i32, levels: i32 },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub dimensions: Dimensions,
    pub layout: Layout,
}

impl GameConfig {
    pub fn new(dimensions: Dimensions, layout: Layout) -> Self {
        Self { dimensions, layout }
    }

    /// Parses and validates a config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(layout = %config.layout, "[CONFIG] Loaded {:?}", config.dimensions);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let Dimensions { size, levels } = self.dimensions;
        if size < MIN_SIZE {
            return Err(ConfigError::SizeTooSmall(size).into());
        }
        if levels < 1 {
            return Err(ConfigError::NoLevels(levels).into());
        }
        let fits = match self.layout {
            Layout::Standard => size == 8,
            Layout::Prototype => size >= 8 && levels >= 3,
            Layout::Empty => true,
        };
        if !fits {
            let layout = self.layout;
            return Err(ConfigError::LayoutMismatch { layout, size, levels }.into());
        }
        Ok(())
    }

    /// The starting position this config describes.
    pub fn position(&self) -> Result<Position> {
        self.validate()?;
        let dims = self.dimensions;
        Ok(match self.layout {
            Layout::Standard => Position::standard(dims),
            Layout::Prototype => Position::prototype(dims),
            Layout::Empty => Position::empty(dims),
        })
    }
}
