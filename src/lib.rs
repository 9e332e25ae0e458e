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

//! Chess on stacked boards.
//!
//! See [`board`] for the rules engine, [`config`] for game setup and
//! [`game`] for results, resignation and undo/redo on top of the engine.

pub mod board;
pub mod config;
pub mod game;

pub use board::*;
pub use config::*;
pub use game::*;
