//! A brick-breaking arcade game written in Rust.
//!
//! The library holds the whole simulation: a ball bounces around a bounded
//! arena, a paddle steered by the player deflects it, and a fixed grid of
//! blocks is destroyed on contact. Platform concerns (window, event queue,
//! drawing primitives) live behind the [`input::InputSource`] and
//! [`render::Surface`] traits so the binary can plug SDL2 in.

pub mod config;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod items;
pub mod render;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, LoopState};
