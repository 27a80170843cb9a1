//! Keyboard snapshot and its translation into paddle velocity.

use crate::config::GameConfig;
use crate::items::Paddle;

/// Keys relevant to the game for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

/// Where the frame loop gets its input from.
pub trait InputSource {
    /// Drains pending platform events and returns the key state for this frame.
    fn poll(&mut self) -> KeyState;
}

/// Horizontal paddle velocity for this frame.
///
/// Left wins when both directions are held. Movement toward a wall is refused
/// once the paddle is within `paddle_edge_epsilon` of it, and never overshoots
/// the wall.
pub fn map_input(keys: &KeyState, paddle: &Paddle, config: &GameConfig) -> f32 {
    let x = paddle.position[0];
    let max_x = config.arena_width - paddle.width;
    let epsilon = config.paddle_edge_epsilon;

    if keys.left {
        if x > epsilon {
            -paddle.speed.min(x)
        } else {
            0.0
        }
    } else if keys.right {
        if x < max_x - epsilon {
            paddle.speed.min(max_x - x)
        } else {
            0.0
        }
    } else {
        0.0
    }
}
