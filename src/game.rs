//! Frame loop driver.
//!
//! One tick resolves collisions against the ball's previous position, then
//! integrates motion with the (possibly reflected) velocity. There is no win
//! or lose condition: the loop only ends on a quit request.

use crate::config::{ConfigError, GameConfig};
use crate::grid::BlockGrid;
use crate::input::{InputSource, KeyState, map_input};
use crate::items::{Ball, Block, Paddle};
use crate::render::{DrawCommand, Surface};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

pub struct Game {
    config: GameConfig,
    ball: Ball,
    paddle: Paddle,
    grid: BlockGrid,
    state: LoopState,
    frames: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Game, ConfigError> {
        config.validate()?;
        let grid = BlockGrid::new(&config);
        Self::with_grid(config, grid)
    }

    /// Starts a session with a custom block arrangement instead of the
    /// configured grid.
    pub fn with_grid(config: GameConfig, grid: BlockGrid) -> Result<Game, ConfigError> {
        config.validate()?;
        Ok(Game {
            ball: spawn_ball(&config),
            paddle: spawn_paddle(&config),
            grid,
            state: LoopState::Running,
            frames: 0,
            config,
        })
    }

    /// Puts ball, paddle and every block back to their level-start state.
    pub fn reset(&mut self) {
        self.ball = spawn_ball(&self.config);
        self.paddle = spawn_paddle(&self.config);
        self.grid.revive_all();
        self.state = LoopState::Running;
        self.frames = 0;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn blocks(&self) -> &[Block] {
        self.grid.blocks()
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of ticks simulated since the session started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn arena(&self) -> [f32; 2] {
        [self.config.arena_width, self.config.arena_height]
    }

    /// Simulates one frame. A quit request terminates the session before any
    /// simulation happens; ticking a terminated game does nothing.
    pub fn tick(&mut self, keys: &KeyState) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }
        if keys.quit {
            log::info!("Quit requested after {} frames", self.frames);
            self.state = LoopState::Terminated;
            return self.state;
        }

        self.paddle.velocity[0] = map_input(keys, &self.paddle, &self.config);

        if self.ball.paddle_collision(&self.paddle) {
            log::debug!("Paddle bounce at {:?}", self.ball.position);
        }
        self.grid.handle_collisions(&mut self.ball);

        self.ball.move_ball(self.arena());
        self.paddle.move_paddle();

        self.frames += 1;
        log::trace!("Frame {}: ball at {:?}", self.frames, self.ball.position);
        self.state
    }

    /// Ball, then paddle, then live blocks in grid order.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(2 + self.grid.blocks().len());
        commands.push(self.ball.draw_command());
        commands.push(self.paddle.draw_command());
        commands.extend(self.grid.draw_commands());
        commands
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.config.background)?;
        for command in self.draw_commands() {
            command.issue(surface)?;
        }
        surface.present()
    }

    /// Runs frames until the input source asks to quit. Returns the number of
    /// frames simulated, or the first drawing error.
    pub fn run<I: InputSource, S: Surface>(
        &mut self,
        input: &mut I,
        surface: &mut S,
    ) -> Result<u64, S::Error> {
        let frame_budget = self
            .config
            .frame_cap
            .map(|fps| Duration::from_secs_f64(1.0 / fps as f64));

        while self.state == LoopState::Running {
            let start = Instant::now();
            let keys = input.poll();
            if self.tick(&keys) == LoopState::Terminated {
                break;
            }
            self.draw(surface)?;

            let rest = frame_budget.and_then(|budget| budget.checked_sub(start.elapsed()));
            if let Some(rest) = rest {
                std::thread::sleep(rest);
            }
        }
        log::info!("Session ended after {} frames", self.frames);
        Ok(self.frames)
    }
}

fn spawn_ball(config: &GameConfig) -> Ball {
    Ball::new(
        [config.arena_width / 2.0, config.arena_height / 2.0],
        config.ball_radius,
        config.ball_speed,
        Some(config.ball_color),
    )
}

fn spawn_paddle(config: &GameConfig) -> Paddle {
    Paddle::new(
        [config.arena_width / 2.0, config.arena_height - config.paddle_bottom_offset],
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
        Some(config.paddle_color),
    )
}
