//! Breakout: paddle, ball, five rows of bricks, four-key UI flow.

pub mod draw;
pub mod state;
pub mod tick;

pub use state::{Ball, BallState, GamePhase, GameState, Paddle, initial_bricks};
pub use tick::{GameEvent, TickInput, tick};

/// Paddle dimensions
pub const PADDLE_WIDTH: f32 = 60.0;
pub const PADDLE_HEIGHT: f32 = 10.0;

/// Ball is a square bounding box drawn as a circle
pub const BALL_SIZE: f32 = 10.0;
/// Per-tick ball speed on each axis
pub const BALL_SPEED: f32 = 3.0;

/// Brick layout: 5 rows by 10 columns starting at (10, 10)
pub const BRICK_WIDTH: f32 = 50.0;
pub const BRICK_HEIGHT: f32 = 20.0;
pub const BRICK_ROWS: u32 = 5;
pub const BRICK_COLS: u32 = 10;
