//! Breakout game state.

use glam::Vec2;

use super::*;
use crate::Rect;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Current phase of gameplay.
///
/// The restart prompt doubles as the game-over screen; there is no separate
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first SPACE press
    Start,
    /// Active gameplay
    Playing,
    /// Ball lost; waiting for Y (restart) or N (quit)
    Prompt,
}

/// Ball state - riding the paddle or free-moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    /// Ball x follows the paddle center, waiting for launch
    Attached,
    /// Ball is free-moving
    Free,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    pub state: BallState,
}

impl Ball {
    fn spawn() -> Self {
        Self {
            rect: Rect::new(
                WINDOW_WIDTH as f32 / 2.0 - BALL_SIZE / 2.0,
                WINDOW_HEIGHT as f32 / 2.0,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
            state: BallState::Attached,
        }
    }

    /// Keep an attached ball centered over the paddle.
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        self.rect.pos.x = paddle.rect.center_x() - BALL_SIZE / 2.0;
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    fn spawn() -> Self {
        Self {
            rect: Rect::new(
                WINDOW_WIDTH as f32 / 2.0 - PADDLE_WIDTH / 2.0,
                WINDOW_HEIGHT as f32 - 20.0,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }

    /// Center the paddle under the pointer, clamped to the window.
    pub fn follow_pointer(&mut self, pointer_x: f32) {
        let x = pointer_x - PADDLE_WIDTH / 2.0;
        self.rect.pos.x = x.clamp(0.0, WINDOW_WIDTH as f32 - PADDLE_WIDTH);
    }
}

/// The fixed initial brick layout: column-major, top-left at (10, 10).
pub fn initial_bricks() -> Vec<Rect> {
    let mut bricks = Vec::with_capacity((BRICK_ROWS * BRICK_COLS) as usize);
    for col in 0..BRICK_COLS {
        for row in 0..BRICK_ROWS {
            bricks.push(Rect::new(
                BRICK_WIDTH * col as f32 + 10.0,
                BRICK_HEIGHT * row as f32 + 10.0,
                BRICK_WIDTH,
                BRICK_HEIGHT,
            ));
        }
    }
    bricks
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Rect>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            paddle: Paddle::spawn(),
            ball: Ball::spawn(),
            bricks: initial_bricks(),
        }
    }

    /// Full reset back to the start screen, identical to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.ball.state, BallState::Attached);
        // Ball starts at the window center, paddle centered at the bottom.
        assert_eq!(state.ball.rect.pos.y, 200.0);
        assert_eq!(state.paddle.rect.pos, glam::Vec2::new(270.0, 380.0));
        // Last brick ends inside the window.
        assert_eq!(state.bricks.last().unwrap().right(), 510.0);
    }

    #[test]
    fn test_paddle_clamps_to_window() {
        let mut paddle = Paddle::spawn();
        paddle.follow_pointer(-50.0);
        assert_eq!(paddle.rect.pos.x, 0.0);
        paddle.follow_pointer(1000.0);
        assert_eq!(paddle.rect.right(), 600.0);
    }

    #[test]
    fn test_attached_ball_tracks_paddle() {
        let mut state = GameState::new();
        state.paddle.follow_pointer(100.0);
        state.ball.follow_paddle(&state.paddle);
        assert_eq!(state.ball.rect.center_x(), 100.0);
    }
}
