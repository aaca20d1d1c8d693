//! Fixed timestep update for Breakout.
//!
//! One call per 60 Hz tick. Input is a plain snapshot of this tick's
//! key/pointer state; collision and phase-change side effects come back as
//! events so the caller can trigger sounds or quit the process.

use super::state::{BallState, GamePhase, GameState};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Input snapshot for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// SPACE pressed this tick (start game / detach ball)
    pub launch: bool,
    /// Y pressed this tick (restart at the prompt)
    pub restart: bool,
    /// N pressed this tick (decline restart at the prompt)
    pub decline: bool,
    /// Current pointer x in window coordinates, if known
    pub pointer_x: Option<f32>,
}

/// Gameplay events produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// A brick was removed (one point)
    BrickBroken,
    /// Ball crossed the bottom edge; prompt is now showing
    BallLost,
    /// Player declined the restart prompt
    QuitRequested,
}

/// Advance the game by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Start => {
            if input.launch {
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => update_playing(state, input, &mut events),
        GamePhase::Prompt => {
            if input.restart {
                state.reset();
            } else if input.decline {
                events.push(GameEvent::QuitRequested);
            }
        }
    }

    events
}

fn update_playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if let Some(x) = input.pointer_x {
        state.paddle.follow_pointer(x);
    }

    if state.ball.state == BallState::Attached {
        state.ball.follow_paddle(&state.paddle);
        if input.launch {
            state.ball.vel.y = -super::BALL_SPEED;
            state.ball.state = BallState::Free;
        }
        return;
    }

    let ball = &mut state.ball;
    ball.rect.pos += ball.vel;

    // Wall reflection assigns the sign outright, so a second contact with the
    // same wall on the next tick cannot un-reflect the ball.
    if ball.rect.left() < 0.0 {
        ball.vel.x = ball.vel.x.abs();
    }
    if ball.rect.right() > WINDOW_WIDTH as f32 {
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.rect.top() < 0.0 {
        ball.vel.y = ball.vel.y.abs();
    }
    if ball.rect.bottom() > WINDOW_HEIGHT as f32 {
        state.phase = GamePhase::Prompt;
        events.push(GameEvent::BallLost);
        return;
    }

    if ball.rect.overlaps(&state.paddle.rect) {
        ball.vel.y = -ball.vel.y.abs();
        events.push(GameEvent::PaddleHit);
    }

    // First overlapping brick in iteration order only; one removal and one
    // point per tick no matter how many bricks the ball touches.
    if let Some(idx) = state.bricks.iter().position(|b| ball.rect.overlaps(b)) {
        state.bricks.remove(idx);
        ball.vel.y = -ball.vel.y;
        state.score += 1;
        events.push(GameEvent::BrickBroken);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakout::state::initial_bricks;
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_space_starts_then_launches() {
        let mut state = GameState::new();
        let launch = TickInput {
            launch: true,
            ..Default::default()
        };

        tick(&mut state, &launch);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.state, BallState::Attached);

        tick(&mut state, &launch);
        assert_eq!(state.ball.state, BallState::Free);
        assert_eq!(state.ball.vel.y, -super::super::BALL_SPEED);
    }

    #[test]
    fn test_left_wall_does_not_double_reflect() {
        let mut state = playing_state();
        state.ball.state = BallState::Free;
        state.ball.rect.pos = Vec2::new(1.0, 200.0);
        state.ball.vel = Vec2::new(-3.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, 3.0);

        // Ball may still be at the wall next tick; the sign must hold.
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, 3.0);
    }

    #[test]
    fn test_paddle_reflects_upward_and_beeps() {
        let mut state = playing_state();
        state.ball.state = BallState::Free;
        state.ball.rect.pos = Vec2::new(
            state.paddle.rect.center_x() - 5.0,
            state.paddle.rect.top() - 12.0,
        );
        state.ball.vel = Vec2::new(0.0, 3.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::PaddleHit]);
        assert_eq!(state.ball.vel.y, -3.0);
    }

    #[test]
    fn test_one_brick_removed_per_tick() {
        let mut state = playing_state();
        state.ball.state = BallState::Free;
        // Straddle the seam between brick rows 0 and 1 of the first column:
        // the ball overlaps two bricks at once.
        state.ball.rect.pos = Vec2::new(15.0, 25.0);
        state.ball.vel = Vec2::new(0.0, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BrickBroken]);
        assert_eq!(state.bricks.len(), 49);
        assert_eq!(state.score, 1);
        // Iteration order: the row-0 brick of the column goes first.
        assert!(!state.bricks.contains(&crate::Rect::new(10.0, 10.0, 50.0, 20.0)));
        assert!(state.bricks.contains(&crate::Rect::new(10.0, 30.0, 50.0, 20.0)));
    }

    #[test]
    fn test_bottom_edge_opens_prompt() {
        let mut state = playing_state();
        state.ball.state = BallState::Free;
        state.ball.rect.pos = Vec2::new(300.0, 389.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        // Move the paddle out of the way.
        state.paddle.rect.pos.x = 0.0;
        state.ball.rect.pos.x = 300.0;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BallLost]);
        assert_eq!(state.phase, GamePhase::Prompt);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = playing_state();
        state.score = 17;
        state.bricks.drain(0..17);
        state.ball.state = BallState::Free;
        state.ball.rect.pos = Vec2::new(50.0, 50.0);
        state.paddle.rect.pos.x = 0.0;
        state.phase = GamePhase::Prompt;

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );

        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.state, BallState::Attached);
        assert_eq!(state.ball.rect.pos.y, 200.0);
        assert_eq!(state.paddle.rect.pos.x, 270.0);
        assert_eq!(state.bricks, initial_bricks());
    }

    #[test]
    fn test_decline_requests_quit() {
        let mut state = GameState::new();
        state.phase = GamePhase::Prompt;
        let events = tick(
            &mut state,
            &TickInput {
                decline: true,
                ..Default::default()
            },
        );
        assert_eq!(events, vec![GameEvent::QuitRequested]);
        assert_eq!(state.phase, GamePhase::Prompt);
    }

    /// Launch straight up with no horizontal drift while the paddle tracks
    /// directly underneath: the ball must chew through its brick column and
    /// reach the topmost row without ever touching a wall or being lost.
    #[test]
    fn test_straight_volley_reaches_top_brick_row() {
        let mut state = GameState::new();
        let launch = TickInput {
            launch: true,
            ..Default::default()
        };
        tick(&mut state, &launch); // Start -> Playing
        tick(&mut state, &launch); // detach
        state.ball.vel.x = 0.0;

        let top_brick = crate::Rect::new(260.0, 10.0, 50.0, 20.0);
        assert!(state.bricks.contains(&top_brick));

        let mut broke = 0u32;
        for _ in 0..2000 {
            let input = TickInput {
                pointer_x: Some(state.ball.rect.center_x()),
                ..Default::default()
            };
            let events = tick(&mut state, &input);
            assert_eq!(state.phase, GamePhase::Playing, "ball was lost");
            assert!(state.ball.rect.top() >= 0.0, "hit the top wall first");
            broke += events
                .iter()
                .filter(|e| **e == GameEvent::BrickBroken)
                .count() as u32;
            if !state.bricks.contains(&top_brick) {
                break;
            }
        }

        assert!(!state.bricks.contains(&top_brick), "never reached top row");
        assert_eq!(broke, 5); // exactly the one column, bottom to top
        assert_eq!(state.score, 5);
    }

    proptest! {
        /// Wall reflection is idempotent in sign: once a wall has claimed the
        /// velocity direction, repeat contacts never flip it back.
        #[test]
        fn prop_wall_reflection_sign_is_stable(
            x in -6.0f32..0.0,
            vx in -6.0f32..-0.1,
        ) {
            let mut state = playing_state();
            state.ball.state = BallState::Free;
            state.ball.rect.pos = Vec2::new(x, 200.0);
            state.ball.vel = Vec2::new(vx, 0.0);

            tick(&mut state, &TickInput::default());
            prop_assert!(state.ball.vel.x > 0.0);
            let reflected = state.ball.vel.x;

            tick(&mut state, &TickInput::default());
            prop_assert_eq!(state.ball.vel.x, reflected);
        }
    }
}
