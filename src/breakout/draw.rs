//! Frame rendering for Breakout.

use super::state::{GamePhase, GameState};
use crate::gfx::{BLACK, Frame, RED, WHITE};

/// Draw one complete frame for the current phase.
pub fn draw(state: &GameState, frame: &mut Frame) {
    frame.clear(BLACK);

    match state.phase {
        GamePhase::Start => {
            frame.draw_text_centered(190, "PRESS SPACE TO START", WHITE, 2);
        }
        GamePhase::Playing => {
            let p = &state.paddle.rect;
            frame.fill_rect(
                p.pos.x as i32,
                p.pos.y as i32,
                p.size.x as i32,
                p.size.y as i32,
                WHITE,
            );

            for brick in &state.bricks {
                frame.fill_rect(
                    brick.pos.x as i32,
                    brick.pos.y as i32,
                    brick.size.x as i32,
                    brick.size.y as i32,
                    RED,
                );
            }

            let b = &state.ball.rect;
            frame.fill_circle(
                (b.pos.x + b.size.x / 2.0) as i32,
                (b.pos.y + b.size.y / 2.0) as i32,
                (b.size.x / 2.0) as i32,
                WHITE,
            );

            frame.draw_text(10, 10, &format!("SCORE: {}", state.score), WHITE, 2);
        }
        GamePhase::Prompt => {
            let over = format!("GAME OVER! SCORE: {}", state.score);
            frame.draw_text_centered(170, &over, WHITE, 2);
            frame.draw_text_centered(210, "PLAY AGAIN? (Y/N)", WHITE, 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_all_phases() {
        let mut buf = vec![0u8; 600 * 400 * 4];
        for phase in [GamePhase::Start, GamePhase::Playing, GamePhase::Prompt] {
            let mut state = GameState::new();
            state.phase = phase;
            let mut frame = Frame::new(&mut buf, 600, 400);
            draw(&state, &mut frame);
            // Every phase renders at least some non-black pixels.
            assert!(buf.chunks_exact(4).any(|px| px[0] != 0 || px[1] != 0));
        }
    }
}
