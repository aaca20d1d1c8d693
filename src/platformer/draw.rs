//! Frame rendering for the platformer.
//!
//! Everything in the level is drawn in world coordinates shifted left by the
//! camera; `Frame` clips whatever falls outside the window.

use super::state::{Phase, PlayerSize, Session};
use super::tiles::{TILE_SIZE, Tile};
use crate::consts::WINDOW_WIDTH;
use crate::gfx::{BLACK, BLUE, BROWN, Color, Frame, GRAY, GREEN, RED, WHITE, YELLOW};

fn tile_color(tile: Tile) -> Option<Color> {
    match tile {
        Tile::Empty => None,
        Tile::Ground => Some(BROWN),
        Tile::Brick => Some(RED),
        Tile::Question => Some(YELLOW),
        Tile::Pipe => Some(GREEN),
        Tile::Flagpole => Some(GRAY),
    }
}

/// Draw one complete frame.
pub fn draw(session: &Session, frame: &mut Frame) {
    frame.clear(BLACK);

    match session.phase {
        Phase::GameOver => {
            frame.draw_text_centered(190, "GAME OVER", WHITE, 2);
            return;
        }
        Phase::Won => {
            frame.draw_text_centered(190, "YOU WON!", WHITE, 2);
            return;
        }
        Phase::Playing => {}
    }

    let camera = session.camera_x;

    // Only the columns that intersect the window.
    let grid = &session.grid;
    let first_col = grid.col_at(camera).max(0);
    let last_col = grid
        .col_at(camera + WINDOW_WIDTH as f32)
        .min(grid.width() as i32 - 1);
    for ty in 0..grid.height() as i32 {
        for tx in first_col..=last_col {
            if let Some(color) = tile_color(grid.get(tx, ty)) {
                frame.fill_rect(
                    (grid.col_left(tx) - camera) as i32,
                    grid.row_top(ty) as i32,
                    TILE_SIZE as i32,
                    TILE_SIZE as i32,
                    color,
                );
            }
        }
    }

    for mushroom in &session.mushrooms {
        let r = &mushroom.rect;
        frame.fill_rect(
            (r.pos.x - camera) as i32,
            r.pos.y as i32,
            r.size.x as i32,
            r.size.y as i32,
            GREEN,
        );
    }

    for goomba in &session.goombas {
        let r = &goomba.rect;
        frame.fill_rect(
            (r.pos.x - camera) as i32,
            r.pos.y as i32,
            r.size.x as i32,
            r.size.y as i32,
            BROWN,
        );
    }

    let player = &session.player;
    let px = (player.rect.pos.x - camera) as i32;
    let py = player.rect.pos.y as i32;
    let body = if player.size == PlayerSize::Small {
        RED
    } else {
        BLUE
    };
    frame.fill_rect(px, py, player.rect.size.x as i32, player.rect.size.y as i32, body);
    frame.fill_circle(px + 4, py + 4, 2, BLACK);
    frame.fill_circle(px + 12, py + 4, 2, BLACK);

    frame.draw_text(10, 10, &format!("SCORE: {}", session.score), WHITE, 2);
    frame.draw_text(10, 30, &format!("LIVES: {}", session.lives), WHITE, 2);
    frame.draw_text(
        10,
        50,
        &format!("WORLD {}-{}", session.world, session.level),
        WHITE,
        2,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_all_phases() {
        let mut buf = vec![0u8; 600 * 400 * 4];
        for phase in [Phase::Playing, Phase::GameOver, Phase::Won] {
            let mut session = Session::new(1);
            session.phase = phase;
            let mut frame = Frame::new(&mut buf, 600, 400);
            draw(&session, &mut frame);
            assert!(buf.chunks_exact(4).any(|px| px[0] != 0 || px[1] != 0));
        }
    }

    #[test]
    fn test_camera_culls_offscreen_tiles() {
        let mut buf = vec![0u8; 600 * 400 * 4];
        let mut session = Session::new(1);
        // Scroll deep into the level; drawing must stay in bounds and the
        // ground rows must still cover the bottom of the window.
        session.camera_x = 2000.0;
        session.player.rect.pos.x = 2300.0;
        let mut frame = Frame::new(&mut buf, 600, 400);
        draw(&session, &mut frame);

        let px = |x: usize, y: usize| {
            let i = (y * 600 + x) * 4;
            [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
        };
        assert_eq!(px(0, 399), BROWN);
        assert_eq!(px(599, 399), BROWN);
    }
}
