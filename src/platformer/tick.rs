//! Fixed timestep update for the platformer.
//!
//! Movement resolves against the tile grid one axis at a time, vertical
//! first. Each axis scan walks the tiles the leading edge would enter and
//! returns the first solid hit, so a fast actor snaps flush instead of
//! tunneling.

use glam::Vec2;
use rand::Rng;

use super::level::generate_level;
use super::state::{MushroomPhase, Mushroom, Phase, PlayerSize, Session};
use super::tiles::{Tile, TileGrid};
use super::{
    BLOCK_SCORE, GOOMBA_FALL_STEP, GRAVITY, JUMP_IMPULSE, LEVELS_PER_WORLD, MAX_WORLD,
    MUSHROOM_CHANCE, PLAYER_SPEED,
};
use crate::consts::WINDOW_HEIGHT;

/// Input snapshot for a single tick. Left/right reflect keys held down,
/// jump is edge-triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Gameplay events produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// A question block paid out and became a brick
    QuestionHit,
    /// Player touched a mushroom
    MushroomCollected,
    /// Player fell out of the world; respawned at the level start
    LifeLost,
    /// Last life gone; session is over
    GameOver,
    /// Player crossed the flagpole
    FlagpoleReached,
    /// The next level has been generated and loaded
    NextLevel,
    /// Cleared the final world
    GameWon,
}

/// Advance the session by one tick. No-op outside the `Playing` phase.
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.phase != Phase::Playing {
        return events;
    }

    apply_input(session, input, &mut events);
    update_player(session, &mut events);
    update_goombas(session);
    update_mushrooms(session);
    collect_mushrooms(session, &mut events);

    // Forward-only scroll: the camera advances once the player passes the
    // window midpoint and never backs up toward the level start.
    session.camera_x = session.camera_x.max(session.player.rect.pos.x - 300.0);

    if session.player.rect.top() > WINDOW_HEIGHT as f32 {
        lose_life(session, &mut events);
    } else if session.player.rect.right() >= session.flagpole_x {
        finish_level(session, &mut events);
    }

    events
}

fn apply_input(session: &mut Session, input: &TickInput, events: &mut Vec<GameEvent>) {
    let player = &mut session.player;
    player.vel.x = if input.left {
        -PLAYER_SPEED
    } else if input.right {
        PLAYER_SPEED
    } else {
        0.0
    };
    if input.jump && player.on_ground {
        player.vel.y = JUMP_IMPULSE;
        player.on_ground = false;
        events.push(GameEvent::Jump);
    }
}

/// First solid tile in row `ty` between world x `left` and `right` inclusive.
fn scan_row(grid: &TileGrid, ty: i32, left: f32, right: f32) -> Option<(i32, i32, Tile)> {
    for tx in grid.col_at(left)..=grid.col_at(right) {
        let tile = grid.get(tx, ty);
        if tile.is_solid() {
            return Some((tx, ty, tile));
        }
    }
    None
}

/// First solid tile in column `tx` between world y `top` and `bottom` inclusive.
fn scan_col(grid: &TileGrid, tx: i32, top: f32, bottom: f32) -> Option<(i32, i32, Tile)> {
    for ty in grid.row_at(top)..=grid.row_at(bottom) {
        let tile = grid.get(tx, ty);
        if tile.is_solid() {
            return Some((tx, ty, tile));
        }
    }
    None
}

fn update_player(session: &mut Session, events: &mut Vec<GameEvent>) {
    let player = &mut session.player;
    let grid = &mut session.grid;
    let size = player.rect.size;

    player.vel.y += GRAVITY;

    // Vertical axis. The leading edge is the bottom when falling, the top
    // when rising; scan the single row that edge moves into.
    let new_y = player.rect.pos.y + player.vel.y;
    let left = player.rect.left();
    let right = player.rect.right() - 1.0;
    if player.vel.y > 0.0 {
        let ty = grid.row_at(new_y + size.y);
        match scan_row(grid, ty, left, right) {
            Some((_, ty, _)) => {
                player.rect.pos.y = grid.row_top(ty) - size.y;
                player.vel.y = 0.0;
                player.on_ground = true;
            }
            None => {
                player.rect.pos.y = new_y;
                player.on_ground = false;
            }
        }
    } else if player.vel.y < 0.0 {
        let ty = grid.row_at(new_y);
        match scan_row(grid, ty, left, right) {
            Some((tx, ty, tile)) => {
                player.rect.pos.y = grid.row_bottom(ty);
                player.vel.y = 0.0;
                if tile == Tile::Question {
                    grid.set(tx, ty, Tile::Brick);
                    session.score += BLOCK_SCORE;
                    events.push(GameEvent::QuestionHit);
                    if session.rng.random::<f64>() < MUSHROOM_CHANCE {
                        session.mushrooms.push(Mushroom::spawn(Vec2::new(
                            grid.col_left(tx),
                            grid.row_top(ty),
                        )));
                    }
                }
            }
            None => player.rect.pos.y = new_y,
        }
    }

    // Horizontal axis against the leading column.
    let player = &mut session.player;
    let grid = &session.grid;
    if player.vel.x != 0.0 {
        let new_x = player.rect.pos.x + player.vel.x;
        let edge = if player.vel.x > 0.0 { new_x + size.x } else { new_x };
        let tx = grid.col_at(edge);
        let top = player.rect.top();
        let bottom = player.rect.bottom() - 1.0;
        match scan_col(grid, tx, top, bottom) {
            Some((tx, _, _)) => {
                player.rect.pos.x = if player.vel.x > 0.0 {
                    grid.col_left(tx) - size.x
                } else {
                    grid.col_left(tx + 1)
                };
            }
            None => player.rect.pos.x = new_x,
        }
    }
}

fn update_goombas(session: &mut Session) {
    let grid = &session.grid;
    for goomba in &mut session.goombas {
        let size = goomba.rect.size;
        goomba.rect.pos.x += goomba.vx;

        // Turn around at solid tiles and at the ends of the grid.
        let edge = if goomba.vx > 0.0 {
            goomba.rect.right()
        } else {
            goomba.rect.left()
        };
        let tx = grid.col_at(edge);
        if tx < 0 || tx >= grid.width() as i32 {
            goomba.vx = -goomba.vx;
        } else if scan_col(grid, tx, goomba.rect.top(), goomba.rect.bottom() - 1.0).is_some() {
            goomba.vx = -goomba.vx;
        }

        // Goombas fall in fixed steps rather than accelerating.
        goomba.rect.pos.y += GOOMBA_FALL_STEP;
        let ty = grid.row_at(goomba.rect.bottom());
        if let Some((_, ty, _)) = scan_row(
            grid,
            ty,
            goomba.rect.left(),
            goomba.rect.right() - 1.0,
        ) {
            goomba.rect.pos.y = grid.row_top(ty) - size.y;
        }
    }
}

fn update_mushrooms(session: &mut Session) {
    let grid = &session.grid;
    for mushroom in &mut session.mushrooms {
        match mushroom.phase {
            MushroomPhase::Emerging => {
                mushroom.rect.pos.y += mushroom.vy;
                if !overlaps_solid(grid, &mushroom.rect) {
                    mushroom.vy = 0.0;
                    mushroom.phase = MushroomPhase::Airborne;
                }
            }
            MushroomPhase::Airborne => {
                mushroom.vy += GRAVITY;
                let new_y = mushroom.rect.pos.y + mushroom.vy;
                let landed = mushroom.vy > 0.0
                    && scan_row(
                        grid,
                        grid.row_at(new_y + mushroom.rect.size.y),
                        mushroom.rect.left(),
                        mushroom.rect.right() - 1.0,
                    )
                    .is_some();
                if landed {
                    let ty = grid.row_at(new_y + mushroom.rect.size.y);
                    mushroom.rect.pos.y = grid.row_top(ty) - mushroom.rect.size.y;
                    mushroom.vy = 0.0;
                    mushroom.phase = MushroomPhase::Settled;
                } else {
                    mushroom.rect.pos.y = new_y;
                }
            }
            MushroomPhase::Settled => {}
        }
    }
}

fn overlaps_solid(grid: &TileGrid, rect: &crate::Rect) -> bool {
    for ty in grid.row_at(rect.top())..=grid.row_at(rect.bottom() - 1.0) {
        for tx in grid.col_at(rect.left())..=grid.col_at(rect.right() - 1.0) {
            if grid.get(tx, ty).is_solid() {
                return true;
            }
        }
    }
    false
}

fn collect_mushrooms(session: &mut Session, events: &mut Vec<GameEvent>) {
    let player = &mut session.player;
    let before = session.mushrooms.len();
    session.mushrooms.retain(|m| !m.rect.overlaps(&player.rect));
    let collected = before - session.mushrooms.len();
    if collected > 0 {
        session.score += collected as u32 * BLOCK_SCORE;
        player.size = PlayerSize::Big;
        for _ in 0..collected {
            events.push(GameEvent::MushroomCollected);
        }
    }
}

fn lose_life(session: &mut Session, events: &mut Vec<GameEvent>) {
    session.lives -= 1;
    session.respawn_player();
    events.push(GameEvent::LifeLost);
    if session.lives == 0 {
        session.phase = Phase::GameOver;
        events.push(GameEvent::GameOver);
    }
}

fn finish_level(session: &mut Session, events: &mut Vec<GameEvent>) {
    events.push(GameEvent::FlagpoleReached);
    session.level += 1;
    if session.level > LEVELS_PER_WORLD {
        session.level = 1;
        session.world += 1;
    }
    if session.world > MAX_WORLD {
        session.phase = Phase::Won;
        events.push(GameEvent::GameWon);
        return;
    }
    let level = generate_level(session.world, &mut session.rng);
    session.load_level(level);
    events.push(GameEvent::NextLevel);
}
