//! Platformer session state.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::level::{Level, generate_level};
use super::tiles::TileGrid;
use super::{ACTOR_SIZE, GOOMBA_SPEED, MUSHROOM_RISE_SPEED, START_LIVES};
use crate::Rect;
use crate::consts::WINDOW_HEIGHT;

/// Phase of the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Out of lives; terminal.
    GameOver,
    /// Cleared world 8; terminal.
    Won,
}

/// Mushrooms collected grow the player. Render-only for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSize {
    Small,
    Big,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub on_ground: bool,
    pub size: PlayerSize,
}

impl Player {
    /// Spawn on the ground near the left edge of the level.
    pub fn spawn() -> Self {
        Self {
            rect: Rect::new(
                50.0,
                WINDOW_HEIGHT as f32 - 2.0 * super::TILE_SIZE - ACTOR_SIZE,
                ACTOR_SIZE,
                ACTOR_SIZE,
            ),
            vel: Vec2::ZERO,
            on_ground: true,
            size: PlayerSize::Small,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Goomba {
    pub rect: Rect,
    pub vx: f32,
}

impl Goomba {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, ACTOR_SIZE, ACTOR_SIZE),
            vx: -GOOMBA_SPEED,
        }
    }
}

/// A mushroom rises out of its block, then falls and settles on the first
/// solid tile below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MushroomPhase {
    Emerging,
    Airborne,
    Settled,
}

#[derive(Debug, Clone)]
pub struct Mushroom {
    pub rect: Rect,
    pub vy: f32,
    pub phase: MushroomPhase,
}

impl Mushroom {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, ACTOR_SIZE, ACTOR_SIZE),
            vy: -MUSHROOM_RISE_SPEED,
            phase: MushroomPhase::Emerging,
        }
    }
}

/// Complete state of a run: progression counters plus the live level.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub world: u32,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub camera_x: f32,
    pub grid: TileGrid,
    pub flagpole_x: f32,
    pub player: Player,
    pub goombas: Vec<Goomba>,
    pub mushrooms: Vec<Mushroom>,
    pub rng: Pcg32,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = generate_level(1, &mut rng);
        let mut session = Self {
            phase: Phase::Playing,
            world: 1,
            level: 1,
            score: 0,
            lives: START_LIVES,
            camera_x: 0.0,
            grid: level.grid,
            flagpole_x: level.flagpole_x,
            player: Player::spawn(),
            goombas: Vec::new(),
            mushrooms: Vec::new(),
            rng,
        };
        session.populate(&level.goomba_spawns);
        session
    }

    /// Swap in a freshly generated level and respawn everything.
    pub fn load_level(&mut self, level: Level) {
        self.grid = level.grid;
        self.flagpole_x = level.flagpole_x;
        self.populate(&level.goomba_spawns);
        self.respawn_player();
    }

    /// Put the player back at the level start; the level itself is untouched.
    pub fn respawn_player(&mut self) {
        self.player = Player::spawn();
        self.camera_x = 0.0;
    }

    fn populate(&mut self, goomba_spawns: &[Vec2]) {
        self.goombas = goomba_spawns.iter().copied().map(Goomba::spawn).collect();
        self.mushrooms.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = Session::new(1);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!((session.world, session.level), (1, 1));
        assert_eq!(session.lives, 3);
        assert_eq!(session.score, 0);
        assert_eq!(session.goombas.len(), 3);
        assert!(session.mushrooms.is_empty());
        // Player starts standing on the ground rows.
        assert_eq!(session.player.rect.pos, Vec2::new(50.0, 352.0));
        assert_eq!(session.player.rect.bottom(), session.grid.row_top(13));
    }

    #[test]
    fn test_respawn_keeps_level() {
        let mut session = Session::new(1);
        session.player.rect.pos = Vec2::new(900.0, 100.0);
        session.camera_x = 600.0;
        session.score = 400;
        let before = session.grid.clone();

        session.respawn_player();
        assert_eq!(session.player.rect.pos, Vec2::new(50.0, 352.0));
        assert_eq!(session.camera_x, 0.0);
        assert_eq!(session.score, 400);
        for ty in 0..session.grid.height() as i32 {
            for tx in 0..session.grid.width() as i32 {
                assert_eq!(session.grid.get(tx, ty), before.get(tx, ty));
            }
        }
    }
}
