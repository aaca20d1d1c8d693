//! Side-scrolling platformer: tile-grid physics over a procedurally
//! generated level, goombas, mushrooms, and a flagpole per level.

pub mod draw;
pub mod level;
pub mod state;
pub mod tiles;
pub mod tick;

pub use level::{LEVEL_HEIGHT, LEVEL_WIDTH, Level, generate_level};
pub use state::{Goomba, Mushroom, MushroomPhase, Phase, Player, PlayerSize, Session};
pub use tick::{GameEvent, TickInput, tick};
pub use tiles::{TILE_SIZE, Tile, TileGrid};

/// Gravity applied to the player and airborne mushrooms, px/tick^2.
pub const GRAVITY: f32 = 0.5;
/// Goombas sidestep the integrator: a fixed downward step per tick with its
/// own ground snap. Deliberately a separate constant from `GRAVITY`.
pub const GOOMBA_FALL_STEP: f32 = 2.0;

/// Horizontal walk speed, px/tick.
pub const PLAYER_SPEED: f32 = 5.0;
/// Jump impulse (upward), px/tick.
pub const JUMP_IMPULSE: f32 = -12.0;
/// Goomba patrol speed, px/tick.
pub const GOOMBA_SPEED: f32 = 2.0;
/// Mushroom emerge speed (upward), px/tick.
pub const MUSHROOM_RISE_SPEED: f32 = 2.0;

/// All actors are one tile square.
pub const ACTOR_SIZE: f32 = 16.0;

pub const START_LIVES: u32 = 3;
pub const LEVELS_PER_WORLD: u32 = 4;
pub const MAX_WORLD: u32 = 8;

/// Score for a question block or a collected mushroom.
pub const BLOCK_SCORE: u32 = 100;
/// Chance that a hit question block releases a mushroom.
pub const MUSHROOM_CHANCE: f64 = 0.3;
