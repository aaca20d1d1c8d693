//! Procedural level generation.
//!
//! Layout is seeded and deterministic: two rows of ground along the bottom,
//! brick clusters every 20 columns (some with a question block above), pipes
//! every 40 columns from world 2 on, and a flagpole column near the right
//! edge. Goomba spawn points are fixed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::ACTOR_SIZE;
use super::tiles::{TILE_SIZE, Tile, TileGrid};
use crate::consts::WINDOW_HEIGHT;

pub const LEVEL_WIDTH: usize = 200;
pub const LEVEL_HEIGHT: usize = 15;

/// Column holding the flagpole tiles.
const FLAGPOLE_COL: i32 = 195;

/// One generated level: the grid plus everything the session spawns from it.
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    /// World x of the flagpole column's left edge.
    pub flagpole_x: f32,
    /// Initial goomba positions, world coordinates.
    pub goomba_spawns: Vec<Vec2>,
}

/// Generate the level for the given world. Levels within a world differ only
/// by the rng draws; the recipe itself varies with the world number.
pub fn generate_level(world: u32, rng: &mut Pcg32) -> Level {
    let mut grid = TileGrid::new(LEVEL_WIDTH, LEVEL_HEIGHT);

    // Two solid ground rows along the bottom.
    for tx in 0..LEVEL_WIDTH as i32 {
        grid.set(tx, LEVEL_HEIGHT as i32 - 2, Tile::Ground);
        grid.set(tx, LEVEL_HEIGHT as i32 - 1, Tile::Ground);
    }

    // Brick clusters every 20 columns, at a random height in rows 8..=11,
    // 3 to 6 bricks wide. Half of them carry a question block one row up.
    let mut tx = 10;
    while tx < (LEVEL_WIDTH - 10) as i32 {
        let row = rng.random_range(8..=11);
        let span = rng.random_range(3..=6);
        for dx in 0..span {
            grid.set(tx + dx, row, Tile::Brick);
        }
        if rng.random::<f32>() > 0.5 {
            grid.set(tx + 2, row - 1, Tile::Question);
        }
        tx += 20;
    }

    // Pipes from world 2 on: three-tile stacks every 40 columns.
    if world > 1 {
        let mut tx = 30;
        while tx < (LEVEL_WIDTH - 20) as i32 {
            for ty in 11..14 {
                grid.set(tx, ty, Tile::Pipe);
            }
            tx += 40;
        }
    }

    // Flagpole column near the right edge, rising from the ground.
    for ty in 5..14 {
        grid.set(FLAGPOLE_COL, ty, Tile::Flagpole);
    }

    let goomba_spawns = (0..3)
        .map(|i| {
            Vec2::new(
                200.0 + 100.0 * i as f32,
                WINDOW_HEIGHT as f32 - 2.0 * TILE_SIZE - 2.0 * ACTOR_SIZE,
            )
        })
        .collect();

    Level {
        grid,
        flagpole_x: FLAGPOLE_COL as f32 * TILE_SIZE,
        goomba_spawns,
    }
}
