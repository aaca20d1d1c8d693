//! Tile grid and world-space mapping.
//!
//! The grid is 15 rows tall but the window is 400 px; the grid hangs from the
//! bottom of the window, so tile row 0 sits at world y = 160 and the last row
//! ends exactly at y = 400. All mapping helpers fold that offset in.

use crate::consts::WINDOW_HEIGHT;

/// Tile edge length in pixels.
pub const TILE_SIZE: f32 = 16.0;

/// Every tile kind the level generator can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Ground,
    /// Breakable-looking block; also what a spent question block becomes.
    Brick,
    /// Pays out once, then converts to `Brick`.
    Question,
    Pipe,
    /// End-of-level marker; not solid, crossing it finishes the level.
    Flagpole,
}

impl Tile {
    /// Solid tiles stop movement on both axes.
    pub fn is_solid(self) -> bool {
        matches!(self, Tile::Ground | Tile::Brick | Tile::Question | Tile::Pipe)
    }
}

/// Dense row-major tile storage with world-space conversion.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// World y of the top of tile row 0.
    pub fn origin_y(&self) -> f32 {
        WINDOW_HEIGHT as f32 - self.height as f32 * TILE_SIZE
    }

    pub fn in_bounds(&self, tx: i32, ty: i32) -> bool {
        tx >= 0 && (tx as usize) < self.width && ty >= 0 && (ty as usize) < self.height
    }

    /// Tile at (tx, ty); out-of-grid coordinates read as `Empty`.
    pub fn get(&self, tx: i32, ty: i32) -> Tile {
        if self.in_bounds(tx, ty) {
            self.tiles[ty as usize * self.width + tx as usize]
        } else {
            Tile::Empty
        }
    }

    /// Set the tile at (tx, ty); out-of-grid writes are dropped.
    pub fn set(&mut self, tx: i32, ty: i32, tile: Tile) {
        if self.in_bounds(tx, ty) {
            self.tiles[ty as usize * self.width + tx as usize] = tile;
        }
    }

    /// Tile column containing world x.
    pub fn col_at(&self, x: f32) -> i32 {
        (x / TILE_SIZE).floor() as i32
    }

    /// Tile row containing world y.
    pub fn row_at(&self, y: f32) -> i32 {
        ((y - self.origin_y()) / TILE_SIZE).floor() as i32
    }

    /// World x of the left edge of column tx.
    pub fn col_left(&self, tx: i32) -> f32 {
        tx as f32 * TILE_SIZE
    }

    /// World y of the top edge of row ty.
    pub fn row_top(&self, ty: i32) -> f32 {
        self.origin_y() + ty as f32 * TILE_SIZE
    }

    /// World y of the bottom edge of row ty.
    pub fn row_bottom(&self, ty: i32) -> f32 {
        self.row_top(ty) + TILE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solidity() {
        assert!(Tile::Ground.is_solid());
        assert!(Tile::Brick.is_solid());
        assert!(Tile::Question.is_solid());
        assert!(Tile::Pipe.is_solid());
        assert!(!Tile::Empty.is_solid());
        assert!(!Tile::Flagpole.is_solid());
    }

    #[test]
    fn test_grid_hangs_from_window_bottom() {
        let grid = TileGrid::new(200, 15);
        assert_eq!(grid.origin_y(), 160.0);
        assert_eq!(grid.row_top(0), 160.0);
        assert_eq!(grid.row_bottom(14), 400.0);
        assert_eq!(grid.row_at(160.0), 0);
        assert_eq!(grid.row_at(399.9), 14);
        assert_eq!(grid.row_at(159.9), -1);
        assert_eq!(grid.col_at(16.0), 1);
        assert_eq!(grid.col_at(15.9), 0);
    }

    #[test]
    fn test_get_set_and_bounds() {
        let mut grid = TileGrid::new(10, 5);
        grid.set(3, 2, Tile::Question);
        assert_eq!(grid.get(3, 2), Tile::Question);
        assert_eq!(grid.get(0, 0), Tile::Empty);

        // Out-of-grid reads are Empty, writes are ignored.
        assert_eq!(grid.get(-1, 0), Tile::Empty);
        assert_eq!(grid.get(0, 5), Tile::Empty);
        grid.set(-1, 0, Tile::Ground);
        grid.set(10, 0, Tile::Ground);
        assert_eq!(grid.get(0, 0), Tile::Empty);
    }
}
