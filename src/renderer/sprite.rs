//! Sprite sheet lookup
//!
//! Maps (action, frame) to a source rectangle on the player sheet. All
//! rectangles are computed and bounds-checked once, at construction.

use serde::{Deserialize, Serialize};

use super::surface::Rect;
use crate::sim::PlayerAction;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpriteError {
    #[error("sheet grid needs at least one column and row, got {columns}x{rows}")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("{action:?} animation has no frames")]
    EmptyAnimation { action: PlayerAction },
    #[error("{action:?} frame {frame} ({rect:?}) falls outside the {width}x{height} sheet")]
    OutOfBounds {
        action: PlayerAction,
        frame: u32,
        rect: Rect,
        width: f64,
        height: f64,
    },
}

/// Declared layout of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetGrid {
    pub width: f64,
    pub height: f64,
    pub columns: u32,
    pub rows: u32,
}

impl SheetGrid {
    /// The player sheet: 1200x913, 12 columns by 10 rows
    pub const PLAYER: SheetGrid = SheetGrid {
        width: 1200.0,
        height: 913.0,
        columns: 12,
        rows: 10,
    };

    pub fn cell_width(&self) -> f64 {
        self.width / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.height / self.rows as f64
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// One animation: a run of frames along a sheet row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStrip {
    pub row: u32,
    pub frames: u32,
}

/// Precomputed source rectangles for every player animation frame
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAtlas {
    grid: SheetGrid,
    run: Vec<Rect>,
    jump: Vec<Rect>,
}

impl SpriteAtlas {
    pub fn new(
        grid: SheetGrid,
        run: AnimationStrip,
        jump: AnimationStrip,
    ) -> Result<Self, SpriteError> {
        if grid.columns == 0 || grid.rows == 0 {
            return Err(SpriteError::EmptyGrid {
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        Ok(Self {
            grid,
            run: Self::build_strip(&grid, PlayerAction::Run, run)?,
            jump: Self::build_strip(&grid, PlayerAction::Jump, jump)?,
        })
    }

    /// Atlas for the bundled player sheet (run on row 3, jump on row 1)
    pub fn player() -> Result<Self, SpriteError> {
        Self::new(
            SheetGrid::PLAYER,
            AnimationStrip { row: 3, frames: 9 },
            AnimationStrip { row: 1, frames: 7 },
        )
    }

    fn build_strip(
        grid: &SheetGrid,
        action: PlayerAction,
        strip: AnimationStrip,
    ) -> Result<Vec<Rect>, SpriteError> {
        if strip.frames == 0 {
            return Err(SpriteError::EmptyAnimation { action });
        }
        // Crops are square, one cell wide on both axes
        let cell_w = grid.cell_width();
        let cell_h = grid.cell_height();
        let bounds = grid.bounds();

        (0..strip.frames)
            .map(|frame| {
                let x = cell_w * frame as f64;
                let y = cell_h * strip.row as f64;
                let rect = Rect::new(x, y, cell_w, cell_w);
                if bounds.contains_rect(&rect) {
                    Ok(rect)
                } else {
                    Err(SpriteError::OutOfBounds {
                        action,
                        frame,
                        rect,
                        width: grid.width,
                        height: grid.height,
                    })
                }
            })
            .collect()
    }

    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }

    pub fn frame_count(&self, action: PlayerAction) -> usize {
        self.strip(action).len()
    }

    /// Source rectangle for a frame. Indices past the strip wrap around.
    pub fn frame(&self, action: PlayerAction, index: u32) -> Rect {
        let strip = self.strip(action);
        strip[index as usize % strip.len()]
    }

    fn strip(&self, action: PlayerAction) -> &[Rect] {
        match action {
            PlayerAction::Run => &self.run,
            PlayerAction::Jump => &self.jump,
        }
    }
}
