//! The brick grid
//!
//! Bricks have no identity beyond their rectangle. Destroying one drops it
//! from the live collection; nothing is ever added back.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// An axis-aligned brick, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Live bricks, in row-major creation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Build the `rows x columns` grid described by `config`
    ///
    /// Columns are separated by `brick_gap` with a gap against each side
    /// wall, so the grid is centered horizontally. Rows start below
    /// `brick_top_margin`.
    pub fn generate(config: &Config) -> Self {
        let width = config.brick_width();
        let height = config.brick_height;
        let gap = config.brick_gap;

        let mut bricks = Vec::with_capacity(config.brick_count());
        for row in 0..config.brick_rows {
            for column in 0..config.brick_columns {
                bricks.push(Brick {
                    x: column as f32 * (width + gap) + width / 2.0 + gap,
                    y: row as f32 * (height + gap) + height / 2.0 + gap + config.brick_top_margin,
                    width,
                    height,
                });
            }
        }

        log::debug!(
            "Generated {}x{} brick grid ({} bricks, width {:.2})",
            config.brick_rows,
            config.brick_columns,
            bricks.len(),
            width
        );
        Self { bricks }
    }

    /// A field with an explicit layout
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    /// Bricks still standing
    #[inline]
    pub fn live(&self) -> &[Brick] {
        &self.bricks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// No bricks left: the session is won
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Split into survivors and the bricks for which `hit` holds
    ///
    /// Every brick is tested; several may be destroyed at once.
    pub fn partition(&self, hit: impl Fn(&Brick) -> bool) -> (BrickField, Vec<Brick>) {
        let (destroyed, survivors): (Vec<Brick>, Vec<Brick>) =
            self.bricks.iter().copied().partition(|brick| hit(brick));
        (BrickField { bricks: survivors }, destroyed)
    }
}
