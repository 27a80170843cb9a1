use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::items::{Ball, Block};
use crate::render::DrawCommand;

/// Fixed rows x columns arrangement of blocks, stored row-major.
///
/// Blocks are never added or removed after construction; only their
/// liveness changes.
pub struct BlockGrid {
    rows: usize,
    columns: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    pub fn new(config: &GameConfig) -> BlockGrid {
        let gap = config.block_gap();
        let pitch = config.block_row_pitch();
        let top = config.block_top_margin();
        let mut blocks = Vec::with_capacity(config.block_rows * config.block_columns);
        for row in 0..config.block_rows {
            for column in 0..config.block_columns {
                let x = gap + column as f32 * (config.block_width + gap);
                let y = top + row as f32 * pitch;
                let rect = Rect::new(x, y, config.block_width, config.block_height);
                blocks.push(Block::new(rect, Some(config.block_color)));
            }
        }
        BlockGrid {
            rows: config.block_rows,
            columns: config.block_columns,
            blocks,
        }
    }

    /// Builds a grid from explicit blocks laid out row-major.
    ///
    /// Panics if `blocks.len() != rows * columns`.
    pub fn from_blocks(rows: usize, columns: usize, blocks: Vec<Block>) -> BlockGrid {
        assert_eq!(
            blocks.len(),
            rows * columns,
            "block count does not match a {rows}x{columns} grid"
        );
        BlockGrid { rows, columns, blocks }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Block> {
        self.index(row, column).map(|idx| &self.blocks[idx])
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn live_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }

    pub fn revive_all(&mut self) {
        for block in self.blocks.iter_mut() {
            block.alive = true;
        }
    }

    /// Tests the ball against every live block in index order.
    ///
    /// Each hit reverses the ball again, so an even number of hits in one
    /// call leaves its velocity unchanged. Returns the destroyed indices.
    pub fn handle_collisions(&mut self, ball: &mut Ball) -> Vec<usize> {
        let mut destroyed = Vec::new();
        for idx in 0..self.blocks.len() {
            if ball.block_collision(&mut self.blocks[idx]) {
                destroyed.push(idx);
            }
        }
        for &idx in &destroyed {
            log::debug!(
                "Block ({}, {}) destroyed, {} left",
                idx / self.columns,
                idx % self.columns,
                self.live_count()
            );
        }
        destroyed
    }

    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.blocks.iter().filter_map(Block::draw_command)
    }
}
