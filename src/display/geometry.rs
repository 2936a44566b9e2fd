//! Mapping between screen cells and board cells.

use noughts_engine::{CellClick, Position};
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Placement of the board on screen, in terminal cells.
///
/// Grid lines sit at multiples of the tile size from the origin; a tile's
/// interior is the `tile_width - 1` by `tile_height - 1` block between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    /// Left edge of the board.
    pub origin_x: u16,
    /// Top edge of the board.
    pub origin_y: u16,
    /// Tile width including one grid line.
    pub tile_width: u16,
    /// Tile height including one grid line.
    pub tile_height: u16,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            origin_x: 2,
            origin_y: 4,
            tile_width: 12,
            tile_height: 5,
        }
    }
}

impl BoardGeometry {
    /// Board cell under the pointer, or [`CellClick::OUTSIDE`] for grid
    /// lines and anything off the board.
    pub fn cell_at(&self, x: u16, y: u16) -> CellClick {
        let (Some(dx), Some(dy)) = (x.checked_sub(self.origin_x), y.checked_sub(self.origin_y))
        else {
            return CellClick::OUTSIDE;
        };

        let col = dx / self.tile_width;
        let row = dy / self.tile_height;
        if col >= 3 || row >= 3 || dx % self.tile_width == 0 || dy % self.tile_height == 0 {
            return CellClick::OUTSIDE;
        }

        CellClick::new(row as i32, col as i32)
    }

    /// Right and bottom edges of the board, or `None` if the board does not
    /// fit in terminal coordinates.
    pub fn far_corner(&self) -> Option<(u16, u16)> {
        let edge = |origin: u16, tile: u16| tile.checked_mul(3)?.checked_add(origin)?.checked_add(1);
        Some((
            edge(self.origin_x, self.tile_width)?,
            edge(self.origin_y, self.tile_height)?,
        ))
    }

    /// The whole board including its outer grid lines.
    ///
    /// Only meaningful for geometries where [`BoardGeometry::far_corner`]
    /// is `Some`; configuration loading rejects the rest.
    pub fn board_rect(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.tile_width * 3 + 1,
            self.tile_height * 3 + 1,
        )
    }

    /// The interior of one tile.
    pub fn tile_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.origin_x + pos.col() as u16 * self.tile_width + 1,
            self.origin_y + pos.row() as u16 * self.tile_height + 1,
            self.tile_width - 1,
            self.tile_height - 1,
        )
    }

    /// True if the screen cell lies on a vertical grid line of the board.
    pub fn on_vertical_line(&self, x: u16) -> bool {
        x.checked_sub(self.origin_x)
            .is_some_and(|dx| dx % self.tile_width == 0)
    }

    /// True if the screen cell lies on a horizontal grid line of the board.
    pub fn on_horizontal_line(&self, y: u16) -> bool {
        y.checked_sub(self.origin_y)
            .is_some_and(|dy| dy % self.tile_height == 0)
    }
}
