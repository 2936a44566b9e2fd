//! Stateless rendering of a snapshot.

use super::geometry::BoardGeometry;
use crate::config::AppConfig;
use noughts_engine::{Cell, GameStatus, Mark, PlayerId, Position, Snapshot};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};
use strum::IntoEnumIterator;

const TITLE: &str = "Noughts and Crosses";

/// Draws the whole screen from `snapshot`.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, config: &AppConfig) {
    let area = frame.area();
    let geometry = *config.board();
    let left = geometry.origin_x;
    let top = geometry.origin_y;

    draw_line(
        frame,
        Line::styled(TITLE, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        left,
        0,
    );

    // Status sits just above the board; a finished game also shows how to
    // start over.
    let status_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    if snapshot.status.is_terminal() {
        draw_line(
            frame,
            Line::styled(snapshot.status.to_string(), status_style),
            left,
            top.saturating_sub(2),
        );
        draw_line(
            frame,
            Line::raw(restart_hint(*config.restart_key())),
            left,
            top.saturating_sub(1),
        );
    } else {
        draw_line(
            frame,
            Line::styled(snapshot.status.to_string(), status_style),
            left,
            top.saturating_sub(1),
        );
    }

    let board_area = geometry.board_rect().intersection(area);
    if !board_area.is_empty() {
        frame.render_widget(BoardWidget::new(snapshot, geometry), board_area);
    }

    let below = top.saturating_add(geometry.board_rect().height);
    for (i, player) in PlayerId::iter().enumerate() {
        draw_line(frame, legend(player), left, below.saturating_add(1 + i as u16));
    }
    draw_line(
        frame,
        Line::styled(
            format!("Press '{}' to quit", config.quit_key()),
            Style::default().fg(Color::DarkGray),
        ),
        left,
        below.saturating_add(4),
    );
}

/// "Press 'R' to restart", with the configured key.
pub fn restart_hint(key: char) -> String {
    format!("Press '{}' to restart", key.to_ascii_uppercase())
}

fn legend(player: PlayerId) -> Line<'static> {
    let mark = player.mark();
    Line::from(vec![
        Span::raw(format!(
            "Player {} is {} (",
            player.number(),
            mark.plural()
        )),
        Span::styled(mark.to_string(), mark_style(mark)),
        Span::raw(")"),
    ])
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Nought => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Mark::Cross => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    }
}

/// Renders one line of text at `(x, y)`, clipped to the frame.
fn draw_line(frame: &mut Frame, line: Line<'_>, x: u16, y: u16) {
    let width = line.width() as u16;
    let rect = Rect::new(x, y, width, 1).intersection(frame.area());
    if !rect.is_empty() {
        frame.render_widget(Paragraph::new(line), rect);
    }
}

/// The grid with its marks, drawn at the configured geometry.
///
/// Tile interiors line up exactly with [`BoardGeometry::cell_at`], so a
/// click lands on the tile the player sees.
pub struct BoardWidget<'a> {
    snapshot: &'a Snapshot,
    geometry: BoardGeometry,
}

impl<'a> BoardWidget<'a> {
    /// Creates a widget for `snapshot`.
    pub fn new(snapshot: &'a Snapshot, geometry: BoardGeometry) -> Self {
        Self { snapshot, geometry }
    }

    fn grid_symbol(&self, x: u16, y: u16) -> Option<&'static str> {
        let vertical = self.geometry.on_vertical_line(x);
        let horizontal = self.geometry.on_horizontal_line(y);
        match (vertical, horizontal) {
            (true, true) => Some("┼"),
            (true, false) => Some("│"),
            (false, true) => Some("─"),
            (false, false) => None,
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid_style = Style::default().fg(Color::DarkGray);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(symbol) = self.grid_symbol(x, y)
                    && let Some(cell) = buf.cell_mut((x, y))
                {
                    cell.set_symbol(symbol).set_style(grid_style);
                }
            }
        }

        let winning_line = self.snapshot.winning_line;
        for pos in Position::ALL {
            let tile = self.geometry.tile_rect(pos).intersection(area);
            if tile.is_empty() {
                continue;
            }

            if winning_line.is_some_and(|line| line.contains(pos)) {
                buf.set_style(tile, Style::default().bg(Color::Green));
            }

            if let Cell::Owned(player) = self.snapshot.board.get(pos) {
                draw_mark(buf, self.geometry.tile_rect(pos), tile, player.mark());
            }
        }

        if self.snapshot.status == GameStatus::Draw {
            buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

/// Glyph rows for a mark; a single character when the tile is too small.
fn glyph(mark: Mark, tile: Rect) -> &'static [&'static str] {
    if tile.width < 3 || tile.height < 3 {
        return match mark {
            Mark::Nought => &["O"],
            Mark::Cross => &["X"],
        };
    }
    match mark {
        Mark::Nought => &["╭─╮", "│ │", "╰─╯"],
        Mark::Cross => &["╲ ╱", " ╳ ", "╱ ╲"],
    }
}

fn draw_mark(buf: &mut Buffer, tile: Rect, visible: Rect, mark: Mark) {
    let rows = glyph(mark, tile);
    let glyph_width = rows[0].chars().count() as u16;
    let x0 = tile.x + (tile.width - glyph_width) / 2;
    let y0 = tile.y + (tile.height - rows.len() as u16) / 2;
    let style = mark_style(mark);

    for (dy, row) in rows.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            let (x, y) = (x0 + dx as u16, y0 + dy as u16);
            if ch == ' ' || !visible.contains((x, y).into()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}
