//! Translates terminal events into intents.

use crate::config::AppConfig;
use crate::game_loop::Intent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use noughts_engine::{CellClick, Position};

/// What the display should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAction {
    /// Hand an intent to the game loop.
    Send(Intent),
    /// Leave the program.
    Quit,
    /// Repaint without waiting for a state change (terminal resized).
    Repaint,
}

/// Maps one terminal event to an action, or `None` to ignore it.
pub fn translate(event: &Event, config: &AppConfig) -> Option<DisplayAction> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(DisplayAction::Send(Intent::Move(
            config.board().cell_at(*column, *row),
        ))),
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, config),
        Event::Resize(..) => Some(DisplayAction::Repaint),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, config: &AppConfig) -> Option<DisplayAction> {
    match key.code {
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(DisplayAction::Quit)
        }
        KeyCode::Char(c) if c.eq_ignore_ascii_case(config.quit_key()) => Some(DisplayAction::Quit),
        KeyCode::Char(c) if c.eq_ignore_ascii_case(config.restart_key()) => {
            Some(DisplayAction::Send(Intent::Reset))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            let pos = Position::from_index(index)?;
            Some(DisplayAction::Send(Intent::Move(CellClick::from(pos))))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_click_on_tile() {
        let config = AppConfig::default();
        let event = click(MouseEventKind::Down(MouseButton::Left), 2 + 12 + 3, 4 + 2);
        assert_eq!(
            translate(&event, &config),
            Some(DisplayAction::Send(Intent::Move(CellClick::new(0, 1))))
        );
    }

    #[test]
    fn test_left_click_off_board_sends_sentinel() {
        let config = AppConfig::default();
        let event = click(MouseEventKind::Down(MouseButton::Left), 0, 0);
        assert_eq!(
            translate(&event, &config),
            Some(DisplayAction::Send(Intent::Move(CellClick::OUTSIDE)))
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let config = AppConfig::default();
        assert_eq!(
            translate(&click(MouseEventKind::Down(MouseButton::Right), 5, 6), &config),
            None
        );
        assert_eq!(
            translate(&click(MouseEventKind::Up(MouseButton::Left), 5, 6), &config),
            None
        );
    }

    #[test]
    fn test_restart_key_any_case() {
        let config = AppConfig::default();
        for c in ['r', 'R'] {
            assert_eq!(
                translate(&key(KeyCode::Char(c)), &config),
                Some(DisplayAction::Send(Intent::Reset))
            );
        }
    }

    #[test]
    fn test_digits_pick_cells() {
        let config = AppConfig::default();
        assert_eq!(
            translate(&key(KeyCode::Char('1')), &config),
            Some(DisplayAction::Send(Intent::Move(CellClick::new(0, 0))))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('6')), &config),
            Some(DisplayAction::Send(Intent::Move(CellClick::new(1, 2))))
        );
        assert_eq!(translate(&key(KeyCode::Char('0')), &config), None);
    }

    #[test]
    fn test_quit_keys() {
        let config = AppConfig::default();
        assert_eq!(
            translate(&key(KeyCode::Char('q')), &config),
            Some(DisplayAction::Quit)
        );
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c, &config), Some(DisplayAction::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let config = AppConfig::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release, &config), None);
    }

    #[test]
    fn test_resize_repaints() {
        let config = AppConfig::default();
        assert_eq!(
            translate(&Event::Resize(80, 24), &config),
            Some(DisplayAction::Repaint)
        );
    }
}
