//! Translate crossterm events into [`AppEvent`]s.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

use crate::app::AppEvent;

/// Map one terminal event onto the controller vocabulary. Events with no
/// meaning for the app (focus, paste, scroll, key releases) map to `None`.
pub fn translate(event: &CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(key) => translate_key(key),
        CrosstermEvent::Mouse(mouse) => translate_mouse(mouse),
        CrosstermEvent::Resize(width, height) => Some(AppEvent::Resize {
            width: *width,
            height: *height,
        }),
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost | CrosstermEvent::Paste(_) => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(AppEvent::Quit),
        KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Char('n') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::CreateRequest)
        }
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Option<AppEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::PointerDown { x, y }),
        MouseEventKind::Up(_) => Some(AppEvent::PointerUp { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(AppEvent::PointerMove { x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> CrosstermEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate(&press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(
            translate(&key(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press
            )),
            Some(AppEvent::Quit)
        );
        assert_eq!(translate(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn n_requests_a_box_on_press_only() {
        assert_eq!(
            translate(&press(KeyCode::Char('n'))),
            Some(AppEvent::CreateRequest)
        );
        assert_eq!(
            translate(&key(
                KeyCode::Char('n'),
                KeyModifiers::NONE,
                KeyEventKind::Release
            )),
            None
        );
    }

    #[test]
    fn left_press_and_any_release() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(AppEvent::PointerDown { x: 4, y: 2 })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Right), 4, 2)),
            None
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Up(MouseButton::Right), 7, 1)),
            Some(AppEvent::PointerUp { x: 7, y: 1 })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 9, 9)),
            Some(AppEvent::PointerMove { x: 9, y: 9 })
        );
        assert_eq!(translate(&mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            translate(&CrosstermEvent::Resize(132, 43)),
            Some(AppEvent::Resize {
                width: 132,
                height: 43
            })
        );
        assert_eq!(translate(&CrosstermEvent::FocusLost), None);
    }
}
