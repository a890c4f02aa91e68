//! Keyboard Input Handler
//!
//! Keys are routed by what is on top: the alert dialog first, then the
//! full-screen viewer, then the grid.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use picstash::logic::navigation::GridMove;
use picstash::model::{Model, VimCommandState};

use crate::App;

/// What a key does while the grid is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    Move(GridMove),
    Open,
    Back,
    Refresh,
    Quit,
    None,
}

/// Map a key to a grid action
///
/// `page_rows` is the number of grid rows on screen, used for page moves.
pub fn grid_action(
    key: &KeyEvent,
    vim_mode: bool,
    vim_state: &mut VimCommandState,
    page_rows: usize,
) -> GridAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return GridAction::Quit;
    }

    if vim_mode {
        // Second 'g' of 'gg'
        if *vim_state == VimCommandState::WaitingForSecondG {
            *vim_state = VimCommandState::None;
            if key.code == KeyCode::Char('g') {
                return GridAction::Move(GridMove::First);
            }
        }

        match key.code {
            KeyCode::Char('h') => return GridAction::Move(GridMove::Left),
            KeyCode::Char('j') => return GridAction::Move(GridMove::Down),
            KeyCode::Char('k') => return GridAction::Move(GridMove::Up),
            KeyCode::Char('l') => return GridAction::Move(GridMove::Right),
            KeyCode::Char('g') => {
                *vim_state = VimCommandState::WaitingForSecondG;
                return GridAction::None;
            }
            KeyCode::Char('G') => return GridAction::Move(GridMove::Last),
            KeyCode::Char('d') if ctrl => {
                return GridAction::Move(GridMove::PageDown((page_rows / 2).max(1)))
            }
            KeyCode::Char('u') if ctrl => {
                return GridAction::Move(GridMove::PageUp((page_rows / 2).max(1)))
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Left => GridAction::Move(GridMove::Left),
        KeyCode::Right => GridAction::Move(GridMove::Right),
        KeyCode::Up => GridAction::Move(GridMove::Up),
        KeyCode::Down => GridAction::Move(GridMove::Down),
        KeyCode::PageUp => GridAction::Move(GridMove::PageUp(page_rows)),
        KeyCode::PageDown => GridAction::Move(GridMove::PageDown(page_rows)),
        KeyCode::Home => GridAction::Move(GridMove::First),
        KeyCode::End => GridAction::Move(GridMove::Last),
        KeyCode::Enter | KeyCode::Char(' ') => GridAction::Open,
        KeyCode::Backspace | KeyCode::Esc => GridAction::Back,
        KeyCode::Char('r') => GridAction::Refresh,
        KeyCode::Char('q') => GridAction::Quit,
        _ => GridAction::None,
    }
}

/// Keys that dismiss the alert dialog
pub fn is_dismiss_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('o') | KeyCode::Char('q')
    )
}

/// Keys that close the full-screen viewer (tap-to-close / back)
pub fn is_viewer_close_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') | KeyCode::Char(' ')
    )
}

/// Which layer took a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLayer {
    /// The alert swallowed it (and was dismissed if it was a dismiss key)
    Alert,
    /// The viewer swallowed it; `closed` when it was a close key
    Viewer { closed: bool },
    /// Nothing on top, the grid handles it
    Grid,
}

/// Route a key through the alert and viewer layers
pub fn route_overlay_key(model: &mut Model, key: &KeyEvent) -> KeyLayer {
    // Alert blocks everything else
    if model.ui.has_modal() {
        if is_dismiss_key(key) {
            model.ui.dismiss_alert();
        }
        return KeyLayer::Alert;
    }

    // Viewer is on top of the grid
    if model.selected_image.is_some() {
        let closed = is_viewer_close_key(key);
        if closed {
            model.on_viewer_close();
        }
        return KeyLayer::Viewer { closed };
    }

    KeyLayer::Grid
}

/// Handle keyboard input
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match route_overlay_key(&mut app.model, &key) {
        KeyLayer::Grid => {}
        KeyLayer::Viewer { closed: true } => {
            app.viewer_image.clear();
            return Ok(());
        }
        KeyLayer::Alert | KeyLayer::Viewer { closed: false } => return Ok(()),
    }

    let page_rows = app.page_rows();
    let vim_mode = app.model.ui.vim_mode;
    let action = grid_action(
        &key,
        vim_mode,
        &mut app.model.ui.vim_command_state,
        page_rows,
    );

    match action {
        GridAction::Move(movement) => app.move_grid_selection(movement),
        GridAction::Open => app.open_selected().await,
        GridAction::Back => app.go_back().await,
        GridAction::Refresh => app.refresh_directory().await,
        GridAction::Quit => app.model.ui.should_quit = true,
        GridAction::None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_arrow_keys_move() {
        let mut state = VimCommandState::None;
        assert_eq!(
            grid_action(&key(KeyCode::Down), false, &mut state, 3),
            GridAction::Move(GridMove::Down)
        );
        assert_eq!(
            grid_action(&key(KeyCode::PageDown), false, &mut state, 3),
            GridAction::Move(GridMove::PageDown(3))
        );
    }

    #[test]
    fn test_enter_opens_and_backspace_goes_back() {
        let mut state = VimCommandState::None;
        assert_eq!(
            grid_action(&key(KeyCode::Enter), false, &mut state, 3),
            GridAction::Open
        );
        assert_eq!(
            grid_action(&key(KeyCode::Backspace), false, &mut state, 3),
            GridAction::Back
        );
    }

    #[test]
    fn test_hjkl_only_in_vim_mode() {
        let mut state = VimCommandState::None;
        assert_eq!(
            grid_action(&key(KeyCode::Char('j')), false, &mut state, 3),
            GridAction::None
        );
        assert_eq!(
            grid_action(&key(KeyCode::Char('j')), true, &mut state, 3),
            GridAction::Move(GridMove::Down)
        );
    }

    #[test]
    fn test_vim_gg() {
        let mut state = VimCommandState::None;
        assert_eq!(
            grid_action(&key(KeyCode::Char('g')), true, &mut state, 3),
            GridAction::None
        );
        assert_eq!(state, VimCommandState::WaitingForSecondG);
        assert_eq!(
            grid_action(&key(KeyCode::Char('g')), true, &mut state, 3),
            GridAction::Move(GridMove::First)
        );
        assert_eq!(state, VimCommandState::None);
    }

    #[test]
    fn test_vim_g_then_other_key() {
        let mut state = VimCommandState::None;
        grid_action(&key(KeyCode::Char('g')), true, &mut state, 3);
        assert_eq!(
            grid_action(&key(KeyCode::Char('j')), true, &mut state, 3),
            GridAction::Move(GridMove::Down)
        );
        assert_eq!(state, VimCommandState::None);
    }

    #[test]
    fn test_vim_half_page() {
        let mut state = VimCommandState::None;
        assert_eq!(
            grid_action(&ctrl('d'), true, &mut state, 4),
            GridAction::Move(GridMove::PageDown(2))
        );
        assert_eq!(
            grid_action(&ctrl('u'), true, &mut state, 1),
            GridAction::Move(GridMove::PageUp(1))
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut state = VimCommandState::None;
        assert_eq!(
            grid_action(&key(KeyCode::Char('q')), false, &mut state, 3),
            GridAction::Quit
        );
        assert_eq!(grid_action(&ctrl('c'), true, &mut state, 3), GridAction::Quit);
    }

    #[test]
    fn test_alert_swallows_other_keys() {
        let mut model = Model::new(false);
        model.ui.show_alert("Permission Denied", "Cannot access storage without permission.");

        for code in [KeyCode::Down, KeyCode::Backspace, KeyCode::Char('r')] {
            assert_eq!(route_overlay_key(&mut model, &key(code)), KeyLayer::Alert);
            assert!(model.ui.has_modal());
        }

        assert_eq!(route_overlay_key(&mut model, &key(KeyCode::Enter)), KeyLayer::Alert);
        assert!(!model.ui.has_modal());
        assert_eq!(route_overlay_key(&mut model, &key(KeyCode::Down)), KeyLayer::Grid);
    }

    #[test]
    fn test_alert_sits_above_viewer() {
        let mut model = Model::new(false);
        model.on_image_press("/pics/a.png".into());
        model.ui.show_alert("Cannot Read Directory", "/pics");

        assert_eq!(route_overlay_key(&mut model, &key(KeyCode::Esc)), KeyLayer::Alert);
        assert!(model.selected_image.is_some());
    }

    #[test]
    fn test_viewer_close_routing() {
        let mut model = Model::new(false);
        model.on_image_press("/pics/a.png".into());

        assert_eq!(
            route_overlay_key(&mut model, &key(KeyCode::Left)),
            KeyLayer::Viewer { closed: false }
        );
        assert!(model.selected_image.is_some());
        assert_eq!(
            route_overlay_key(&mut model, &key(KeyCode::Char('q'))),
            KeyLayer::Viewer { closed: true }
        );
        assert!(model.selected_image.is_none());
    }

    #[test]
    fn test_dismiss_and_close_keys() {
        assert!(is_dismiss_key(&key(KeyCode::Enter)));
        assert!(!is_dismiss_key(&key(KeyCode::Down)));
        assert!(is_viewer_close_key(&key(KeyCode::Backspace)));
        assert!(!is_viewer_close_key(&key(KeyCode::Left)));
    }
}
