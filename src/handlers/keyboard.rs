//! Keyboard Input Handler
//!
//! Translates key events into navigation actions. Each event is handled to
//! completion before the next one is read, so state mutations are applied
//! atomically per key press.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Cursor movement within the current level
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Char('j') if app.vim_mode => app.move_selection_down(),
        KeyCode::Char('k') if app.vim_mode => app.move_selection_up(),

        // Forward traversal / leaf selection
        KeyCode::Enter | KeyCode::Right => app.activate_selected(),
        KeyCode::Char('l') if app.vim_mode => app.activate_selected(),

        // Back traversal
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('h') if app.vim_mode => app.go_back(),

        // Breadcrumb jumps: digits match the numbers shown in the trail
        KeyCode::Char('0') | KeyCode::Home => app.jump_to_level(0),
        KeyCode::Char(c @ '1'..='9') => {
            app.jump_to_level(c as usize - '1' as usize);
        }

        KeyCode::Char('d') => app.toggle_display_mode(),

        _ => {}
    }

    Ok(())
}
