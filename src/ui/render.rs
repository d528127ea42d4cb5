use crate::App;
use ratatui::{widgets::ListState, Frame};

use super::{breadcrumb, layout, legend, menu, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let layout_info = layout::calculate_layout(size, app.nav.previous().is_some());

    breadcrumb::render_breadcrumb_bar(f, layout_info.breadcrumb_area, app.nav.breadcrumbs());

    // Parent level panel (wide terminals only), showing where we came from
    if let Some(previous_area) = layout_info.previous_area {
        if let Some(previous) = app.nav.previous() {
            let depth = app.nav.depth();
            let mut parent_state = ListState::default();
            parent_state.select(app.cursors.get(depth - 1).copied().flatten());
            menu::render_level_panel(
                f,
                previous_area,
                previous,
                &mut parent_state,
                false,
                app.display_mode,
                &app.icon_renderer,
            );
        }
    }

    // Current level panel
    let depth = app.nav.depth();
    let mut current_state = ListState::default();
    current_state.select(app.cursors.get(depth).copied().flatten());
    menu::render_level_panel(
        f,
        layout_info.current_area,
        app.nav.current(),
        &mut current_state,
        true,
        app.display_mode,
        &app.icon_renderer,
    );
    // Sync back in case the list clamped the selection
    if let Some(cursor) = app.cursors.get_mut(depth) {
        *cursor = current_state.selected();
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.vim_mode,
        app.nav.can_go_back(),
    );

    if let Some(message) = app.toast_message() {
        toast::render_toast(f, size, &message);
    }
}
