use crate::logic::layout::{calculate_pane_layout, PaneLayout};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb bar at the top
    pub breadcrumb_area: Rect,
    /// Parent level panel (wide terminals only)
    pub previous_area: Option<Rect>,
    /// Current level panel
    pub current_area: Rect,
    /// Hotkey legend at the bottom
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, has_previous: bool) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb bar (text + borders)
            Constraint::Min(3),    // Level panels
            Constraint::Length(3), // Legend
        ])
        .split(terminal_size);

    let breadcrumb_area = main_chunks[0];
    let content_area = main_chunks[1];
    let legend_area = main_chunks[2];

    match calculate_pane_layout(content_area.width, has_previous) {
        PaneLayout::Dual => {
            // Parent gets 40%, current level 60% (current is where the action is)
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(content_area);
            LayoutInfo {
                breadcrumb_area,
                previous_area: Some(panes[0]),
                current_area: panes[1],
                legend_area,
            }
        }
        PaneLayout::Single => LayoutInfo {
            breadcrumb_area,
            previous_area: None,
            current_area: content_area,
            legend_area,
        },
    }
}
