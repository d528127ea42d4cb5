// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon name resolution (emoji and Nerd Fonts) with a theme
// - layout: Calculates screen layout (breadcrumb bar, panels, legend)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the breadcrumb trail bar
// - menu: Renders one level of the menu as a list panel
// - legend: Renders the hotkey legend
// - toast: Renders toast notifications (leaf selection feedback)

pub mod breadcrumb;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod menu;
pub mod render;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
