//! Layout calculation logic
//!
//! Pure functions deciding how many level panels fit on screen. Wide
//! terminals get a two-panel view (parent level beside the current one),
//! narrow terminals a single panel, mirroring the desktop/mobile split of
//! the menu this tool renders.

/// Which level panels are visible for the current terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneLayout {
    /// Only the current level
    Single,
    /// Parent level beside the current level
    Dual,
}

/// Minimum usable width for one level panel, in terminal cells
pub const MIN_PANE_WIDTH: u16 = 30;

/// Decide between the single- and two-panel view
///
/// The parent panel is only shown when there is a parent to show and both
/// panels get at least [`MIN_PANE_WIDTH`] cells.
///
/// # Examples
/// ```
/// use drilltui::logic::layout::{calculate_pane_layout, PaneLayout};
///
/// // Wide terminal with a parent level: both panels fit
/// assert_eq!(calculate_pane_layout(100, true), PaneLayout::Dual);
///
/// // At the root there is no parent to show
/// assert_eq!(calculate_pane_layout(100, false), PaneLayout::Single);
///
/// // Narrow terminal: current level only
/// assert_eq!(calculate_pane_layout(50, true), PaneLayout::Single);
/// ```
pub fn calculate_pane_layout(content_width: u16, has_previous: bool) -> PaneLayout {
    if has_previous && content_width >= MIN_PANE_WIDTH * 2 {
        PaneLayout::Dual
    } else {
        PaneLayout::Single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_requires_previous_level() {
        assert_eq!(calculate_pane_layout(200, false), PaneLayout::Single);
        assert_eq!(calculate_pane_layout(200, true), PaneLayout::Dual);
    }

    #[test]
    fn test_width_threshold() {
        // Exactly two minimum panels
        assert_eq!(
            calculate_pane_layout(MIN_PANE_WIDTH * 2, true),
            PaneLayout::Dual
        );
        // One cell short
        assert_eq!(
            calculate_pane_layout(MIN_PANE_WIDTH * 2 - 1, true),
            PaneLayout::Single
        );
    }

    #[test]
    fn test_tiny_terminal() {
        assert_eq!(calculate_pane_layout(0, true), PaneLayout::Single);
        assert_eq!(calculate_pane_layout(10, true), PaneLayout::Single);
    }
}
