//! Cursor movement logic
//!
//! Pure functions for moving the per-level selection cursor with wrapping
//! behavior. The cursor is presentation state layered on top of the
//! navigation stack; the state machine itself knows nothing about it.

/// Calculate the next cursor index with wrapping
///
/// Advances the cursor to the next item in the list. If at the end, wraps
/// around to the beginning. If nothing is selected, selects the first item.
///
/// # Examples
/// ```
/// use drilltui::logic::navigation::next_selection;
///
/// // Empty list
/// assert_eq!(next_selection(None, 0), None);
///
/// // Normal progression
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
///
/// // Wrapping at end
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous cursor index with wrapping
///
/// Moves the cursor to the previous item in the list. If at the beginning,
/// wraps around to the end. If nothing is selected, selects the last item.
///
/// # Examples
/// ```
/// use drilltui::logic::navigation::prev_selection;
///
/// // Empty list
/// assert_eq!(prev_selection(None, 0), None);
///
/// // Normal progression
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
///
/// // Wrapping at beginning
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(0), 0), None);
    }

    #[test]
    fn test_next_selection_no_current() {
        assert_eq!(next_selection(None, 3), Some(0));
        assert_eq!(next_selection(None, 1), Some(0));
    }

    #[test]
    fn test_next_selection_progression_and_wrap() {
        assert_eq!(next_selection(Some(0), 3), Some(1));
        assert_eq!(next_selection(Some(1), 3), Some(2));
        assert_eq!(next_selection(Some(2), 3), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0)); // Single item wraps to itself
    }

    #[test]
    fn test_prev_selection_empty_list() {
        assert_eq!(prev_selection(None, 0), None);
        assert_eq!(prev_selection(Some(5), 0), None);
    }

    #[test]
    fn test_prev_selection_no_current() {
        assert_eq!(prev_selection(None, 3), Some(2));
        assert_eq!(prev_selection(None, 1), Some(0));
    }

    #[test]
    fn test_prev_selection_progression_and_wrap() {
        assert_eq!(prev_selection(Some(2), 3), Some(1));
        assert_eq!(prev_selection(Some(1), 3), Some(0));
        assert_eq!(prev_selection(Some(0), 3), Some(2));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        // Out-of-range indices are handled gracefully
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(9));
    }
}
