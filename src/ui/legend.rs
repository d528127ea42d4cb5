use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, can_go_back: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("l/Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Open  "),
        ]);
        if can_go_back {
            hotkey_spans.extend(vec![
                Span::styled("h", Style::default().fg(Color::Yellow)),
                Span::raw(":Back  "),
            ]);
        }
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Open  "),
        ]);
        if can_go_back {
            hotkey_spans.extend(vec![
                Span::styled("←/Esc", Style::default().fg(Color::Yellow)),
                Span::raw(":Back  "),
            ]);
        }
    }

    if can_go_back {
        hotkey_spans.extend(vec![
            Span::styled("1-9", Style::default().fg(Color::Yellow)),
            Span::raw(":Jump  "),
            Span::styled("0", Style::default().fg(Color::Yellow)),
            Span::raw(":Root  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(":Details  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend at the bottom of the screen
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, can_go_back: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, can_go_back)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend_text(vim_mode: bool, can_go_back: bool) -> String {
        build_hotkey_spans(vim_mode, can_go_back)
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_back_hints_only_when_back_is_possible() {
        assert!(!legend_text(false, false).contains("Back"));
        assert!(!legend_text(false, false).contains("Jump"));
        assert!(legend_text(false, true).contains("Back"));
        assert!(legend_text(false, true).contains("Jump"));
    }

    #[test]
    fn test_vim_mode_swaps_movement_keys() {
        assert!(legend_text(true, false).contains("j/k"));
        assert!(legend_text(false, false).contains("↑/↓"));
    }
}
