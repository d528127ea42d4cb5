use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Separator between breadcrumb entries
const SEPARATOR: &str = " › ";

/// Render the breadcrumb trail as a single bar.
///
/// Ancestor crumbs carry their jump digit (`1:Menu`) so the keyboard shortcut
/// is discoverable; the current crumb is highlighted. When the trail is wider
/// than the bar, leading crumbs are dropped and replaced with an ellipsis,
/// keeping the current level visible.
pub fn render_breadcrumb_bar(f: &mut Frame, area: Rect, breadcrumbs: &[String]) {
    let last = breadcrumbs.len().saturating_sub(1);

    // Width available inside the borders
    let available_width = area.width.saturating_sub(2) as usize;

    // Pre-render each crumb as text to measure it
    let crumb_texts: Vec<String> = breadcrumbs
        .iter()
        .enumerate()
        .map(|(idx, crumb)| {
            if idx < last && idx < 9 {
                format!("{}:{}", idx + 1, crumb)
            } else {
                crumb.clone()
            }
        })
        .collect();

    // Drop crumbs from the left until the trail fits
    let mut start = 0;
    loop {
        let mut width: usize = if start > 0 { "… › ".width() } else { 0 };
        for (i, text) in crumb_texts.iter().enumerate().skip(start) {
            if i > start {
                width += SEPARATOR.width();
            }
            width += text.width();
        }
        if width <= available_width || start >= last {
            break;
        }
        start += 1;
    }

    let mut spans: Vec<Span> = Vec::new();
    if start > 0 {
        spans.push(Span::styled("… › ", Style::default().fg(Color::DarkGray)));
    }
    for (idx, text) in crumb_texts.iter().enumerate().skip(start) {
        if idx > start {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }
        if idx == last {
            spans.push(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(text.clone(), Style::default().fg(Color::Yellow)));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(bar, area);
}
