use super::icons::IconRenderer;
use crate::model::Level;
use ::drilltui::DisplayMode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Build one menu row: icon, label, optional description, branch chevron
fn build_list_item<'a>(
    item: &'a crate::model::NavItem,
    panel_width: u16,
    display_mode: DisplayMode,
    icon_renderer: &IconRenderer,
) -> ListItem<'a> {
    let mut line_spans: Vec<Span> = Vec::new();

    if let Some(icon) = icon_renderer.resolve(item.icon.as_deref()) {
        line_spans.push(icon);
    }

    let label_style = if item.disabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    line_spans.push(Span::styled(&item.label, label_style));

    if display_mode == DisplayMode::Descriptions {
        if let Some(description) = &item.description {
            line_spans.push(Span::raw("  "));
            line_spans.push(Span::styled(
                description.as_str(),
                Style::default().fg(Color::Rgb(120, 120, 120)),
            ));
        }
    }

    // Right-align the chevron on branch items when there is room.
    // Available space: panel_width - borders(2) - highlight(2)
    if item.is_branch() {
        let available_width = panel_width.saturating_sub(4) as usize;
        let used: usize = line_spans.iter().map(|s| s.content.width()).sum();
        if used + 2 <= available_width {
            line_spans.push(Span::raw(" ".repeat(available_width - used - 1)));
        } else {
            line_spans.push(Span::raw(" "));
        }
        line_spans.push(icon_renderer.chevron());
    }

    ListItem::new(Line::from(line_spans))
}

/// Render one level of the menu as a list panel
pub fn render_level_panel(
    f: &mut Frame,
    area: Rect,
    level: &Level,
    state: &mut ListState,
    is_focused: bool,
    display_mode: DisplayMode,
    icon_renderer: &IconRenderer,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .title(level.title.as_str())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    // A level can legitimately hold no items; show an affordance instead of
    // an empty frame
    if level.items.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "  No items",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let list_items: Vec<ListItem> = level
        .items
        .iter()
        .map(|item| build_list_item(item, area.width, display_mode, icon_renderer))
        .collect();

    let mut list = List::new(list_items).block(block);

    if is_focused {
        list = list
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, state);
    } else {
        // Parent panel: keep the selection visible but without the focus arrow
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("  ");
        f.render_stateful_widget(list, area, state);
    }
}
