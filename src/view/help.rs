//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::CardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &CardStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a rect centered in `area` with the given percentage of width
/// and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    centered_fixed(popup_width, popup_height, area)
}

/// Calculate a rect of fixed size centered in `area`, clipped to it.
pub(crate) fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn build_help_content(styles: &CardStyles) -> Vec<Line<'static>> {
    let category_style = styles.name.add_modifier(Modifier::UNDERLINED);
    let key_style = styles.label.add_modifier(Modifier::BOLD);
    let desc_style = Style::default();

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<18}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    vec![
        Line::from(Span::styled("Browsing", category_style)),
        entry("j/↓  k/↑", "Scroll down / up"),
        entry("Ctrl+d/PgDn", "Page down"),
        entry("Ctrl+u/PgUp", "Page up"),
        entry("g/Home  G/End", "Top / bottom"),
        entry("mouse wheel", "Scroll"),
        Line::default(),
        Line::from(Span::styled("Search", category_style)),
        entry("/  Ctrl+f", "Edit the name filter"),
        entry("Enter", "Apply the filter"),
        entry("Esc", "Leave the search field"),
        entry("r  Ctrl+r", "Clear the filter"),
        Line::default(),
        Line::from(Span::styled("Application", category_style)),
        entry("?", "Toggle this help"),
        entry("q  Ctrl+c", "Quit"),
        Line::default(),
        Line::from(Span::styled(
            "More cards load when the end of the list scrolls into view.",
            styles.muted,
        )),
    ]
}
