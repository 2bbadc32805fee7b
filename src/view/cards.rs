//! Card tiles and the scrolling card list.
//!
//! A tile is a fixed sequence of lines: name, image, one line per present
//! optional field, rules text, then a blank separator. Heights are computed
//! from the card alone so the list layout (and whether the end-of-list
//! marker is on screen) is deterministic.

use crate::model::Card;
use crate::state::{AppState, Viewport};
use crate::view::CardStyles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Lines every tile has regardless of content.
pub const TILE_FIXED_LINES: usize = 4;

/// Text of the marker row below the last tile.
pub const END_MARKER: &str = "· · ·";

/// Appended to a line that was cut at the pane edge.
pub const ELLIPSIS: &str = "…";

/// One optional label/value row of a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    /// Row label, e.g. "Set".
    pub label: &'static str,
    /// Display value.
    pub value: String,
}

impl CardRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// The optional rows to show for a card, in display order.
///
/// A row appears only when its field is present and non-empty; numeric
/// zero counts as absent.
pub fn card_rows(card: &Card) -> Vec<CardRow> {
    let mut rows = Vec::new();

    if let Some(set) = card.set_name() {
        rows.push(CardRow::new("Set", set));
    }
    if let Some(card_type) = non_empty(&card.card_type) {
        rows.push(CardRow::new("Type", card_type));
    }
    if !card.subtypes.is_empty() {
        rows.push(CardRow::new("SubTypes", card.subtypes.join(" ")));
    }
    if !card.attributes.is_empty() {
        rows.push(CardRow::new("Attributes", card.attributes.join(", ")));
    }
    if let Some(rarity) = non_empty(&card.rarity) {
        rows.push(CardRow::new("Rarity", rarity));
    }

    let stats = [
        ("Power", &card.power),
        ("Health", &card.health),
        ("Cost", &card.cost),
        ("Soul Summon", &card.soul_summon),
        ("Soul Trap", &card.soul_trap),
    ];
    for (label, stat) in stats {
        if let Some(stat) = stat.as_ref().filter(|s| s.is_truthy()) {
            rows.push(CardRow::new(label, stat.to_string()));
        }
    }

    rows
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Lines a card occupies in the list.
pub fn tile_height(card: &Card) -> usize {
    TILE_FIXED_LINES + card_rows(card).len()
}

/// Total lines of the list, including the marker row when cards exist.
pub fn content_height(cards: &[Card]) -> usize {
    if cards.is_empty() {
        return 0;
    }
    cards.iter().map(tile_height).sum::<usize>() + 1
}

/// Fraction of the marker row inside the viewport: 1.0 when on screen,
/// 0.0 otherwise (including when there is no marker).
pub fn sentinel_intersection(offset: usize, viewport_height: usize, content_height: usize) -> f32 {
    let Some(marker) = content_height.checked_sub(1) else {
        return 0.0;
    };
    if marker >= offset && marker < offset.saturating_add(viewport_height) {
        1.0
    } else {
        0.0
    }
}

/// Render one card as lines. The result has exactly [`tile_height`] lines.
pub fn tile_lines(card: &Card, styles: &CardStyles) -> Vec<Line<'static>> {
    let rows = card_rows(card);
    let mut lines = Vec::with_capacity(TILE_FIXED_LINES + rows.len());

    lines.push(Line::from(vec![
        Span::styled("▌ ", styles.label),
        Span::styled(card.display_name().to_string(), styles.name),
    ]));

    let image = non_empty(&card.image_url).unwrap_or("(no image)");
    lines.push(Line::from(vec![
        Span::styled("  Image: ", styles.label),
        Span::styled(image.to_string(), styles.muted),
    ]));

    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", row.label), styles.label),
            Span::styled(row.value, styles.value),
        ]));
    }

    // Rules text is one line per tile; embedded newlines are flattened and
    // the list cuts it at the pane edge.
    let text = card
        .text
        .as_deref()
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    lines.push(Line::from(Span::styled(format!("  {text}"), styles.text)));

    lines.push(Line::default());
    lines
}

/// Lines of the list visible at `offset` in a viewport `height` lines tall.
pub fn visible_lines(
    cards: &[Card],
    offset: usize,
    height: usize,
    styles: &CardStyles,
) -> Vec<Line<'static>> {
    let end = offset.saturating_add(height);
    let mut lines = Vec::with_capacity(height);
    let mut y = 0;

    for card in cards {
        if y >= end {
            break;
        }
        let h = tile_height(card);
        if y + h > offset {
            let skip = offset.saturating_sub(y);
            lines.extend(tile_lines(card, styles).into_iter().skip(skip));
        }
        y += h;
    }

    if !cards.is_empty() && y >= offset && y < end {
        lines.push(Line::from(Span::styled(END_MARKER, styles.muted)).centered());
    }

    lines.truncate(height);
    lines
}

/// Cut `line` to `width` columns. A line that loses anything ends in
/// [`ELLIPSIS`], drawn in the style of the span it cut into.
pub fn fit_line(line: Line<'static>, width: usize) -> Line<'static> {
    if line.width() <= width {
        return line;
    }

    let (style, alignment) = (line.style, line.alignment);
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    let mut cut_style = Style::default();

    for span in line.spans {
        cut_style = span.style;
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            kept.push(ch);
        }
        let whole = kept.len() == span.content.len();
        if !kept.is_empty() {
            spans.push(Span::styled(kept, span.style));
        }
        if !whole {
            break;
        }
    }
    if width > 0 {
        spans.push(Span::styled(ELLIPSIS, cut_style));
    }

    let fitted = Line::from(spans).style(style);
    match alignment {
        Some(alignment) => fitted.alignment(alignment),
        None => fitted,
    }
}

/// Viewport of the list when drawn in `area` (borders included).
pub fn list_viewport(area: Rect, cards: &[Card]) -> Viewport {
    Viewport {
        height: usize::from(area.height.saturating_sub(2)),
        content_height: content_height(cards),
    }
}

/// Render the bordered card list.
pub fn render_card_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &CardStyles) {
    let cards = state.cards().items();
    let mut block = Block::default().borders(Borders::ALL).title(" Cards ");
    if state.focus == crate::state::FocusPane::Cards {
        block = block.border_style(styles.focused_border);
    }

    let inner_height = usize::from(area.height.saturating_sub(2));
    let lines = if cards.is_empty() && !state.cards().is_fetching() {
        vec![Line::from(Span::styled("  No cards found.", styles.muted))]
    } else {
        visible_lines(cards, state.scroll.offset, inner_height, styles)
    };
    let inner_width = usize::from(area.width.saturating_sub(2));
    let lines: Vec<Line<'static>> = lines
        .into_iter()
        .map(|line| fit_line(line, inner_width))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod tests;
