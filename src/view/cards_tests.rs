//! Tests for card tiles and list layout.

use super::*;
use crate::model::{CardSet, Stat};
use crate::state::PageQuery;
use crate::test_harness::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn full_card() -> Card {
    Card {
        id: Some("c1".to_string()),
        name: Some("Sload Necromancer".to_string()),
        text: Some("Summon: Destroy a creature.".to_string()),
        set: Some(CardSet {
            id: Some("cs".to_string()),
            name: Some("Core Set".to_string()),
        }),
        card_type: Some("Creature".to_string()),
        subtypes: vec!["Sload".to_string(), "Daedra".to_string()],
        attributes: vec!["Intelligence".to_string(), "Endurance".to_string()],
        rarity: Some("Epic".to_string()),
        power: Some(Stat::Number(3)),
        health: Some(Stat::Number(2)),
        cost: Some(Stat::Number(4)),
        soul_summon: Some(Stat::Number(400)),
        soul_trap: Some(Stat::Text("100".to_string())),
        image_url: Some("https://img.test/sload.png".to_string()),
    }
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

// ===== card_rows =====

#[test]
fn full_card_has_every_row_in_order() {
    let labels: Vec<_> = card_rows(&full_card()).iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "Set",
            "Type",
            "SubTypes",
            "Attributes",
            "Rarity",
            "Power",
            "Health",
            "Cost",
            "Soul Summon",
            "Soul Trap"
        ]
    );
}

#[test]
fn lists_are_joined() {
    let rows = card_rows(&full_card());
    let subtypes = rows.iter().find(|r| r.label == "SubTypes").unwrap();
    let attributes = rows.iter().find(|r| r.label == "Attributes").unwrap();
    assert_eq!(subtypes.value, "Sload Daedra");
    assert_eq!(attributes.value, "Intelligence, Endurance");
}

#[test]
fn bare_card_has_no_optional_rows() {
    assert!(card_rows(&Card::named("c1", "Bare")).is_empty());
}

#[test]
fn zero_stat_is_omitted() {
    let card = Card {
        power: Some(Stat::Number(0)),
        cost: Some(Stat::Number(0)),
        health: Some(Stat::Number(5)),
        ..Card::named("c1", "Zero")
    };
    let labels: Vec<_> = card_rows(&card).iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["Health"]);
}

#[test]
fn empty_strings_and_lists_are_omitted() {
    let card = Card {
        card_type: Some(String::new()),
        rarity: Some(String::new()),
        set: Some(CardSet {
            id: Some("cs".to_string()),
            name: Some(String::new()),
        }),
        soul_trap: Some(Stat::Text(String::new())),
        ..Card::named("c1", "Empty")
    };
    assert!(card_rows(&card).is_empty());
}

// ===== tile layout =====

#[test]
fn tile_lines_match_tile_height() {
    let styles = CardStyles::default();
    for card in [full_card(), Card::named("c1", "Bare"), Card::default()] {
        assert_eq!(tile_lines(&card, &styles).len(), tile_height(&card));
    }
}

#[test]
fn bare_tile_shows_only_identity_and_text() {
    let card = Card {
        text: Some("Prophecy.".to_string()),
        image_url: Some("https://img.test/x.png".to_string()),
        ..Card::named("c1", "Bare")
    };
    let lines: Vec<String> = tile_lines(&card, &CardStyles::default())
        .iter()
        .map(line_text)
        .collect();

    assert_eq!(
        lines,
        vec![
            "▌ Bare".to_string(),
            "  Image: https://img.test/x.png".to_string(),
            "  Prophecy.".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn multiline_text_is_flattened() {
    let card = Card {
        text: Some("Line one.\nLine two.".to_string()),
        ..Card::named("c1", "Multi")
    };
    let lines = tile_lines(&card, &CardStyles::default());
    assert_eq!(line_text(&lines[2]), "  Line one. Line two.");
}

#[test]
fn content_height_includes_marker_row() {
    let cards = vec![Card::named("a", "A"), Card::named("b", "B")];
    assert_eq!(content_height(&cards), 2 * TILE_FIXED_LINES + 1);
    assert_eq!(content_height(&[]), 0);
}

// ===== sentinel visibility =====

#[test]
fn marker_visibility_follows_offset() {
    // marker is line 40
    assert_eq!(sentinel_intersection(0, 18, 41), 0.0);
    assert_eq!(sentinel_intersection(23, 18, 41), 1.0);
    assert_eq!(sentinel_intersection(22, 18, 41), 0.0);
}

#[test]
fn no_marker_without_content() {
    assert_eq!(sentinel_intersection(0, 18, 0), 0.0);
}

#[test]
fn short_list_shows_marker() {
    assert_eq!(sentinel_intersection(0, 18, 5), 1.0);
}

// ===== visible_lines =====

#[test]
fn visible_lines_starts_mid_tile() {
    let cards = vec![Card::named("a", "A"), Card::named("b", "B")];
    let lines = visible_lines(&cards, 1, 4, &CardStyles::default());
    let text: Vec<String> = lines.iter().map(line_text).collect();
    assert_eq!(text[0], "  Image: (no image)");
    assert_eq!(text[3], "▌ B");
    assert_eq!(lines.len(), 4);
}

#[test]
fn visible_lines_ends_with_marker() {
    let cards = vec![Card::named("a", "A")];
    let lines = visible_lines(&cards, 0, 10, &CardStyles::default());
    assert_eq!(lines.len(), TILE_FIXED_LINES + 1);
    assert_eq!(line_text(lines.last().unwrap()), END_MARKER);
}

#[test]
fn visible_lines_for_empty_list_is_empty() {
    assert!(visible_lines(&[], 0, 10, &CardStyles::default()).is_empty());
}

// ===== rendering =====

#[test]
fn render_card_list_shows_tiles() {
    let mut state = AppState::new(PageQuery::new("https://api.test/v1/cards", 20));
    state.apply_page(crate::model::CardPage::new(vec![full_card()]));

    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| render_card_list(frame, frame.area(), &state, &CardStyles::default()))
        .unwrap();

    let output = buffer_to_string(terminal.backend().buffer());
    assert!(output.contains("Sload Necromancer"));
    assert!(output.contains("Set: Core Set"));
    assert!(output.contains("SubTypes: Sload Daedra"));
    assert!(output.contains("Soul Trap: 100"));
    assert!(output.contains("Summon: Destroy a creature."));
}

#[test]
fn render_empty_idle_list_shows_placeholder() {
    let state = AppState::new(PageQuery::new("https://api.test/v1/cards", 20));
    let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
    terminal
        .draw(|frame| render_card_list(frame, frame.area(), &state, &CardStyles::default()))
        .unwrap();

    assert!(buffer_to_string(terminal.backend().buffer()).contains("No cards found."));
}

// ===== fit_line =====

#[test]
fn fit_line_leaves_short_lines_alone() {
    let line = Line::from(vec![Span::raw("  Cost: "), Span::raw("4")]);
    assert_eq!(fit_line(line.clone(), 20), line);
}

#[test]
fn fit_line_cuts_with_ellipsis() {
    let line = Line::from(vec![Span::raw("  Text: "), Span::raw("Summon: Destroy a creature.")]);
    let fitted = fit_line(line, 16);

    assert_eq!(fitted.width(), 16);
    assert_eq!(line_text(&fitted), "  Text: Summon:…");
}

#[test]
fn fit_line_counts_wide_characters() {
    let fitted = fit_line(Line::raw("ドラゴンの炎"), 6);
    assert!(fitted.width() <= 6);
    assert!(line_text(&fitted).ends_with(ELLIPSIS));
}

#[test]
fn render_long_text_is_marked_as_cut() {
    let mut state = AppState::new(PageQuery::new("https://api.test/v1/cards", 20));
    let card = Card {
        text: Some("Summon: Destroy a creature, then draw a card for each creature in play.".to_string()),
        image_url: Some("https://images.test/very/long/path/to/the/artwork/sload.png".to_string()),
        ..Card::named("c1", "Sload")
    };
    state.apply_page(crate::model::CardPage::new(vec![card]));

    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
    terminal
        .draw(|frame| render_card_list(frame, frame.area(), &state, &CardStyles::default()))
        .unwrap();

    let output = buffer_to_string(terminal.backend().buffer());
    let cut_rows = output.lines().filter(|row| row.contains(ELLIPSIS)).count();
    assert_eq!(cut_rows, 2, "image and text rows are cut:\n{output}");
}
