//! Card records as delivered by the catalog API.
//!
//! The shape is dictated by the external service. Every field is optional:
//! the API omits fields that do not apply to a card (creatures have power,
//! actions do not), and the renderer must skip whatever is missing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// One collectible card.
///
/// Decoding never fails on a single field: a value of the wrong type is
/// treated as absent, so one odd record cannot cost the rest of its page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    /// Catalog identifier, used as the render key. Numeric ids are kept in
    /// their decimal form.
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    /// Display name.
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Rules text.
    #[serde(deserialize_with = "lenient_text")]
    pub text: Option<String>,
    /// Expansion the card belongs to.
    #[serde(deserialize_with = "lenient_set")]
    pub set: Option<CardSet>,
    /// Card type (Creature, Action, Item, Support).
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub card_type: Option<String>,
    /// Creature subtypes.
    #[serde(deserialize_with = "lenient_list")]
    pub subtypes: Vec<String>,
    /// Attributes (colors), e.g. Strength, Willpower.
    #[serde(deserialize_with = "lenient_list")]
    pub attributes: Vec<String>,
    /// Rarity name.
    #[serde(deserialize_with = "lenient_text")]
    pub rarity: Option<String>,
    /// Attack power.
    #[serde(deserialize_with = "lenient_stat")]
    pub power: Option<Stat>,
    /// Health.
    #[serde(deserialize_with = "lenient_stat")]
    pub health: Option<Stat>,
    /// Magicka cost.
    #[serde(deserialize_with = "lenient_stat")]
    pub cost: Option<Stat>,
    /// Soul Summon cost.
    #[serde(deserialize_with = "lenient_stat")]
    pub soul_summon: Option<Stat>,
    /// Soul Trap yield.
    #[serde(deserialize_with = "lenient_stat")]
    pub soul_trap: Option<Stat>,
    /// Artwork URL.
    #[serde(deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
}

/// The expansion a card was printed in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSet {
    /// Set identifier (e.g. "cs").
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    /// Human readable set name.
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// A numeric card statistic.
///
/// The API sends integers, but older records carry strings such as "X", so
/// both are accepted and kept as-is for display. Fractional numbers are
/// kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    /// Integer value.
    Number(i64),
    /// Textual value, displayed verbatim.
    Text(String),
}

impl Stat {
    /// Whether the value counts as present for display purposes.
    ///
    /// Zero and the empty string are treated as absent, matching how the
    /// catalog front-end has always hidden these rows.
    pub fn is_truthy(&self) -> bool {
        match self {
            Stat::Number(n) => *n != 0,
            Stat::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Number(n) => write!(f, "{n}"),
            Stat::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Stat {
    fn from(value: i64) -> Self {
        Stat::Number(value)
    }
}

impl Card {
    /// Convenience constructor used by tests and fixtures.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Name to show in the tile header. Falls back to the id, then to a
    /// placeholder, so a malformed record still gets a visible tile.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("(unnamed card)")
    }

    /// Set name, if the card carries a non-empty one.
    pub fn set_name(&self) -> Option<&str> {
        self.set
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|n| !n.is_empty())
    }
}

/// One page of the catalog, as returned by `GET /cards`.
///
/// The `cards` array is the only hard requirement. Entries that are not
/// objects still become (empty) cards so the page keeps its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPage {
    /// Cards on this page, in catalog order.
    #[serde(deserialize_with = "card_list")]
    pub cards: Vec<Card>,
    /// Size of the whole (filtered) catalog, when reported.
    #[serde(
        rename = "_totalCount",
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_count: Option<u64>,
    /// Page size the server actually applied.
    #[serde(
        rename = "_pageSize",
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<u32>,
}

impl CardPage {
    /// A page holding just these cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            total_count: None,
            page_size: None,
        }
    }
}

// Field decoders. Each one reads whatever JSON value is present and maps
// anything it cannot use to the field's empty value.

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn lenient_stat<'de, D>(deserializer: D) -> Result<Option<Stat>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(whole) => Stat::Number(whole),
            None => Stat::Text(n.to_string()),
        }),
        Value::String(s) => Some(Stat::Text(s)),
        _ => None,
    })
}

fn lenient_set<'de, D>(deserializer: D) -> Result<Option<CardSet>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => CardSet::deserialize(value).ok(),
        // A bare string is taken as the set's name
        Value::String(name) => Some(CardSet {
            id: None,
            name: Some(name),
        }),
        _ => None,
    })
}

fn lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Ok(Value::deserialize(deserializer)?
        .as_u64()
        .and_then(|n| T::try_from(n).ok()))
}

fn card_list<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| Card::deserialize(item).unwrap_or_default())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_card() {
        let json = r#"{
            "name": "Sload Necromancer",
            "rarity": "Rare",
            "type": "Creature",
            "subtypes": ["Sload"],
            "cost": 3,
            "power": 2,
            "health": 3,
            "set": {"id": "cs", "name": "Core Set", "_self": "https://example/sets/cs"},
            "soulSummon": 100,
            "soulTrap": 20,
            "text": "Summon: Destroy a creature.",
            "attributes": ["Endurance"],
            "imageUrl": "https://images/sload.png",
            "id": "abc123",
            "collectible": true
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.id.as_deref(), Some("abc123"));
        assert_eq!(card.card_type.as_deref(), Some("Creature"));
        assert_eq!(card.subtypes, vec!["Sload".to_string()]);
        assert_eq!(card.power, Some(Stat::Number(2)));
        assert_eq!(card.soul_summon, Some(Stat::Number(100)));
        assert_eq!(card.set_name(), Some("Core Set"));
        assert_eq!(card.image_url.as_deref(), Some("https://images/sload.png"));
    }

    #[test]
    fn deserializes_card_with_everything_missing() {
        let card: Card = serde_json::from_str("{}").unwrap();
        assert_eq!(card, Card::default());
        assert!(card.subtypes.is_empty());
        assert_eq!(card.display_name(), "(unnamed card)");
    }

    #[test]
    fn null_lists_become_empty() {
        let card: Card =
            serde_json::from_str(r#"{"subtypes": null, "attributes": null}"#).unwrap();
        assert!(card.subtypes.is_empty());
        assert!(card.attributes.is_empty());
    }

    #[test]
    fn stat_accepts_strings() {
        let card: Card = serde_json::from_str(r#"{"cost": "X"}"#).unwrap();
        assert_eq!(card.cost, Some(Stat::Text("X".to_string())));
        assert_eq!(card.cost.unwrap().to_string(), "X");
    }

    #[test]
    fn zero_stat_is_not_truthy() {
        assert!(!Stat::Number(0).is_truthy());
        assert!(!Stat::Text(String::new()).is_truthy());
        assert!(Stat::Number(5).is_truthy());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let card = Card {
            id: Some("x1".to_string()),
            ..Card::default()
        };
        assert_eq!(card.display_name(), "x1");
    }

    #[test]
    fn empty_set_name_is_absent() {
        let card = Card {
            set: Some(CardSet {
                id: Some("cs".to_string()),
                name: Some(String::new()),
            }),
            ..Card::default()
        };
        assert_eq!(card.set_name(), None);
    }

    #[test]
    fn page_ignores_unknown_fields() {
        let json = r#"{
            "cards": [{"id": "1", "name": "X"}],
            "_links": {"next": "https://example/cards?page=2"},
            "_pageSize": 20,
            "_totalCount": 1412
        }"#;
        let page: CardPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.total_count, Some(1412));
        assert_eq!(page.page_size, Some(20));
    }

    #[test]
    fn numeric_id_is_kept_as_text() {
        let page: CardPage = serde_json::from_str(r#"{"cards":[{"id":1,"name":"X"}]}"#).unwrap();
        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.cards[0].id.as_deref(), Some("1"));
        assert_eq!(page.cards[0].display_name(), "X");
    }

    #[test]
    fn mistyped_field_does_not_lose_the_page() {
        let json = r#"{"cards": [
            {"id": "a", "name": "Good", "rarity": "Common"},
            {"id": "b", "name": "Bad", "rarity": 5, "set": "Core Set", "subtypes": "Nord"}
        ]}"#;
        let page: CardPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.cards[0].rarity.as_deref(), Some("Common"));

        let bad = &page.cards[1];
        assert_eq!(bad.display_name(), "Bad");
        assert_eq!(bad.rarity.as_deref(), Some("5"));
        assert_eq!(bad.set_name(), Some("Core Set"));
        assert!(bad.subtypes.is_empty());
    }

    #[test]
    fn odd_stat_values() {
        let card: Card =
            serde_json::from_str(r#"{"cost": 2.5, "power": true, "health": {"base": 3}}"#).unwrap();
        assert_eq!(card.cost, Some(Stat::Text("2.5".to_string())));
        assert_eq!(card.power, None);
        assert_eq!(card.health, None);
    }

    #[test]
    fn wrong_typed_values_become_absent() {
        let card: Card = serde_json::from_str(
            r#"{"name": ["X"], "text": false, "set": 7, "attributes": ["Strength", null, 3]}"#,
        )
        .unwrap();
        assert_eq!(card.name, None);
        assert_eq!(card.text, None);
        assert_eq!(card.set, None);
        assert_eq!(card.attributes, vec!["Strength".to_string(), "3".to_string()]);
    }

    #[test]
    fn non_object_entry_still_takes_a_slot() {
        let page: CardPage =
            serde_json::from_str(r#"{"cards": [null, {"name": "X"}, 42]}"#).unwrap();
        assert_eq!(page.cards.len(), 3);
        assert_eq!(page.cards[0], Card::default());
        assert_eq!(page.cards[1].display_name(), "X");
    }

    #[test]
    fn mistyped_page_metadata_is_ignored() {
        let page: CardPage =
            serde_json::from_str(r#"{"cards": [], "_totalCount": "many", "_pageSize": -1}"#)
                .unwrap();
        assert_eq!(page.total_count, None);
        assert_eq!(page.page_size, None);
    }

    #[test]
    fn cards_must_be_an_array() {
        assert!(serde_json::from_str::<CardPage>(r#"{"cards": {"id": 1}}"#).is_err());
        assert!(serde_json::from_str::<CardPage>(r#"{"cards": null}"#).is_err());
    }

    #[test]
    fn page_without_cards_is_rejected() {
        let result = serde_json::from_str::<CardPage>(r#"{"_totalCount": 3}"#);
        assert!(result.is_err());
    }
}
