//! In-memory card catalog.
//!
//! All content is generated here from a fixed palette of ten archetypes.
//! Generation is deterministic, so the catalog is built once and shared.
//!
//! Lookups never fail: an unknown set or card id degrades to the first
//! catalog entry rather than surfacing an error.

use std::sync::OnceLock;

use tracing::debug;

use crate::types::{Card, CardSet, Rarity};

/// Number of cards generated for each predefined set
pub const CARDS_PER_SET: usize = 24;

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Template a generated card is stamped from
struct Archetype {
    name: &'static str,
    types: &'static [&'static str],
    hp: u32,
    /// Declared rarity. Generation assigns its own (see [`generate_cards`]).
    #[allow(dead_code)]
    rarity: Rarity,
    dex: u32,
}

const ARCHETYPES: [Archetype; 10] = [
    Archetype { name: "Charizard", types: &["Fire"], hp: 120, rarity: Rarity::UltraRare, dex: 6 },
    Archetype { name: "Blastoise", types: &["Water"], hp: 100, rarity: Rarity::Rare, dex: 9 },
    Archetype { name: "Venusaur", types: &["Grass", "Poison"], hp: 100, rarity: Rarity::Rare, dex: 3 },
    Archetype { name: "Pikachu", types: &["Lightning"], hp: 60, rarity: Rarity::Common, dex: 25 },
    Archetype { name: "Mewtwo", types: &["Psychic"], hp: 130, rarity: Rarity::Holofoil, dex: 150 },
    Archetype { name: "Gengar", types: &["Ghost", "Poison"], hp: 80, rarity: Rarity::Holofoil, dex: 94 },
    Archetype { name: "Eevee", types: &["Normal"], hp: 50, rarity: Rarity::Common, dex: 133 },
    Archetype { name: "Snorlax", types: &["Normal"], hp: 140, rarity: Rarity::Rare, dex: 143 },
    Archetype { name: "Gyarados", types: &["Water", "Flying"], hp: 130, rarity: Rarity::Holofoil, dex: 130 },
    Archetype { name: "Dragonite", types: &["Dragon", "Flying"], hp: 150, rarity: Rarity::UltraRare, dex: 149 },
];

/// Official artwork URL for a national dex number
pub fn artwork_url(dex: u32) -> String {
    format!("{ARTWORK_BASE}/{dex}.png")
}

/// Generate `count` cards for `set_id`, cycling through the archetypes.
///
/// Card `i` (0-based) gets id `{set_id}-{i + 1}`. Rarity is Holofoil when
/// `i % 3 == 0` and Common otherwise; the archetype's declared rarity is
/// not used.
pub fn generate_cards(set_id: &str, count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| {
            let base = &ARCHETYPES[i % ARCHETYPES.len()];
            Card {
                id: format!("{}-{}", set_id, i + 1),
                name: base.name.to_string(),
                hp: base.hp,
                types: base.types.iter().map(|t| t.to_string()).collect(),
                image: artwork_url(base.dex),
                rarity: if i % 3 == 0 {
                    Rarity::Holofoil
                } else {
                    Rarity::Common
                },
                description: format!(
                    "A powerful {} card with unique abilities suitable for any deck.",
                    base.name
                ),
                set_id: set_id.to_string(),
            }
        })
        .collect()
}

fn predefined_set(
    id: &str,
    name: &str,
    total_cards: u32,
    release_date: &str,
    cover_dex: u32,
) -> CardSet {
    CardSet {
        id: id.to_string(),
        name: name.to_string(),
        series: "Original".to_string(),
        total_cards,
        release_date: release_date.to_string(),
        cover_image: artwork_url(cover_dex),
        cards: generate_cards(id, CARDS_PER_SET),
    }
}

/// The four predefined sets, in catalog order
pub fn catalog() -> &'static [CardSet] {
    static CATALOG: OnceLock<Vec<CardSet>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            // Charizard cover
            predefined_set("base-set", "Base Set Origins", 102, "1999-01-09", 6),
            // Scyther cover
            predefined_set("jungle", "Jungle Expansion", 64, "1999-06-16", 123),
            // Aerodactyl cover
            predefined_set("fossil", "Fossil Excavation", 62, "1999-10-10", 142),
            // Arbok cover
            predefined_set("rocket", "Team Rocket", 82, "2000-04-24", 24),
        ]
    })
}

/// Exact set lookup
pub fn find_set(id: &str) -> Option<&'static CardSet> {
    catalog().iter().find(|set| set.id == id)
}

/// Set lookup falling back to the first catalog set
pub fn set_or_default(id: &str) -> &'static CardSet {
    find_set(id).unwrap_or_else(|| {
        debug!(set_id = %id, "Unknown set, falling back to first catalog set");
        &catalog()[0]
    })
}

/// Card lookup scanning sets in catalog order; first match wins
pub fn find_card(id: &str) -> Option<&'static Card> {
    catalog()
        .iter()
        .flat_map(|set| set.cards.iter())
        .find(|card| card.id == id)
}

/// Card lookup falling back to the first card of the first set
pub fn card_or_default(id: &str) -> &'static Card {
    find_card(id).unwrap_or_else(|| {
        debug!(card_id = %id, "Unknown card, falling back to first catalog card");
        &catalog()[0].cards[0]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ids_and_rarity() {
        let cards = generate_cards("base-set", 24);
        assert_eq!(cards.len(), 24);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id, format!("base-set-{}", i + 1));
            assert_eq!(card.set_id, "base-set");
            assert_eq!(card.rarity == Rarity::Holofoil, i % 3 == 0);
            if i % 3 != 0 {
                assert_eq!(card.rarity, Rarity::Common);
            }
        }
    }

    #[test]
    fn test_generate_cycles_archetypes() {
        let cards = generate_cards("x", 12);
        assert_eq!(cards[0].name, "Charizard");
        assert_eq!(cards[9].name, "Dragonite");
        assert_eq!(cards[10].name, "Charizard");
        assert_eq!(cards[2].types, vec!["Grass", "Poison"]);
        assert_eq!(
            cards[3].description,
            "A powerful Pikachu card with unique abilities suitable for any deck."
        );
        assert!(cards[4].image.ends_with("/150.png"));
    }

    #[test]
    fn test_generate_overrides_template_rarity() {
        // Charizard is declared Ultra Rare but lands on a Holofoil slot at 0
        // and on a Common slot at 10.
        let cards = generate_cards("x", 11);
        assert_eq!(cards[0].rarity, Rarity::Holofoil);
        assert_eq!(cards[10].rarity, Rarity::Common);
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate_cards("fossil", 24), generate_cards("fossil", 24));
        assert!(generate_cards("fossil", 0).is_empty());
    }

    #[test]
    fn test_catalog_shape() {
        let sets = catalog();
        let ids: Vec<&str> = sets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["base-set", "jungle", "fossil", "rocket"]);
        for set in sets {
            assert_eq!(set.cards.len(), CARDS_PER_SET);
            assert!(set.total_cards as usize >= set.cards.len());
            assert!(set.released_on().is_some());
        }
    }

    #[test]
    fn test_find_card_in_jungle() {
        let card = find_card("jungle-5").unwrap();
        assert_eq!(card.set_id, "jungle");
        assert_eq!(card_or_default("jungle-5").id, "jungle-5");
    }

    #[test]
    fn test_fallbacks() {
        assert!(find_set("unknown-id").is_none());
        assert_eq!(set_or_default("unknown-id").id, "base-set");
        assert!(find_card("nope-1").is_none());
        assert_eq!(card_or_default("nope-1").id, "base-set-1");
    }
}
