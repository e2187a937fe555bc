//! Core types for PokeHolo

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Card rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Holofoil,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
}

impl Rarity {
    /// Display label, as printed on the card footer
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Holofoil => "Holofoil",
            Rarity::UltraRare => "Ultra Rare",
        }
    }

    /// CSS modifier used to color the rarity label
    pub fn css_class(&self) -> &'static str {
        match self {
            Rarity::Common => "rarity--common",
            Rarity::Rare => "rarity--rare",
            Rarity::Holofoil => "rarity--holofoil",
            Rarity::UltraRare => "rarity--ultra-rare",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single collectible card.
///
/// Cards are generated by the catalog and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// `{set_id}-{index}`, index starting at 1
    pub id: String,
    pub name: String,
    pub hp: u32,
    /// Type tags; the first one drives the color theme
    pub types: Vec<String>,
    /// External image URL
    pub image: String,
    pub rarity: Rarity,
    pub description: String,
    /// Identifier of the owning set
    pub set_id: String,
}

impl Card {
    /// Primary type tag, if any
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Collector number within the owning set ("7" for `jungle-7`).
    ///
    /// Falls back to the full id when it does not carry the set prefix.
    pub fn number(&self) -> &str {
        self.id
            .strip_prefix(self.set_id.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(&self.id)
    }
}

/// A card set (expansion) owning an ordered list of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub series: String,
    /// Nominal size of the printed set; may exceed `cards.len()`
    pub total_cards: u32,
    /// ISO date, `YYYY-MM-DD`
    pub release_date: String,
    pub cover_image: String,
    pub cards: Vec<Card>,
}

impl CardSet {
    /// Number of cards actually generated for this set
    pub fn collected(&self) -> usize {
        self.cards.len()
    }

    /// Parsed release date, if well-formed
    pub fn released_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }

    /// Human-readable release date ("January 9, 1999"), or the raw string
    pub fn release_label(&self) -> String {
        match self.released_on() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.release_date.clone(),
        }
    }
}

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::User => f.write_str("user"),
        }
    }
}

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

/// Session state: who is logged in, if anyone.
///
/// Only constructible through [`AuthState::logged_out`] and
/// [`AuthState::logged_in`], so `is_authenticated() == user().is_some()`
/// always holds. The serialized form keeps both fields to stay compatible
/// with `{ "user": ..., "isAuthenticated": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    user: Option<User>,
    is_authenticated: bool,
}

impl AuthState {
    /// Nobody logged in
    pub fn logged_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }

    /// `user` logged in
    pub fn logged_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Whether the two fields agree. Deserialized input may not.
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::logged_out()
    }
}
