//! PokeHolo UI Components
//!
//! Dioxus primitives shared by the PokeHolo views: buttons, form inputs,
//! type badges and the ambient backdrop.
//!
//! ## Palette
//!
//! The views sit on a near-black canvas (`#0a0a0a`) with a yellow-to-red
//! brand gradient for titles and a blue accent for primary actions. Card
//! colors come from each card's primary type, not from this crate.

pub mod components;

pub use components::*;
