//! UI Components for PokeHolo.

mod guard;
mod holo_card;
mod nav_header;
mod set_stack;

pub use guard::Guarded;
pub use holo_card::HoloCard;
pub use nav_header::{NavHeader, Shell};
pub use set_stack::SetStack;
