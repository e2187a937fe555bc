//! Reusable UI components.

mod ambient;
mod button;
mod input;
mod type_badges;

pub use ambient::*;
pub use button::*;
pub use input::*;
pub use type_badges::*;
