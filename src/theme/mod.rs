//! Visual theme: global stylesheet and card type palette.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
