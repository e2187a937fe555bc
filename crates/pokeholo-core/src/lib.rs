//! PokeHolo Core Library
//!
//! Framework-free building blocks for the PokeHolo card viewer.
//!
//! ## Overview
//!
//! - **Catalog**: a deterministic, in-memory set of card sets generated from
//!   a fixed palette of archetypes
//! - **Session**: a single-admin login gate persisted to a key-value store
//! - **Holo**: the pointer-to-transform mapping that drives the card tilt
//!   and glare effect
//! - **Feed**: incremental ("infinite scroll") loading over the catalog
//! - **Nav**: application paths and the guard that gates them on the session
//!
//! ## Quick Start
//!
//! ```
//! use pokeholo_core::{catalog, HoloState, MemoryStore, Session, SurfaceRect};
//!
//! let mut session = Session::open(MemoryStore::new());
//! session.login("admin").unwrap();
//! assert!(session.state().is_authenticated());
//!
//! let set = catalog::set_or_default("jungle");
//! assert_eq!(set.cards.len(), 24);
//!
//! let mut holo = HoloState::new();
//! holo.pointer_move(150.0, 210.0, SurfaceRect::new(0.0, 0.0, 300.0, 420.0));
//! assert_eq!(holo.tilt().rotate_x, 0.0);
//! ```

pub mod auth;
pub mod catalog;
pub mod error;
pub mod feed;
pub mod holo;
pub mod nav;
pub mod session;
pub mod storage;
pub mod types;

// Re-exports
pub use auth::{check_credentials, ADMIN_PASSWORD, ADMIN_USERNAME, LOGIN_DELAY};
pub use error::{AuthError, PokeholoError, SessionError, StorageError};
pub use feed::{near_bottom, EntrySide, FeedEntry, SetFeed, LOAD_DELAY, SCROLL_THRESHOLD_PX};
pub use holo::{Glare, HoloPhase, HoloState, SurfaceRect, Tilt, GLARE_OPACITY_FACTOR, MAX_TILT_DEG};
pub use nav::{guard, AppPath, GuardOutcome};
pub use session::{Session, SubscriptionId, SESSION_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::*;
