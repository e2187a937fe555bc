//! Property-based tests for the holo mapper, catalog and session
//!
//! Uses proptest to verify invariants that must hold for any input.

use pokeholo_core::catalog::generate_cards;
use pokeholo_core::{HoloPhase, HoloState, MemoryStore, Rarity, Session, SurfaceRect, Tilt};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A card-sized surface somewhere on screen
fn rect_strategy() -> impl Strategy<Value = SurfaceRect> {
    (-500.0..2000.0f64, -500.0..2000.0f64, 1.0..1200.0f64, 1.0..1600.0f64)
        .prop_map(|(left, top, width, height)| SurfaceRect::new(left, top, width, height))
}

/// A surface plus a pointer strictly inside it, as (rect, fx, fy) where the
/// fractions place the pointer within the open interval (0, 1)
fn inside_strategy() -> impl Strategy<Value = (SurfaceRect, f64, f64)> {
    (rect_strategy(), 0.0001..0.9999f64, 0.0001..0.9999f64)
}

#[derive(Debug, Clone)]
enum PointerOp {
    Move(f64, f64),
    Leave,
}

fn pointer_ops_strategy() -> impl Strategy<Value = Vec<PointerOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0.0..1.0f64, 0.0..1.0f64).prop_map(|(x, y)| PointerOp::Move(x, y)),
            1 => Just(PointerOp::Leave),
        ],
        0..40,
    )
}

#[derive(Debug, Clone)]
enum SessionOp {
    Login(String),
    Logout,
}

fn session_ops_strategy() -> impl Strategy<Value = Vec<SessionOp>> {
    prop::collection::vec(
        prop_oneof![
            prop::string::string_regex("[a-z]{1,12}")
                .expect("valid regex")
                .prop_map(SessionOp::Login),
            Just(SessionOp::Logout),
        ],
        0..20,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Rotation never exceeds 25 degrees for a pointer inside the surface
    #[test]
    fn tilt_is_bounded_inside((rect, fx, fy) in inside_strategy()) {
        let mut state = HoloState::new();
        state.pointer_move(rect.left + fx * rect.width, rect.top + fy * rect.height, rect);

        let tilt = state.tilt();
        prop_assert!((-25.0..=25.0).contains(&tilt.rotate_x), "rotate_x = {}", tilt.rotate_x);
        prop_assert!((-25.0..=25.0).contains(&tilt.rotate_y), "rotate_y = {}", tilt.rotate_y);

        let glare = state.glare();
        prop_assert!((0.0..=100.0).contains(&glare.x));
        prop_assert!((0.0..=100.0).contains(&glare.y));
        prop_assert_eq!(state.opacity(), 1.0);
    }

    /// The exact center of any surface produces no rotation
    #[test]
    fn center_is_flat(rect in rect_strategy()) {
        let mut state = HoloState::new();
        state.pointer_move(
            rect.left + rect.width / 2.0,
            rect.top + rect.height / 2.0,
            rect,
        );
        // Float error in left + width/2 - left can leave a tiny residue
        prop_assert!(state.tilt().rotate_x.abs() < 1e-9);
        prop_assert!(state.tilt().rotate_y.abs() < 1e-9);
    }

    /// Moving right never decreases rotate_y; moving down never increases rotate_x
    #[test]
    fn tilt_is_monotonic(rect in rect_strategy(), a in 0.0..1.0f64, b in 0.0..1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut first = HoloState::new();
        let mut second = HoloState::new();
        first.pointer_move(rect.left + lo * rect.width, rect.top + lo * rect.height, rect);
        second.pointer_move(rect.left + hi * rect.width, rect.top + hi * rect.height, rect);

        prop_assert!(first.tilt().rotate_y <= second.tilt().rotate_y + 1e-9);
        prop_assert!(first.tilt().rotate_x >= second.tilt().rotate_x - 1e-9);
    }

    /// Leaving always resets rotation and opacity, whatever came before
    #[test]
    fn leave_always_resets(rect in rect_strategy(), ops in pointer_ops_strategy()) {
        let mut state = HoloState::new();
        for op in ops {
            match op {
                PointerOp::Move(fx, fy) => {
                    state.pointer_move(rect.left + fx * rect.width, rect.top + fy * rect.height, rect)
                }
                PointerOp::Leave => state.pointer_leave(),
            }
        }
        let glare_before = state.glare();

        state.pointer_leave();
        prop_assert_eq!(state.tilt(), Tilt::default());
        prop_assert_eq!(state.opacity(), 0.0);
        prop_assert_eq!(state.phase(), HoloPhase::Neutral);
        prop_assert_eq!(state.glare(), glare_before);
    }

    /// Ids are sequential and rarity follows index mod 3 for any set/count
    #[test]
    fn generated_cards_follow_layout(set_id in "[a-z]{1,10}(-[a-z]{1,6})?", count in 0usize..80) {
        let cards = generate_cards(&set_id, count);
        prop_assert_eq!(cards.len(), count);
        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(&card.id, &format!("{}-{}", set_id, i + 1));
            prop_assert_eq!(&card.set_id, &set_id);
            prop_assert_eq!(card.number(), (i + 1).to_string());
            let expected = if i % 3 == 0 { Rarity::Holofoil } else { Rarity::Common };
            prop_assert_eq!(card.rarity, expected);
        }
    }

    /// `authenticated == (user != null)` after every mutation and after reload
    #[test]
    fn session_stays_consistent(ops in session_ops_strategy()) {
        let store = MemoryStore::new();
        let mut session = Session::open(store.clone());

        for op in ops {
            match op {
                SessionOp::Login(name) => session.login(&name).unwrap(),
                SessionOp::Logout => session.logout().unwrap(),
            }
            let state = session.state();
            prop_assert_eq!(state.is_authenticated(), state.user().is_some());

            let reloaded = Session::open(store.clone());
            prop_assert_eq!(reloaded.state(), session.state());
        }
    }
}
