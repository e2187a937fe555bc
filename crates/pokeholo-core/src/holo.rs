//! Pointer-to-transform mapping for the holographic card effect.
//!
//! Two independent outputs come out of a pointer position:
//!
//! - **Tilt** transforms geometry. The whole card stack rotates as one rigid
//!   unit, up to [`MAX_TILT_DEG`] around each axis.
//! - **Glare** modulates paint. The overlay gradients are positioned by the
//!   pointer's percentage offset within the card, the holo layer using the
//!   inverted position so it moves against the sheen.
//!
//! ## States
//!
//! | Phase | Tilt | Glare | Opacity |
//! |-------|------|-------|---------|
//! | Neutral (initial) | 0, 0 | 50, 50 | 0 |
//! | Tracking | from pointer | from pointer | 1 |
//! | Neutral (after leave) | 0, 0 | last position | 0 |
//!
//! The glare position is deliberately left where it was on leave; only the
//! opacity hides it. Re-entry then fades the overlay in from its previous
//! spot instead of jumping through the center.

/// Maximum rotation around either axis, in degrees
pub const MAX_TILT_DEG: f64 = 25.0;

/// Share of the holo opacity used by the glare layer
pub const GLARE_OPACITY_FACTOR: f64 = 0.8;

/// On-screen rectangle of the card surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Both dimensions strictly positive
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position relative to the top-left corner
    pub fn local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Around the horizontal axis; positive tilts the top towards the viewer
    pub rotate_x: f64,
    /// Around the vertical axis
    pub rotate_y: f64,
}

/// Highlight position as percentages of the surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glare {
    pub x: f64,
    pub y: f64,
}

impl Glare {
    pub const CENTER: Glare = Glare { x: 50.0, y: 50.0 };

    /// Counter-moving position used by the holo sheen layer
    pub fn inverted(&self) -> Glare {
        Glare {
            x: 100.0 - self.x,
            y: 100.0 - self.y,
        }
    }
}

impl Default for Glare {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Whether the pointer is currently over the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoloPhase {
    #[default]
    Neutral,
    Tracking,
}

/// Per-card visual state driven by pointer events
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoloState {
    phase: HoloPhase,
    tilt: Tilt,
    glare: Glare,
    opacity: f64,
}

impl HoloState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HoloPhase {
        self.phase
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn glare(&self) -> Glare {
        self.glare
    }

    /// Overlay opacity: 1 while tracking, 0 otherwise
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Opacity of the glare layer, dimmer than the holo layer
    pub fn glare_opacity(&self) -> f64 {
        self.opacity * GLARE_OPACITY_FACTOR
    }

    /// Pointer moved to client position (`client_x`, `client_y`) over a
    /// surface currently measured at `rect`.
    ///
    /// A rect without area cannot be normalized against and is ignored.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: SurfaceRect) {
        if !rect.is_measurable() {
            tracing::trace!(?rect, "Ignoring pointer move over unmeasurable surface");
            return;
        }

        let (x, y) = rect.local(client_x, client_y);
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        let norm_x = (x - center_x) / center_x;
        let norm_y = (y - center_y) / center_y;

        self.tilt = Tilt {
            // 0.0 - keeps the centered case at +0
            rotate_x: 0.0 - norm_y * MAX_TILT_DEG,
            rotate_y: norm_x * MAX_TILT_DEG,
        };
        self.glare = Glare {
            x: x / rect.width * 100.0,
            y: y / rect.height * 100.0,
        };
        self.opacity = 1.0;
        self.phase = HoloPhase::Tracking;
    }

    /// Pointer left the surface: drop the tilt and hide the overlays.
    pub fn pointer_leave(&mut self) {
        self.tilt = Tilt::default();
        self.opacity = 0.0;
        self.phase = HoloPhase::Neutral;
    }

    /// CSS `transform` for the rigid card stack
    pub fn transform_css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) scale3d(1, 1, 1)",
            self.tilt.rotate_x, self.tilt.rotate_y
        )
    }

    /// Custom properties for the holo sheen layer
    pub fn holo_style(&self) -> String {
        let inv = self.glare.inverted();
        format!(
            "--bg-x: {}%; --bg-y: {}%; --card-opacity: {};",
            inv.x, inv.y, self.opacity
        )
    }

    /// Custom properties for the glare layer
    pub fn glare_style(&self) -> String {
        format!(
            "--pointer-x: {}%; --pointer-y: {}%; --card-opacity: {};",
            self.glare.x,
            self.glare.y,
            self.glare_opacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: SurfaceRect = SurfaceRect {
        left: 100.0,
        top: 50.0,
        width: 250.0,
        height: 350.0,
    };

    #[test]
    fn test_initial_state_is_neutral() {
        let state = HoloState::new();
        assert_eq!(state.phase(), HoloPhase::Neutral);
        assert_eq!(state.tilt(), Tilt::default());
        assert_eq!(state.glare(), Glare::CENTER);
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn test_center_is_flat() {
        let mut state = HoloState::new();
        state.pointer_move(225.0, 225.0, CARD);
        assert_eq!(state.tilt().rotate_x, 0.0);
        assert_eq!(state.tilt().rotate_y, 0.0);
        assert_eq!(state.glare(), Glare::CENTER);
        assert_eq!(state.opacity(), 1.0);
        assert_eq!(state.phase(), HoloPhase::Tracking);
    }

    #[test]
    fn test_corners_hit_max_tilt() {
        let mut state = HoloState::new();

        // Top-left: top tilts away, left side comes forward
        state.pointer_move(100.0, 50.0, CARD);
        assert_eq!(state.tilt().rotate_x, 25.0);
        assert_eq!(state.tilt().rotate_y, -25.0);
        assert_eq!(state.glare(), Glare { x: 0.0, y: 0.0 });

        // Bottom-right
        state.pointer_move(350.0, 400.0, CARD);
        assert_eq!(state.tilt().rotate_x, -25.0);
        assert_eq!(state.tilt().rotate_y, 25.0);
        assert_eq!(state.glare(), Glare { x: 100.0, y: 100.0 });
    }

    #[test]
    fn test_leave_resets_tilt_but_keeps_glare() {
        let mut state = HoloState::new();
        state.pointer_move(150.0, 120.0, CARD);
        let glare = state.glare();

        state.pointer_leave();
        assert_eq!(state.tilt(), Tilt::default());
        assert_eq!(state.opacity(), 0.0);
        assert_eq!(state.glare(), glare);
        assert_eq!(state.phase(), HoloPhase::Neutral);
    }

    #[test]
    fn test_unmeasurable_rect_is_ignored() {
        let mut state = HoloState::new();
        state.pointer_move(10.0, 10.0, SurfaceRect::new(0.0, 0.0, 0.0, 300.0));
        assert_eq!(state, HoloState::new());
    }

    #[test]
    fn test_css_fragments() {
        let mut state = HoloState::new();
        // x = 25%, y = 75%
        state.pointer_move(100.0 + 62.5, 50.0 + 262.5, CARD);

        assert_eq!(
            state.transform_css(),
            "rotateX(-12.5deg) rotateY(-12.5deg) scale3d(1, 1, 1)"
        );
        assert_eq!(state.holo_style(), "--bg-x: 75%; --bg-y: 25%; --card-opacity: 1;");
        assert_eq!(
            state.glare_style(),
            "--pointer-x: 25%; --pointer-y: 75%; --card-opacity: 0.8;"
        );

        state.pointer_leave();
        assert_eq!(state.transform_css(), "rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)");
        assert!(state.glare_style().ends_with("--card-opacity: 0;"));
    }
}
