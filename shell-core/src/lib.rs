use serde::{Deserialize, Serialize};

/// Milliseconds the embedded frame gets to signal a successful load
/// before the shell gives up and shows the error panel.
pub const LOAD_TIMEOUT_MS: u32 = 10_000;

/// Scroll offset (px) past which the frame takes over the viewport.
pub const FULLSCREEN_THRESHOLD_PX: f64 = 150.0;

/// Inline frame height cap when not fullscreen.
pub const FRAME_MAX_HEIGHT_PX: f64 = 500.0;

/// Inline frame height as a fraction of the viewport when not fullscreen.
pub const FRAME_VIEWPORT_RATIO: f64 = 0.7;

/// Below this opacity the header collapses to zero height and stops
/// receiving pointer events.
pub const HEADER_HIDE_OPACITY: f64 = 0.1;

/// Lifecycle of the embedded content frame.
///
/// `Loading` and `Errored` cycle indefinitely through retries; there is
/// no terminal state. Once `Loaded`, the load timeout no longer applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStatus {
    #[default]
    Loading,
    Loaded,
    Errored,
}

/// Which of the two stacked logos sits in the foreground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoSlot {
    #[default]
    Primary,
    Secondary,
}

impl LogoSlot {
    pub fn other(self) -> Self {
        match self {
            LogoSlot::Primary => LogoSlot::Secondary,
            LogoSlot::Secondary => LogoSlot::Primary,
        }
    }

    pub fn index(self) -> usize {
        match self {
            LogoSlot::Primary => 0,
            LogoSlot::Secondary => 1,
        }
    }
}

/// The shell's entire mutable state. Held by the view for the lifetime
/// of the page; nothing persists across reloads.
///
/// Every mutation goes through a transition method so the frame state
/// machine cannot be driven into an inconsistent shape from the view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellState {
    pub frame: FrameStatus,
    pub dark_theme: bool,
    pub scroll_y: f64,
    pub active_logo: LogoSlot,
}

impl ShellState {
    pub fn is_loading(&self) -> bool {
        self.frame == FrameStatus::Loading
    }

    pub fn frame_loaded(&self) -> bool {
        self.frame == FrameStatus::Loaded
    }

    pub fn has_error(&self) -> bool {
        self.frame == FrameStatus::Errored
    }

    /// The embedded content signalled a successful load. Clears any
    /// error that raced with it.
    pub fn on_frame_load(&mut self) {
        self.frame = FrameStatus::Loaded;
    }

    /// The embedded content signalled a load failure.
    pub fn on_frame_error(&mut self) {
        self.frame = FrameStatus::Errored;
    }

    /// The bounded wait expired. Only counts while still loading: a
    /// stale timer firing after a late successful load is a no-op.
    pub fn on_load_timeout(&mut self) {
        if self.frame == FrameStatus::Loading {
            self.frame = FrameStatus::Errored;
        }
    }

    /// User asked for a fresh load attempt: back to `Loading`, which
    /// re-displays the frame element and re-arms the timeout.
    pub fn retry(&mut self) {
        self.frame = FrameStatus::Loading;
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.dark_theme = dark;
    }

    /// Bring one logo to the foreground (click/hover/touch on it).
    pub fn focus_logo(&mut self, slot: LogoSlot) {
        self.active_logo = slot;
    }

    pub fn toggle_logo(&mut self) {
        self.active_logo = self.active_logo.other();
    }
}

// ---------- Layout derivations ----------------------------------------------
//
// Pure functions of (scroll offset, viewport height). The view calls
// these on every relevant change; nothing here is cached.

/// Header opacity fades linearly from 1 at the top of the page to 0 at
/// the fullscreen threshold. Clamped so rubber-band (negative) scroll
/// offsets still read as fully opaque.
pub fn header_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / FULLSCREEN_THRESHOLD_PX).clamp(0.0, 1.0)
}

/// Map a continuous opacity onto the discrete transition tiers the
/// stylesheet animates between.
pub fn opacity_class(opacity: f64) -> &'static str {
    if opacity > 0.9 {
        "opacity-100"
    } else if opacity > 0.7 {
        "opacity-75"
    } else if opacity > 0.5 {
        "opacity-50"
    } else if opacity > 0.2 {
        "opacity-25"
    } else if opacity > 0.1 {
        "opacity-10"
    } else {
        "opacity-0"
    }
}

/// Whether the header still occupies layout space and takes input.
pub fn header_visible(opacity: f64) -> bool {
    opacity >= HEADER_HIDE_OPACITY
}

pub fn is_fullscreen(scroll_y: f64) -> bool {
    scroll_y > FULLSCREEN_THRESHOLD_PX
}

/// Frame height policy: full viewport once fullscreen, otherwise capped
/// at 500px and at 70% of the viewport, whichever is smaller.
pub fn frame_height_px(scroll_y: f64, viewport_h: f64) -> f64 {
    if is_fullscreen(scroll_y) {
        viewport_h
    } else {
        FRAME_MAX_HEIGHT_PX.min(viewport_h * FRAME_VIEWPORT_RATIO)
    }
}

/// The outer container is kept at twice the viewport height so there is
/// always room to scroll into the fullscreen state.
pub fn container_min_height_px(viewport_h: f64) -> f64 {
    viewport_h * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_full_at_top_and_above() {
        assert_eq!(header_opacity(0.0), 1.0);
        assert_eq!(header_opacity(-80.0), 1.0);
    }

    #[test]
    fn opacity_zero_at_threshold_and_beyond() {
        assert_eq!(header_opacity(150.0), 0.0);
        assert_eq!(header_opacity(900.0), 0.0);
    }

    #[test]
    fn opacity_monotonically_non_increasing() {
        let mut prev = header_opacity(0.0);
        for step in 1..=150 {
            let cur = header_opacity(step as f64);
            assert!(cur <= prev, "opacity rose at scroll_y={step}");
            prev = cur;
        }
    }

    #[test]
    fn opacity_tiers_cover_the_range() {
        assert_eq!(opacity_class(1.0), "opacity-100");
        assert_eq!(opacity_class(0.8), "opacity-75");
        assert_eq!(opacity_class(0.6), "opacity-50");
        assert_eq!(opacity_class(0.3), "opacity-25");
        assert_eq!(opacity_class(0.15), "opacity-10");
        assert_eq!(opacity_class(0.05), "opacity-0");
    }

    #[test]
    fn header_hides_below_cutoff() {
        assert!(header_visible(1.0));
        assert!(header_visible(HEADER_HIDE_OPACITY));
        assert!(!header_visible(0.09));
    }

    #[test]
    fn fullscreen_strictly_past_threshold() {
        assert!(!is_fullscreen(0.0));
        assert!(!is_fullscreen(150.0));
        assert!(is_fullscreen(150.5));
    }

    #[test]
    fn inline_frame_height_obeys_both_caps() {
        // Tall viewport: the 500px cap wins.
        assert_eq!(frame_height_px(0.0, 1000.0), 500.0);
        // Short viewport: the 70% cap wins.
        assert!((frame_height_px(0.0, 600.0) - 420.0).abs() < 1e-9);
        let h = frame_height_px(10.0, 830.0);
        assert!(h <= FRAME_MAX_HEIGHT_PX);
        assert!(h <= 830.0 * FRAME_VIEWPORT_RATIO);
    }

    #[test]
    fn fullscreen_frame_fills_viewport() {
        assert_eq!(frame_height_px(200.0, 768.0), 768.0);
    }

    #[test]
    fn container_always_double_viewport() {
        assert_eq!(container_min_height_px(900.0), 1800.0);
    }

    #[test]
    fn logo_toggle_is_an_involution() {
        let mut state = ShellState::default();
        assert_eq!(state.active_logo, LogoSlot::Primary);
        state.toggle_logo();
        assert_eq!(state.active_logo, LogoSlot::Secondary);
        state.toggle_logo();
        assert_eq!(state.active_logo, LogoSlot::Primary);
    }

    #[test]
    fn focus_logo_is_idempotent() {
        let mut state = ShellState::default();
        state.focus_logo(LogoSlot::Secondary);
        state.focus_logo(LogoSlot::Secondary);
        assert_eq!(state.active_logo.index(), 1);
    }

    #[test]
    fn timeout_while_loading_errors() {
        let mut state = ShellState::default();
        assert!(state.is_loading());
        state.on_load_timeout();
        assert!(state.has_error());
        assert!(!state.frame_loaded());
    }

    #[test]
    fn stale_timeout_after_load_is_ignored() {
        let mut state = ShellState::default();
        state.on_frame_load();
        state.on_load_timeout();
        assert!(state.frame_loaded());
        assert!(!state.has_error());
    }

    #[test]
    fn error_signal_errors() {
        let mut state = ShellState::default();
        state.on_frame_error();
        assert!(state.has_error());
    }

    #[test]
    fn retry_returns_to_loading() {
        let mut state = ShellState::default();
        state.on_load_timeout();
        assert!(state.has_error());
        state.retry();
        assert!(state.is_loading());
        assert!(!state.has_error());
        // A fresh timeout applies again after the retry.
        state.on_load_timeout();
        assert!(state.has_error());
    }

    #[test]
    fn load_clears_prior_error() {
        let mut state = ShellState::default();
        state.on_frame_error();
        state.retry();
        state.on_frame_load();
        assert!(state.frame_loaded());
        assert!(!state.has_error());
    }

    #[test]
    fn error_and_loaded_are_mutually_exclusive() {
        for status in [FrameStatus::Loading, FrameStatus::Loaded, FrameStatus::Errored] {
            let state = ShellState {
                frame: status,
                ..Default::default()
            };
            assert!(!(state.has_error() && state.frame_loaded()));
        }
    }

    #[test]
    fn state_roundtrip() {
        let state = ShellState {
            frame: FrameStatus::Errored,
            dark_theme: true,
            scroll_y: 120.0,
            active_logo: LogoSlot::Secondary,
        };
        let json = serde_json::to_string(&state).unwrap();
        let decoded: ShellState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.frame, FrameStatus::Errored);
        assert!(decoded.dark_theme);
        assert_eq!(decoded.active_logo, LogoSlot::Secondary);
    }
}
