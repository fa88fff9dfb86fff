/// Open/close animation of the inventory panel.
///
/// `progress` is 1 when fully closed and 0 when fully open. Each tick moves it
/// towards the target by a fraction equal to the time accumulated since the
/// last toggle, so the motion eases in and settles once that fraction reaches 1.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelAnimation {
    progress: f32,
    elapsed: f32,
    is_open: bool,
}

impl PanelAnimation {
    pub const CLOSED: f32 = 1.0;
    pub const OPEN: f32 = 0.0;

    /// Starts fully closed.
    pub fn new() -> Self {
        Self {
            progress: Self::CLOSED,
            elapsed: 0.0,
            is_open: false,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Player movement is locked exactly while the panel is logically open.
    #[inline]
    pub fn movement_locked(&self) -> bool {
        self.is_open
    }

    /// Anything of the panel is on screen.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.progress < Self::CLOSED
    }

    pub fn target(&self) -> f32 {
        if self.is_open { Self::OPEN } else { Self::CLOSED }
    }

    /// Flips the open flag and restarts the easing. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.is_open);
        self.is_open
    }

    /// Sets the open flag, restarting the easing only when it changes.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.is_open == open {
            return false;
        }
        self.is_open = open;
        self.elapsed = 0.0;
        true
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// `cap` bounds the accumulated time and must lie in `(0, 1]`; with a cap
    /// above 1 the progress would overshoot its target.
    pub fn advance(&mut self, dt: f32, cap: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed = (self.elapsed + dt).min(cap);
        self.progress += (self.target() - self.progress) * self.elapsed;
        self.progress = self.progress.clamp(Self::OPEN, Self::CLOSED);
        self.progress
    }
}

impl Default for PanelAnimation {
    fn default() -> Self {
        Self::new()
    }
}
