use serde::Deserialize;

use super::context::ViewportContext;
use super::position::resolve_anchor;
use super::{Size, WidgetId};

/// Smallest fade duration accepted; keeps the opacity ramp finite.
const MIN_FADE_DURATION: f32 = 0.001;
/// Opacities below this read as fully transparent. Absorbs f32 drift from
/// summing frame deltas, so a timer that should sit exactly on `delay`
/// does not leak a sliver of alpha.
const OPACITY_EPSILON: f32 = 1e-4;

/// Hover delay and fade envelope, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipTiming {
    /// Hover time before the tooltip starts to fade in.
    pub delay: f32,
    /// Length of the linear fade in either direction.
    pub fade_duration: f32,
}

impl Default for TooltipTiming {
    fn default() -> Self {
        Self {
            delay: 1.0,
            fade_duration: 0.2,
        }
    }
}

impl TooltipTiming {
    /// Clamp out values that would break the envelope (negative delay,
    /// zero or negative fade).
    pub fn sanitized(self) -> Self {
        Self {
            delay: self.delay.max(0.0),
            fade_duration: self.fade_duration.max(MIN_FADE_DURATION),
        }
    }

    /// Upper bound for the timer. Not reached under normal show/hide
    /// alternation; kept as a safety bound.
    fn ceiling(&self) -> f32 {
        2.0 * self.delay + self.fade_duration
    }

    /// Timer value at which opacity first reaches 1.
    fn full(&self) -> f32 {
        self.delay + self.fade_duration
    }

    fn opacity_at(&self, elapsed: f32) -> f32 {
        let opacity = ((elapsed - self.delay) / self.fade_duration).clamp(0.0, 1.0);
        if opacity < OPACITY_EPSILON { 0.0 } else { opacity }
    }
}

/// One hover request from the host: who is hovered and what to say.
#[derive(Debug, Clone)]
pub struct TooltipRequest {
    pub target: WidgetId,
    pub title: String,
    pub body: String,
}

/// Visibility and fade state for the single floating tooltip.
///
/// One timer drives both the hover delay and the fade: it climbs while the
/// tooltip is wanted and decays while it is not, and opacity is read off it
/// through the same linear ramp in both directions. A tooltip re-shown
/// mid-fade therefore picks up from its current opacity.
///
/// Call order per frame: `show`/`hide` from input handling, then `advance`,
/// then the accessors from the render step.
#[derive(Debug, Clone)]
pub struct TooltipController {
    timing: TooltipTiming,
    visible: bool,
    target: Option<WidgetId>,
    title: String,
    body: String,
    elapsed: f32,
    opacity: f32,
    /// Set by `force_hide`; cleared when a new target is adopted.
    collapsed: bool,
    cursor: (f32, f32),
    viewport: Option<Size>,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipController {
    pub fn new() -> Self {
        Self::with_timing(TooltipTiming::default())
    }

    pub fn with_timing(timing: TooltipTiming) -> Self {
        Self {
            timing: timing.sanitized(),
            visible: false,
            target: None,
            title: String::new(),
            body: String::new(),
            elapsed: 0.0,
            opacity: 0.0,
            collapsed: false,
            cursor: (0.0, 0.0),
            viewport: None,
        }
    }

    pub fn timing(&self) -> TooltipTiming {
        self.timing
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Hover entered `target`. An empty title means "nothing to show" and
    /// hides the tooltip; a repeated call for the active target is ignored.
    pub fn show(&mut self, target: WidgetId, title: &str, body: &str) {
        if self.should_adopt(target, title) {
            self.adopt(target, title.to_string(), body.to_string());
        }
    }

    /// Owned-string form of [`show`](Self::show).
    pub fn show_request(&mut self, request: TooltipRequest) {
        if self.should_adopt(request.target, &request.title) {
            self.adopt(request.target, request.title, request.body);
        }
    }

    /// Shared gate for both show forms. Clears the tooltip on an empty
    /// title; returns true only for a new target with something to say.
    fn should_adopt(&mut self, target: WidgetId, title: &str) -> bool {
        if title.is_empty() {
            self.visible = false;
            self.target = None;
            return false;
        }
        self.target != Some(target)
    }

    fn adopt(&mut self, target: WidgetId, title: String, body: String) {
        self.collapsed = false;
        self.target = Some(target);
        self.title = title;
        self.body = body;
        // Whitespace-only bodies keep the target but never fade in.
        self.visible = !self.body.trim().is_empty();
        log::debug!(
            "tooltip target {:?} \"{}\" (visible: {}, t={:.3})",
            target,
            self.title,
            self.visible,
            self.elapsed
        );
    }

    /// Hover left `target`. Stale hides for a target that is no longer
    /// active are ignored so they cannot cancel a newer tooltip.
    pub fn hide(&mut self, target: WidgetId) {
        if self.target != Some(target) {
            return;
        }
        self.visible = false;
        self.target = None;
        log::debug!("tooltip hide {:?} (t={:.3})", target, self.elapsed);
    }

    /// Hard reset: opacity drops to zero immediately and the widget stops
    /// taking part in layout and hit-testing until a new target is shown.
    pub fn force_hide(&mut self) {
        if !self.collapsed {
            log::debug!("tooltip force-hidden");
        }
        self.visible = false;
        self.target = None;
        self.elapsed = self.timing.fade_duration;
        self.opacity = 0.0;
        self.collapsed = true;
    }

    /// Per-frame step. Busy hosts force the tooltip away before anything
    /// else is considered.
    pub fn advance(&mut self, dt: f32, ctx: &impl ViewportContext) {
        self.cursor = ctx.cursor_position();
        self.viewport = ctx.viewport_size();

        if ctx.is_game_busy() {
            self.force_hide();
            return;
        }

        let dt = dt.max(0.0);
        if !self.visible {
            // Fade out from full opacity no matter how long the hover was.
            self.elapsed = self.elapsed.min(self.timing.full());
        }
        let step = if self.visible { dt } else { -dt };
        self.elapsed = (self.elapsed + step).clamp(0.0, self.timing.ceiling());
        self.opacity = self.timing.opacity_at(self.elapsed);
    }

    // -----------------------------------------------------------------------
    // Render-side accessors
    // -----------------------------------------------------------------------

    /// Current alpha multiplier in [0, 1].
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Top-left position for a content box of the given size, using the
    /// cursor and viewport captured by the last `advance`.
    pub fn anchor(&self, content: Size) -> (f32, f32) {
        resolve_anchor(self.cursor, content, self.viewport)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn target(&self) -> Option<WidgetId> {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// False while hidden, so the host can skip hit-testing the panel.
    pub fn is_interactive(&self) -> bool {
        self.visible && !self.collapsed
    }
}
