use std::time::Duration;

/// How long the eased return to the rest position runs.
pub const RETURN_DURATION: Duration = Duration::from_millis(600);

/// Settle anyway if no `transitionend` arrives within this window.
pub const RETURN_FALLBACK: Duration = Duration::from_millis(900);

/// Pause between clearing the return styles and resuming the animation.
pub const RESTART_DELAY: Duration = Duration::from_millis(20);

const REST_TRANSFORM: &str = "translateX(0)";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Rest,
    Scrolling,
    /// Animation stopped, holding the transform it had when the pointer left.
    Frozen { at: String, resume: bool },
    /// Easing back to the rest position.
    Returning { resume: bool },
    /// Return styles cleared, waiting to resume scrolling.
    Restarting,
}

/// Inline presentation derived from the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeStyle {
    pub active: bool,
    pub wrap: String,
    pub label_hidden: bool,
    pub hold_text_color: bool,
}

/// Hover marquee for a button label.
///
/// Leaving while the text scrolls eases it back to the start instead of
/// snapping; entering again before it arrives resumes scrolling once the
/// return finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marquee {
    phase: Phase,
}

impl Marquee {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn enter(&mut self) {
        match &mut self.phase {
            Phase::Rest => self.phase = Phase::Scrolling,
            Phase::Frozen { resume, .. } | Phase::Returning { resume } => *resume = true,
            Phase::Scrolling | Phase::Restarting => {}
        }
    }

    /// `current` is the computed transform of the scrolling text, if known.
    pub fn leave(&mut self, current: Option<String>) {
        match &mut self.phase {
            Phase::Scrolling | Phase::Restarting => {
                let at = current
                    .filter(|t| !t.is_empty() && t != "none")
                    .unwrap_or_else(|| REST_TRANSFORM.to_string());
                self.phase = Phase::Frozen { at, resume: false };
            }
            Phase::Frozen { resume, .. } | Phase::Returning { resume } => *resume = false,
            Phase::Rest => {}
        }
    }

    /// Starts the eased return once the frozen transform has been painted.
    pub fn release(&mut self) {
        if let Phase::Frozen { resume, .. } = self.phase {
            self.phase = Phase::Returning { resume };
        }
    }

    /// Finishes the return. Yields `true` when scrolling should resume after
    /// [`RESTART_DELAY`].
    pub fn settle(&mut self) -> bool {
        match self.phase {
            Phase::Frozen { resume, .. } | Phase::Returning { resume } => {
                self.phase = if resume {
                    Phase::Restarting
                } else {
                    Phase::Rest
                };
                resume
            }
            _ => false,
        }
    }

    pub fn restart(&mut self) {
        if self.phase == Phase::Restarting {
            self.phase = Phase::Scrolling;
        }
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Frozen { .. } | Phase::Returning { .. })
    }

    pub fn style(&self) -> MarqueeStyle {
        let (active, wrap, hold_text_color) = match &self.phase {
            Phase::Rest => (false, String::new(), false),
            Phase::Scrolling => (true, String::new(), false),
            Phase::Frozen { at, .. } => (true, format!("animation: none; transform: {at};"), true),
            Phase::Returning { .. } => (
                true,
                format!(
                    "animation: none; transform: {REST_TRANSFORM}; transition: transform {}ms cubic-bezier(.22,.9,.38,1), opacity 220ms linear;",
                    RETURN_DURATION.as_millis()
                ),
                true,
            ),
            Phase::Restarting => (true, "animation: none;".to_string(), false),
        };
        MarqueeStyle {
            active,
            wrap,
            label_hidden: active,
            hold_text_color,
        }
    }
}

/// Whether a `transitionend` event marks the end of the return.
pub fn ends_return(property_name: &str) -> bool {
    property_name == "transform"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_cycle_returns_to_rest() {
        let mut marquee = Marquee::default();
        assert!(!marquee.style().active);

        marquee.enter();
        assert_eq!(marquee.phase(), &Phase::Scrolling);
        let style = marquee.style();
        assert!(style.active && style.label_hidden);
        assert!(style.wrap.is_empty());

        marquee.leave(Some("matrix(1, 0, 0, 1, -42, 0)".to_string()));
        assert!(marquee.style().wrap.contains("matrix(1, 0, 0, 1, -42, 0)"));
        marquee.release();
        assert!(marquee.style().wrap.contains("translateX(0)"));
        assert!(marquee.is_settling());

        assert!(!marquee.settle());
        assert_eq!(marquee.phase(), &Phase::Rest);
        assert!(!marquee.style().label_hidden);
    }

    #[test]
    fn test_unknown_transform_freezes_at_rest() {
        let mut marquee = Marquee::default();
        marquee.enter();
        marquee.leave(Some("none".to_string()));
        assert_eq!(
            marquee.phase(),
            &Phase::Frozen {
                at: "translateX(0)".to_string(),
                resume: false
            }
        );
    }

    #[test]
    fn test_reenter_during_return_resumes() {
        let mut marquee = Marquee::default();
        marquee.enter();
        marquee.leave(None);
        marquee.release();

        marquee.enter();
        // the return keeps running, no jump back to scrolling
        assert_eq!(marquee.phase(), &Phase::Returning { resume: true });

        assert!(marquee.settle());
        assert_eq!(marquee.phase(), &Phase::Restarting);
        assert!(marquee.style().label_hidden);

        marquee.restart();
        assert_eq!(marquee.phase(), &Phase::Scrolling);
    }

    #[test]
    fn test_leave_again_cancels_resume() {
        let mut marquee = Marquee::default();
        marquee.enter();
        marquee.leave(None);
        marquee.enter();
        marquee.leave(None);
        marquee.release();
        assert!(!marquee.settle());
        assert_eq!(marquee.phase(), &Phase::Rest);
    }

    #[test]
    fn test_fallback_settle_before_release() {
        let mut marquee = Marquee::default();
        marquee.enter();
        marquee.leave(None);
        assert!(!marquee.settle());
        assert_eq!(marquee.phase(), &Phase::Rest);
        // late frame callback is harmless
        marquee.release();
        assert_eq!(marquee.phase(), &Phase::Rest);
    }

    #[test]
    fn test_stray_events_are_ignored() {
        let mut marquee = Marquee::default();
        assert!(!marquee.settle());
        marquee.restart();
        marquee.leave(None);
        assert_eq!(marquee.phase(), &Phase::Rest);

        marquee.enter();
        marquee.enter();
        assert!(!marquee.settle());
        assert_eq!(marquee.phase(), &Phase::Scrolling);
    }

    #[test]
    fn test_only_transform_transition_ends_return() {
        assert!(ends_return("transform"));
        assert!(!ends_return("opacity"));
    }
}
