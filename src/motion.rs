//! Entry animations: poses, presets and the one-shot reveal state machine.
//!
//! Animations are CSS transitions. An element renders its preset's initial
//! pose until it is revealed, then switches to [`Pose::RESTING`] and lets the
//! browser ease between the two.

use crate::pointer::PointerPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    EaseOut,
    BackOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Self::BackOut => "cubic-bezier(0.33, 1.53, 0.69, 0.99)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const RESTING: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::RESTING
        }
    }

    fn css(self) -> String {
        format!(
            "opacity: {:.2}; transform: translate3d({:.1}px, {:.1}px, 0) scale({:.2});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// What starts an element's reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// First frame after the element mounts.
    Mount,
    /// First time the element intersects the viewport.
    Viewport,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPreset {
    pub initial: Pose,
    pub duration_secs: f64,
    pub ease: Ease,
    /// Per-index start offset for list members.
    pub stagger_secs: f64,
    pub trigger: Trigger,
}

impl MotionPreset {
    pub const NAV_TITLE: Self = Self {
        initial: Pose {
            y: -20.0,
            ..Pose::hidden()
        },
        duration_secs: 0.5,
        ease: Ease::EaseOut,
        stagger_secs: 0.0,
        trigger: Trigger::Mount,
    };

    pub const HERO: Self = Self {
        initial: Pose {
            y: 20.0,
            ..Pose::hidden()
        },
        duration_secs: 0.6,
        ease: Ease::EaseOut,
        stagger_secs: 0.0,
        trigger: Trigger::Mount,
    };

    pub const SECTION: Self = Self {
        initial: Pose::hidden(),
        duration_secs: 0.6,
        ease: Ease::EaseOut,
        stagger_secs: 0.0,
        trigger: Trigger::Viewport,
    };

    pub const PROJECT_CARD: Self = Self {
        initial: Pose {
            y: 20.0,
            ..Pose::hidden()
        },
        duration_secs: 0.5,
        ease: Ease::EaseOut,
        stagger_secs: 0.2,
        trigger: Trigger::Viewport,
    };

    pub const SKILL_CHIP: Self = Self {
        initial: Pose {
            scale: 0.8,
            ..Pose::hidden()
        },
        duration_secs: 0.4,
        ease: Ease::EaseOut,
        stagger_secs: 0.1,
        trigger: Trigger::Viewport,
    };

    pub const CERTIFICATE_CARD: Self = Self {
        initial: Pose {
            x: -20.0,
            ..Pose::hidden()
        },
        duration_secs: 0.5,
        ease: Ease::EaseOut,
        stagger_secs: 0.2,
        trigger: Trigger::Viewport,
    };

    /// Start offset for the list member at `index`. Not capped.
    pub fn delay_for(&self, index: usize) -> f64 {
        stagger_delay(index, self.stagger_secs)
    }

    pub fn pose(&self, visibility: Visibility) -> Pose {
        match visibility {
            Visibility::Unseen => self.initial,
            Visibility::Visible => Pose::RESTING,
        }
    }

    /// Inline style for an element in `visibility`, starting `delay_secs`
    /// after it is revealed.
    pub fn style(&self, visibility: Visibility, delay_secs: f64) -> String {
        let timing = format!(
            "{:.2}s {} {:.2}s",
            self.duration_secs,
            self.ease.css(),
            delay_secs
        );
        format!(
            "{} transition: opacity {timing}, transform {timing};",
            self.pose(visibility).css()
        )
    }
}

pub fn stagger_delay(index: usize, unit_secs: f64) -> f64 {
    index as f64 * unit_secs
}

/// Cursor ring follow: short tween with a slight overshoot.
pub const CURSOR_TWEEN_SECS: f64 = 0.1;

pub fn cursor_style(pointer: PointerPosition) -> String {
    let origin = pointer.cursor_origin();
    format!(
        "transform: translate3d({:.1}px, {:.1}px, 0); transition: transform {CURSOR_TWEEN_SECS}s {};",
        origin.x,
        origin.y,
        Ease::BackOut.css()
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unseen,
    Visible,
}

/// One-shot `unseen -> visible` transition for a single element.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealTracker {
    visibility: Visibility,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one intersection sample. Returns `true` only on the call that
    /// performs the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visibility == Visibility::Visible || !intersecting {
            return false;
        }
        self.visibility = Visibility::Visible;
        true
    }

    /// Reveals without an intersection sample, for environments that cannot
    /// observe the viewport.
    pub fn reveal_now(&mut self) -> bool {
        self.observe(true)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether intersection still needs to be observed.
    pub fn is_watching(&self) -> bool {
        self.visibility == Visibility::Unseen
    }
}
