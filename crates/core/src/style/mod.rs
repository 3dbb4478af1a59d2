//! Custom properties and keyframe names shared with the stylesheet.
//!
//! The stylesheet owns the keyframes; this module only knows which custom
//! properties parameterize them. Property names always live in the `--mb-`
//! namespace regardless of the markup prefix.

use std::collections::BTreeMap;

use crate::schema::{Acceleration, AnimationType, Direction, Keyword};

pub const DURATION_VAR: &str = "--mb-duration";
pub const DELAY_VAR: &str = "--mb-delay";
pub const TIMING_VAR: &str = "--mb-timing";
pub const BLUR_AMOUNT_VAR: &str = "--mb-blur-amount";
pub const ITERATION_COUNT_VAR: &str = "--mb-iteration-count";
pub const ANIMATION_DIRECTION_VAR: &str = "--mb-direction";
pub const FILL_MODE_VAR: &str = "--mb-fill-mode";

/// Ordered property map applied as inline style.
pub type CssVars = BTreeMap<String, String>;

/// Custom properties that position the keyframes for a type and direction.
///
/// Returns an empty slice when the pair has no variant, which leaves the
/// stylesheet defaults in place.
pub fn direction_vars(
    kind: AnimationType,
    direction: Option<Direction>,
) -> &'static [(&'static str, &'static str)] {
    use AnimationType::*;
    use Direction::*;

    let Some(direction) = direction else {
        return &[];
    };
    match (kind, direction) {
        (Slide, Ltr) => &[("--mb-slide-x", "-30px"), ("--mb-slide-y", "0")],
        (Slide, Rtl) => &[("--mb-slide-x", "30px"), ("--mb-slide-y", "0")],
        (Slide, Ttb) => &[("--mb-slide-x", "0"), ("--mb-slide-y", "-30px")],
        (Slide, Btt) => &[("--mb-slide-x", "0"), ("--mb-slide-y", "30px")],

        (Wipe, Ltr) => &[("--mb-wipe-from", "inset(0 100% 0 0)")],
        (Wipe, Rtl) => &[("--mb-wipe-from", "inset(0 0 0 100%)")],
        (Wipe, Ttb) => &[("--mb-wipe-from", "inset(100% 0 0 0)")],
        (Wipe, Btt) => &[("--mb-wipe-from", "inset(0 0 100% 0)")],

        (Curtain, Outward) => &[("--mb-curtain-from", "inset(0 50% 0 50%)")],
        (Curtain, Inward) => &[("--mb-curtain-from", "inset(50% 0 50% 0)")],

        (Flip, Ltr) => &[("--mb-flip-transform", "rotateY(-90deg)")],
        (Flip, Rtl) => &[("--mb-flip-transform", "rotateY(90deg)")],
        (Flip, Ttb) => &[("--mb-flip-transform", "rotateX(90deg)")],
        (Flip, Btt) => &[("--mb-flip-transform", "rotateX(-90deg)")],

        (Scale, Centered) => &[("--mb-scale-x", "0"), ("--mb-scale-y", "0")],
        (Scale, Btt) => &[("--mb-scale-x", "0"), ("--mb-scale-y", "30px")],
        (Scale, Ttb) => &[("--mb-scale-x", "0"), ("--mb-scale-y", "-30px")],
        (Scale, Ltr) => &[("--mb-scale-x", "-30px"), ("--mb-scale-y", "0")],
        (Scale, Rtl) => &[("--mb-scale-x", "30px"), ("--mb-scale-y", "0")],

        _ => &[],
    }
}

/// Entrance keyframe for a type.
pub fn enter_keyframe(kind: AnimationType) -> &'static str {
    match kind {
        AnimationType::Fade => "mbFadeIn",
        AnimationType::Slide => "mbSlideIn",
        AnimationType::Wipe => "mbWipeIn",
        AnimationType::Curtain => "mbCurtainReveal",
        AnimationType::Flip => "mbFlipIn",
        AnimationType::Scale => "mbScaleIn",
        AnimationType::Blur => "mbBlurIn",
    }
}

/// Exit keyframe for a type. Flip has no exit of its own and fades out.
pub fn exit_keyframe(kind: AnimationType) -> &'static str {
    match kind {
        AnimationType::Fade | AnimationType::Flip => "mbFadeOut",
        AnimationType::Slide => "mbSlideOut",
        AnimationType::Wipe => "mbWipeOut",
        AnimationType::Curtain => "mbCurtainClose",
        AnimationType::Scale => "mbScaleOut",
        AnimationType::Blur => "mbBlurOut",
    }
}

/// `0.6` -> `0.6s`
pub fn seconds(value: f64) -> String {
    format!("{value}s")
}

pub fn pixels(value: u32) -> String {
    format!("{value}px")
}

pub(crate) fn insert_direction_vars(
    vars: &mut CssVars,
    kind: AnimationType,
    direction: Option<Direction>,
) {
    for (name, value) in direction_vars(kind, direction) {
        vars.insert((*name).to_string(), (*value).to_string());
    }
}

pub(crate) fn insert_timing_vars(
    vars: &mut CssVars,
    duration: f64,
    delay: f64,
    acceleration: Acceleration,
) {
    vars.insert(DURATION_VAR.to_string(), seconds(duration));
    vars.insert(DELAY_VAR.to_string(), seconds(delay));
    vars.insert(TIMING_VAR.to_string(), acceleration.as_str().to_string());
}
