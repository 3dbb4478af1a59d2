//! Typed animation configuration attached to a content block.
//!
//! [`AnimationConfig`] is the strongly typed view of the loosely typed
//! attribute bag the host stores on each block. Deserialization goes through
//! [`BlockAttributes`], which tolerates missing keys, unknown keywords and
//! stray non-animation metadata, so a record read from the host always
//! yields a usable configuration.

use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::timeline::{RangeOffset, ScrollRange};

pub const DEFAULT_DURATION: f64 = 0.6;
pub const DEFAULT_DELAY: f64 = 0.4;
pub const DEFAULT_EXIT_DURATION: f64 = 0.6;
pub const DEFAULT_EXIT_DELAY: f64 = 0.0;
pub const DEFAULT_BLUR_AMOUNT: u32 = 8;

/// Slider bounds exposed by the editing surface.
pub const DURATION_CONTROL: RangeInclusive<f64> = 0.1..=2.0;
pub const DELAY_CONTROL: RangeInclusive<f64> = 0.0..=4.0;
pub const BLUR_CONTROL: RangeInclusive<u32> = 1..=20;

/// Closed set of string keywords stored in block attributes.
pub trait Keyword: Sized + Copy + 'static {
    /// Attribute name used in error messages.
    const FIELD: &'static str;

    fn parse(value: &str) -> Option<Self>;

    fn as_str(self) -> &'static str;
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::schema::Keyword for $name {
            const FIELD: &'static str = $field;

            fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::schema::Keyword::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::MotionError;

            fn from_str(s: &str) -> $crate::Result<Self> {
                <$name as $crate::schema::Keyword>::parse(s)
                    .ok_or_else(|| $crate::MotionError::keyword($field, s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::schema::Keyword::as_str(*self))
            }
        }
    };
}

pub(crate) use keyword_enum;

keyword_enum!(
    /// How an animation is activated on the live page.
    Mode("mode") {
        PageLoad => "page-load",
        ScrollAppear => "scroll-appear",
        ScrollInteractive => "scroll-interactive",
    }
);

keyword_enum!(
    /// Visual effect played by an animation.
    AnimationType("type") {
        Fade => "fade",
        Slide => "slide",
        Wipe => "wipe",
        Curtain => "curtain",
        Flip => "flip",
        Scale => "scale",
        Blur => "blur",
    }
);

keyword_enum!(
    /// Direction variant of a directional [`AnimationType`].
    Direction("direction") {
        Ltr => "ltr",
        Rtl => "rtl",
        Ttb => "ttb",
        Btt => "btt",
        Outward => "outward",
        Inward => "inward",
        /// Scale in place without any offset.
        Centered => "none",
    }
);

keyword_enum!(
    /// CSS timing function.
    #[derive(Default)]
    Acceleration("acceleration") {
        #[default]
        Ease => "ease",
        Linear => "linear",
        EaseIn => "ease-in",
        EaseOut => "ease-out",
        EaseInOut => "ease-in-out",
    }
);

keyword_enum!(
    /// Repetition of a page-load animation.
    #[derive(Default)]
    Repeat("repeat") {
        #[default]
        Once => "once",
        Loop => "loop",
        Alternate => "alternate",
    }
);

keyword_enum!(
    /// Viewport transitions that play a scroll-appear animation.
    #[derive(Default)]
    ScrollTrigger("scroll-trigger") {
        #[default]
        Enter => "enter",
        Exit => "exit",
        Both => "both",
    }
);

keyword_enum!(
    /// Source of the exit visuals when a scroll-appear animation also exits.
    #[derive(Default)]
    ExitMode("exit-mode") {
        #[default]
        Mirror => "mirror",
        Custom => "custom",
    }
);

impl AnimationType {
    /// Direction variants available for this type, empty when the type has
    /// none.
    pub fn directions(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            Self::Slide => &[Btt, Ttb, Ltr, Rtl],
            Self::Wipe | Self::Flip => &[Ltr, Rtl, Ttb, Btt],
            Self::Curtain => &[Outward, Inward],
            Self::Scale => &[Centered, Btt, Ttb, Ltr, Rtl],
            Self::Fade | Self::Blur => &[],
        }
    }

    pub fn has_direction(self) -> bool {
        !self.directions().is_empty()
    }

    pub fn supports(self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }

    /// Direction picked when the type is first selected.
    pub fn default_direction(self) -> Option<Direction> {
        match self {
            Self::Slide => Some(Direction::Btt),
            Self::Wipe | Self::Flip => Some(Direction::Ltr),
            Self::Curtain => Some(Direction::Outward),
            Self::Scale => Some(Direction::Centered),
            Self::Fade | Self::Blur => None,
        }
    }

    /// Flip is entrance-only.
    pub fn has_exit(self) -> bool {
        !matches!(self, Self::Flip)
    }

    /// Keeps `direction` only when it belongs to this type's domain.
    pub fn resolve_direction(self, direction: Option<Direction>) -> Option<Direction> {
        direction.filter(|dir| self.supports(*dir))
    }
}

impl Repeat {
    pub fn is_looping(self) -> bool {
        matches!(self, Self::Loop | Self::Alternate)
    }
}

impl ScrollTrigger {
    pub fn plays_enter(self) -> bool {
        matches!(self, Self::Enter | Self::Both)
    }

    pub fn plays_exit(self) -> bool {
        matches!(self, Self::Exit | Self::Both)
    }
}

/// The animation-relevant subset of a block's attributes.
///
/// This is what travels through the clipboard: it excludes the editor-only
/// preview flags and any unrelated block metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BlockAttributes")]
pub struct AnimationSettings {
    #[serde(rename = "animationMode", serialize_with = "keyword_or_empty")]
    pub mode: Option<Mode>,
    #[serde(rename = "animationType", serialize_with = "keyword_or_empty")]
    pub kind: Option<AnimationType>,
    #[serde(rename = "animationDirection", serialize_with = "keyword_or_empty")]
    pub direction: Option<Direction>,
    #[serde(rename = "animationDuration")]
    pub duration: f64,
    #[serde(rename = "animationDelay")]
    pub delay: f64,
    #[serde(rename = "animationAcceleration")]
    pub acceleration: Acceleration,
    #[serde(rename = "animationBlurAmount")]
    pub blur_amount: u32,
    #[serde(rename = "animationRepeat")]
    pub repeat: Repeat,
    #[serde(rename = "animationPauseOffscreen")]
    pub pause_offscreen: bool,
    #[serde(rename = "animationScrollTrigger")]
    pub scroll_trigger: ScrollTrigger,
    #[serde(rename = "animationPlayOnce")]
    pub play_once: bool,
    #[serde(rename = "animationExitMode")]
    pub exit_mode: ExitMode,
    #[serde(rename = "animationExitType")]
    pub exit_type: AnimationType,
    #[serde(rename = "animationExitDirection", serialize_with = "keyword_or_empty")]
    pub exit_direction: Option<Direction>,
    #[serde(rename = "animationExitDuration")]
    pub exit_duration: f64,
    #[serde(rename = "animationExitDelay")]
    pub exit_delay: f64,
    #[serde(rename = "animationExitAcceleration")]
    pub exit_acceleration: Acceleration,
    #[serde(rename = "animationRangeStart")]
    pub range_start: RangeOffset,
    #[serde(rename = "animationRangeEnd")]
    pub range_end: RangeOffset,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        let range = ScrollRange::default();
        Self {
            mode: None,
            kind: Some(AnimationType::Fade),
            direction: None,
            duration: DEFAULT_DURATION,
            delay: DEFAULT_DELAY,
            acceleration: Acceleration::Ease,
            blur_amount: DEFAULT_BLUR_AMOUNT,
            repeat: Repeat::Once,
            pause_offscreen: true,
            scroll_trigger: ScrollTrigger::Enter,
            play_once: true,
            exit_mode: ExitMode::Mirror,
            exit_type: AnimationType::Fade,
            exit_direction: None,
            exit_duration: DEFAULT_EXIT_DURATION,
            exit_delay: DEFAULT_EXIT_DELAY,
            exit_acceleration: Acceleration::Ease,
            range_start: range.start,
            range_end: range.end,
        }
    }
}

impl AnimationSettings {
    /// Pulls every slider-backed value back into the range the editing
    /// surface offers.
    pub fn clamp_to_controls(&mut self) {
        self.duration = clamp_seconds(self.duration, &DURATION_CONTROL, DEFAULT_DURATION);
        self.exit_duration =
            clamp_seconds(self.exit_duration, &DURATION_CONTROL, DEFAULT_EXIT_DURATION);
        self.delay = clamp_seconds(self.delay, &DELAY_CONTROL, DEFAULT_DELAY);
        self.exit_delay = clamp_seconds(self.exit_delay, &DELAY_CONTROL, DEFAULT_EXIT_DELAY);
        self.blur_amount = self
            .blur_amount
            .clamp(*BLUR_CONTROL.start(), *BLUR_CONTROL.end());
    }
}

fn clamp_seconds(value: f64, control: &RangeInclusive<f64>, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*control.start(), *control.end())
    } else {
        default
    }
}

/// Editor-only state that never reaches persisted markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewState {
    #[serde(rename = "animationPreviewEnabled")]
    pub enabled: bool,
    #[serde(rename = "animationPreviewPlaying")]
    pub playing: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            enabled: true,
            playing: false,
        }
    }
}

/// Full animation record owned by a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BlockAttributes")]
pub struct AnimationConfig {
    #[serde(flatten)]
    pub settings: AnimationSettings,
    #[serde(flatten)]
    pub preview: PreviewState,
}

/// Full default record.
pub fn defaults() -> AnimationConfig {
    AnimationConfig::default()
}

/// Animation-only subset of `config`, as copied to the clipboard.
pub fn pick(config: &AnimationConfig) -> AnimationSettings {
    config.settings.clone()
}

impl AnimationConfig {
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            settings,
            preview: PreviewState::default(),
        }
    }

    /// Parses a host attribute record, ignoring unrelated keys.
    pub fn from_json(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// `true` when the record describes an animation that will render.
    pub fn is_active(&self) -> bool {
        self.settings.mode.is_some() && self.settings.kind.is_some()
    }

    /// Picks a mode and restores every animation field to its default.
    pub fn select_mode(&mut self, mode: Mode) {
        self.settings = AnimationSettings {
            mode: Some(mode),
            repeat: self.settings.repeat,
            pause_offscreen: self.settings.pause_offscreen,
            play_once: self.settings.play_once,
            range_start: self.settings.range_start,
            range_end: self.settings.range_end,
            ..AnimationSettings::default()
        };
    }

    /// Sets the enter type together with that type's default direction.
    pub fn set_type(&mut self, kind: AnimationType) {
        self.settings.kind = Some(kind);
        self.settings.direction = kind.default_direction();
    }

    /// Sets the custom exit type together with its default direction.
    pub fn set_exit_type(&mut self, kind: AnimationType) {
        self.settings.exit_type = kind;
        self.settings.exit_direction = kind.default_direction();
    }

    /// Switching to exit-only requires a type with an exit variant, so an
    /// entrance-only type falls back to fade.
    pub fn set_scroll_trigger(&mut self, trigger: ScrollTrigger) {
        self.settings.scroll_trigger = trigger;
        if trigger == ScrollTrigger::Exit && !self.settings.kind.is_some_and(AnimationType::has_exit)
        {
            self.settings.kind = Some(AnimationType::Fade);
            self.settings.direction = None;
        }
    }

    /// Reverts every setting to its default while keeping the current mode.
    pub fn reset_settings(&mut self) {
        self.settings = AnimationSettings {
            mode: self.settings.mode,
            ..AnimationSettings::default()
        };
        self.preview.playing = false;
    }

    /// Drops the animation from the block entirely.
    pub fn remove_animation(&mut self) {
        self.settings = AnimationSettings {
            kind: None,
            ..AnimationSettings::default()
        };
        self.preview.playing = false;
    }

    /// Overwrites the animation subset with a clipboard value. Preview
    /// flags are left alone.
    pub fn paste(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    /// Looping previews need an explicit start; one-shot previews replay on
    /// every render so there is nothing to toggle.
    pub fn replay_preview(&mut self) {
        if self.is_looping_preview() {
            self.preview.playing = true;
        }
    }

    pub fn stop_preview(&mut self) {
        self.preview.playing = false;
    }

    pub(crate) fn is_looping_preview(&self) -> bool {
        self.settings.mode == Some(Mode::PageLoad) && self.settings.repeat.is_looping()
    }
}

impl fmt::Display for AnimationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.settings.mode, self.settings.kind) {
            (Some(mode), Some(kind)) => write!(f, "{kind} on {mode}"),
            _ => f.write_str("no animation"),
        }
    }
}

fn keyword_or_empty<S: Serializer, T: Keyword>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map(Keyword::as_str).unwrap_or(""))
}

/// Loosely typed attribute bag as stored by the host.
///
/// Every field is optional and untyped; conversion into the typed records
/// substitutes defaults for anything missing or malformed.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockAttributes {
    animation_mode: Option<Value>,
    animation_type: Option<Value>,
    animation_direction: Option<Value>,
    animation_duration: Option<Value>,
    animation_delay: Option<Value>,
    animation_acceleration: Option<Value>,
    animation_blur_amount: Option<Value>,
    animation_repeat: Option<Value>,
    animation_pause_offscreen: Option<Value>,
    animation_scroll_trigger: Option<Value>,
    animation_play_once: Option<Value>,
    animation_exit_mode: Option<Value>,
    animation_exit_type: Option<Value>,
    animation_exit_direction: Option<Value>,
    animation_exit_duration: Option<Value>,
    animation_exit_delay: Option<Value>,
    animation_exit_acceleration: Option<Value>,
    animation_range_start: Option<Value>,
    animation_range_end: Option<Value>,
    animation_preview_enabled: Option<Value>,
    animation_preview_playing: Option<Value>,
}

impl From<BlockAttributes> for AnimationSettings {
    fn from(raw: BlockAttributes) -> Self {
        let base = AnimationSettings::default();
        Self {
            mode: optional_keyword(raw.animation_mode.as_ref()),
            kind: match raw.animation_type.as_ref() {
                Some(value) => optional_keyword(Some(value)),
                None => base.kind,
            },
            direction: optional_keyword(raw.animation_direction.as_ref()),
            duration: seconds(raw.animation_duration.as_ref(), base.duration),
            delay: seconds(raw.animation_delay.as_ref(), base.delay),
            acceleration: keyword(raw.animation_acceleration.as_ref(), base.acceleration),
            blur_amount: blur_amount(raw.animation_blur_amount.as_ref()),
            repeat: keyword(raw.animation_repeat.as_ref(), base.repeat),
            pause_offscreen: flag(raw.animation_pause_offscreen.as_ref(), base.pause_offscreen),
            scroll_trigger: keyword(raw.animation_scroll_trigger.as_ref(), base.scroll_trigger),
            play_once: flag(raw.animation_play_once.as_ref(), base.play_once),
            exit_mode: keyword(raw.animation_exit_mode.as_ref(), base.exit_mode),
            exit_type: keyword(raw.animation_exit_type.as_ref(), base.exit_type),
            exit_direction: optional_keyword(raw.animation_exit_direction.as_ref()),
            exit_duration: seconds(raw.animation_exit_duration.as_ref(), base.exit_duration),
            exit_delay: seconds(raw.animation_exit_delay.as_ref(), base.exit_delay),
            exit_acceleration: keyword(
                raw.animation_exit_acceleration.as_ref(),
                base.exit_acceleration,
            ),
            range_start: range(raw.animation_range_start.as_ref(), base.range_start),
            range_end: range(raw.animation_range_end.as_ref(), base.range_end),
        }
    }
}

impl From<BlockAttributes> for AnimationConfig {
    fn from(mut raw: BlockAttributes) -> Self {
        let base = PreviewState::default();
        let preview = PreviewState {
            enabled: flag(raw.animation_preview_enabled.take().as_ref(), base.enabled),
            playing: flag(raw.animation_preview_playing.take().as_ref(), base.playing),
        };
        Self {
            settings: raw.into(),
            preview,
        }
    }
}

/// Empty and unknown keywords both read as "absent".
fn optional_keyword<T: Keyword>(value: Option<&Value>) -> Option<T> {
    let text = value?.as_str()?;
    if text.is_empty() {
        return None;
    }
    let parsed = T::parse(text);
    if parsed.is_none() {
        tracing::trace!(field = T::FIELD, value = text, "ignoring unknown keyword");
    }
    parsed
}

fn keyword<T: Keyword>(value: Option<&Value>, default: T) -> T {
    optional_keyword(value).unwrap_or(default)
}

fn seconds(value: Option<&Value>, default: f64) -> f64 {
    value
        .and_then(|value| match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .unwrap_or(default)
}

fn blur_amount(value: Option<&Value>) -> u32 {
    value
        .and_then(Value::as_f64)
        .filter(|px| px.is_finite() && *px >= 1.0)
        .map(|px| px.round().min(f64::from(u32::MAX)) as u32)
        .unwrap_or(DEFAULT_BLUR_AMOUNT)
}

fn flag(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => match text.as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    }
}

fn range(value: Option<&Value>, default: RangeOffset) -> RangeOffset {
    value
        .and_then(Value::as_str)
        .and_then(|text| text.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::timeline::RangeName;

    #[test]
    fn keywords_round_trip_through_strings() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), *mode);
        }
        assert_eq!("none".parse::<Direction>().unwrap(), Direction::Centered);
        let err = "spin".parse::<AnimationType>().unwrap_err();
        assert!(format!("{err}").contains("spin"));
    }

    #[test]
    fn direction_domains_follow_type() {
        assert!(AnimationType::Slide.supports(Direction::Btt));
        assert!(!AnimationType::Slide.supports(Direction::Outward));
        assert!(AnimationType::Scale.supports(Direction::Centered));
        assert!(!AnimationType::Fade.has_direction());
        assert_eq!(
            AnimationType::Curtain.resolve_direction(Some(Direction::Ltr)),
            None
        );
        assert!(!AnimationType::Flip.has_exit());
    }

    #[test]
    fn missing_attributes_take_defaults() {
        let config = AnimationConfig::from_json(json!({
            "animationMode": "page-load",
            "className": "is-style-rounded"
        }))
        .unwrap();

        assert_eq!(config.settings.mode, Some(Mode::PageLoad));
        assert_eq!(config.settings.kind, Some(AnimationType::Fade));
        assert_eq!(config.settings.duration, DEFAULT_DURATION);
        assert_eq!(config.settings.delay, DEFAULT_DELAY);
        assert_eq!(config.settings.range_start.name, RangeName::Entry);
        assert!(config.preview.enabled);
        assert!(!config.preview.playing);
    }

    #[test]
    fn malformed_attributes_degrade_to_defaults() {
        let config = AnimationConfig::from_json(json!({
            "animationMode": "hover",
            "animationType": "spin",
            "animationAcceleration": "bouncy",
            "animationDuration": -3,
            "animationBlurAmount": "lots",
            "animationRangeEnd": "sideways",
            "animationPlayOnce": "false"
        }))
        .unwrap();

        assert_eq!(config.settings.mode, None);
        assert_eq!(config.settings.kind, None);
        assert_eq!(config.settings.acceleration, Acceleration::Ease);
        assert_eq!(config.settings.duration, DEFAULT_DURATION);
        assert_eq!(config.settings.blur_amount, DEFAULT_BLUR_AMOUNT);
        assert_eq!(config.settings.range_end, ScrollRange::default().end);
        assert!(!config.settings.play_once);
        assert!(!config.is_active());
    }

    #[test]
    fn serializes_with_host_attribute_keys() {
        let value = serde_json::to_value(defaults()).unwrap();
        assert_eq!(value["animationMode"], "");
        assert_eq!(value["animationType"], "fade");
        assert_eq!(value["animationRangeStart"], "entry 0%");
        assert_eq!(value["animationPreviewEnabled"], true);

        let back: AnimationConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, defaults());
    }

    #[test]
    fn pick_leaves_preview_flags_behind() {
        let mut config = defaults();
        config.preview.playing = true;
        let value = serde_json::to_value(pick(&config)).unwrap();
        assert!(value.get("animationPreviewPlaying").is_none());
        assert_eq!(value["animationBlurAmount"], 8);
    }

    #[test]
    fn selecting_a_type_picks_its_default_direction() {
        let mut config = defaults();
        config.select_mode(Mode::ScrollAppear);
        config.set_type(AnimationType::Wipe);
        assert_eq!(config.settings.direction, Some(Direction::Ltr));
        config.set_type(AnimationType::Blur);
        assert_eq!(config.settings.direction, None);
        config.set_exit_type(AnimationType::Curtain);
        assert_eq!(config.settings.exit_direction, Some(Direction::Outward));
    }

    #[test]
    fn exit_only_trigger_replaces_entrance_only_type() {
        let mut config = defaults();
        config.select_mode(Mode::ScrollAppear);
        config.set_type(AnimationType::Flip);
        config.set_scroll_trigger(ScrollTrigger::Exit);
        assert_eq!(config.settings.kind, Some(AnimationType::Fade));
        assert_eq!(config.settings.direction, None);

        config.set_type(AnimationType::Slide);
        config.set_scroll_trigger(ScrollTrigger::Exit);
        assert_eq!(config.settings.kind, Some(AnimationType::Slide));
    }

    #[test]
    fn reset_keeps_mode_and_remove_clears_it() {
        let mut config = defaults();
        config.select_mode(Mode::PageLoad);
        config.set_type(AnimationType::Scale);
        config.settings.repeat = Repeat::Loop;
        config.replay_preview();
        assert!(config.preview.playing);

        config.reset_settings();
        assert_eq!(config.settings.mode, Some(Mode::PageLoad));
        assert_eq!(config.settings.kind, Some(AnimationType::Fade));
        assert_eq!(config.settings.repeat, Repeat::Once);
        assert!(!config.preview.playing);

        config.remove_animation();
        assert_eq!(config.settings.mode, None);
        assert_eq!(config.settings.kind, None);
        assert!(!config.is_active());
    }

    #[test]
    fn one_shot_preview_does_not_toggle_playing() {
        let mut config = defaults();
        config.select_mode(Mode::ScrollAppear);
        config.replay_preview();
        assert!(!config.preview.playing);
    }

    #[test]
    fn clamps_slider_values() {
        let mut settings = AnimationSettings {
            duration: 9.0,
            delay: f64::NAN,
            blur_amount: 0,
            ..AnimationSettings::default()
        };
        settings.clamp_to_controls();
        assert_eq!(settings.duration, 2.0);
        assert_eq!(settings.delay, DEFAULT_DELAY);
        assert_eq!(settings.blur_amount, 1);
    }
}
