//! Attribute compiler.
//!
//! Maps an [`AnimationConfig`] to the classes, `data-*` attributes and
//! custom properties that the stylesheet and the trigger runtime consume.
//! The mapping is pure: the save path, the server render path and the
//! editor preview all call [`Compiler::compile`] and get identical names.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    config::MarkupConfig,
    schema::{
        Acceleration, AnimationConfig, AnimationType, ExitMode, Keyword, Mode, ScrollTrigger,
        DEFAULT_BLUR_AMOUNT, DEFAULT_DELAY, DEFAULT_DURATION, DEFAULT_EXIT_DELAY,
        DEFAULT_EXIT_DURATION,
    },
    style::{self, CssVars},
};

/// Short keys of the `data-*` attributes, before namespacing.
pub mod keys {
    pub const MODE: &str = "mode";
    pub const TYPE: &str = "type";
    pub const ACCELERATION: &str = "acceleration";
    pub const DIRECTION: &str = "direction";
    pub const BLUR_AMOUNT: &str = "blur-amount";
    pub const DURATION: &str = "duration";
    pub const DELAY: &str = "delay";
    pub const REPEAT: &str = "repeat";
    pub const PAUSE_OFFSCREEN: &str = "pause-offscreen";
    pub const SCROLL_TRIGGER: &str = "scroll-trigger";
    pub const PLAY_ONCE: &str = "play-once";
    pub const EXIT_MODE: &str = "exit-mode";
    pub const EXIT_TYPE: &str = "exit-type";
    pub const EXIT_DIRECTION: &str = "exit-direction";
    pub const EXIT_DURATION: &str = "exit-duration";
    pub const EXIT_DELAY: &str = "exit-delay";
    pub const EXIT_ACCELERATION: &str = "exit-acceleration";
    pub const RANGE_START: &str = "range-start";
    pub const RANGE_END: &str = "range-end";
}

/// Presentation artifacts derived from one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledAnimation {
    /// Ordered, duplicate-free class list.
    pub classes: Vec<String>,
    pub data_attributes: BTreeMap<String, String>,
    pub css_vars: CssVars,
}

impl CompiledAnimation {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.data_attributes.is_empty() && self.css_vars.is_empty()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Space separated class list.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    fn push_class(&mut self, class: String) {
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }
}

/// Compiles configurations into markup for one naming scheme.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    markup: MarkupConfig,
}

impl Compiler {
    pub fn new(markup: MarkupConfig) -> Self {
        Self { markup }
    }

    pub fn markup(&self) -> &MarkupConfig {
        &self.markup
    }

    /// Compiles `config`. Never fails: absent or out-of-domain values are
    /// replaced by their defaults, and a record without a mode or a type
    /// compiles to nothing.
    pub fn compile(&self, config: &AnimationConfig) -> CompiledAnimation {
        let settings = &config.settings;
        let mut out = CompiledAnimation::default();
        let (Some(mode), Some(kind)) = (settings.mode, settings.kind) else {
            return out;
        };

        let direction = kind.resolve_direction(settings.direction);
        let exit_only =
            mode == Mode::ScrollAppear && settings.scroll_trigger == ScrollTrigger::Exit;
        let duration = non_negative(settings.duration, DEFAULT_DURATION);
        let delay = non_negative(settings.delay, DEFAULT_DELAY);

        out.push_class(self.markup.class("animated"));
        let main_class = if exit_only {
            format!("exit-{kind}")
        } else {
            format!("enter-{kind}")
        };
        out.push_class(self.markup.class(&main_class));
        out.push_class(self.markup.class(&format!("mode-{mode}")));

        self.set(&mut out, keys::MODE, mode.as_str());
        self.set(&mut out, keys::TYPE, kind.as_str());
        if settings.acceleration != Acceleration::Ease {
            self.set(&mut out, keys::ACCELERATION, settings.acceleration.as_str());
        }
        if let Some(direction) = direction {
            self.set(&mut out, keys::DIRECTION, direction.as_str());
        }
        let blur_amount = blur_amount(settings.blur_amount);
        if kind == AnimationType::Blur && blur_amount != DEFAULT_BLUR_AMOUNT {
            self.set(&mut out, keys::BLUR_AMOUNT, &blur_amount.to_string());
        }

        style::insert_direction_vars(&mut out.css_vars, kind, direction);
        if kind == AnimationType::Blur {
            out.css_vars
                .insert(style::BLUR_AMOUNT_VAR.to_string(), style::pixels(blur_amount));
        }

        match mode {
            Mode::PageLoad => {
                self.set_timing(&mut out, duration, delay, settings.acceleration);
                self.set(&mut out, keys::REPEAT, settings.repeat.as_str());
                self.set(
                    &mut out,
                    keys::PAUSE_OFFSCREEN,
                    bool_str(settings.pause_offscreen),
                );
            }
            Mode::ScrollAppear => {
                self.set_timing(&mut out, duration, delay, settings.acceleration);
                self.compile_scroll_appear(&mut out, config, kind);
            }
            Mode::ScrollInteractive => {
                self.set(&mut out, keys::RANGE_START, &settings.range_start.to_string());
                self.set(&mut out, keys::RANGE_END, &settings.range_end.to_string());
            }
        }

        tracing::trace!(%config, classes = out.classes.len(), "compiled animation");
        out
    }

    fn compile_scroll_appear(
        &self,
        out: &mut CompiledAnimation,
        config: &AnimationConfig,
        kind: AnimationType,
    ) {
        let settings = &config.settings;
        let trigger = settings.scroll_trigger;
        self.set(out, keys::SCROLL_TRIGGER, trigger.as_str());
        self.set(out, keys::PLAY_ONCE, bool_str(settings.play_once));

        if !trigger.plays_exit() {
            return;
        }
        self.set(out, keys::EXIT_MODE, settings.exit_mode.as_str());

        let custom = settings.exit_mode == ExitMode::Custom;
        let exit_kind = if custom {
            let exit_kind = settings.exit_type;
            self.set(out, keys::EXIT_TYPE, exit_kind.as_str());
            if let Some(direction) = exit_kind.resolve_direction(settings.exit_direction) {
                self.set(out, keys::EXIT_DIRECTION, direction.as_str());
            }
            exit_kind
        } else {
            kind
        };
        out.push_class(self.markup.class(&format!("exit-{exit_kind}")));

        if custom {
            self.set(
                out,
                keys::EXIT_DURATION,
                &non_negative(settings.exit_duration, DEFAULT_EXIT_DURATION).to_string(),
            );
            self.set(
                out,
                keys::EXIT_DELAY,
                &non_negative(settings.exit_delay, DEFAULT_EXIT_DELAY).to_string(),
            );
            if settings.exit_acceleration != Acceleration::Ease {
                self.set(
                    out,
                    keys::EXIT_ACCELERATION,
                    settings.exit_acceleration.as_str(),
                );
            }
        }
    }

    fn set_timing(
        &self,
        out: &mut CompiledAnimation,
        duration: f64,
        delay: f64,
        acceleration: Acceleration,
    ) {
        self.set(out, keys::DURATION, &duration.to_string());
        self.set(out, keys::DELAY, &delay.to_string());
        style::insert_timing_vars(&mut out.css_vars, duration, delay, acceleration);
    }

    fn set(&self, out: &mut CompiledAnimation, key: &str, value: &str) {
        out.data_attributes
            .insert(self.markup.data_attr(key), value.to_string());
    }
}

/// Compiles with the bare contract names.
pub fn compile(config: &AnimationConfig) -> CompiledAnimation {
    Compiler::default().compile(config)
}

pub(crate) fn non_negative(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}

pub(crate) fn blur_amount(value: u32) -> u32 {
    if value == 0 {
        DEFAULT_BLUR_AMOUNT
    } else {
        value
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
