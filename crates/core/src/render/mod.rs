//! Render-props middleware.
//!
//! The host hands each block's wrapper props through a chain of filters
//! before rendering. [`SaveFilter`] augments the persisted markup and
//! [`PreviewFilter`] the live editor wrapper. Both compile through the same
//! [`Compiler`], so the names they emit always agree.

use std::{collections::BTreeMap, fmt::Write as _};

use serde::{Deserialize, Serialize};

use crate::{
    compile::{CompiledAnimation, Compiler},
    config::MarkupConfig,
    schema::{AnimationConfig, Keyword, Mode, Repeat},
    style,
};

/// Props of the wrapper element a block renders into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderProps {
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Plain attributes, `data-*` included.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Inline style declarations, custom properties included.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

impl RenderProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    /// Classes in order, without empties.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
    }

    /// Appends classes that are not present yet.
    pub fn add_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged: Vec<String> = self.classes().map(str::to_string).collect();
        for class in classes {
            let class = class.as_ref();
            if !class.is_empty() && !merged.iter().any(|existing| existing == class) {
                merged.push(class.to_string());
            }
        }
        self.class_name = (!merged.is_empty()).then(|| merged.join(" "));
    }

    /// Inline style text, e.g. `--mb-delay: 0.4s; animation-name: mbFadeIn`.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Attribute text for persisted markup: `class`, then attributes in
    /// name order, then `style`.
    pub fn to_html_attributes(&self) -> String {
        let mut out = String::new();
        let mut push = |name: &str, value: &str| {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{name}=\"{}\"", escape_attribute(value));
        };
        if let Some(class_name) = self.class_name.as_deref().filter(|c| !c.is_empty()) {
            push("class", class_name);
        }
        for (name, value) in &self.attributes {
            push(name, value);
        }
        if !self.style.is_empty() {
            push("style", &self.style_text());
        }
        out
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// One step of the render pipeline: given props, return augmented props.
pub trait PropsFilter {
    fn apply(&self, props: RenderProps, config: &AnimationConfig) -> RenderProps;
}

impl<F> PropsFilter for F
where
    F: Fn(RenderProps, &AnimationConfig) -> RenderProps,
{
    fn apply(&self, props: RenderProps, config: &AnimationConfig) -> RenderProps {
        self(props, config)
    }
}

/// Adds the compiled classes and `data-*` attributes to persisted markup.
#[derive(Debug, Clone, Default)]
pub struct SaveFilter {
    compiler: Compiler,
}

impl SaveFilter {
    pub fn new(markup: MarkupConfig) -> Self {
        Self {
            compiler: Compiler::new(markup),
        }
    }
}

impl PropsFilter for SaveFilter {
    fn apply(&self, mut props: RenderProps, config: &AnimationConfig) -> RenderProps {
        let CompiledAnimation {
            classes,
            data_attributes,
            ..
        } = self.compiler.compile(config);
        if classes.is_empty() {
            return props;
        }
        props.add_classes(classes);
        props.attributes.extend(data_attributes);
        props
    }
}

/// Drives the in-editor preview through class names and inline style.
#[derive(Debug, Clone, Default)]
pub struct PreviewFilter {
    compiler: Compiler,
}

impl PreviewFilter {
    pub fn new(markup: MarkupConfig) -> Self {
        Self {
            compiler: Compiler::new(markup),
        }
    }

    fn markup(&self) -> &MarkupConfig {
        self.compiler.markup()
    }
}

impl PropsFilter for PreviewFilter {
    fn apply(&self, mut props: RenderProps, config: &AnimationConfig) -> RenderProps {
        let settings = &config.settings;
        let (Some(mode), Some(kind)) = (settings.mode, settings.kind) else {
            return props;
        };
        if !config.preview.enabled {
            return props;
        }
        let compiled = self.compiler.compile(config);

        if mode == Mode::ScrollInteractive {
            props.style.extend(compiled.css_vars);
            let declarations = [
                ("animation-name", style::enter_keyframe(kind).to_string()),
                ("animation-timeline", "view()".to_string()),
                ("animation-range-start", settings.range_start.to_string()),
                ("animation-range-end", settings.range_end.to_string()),
                ("animation-duration", "1ms".to_string()),
                (
                    "animation-timing-function",
                    settings.acceleration.as_str().to_string(),
                ),
                ("animation-fill-mode", "both".to_string()),
            ];
            for (name, value) in declarations {
                props.style.insert(name.to_string(), value);
            }
            return props;
        }

        // Looping previews run only while the user has started them.
        let looping = config.is_looping_preview();
        if looping && !config.preview.playing {
            return props;
        }

        props.add_classes([
            self.markup().class("preview"),
            self.markup().class(&format!("animate-enter-{kind}")),
        ]);
        props.style.extend(compiled.css_vars);
        let (iterations, direction, fill) = if looping {
            let direction = if settings.repeat == Repeat::Alternate {
                "alternate"
            } else {
                "normal"
            };
            ("infinite", direction, "none")
        } else {
            ("1", "normal", "both")
        };
        for (name, value) in [
            (style::ITERATION_COUNT_VAR, iterations),
            (style::ANIMATION_DIRECTION_VAR, direction),
            (style::FILL_MODE_VAR, fill),
        ] {
            props.style.insert(name.to_string(), value.to_string());
        }
        props
    }
}

/// Ordered composition of filters.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn PropsFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl PropsFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn push(&mut self, filter: impl PropsFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply(&self, props: RenderProps, config: &AnimationConfig) -> RenderProps {
        self.filters
            .iter()
            .fold(props, |props, filter| filter.apply(props, config))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Persisted props for `config` on top of `props`.
pub fn save_props(props: RenderProps, config: &AnimationConfig, markup: &MarkupConfig) -> RenderProps {
    SaveFilter::new(markup.clone()).apply(props, config)
}

/// Live preview props for `config` on top of `props`.
pub fn preview_props(
    props: RenderProps,
    config: &AnimationConfig,
    markup: &MarkupConfig,
) -> RenderProps {
    PreviewFilter::new(markup.clone()).apply(props, config)
}
