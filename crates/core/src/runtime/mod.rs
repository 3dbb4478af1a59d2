//! Trigger runtime.
//!
//! On load the runtime scans the document for the mode marker classes the
//! compiler emitted and hands each element to its strategy: page-load
//! elements trigger immediately, scroll-appear elements run a visibility
//! state machine, scroll-interactive elements are bound to the platform's
//! scroll timeline. Afterwards the host forwards visibility changes through
//! [`TriggerRuntime::dispatch`].
//!
//! Everything is read back from the `data-*` attributes on the element, so
//! markup rendered by the server behaves exactly like a fresh editor
//! preview. Malformed values fall back to defaults; nothing here fails.

mod document;
mod observer;
mod page_load;
mod scroll_appear;
mod scroll_interactive;

use std::str::FromStr;

use serde::Serialize;

pub use document::{Document, Element, ElementId};
pub use observer::{ObserverId, ObserverOptions, ObserverRegistry, ObserverRole, RootMargin};

use crate::{
    compile::keys,
    config::{AppConfig, MarkupConfig, RuntimeConfig},
    schema::{Acceleration, AnimationType, Direction, Keyword},
    style,
};
use page_load::PageLoadStrategy;
use scroll_appear::ScrollAppearStrategy;
use scroll_interactive::ScrollInteractiveStrategy;

/// Visibility change reported by the host for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn visible(target: ElementId) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn hidden(target: ElementId) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Position of a scroll-appear element in its enter/exit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ElementPhase {
    #[default]
    Unseen,
    Entered,
    Exited,
}

/// Settings shared by the strategies.
#[derive(Debug, Clone)]
pub(crate) struct RuntimeContext {
    pub(crate) markup: MarkupConfig,
    pub(crate) config: RuntimeConfig,
}

impl RuntimeContext {
    fn data<'a>(&self, element: &'a Element, key: &str) -> Option<&'a str> {
        element.attribute(&self.markup.data_attr(key))
    }

    fn keyword<T: Keyword>(&self, element: &Element, key: &str) -> Option<T> {
        self.data(element, key).and_then(T::parse)
    }

    fn flag(&self, element: &Element, key: &str) -> Option<bool> {
        self.data(element, key).and_then(|value| bool::from_str(value).ok())
    }

    /// Writes the timing custom properties for the given attribute keys.
    /// Missing values leave the stylesheet defaults in place, except the
    /// timing function which always resets to `ease`.
    fn apply_timing(
        &self,
        element: &mut Element,
        duration_key: &str,
        delay_key: &str,
        acceleration_key: &str,
    ) {
        let (duration, delay, acceleration) = {
            let current: &Element = element;
            let seconds = |key: &str| {
                self.data(current, key)
                    .and_then(|value| value.parse::<f64>().ok())
                    .filter(|secs| secs.is_finite() && *secs >= 0.0)
            };
            (
                seconds(duration_key),
                seconds(delay_key),
                self.keyword::<Acceleration>(current, acceleration_key)
                    .unwrap_or_default(),
            )
        };

        if let Some(duration) = duration {
            element.set_style(style::DURATION_VAR, style::seconds(duration));
        }
        if let Some(delay) = delay {
            element.set_style(style::DELAY_VAR, style::seconds(delay));
        }
        element.set_style(style::TIMING_VAR, acceleration.as_str());
    }

    fn apply_main_timing(&self, element: &mut Element) {
        self.apply_timing(element, keys::DURATION, keys::DELAY, keys::ACCELERATION);
    }

    /// Writes the direction custom properties for a type/direction pair
    /// read from the given keys.
    fn apply_direction(&self, element: &mut Element, type_key: &str, direction_key: &str) {
        let Some(kind) = self.keyword::<AnimationType>(element, type_key) else {
            return;
        };
        let direction = kind.resolve_direction(self.keyword::<Direction>(element, direction_key));
        for (property, value) in style::direction_vars(kind, direction) {
            element.set_style(*property, *value);
        }
    }

    fn apply_main_direction(&self, element: &mut Element) {
        self.apply_direction(element, keys::TYPE, keys::DIRECTION);
    }

    fn apply_blur(&self, element: &mut Element) {
        let amount = self
            .data(element, keys::BLUR_AMOUNT)
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|px| *px > 0);
        if let Some(amount) = amount {
            element.set_style(style::BLUR_AMOUNT_VAR, style::pixels(amount));
        }
    }
}

/// Activation engine for one document.
#[derive(Debug)]
pub struct TriggerRuntime {
    context: RuntimeContext,
    observers: ObserverRegistry,
    page_load: PageLoadStrategy,
    scroll_appear: ScrollAppearStrategy,
    scroll_interactive: ScrollInteractiveStrategy,
}

impl Default for TriggerRuntime {
    fn default() -> Self {
        Self::new(MarkupConfig::default(), RuntimeConfig::default())
    }
}

impl TriggerRuntime {
    pub fn new(markup: MarkupConfig, config: RuntimeConfig) -> Self {
        Self {
            context: RuntimeContext { markup, config },
            observers: ObserverRegistry::new(),
            page_load: PageLoadStrategy::default(),
            scroll_appear: ScrollAppearStrategy::default(),
            scroll_interactive: ScrollInteractiveStrategy::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.markup.clone(), config.runtime.clone())
    }

    /// Scans `document` once and attaches every strategy. Safe to call on a
    /// document with no animated elements.
    pub fn init(&mut self, document: &mut Document) {
        let page_load = self
            .page_load
            .init(&self.context, &mut self.observers, document);
        let scroll_appear = self
            .scroll_appear
            .init(&self.context, &mut self.observers, document);
        let scroll_interactive = self.scroll_interactive.init(&self.context, document);
        tracing::debug!(
            page_load,
            scroll_appear,
            scroll_interactive,
            "trigger runtime initialised"
        );
    }

    /// Delivers a visibility change to every observer watching the target.
    /// Returns `false` when nothing is watching it any more.
    pub fn dispatch(&mut self, document: &mut Document, entry: IntersectionEntry) -> bool {
        let watching = self.observers.watching(entry.target);
        if watching.is_empty() {
            tracing::trace!(element = %entry.target, "dropping event for unobserved element");
            return false;
        }
        let Some(element) = document.element_mut(entry.target) else {
            return false;
        };
        for (observer, role) in watching {
            match role {
                ObserverRole::PauseOffscreen => self.page_load.on_intersection(element, entry),
                ObserverRole::ScrollAppear => self.scroll_appear.on_intersection(
                    &self.context,
                    &mut self.observers,
                    observer,
                    element,
                    entry,
                ),
            }
        }
        true
    }

    /// Scroll-appear phase of an element, `None` for other elements.
    pub fn phase(&self, target: ElementId) -> Option<ElementPhase> {
        self.scroll_appear.phase(target)
    }

    pub fn is_observed(&self, target: ElementId) -> bool {
        self.observers.is_observed(target)
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    pub fn markup(&self) -> &MarkupConfig {
        &self.context.markup
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        render::{save_props, RenderProps},
        schema::AnimationConfig,
    };

    pub(crate) fn element_for(value: serde_json::Value, markup: &MarkupConfig) -> Element {
        let config = AnimationConfig::from_json(value).unwrap();
        Element::from_props(save_props(RenderProps::new(), &config, markup))
    }

    #[test]
    fn empty_documents_are_a_no_op() {
        let mut doc = Document::new();
        let mut runtime = TriggerRuntime::default();
        runtime.init(&mut doc);
        assert!(runtime.observers().is_empty());
    }

    #[test]
    fn unanimated_elements_are_left_alone() {
        let mut doc = Document::new();
        let mut plain = Element::new();
        plain.add_class("wp-block-paragraph");
        let id = doc.insert(plain.clone());

        let mut runtime = TriggerRuntime::default();
        runtime.init(&mut doc);
        assert_eq!(doc.element(id), Some(&plain));
        assert!(!runtime.dispatch(&mut doc, IntersectionEntry::visible(id)));
    }

    #[test]
    fn mixed_modes_do_not_interfere() {
        let markup = MarkupConfig::default();
        let mut doc = Document::new();
        let page = doc.insert(element_for(
            json!({ "animationMode": "page-load", "animationType": "fade",
                    "animationPauseOffscreen": false }),
            &markup,
        ));
        let appear = doc.insert(element_for(
            json!({ "animationMode": "scroll-appear", "animationType": "slide",
                    "animationDirection": "ltr" }),
            &markup,
        ));
        let interactive = doc.insert(element_for(
            json!({ "animationMode": "scroll-interactive", "animationType": "scale" }),
            &markup,
        ));

        let mut runtime = TriggerRuntime::default();
        runtime.init(&mut doc);

        assert!(doc.element(page).unwrap().has_class("triggered"));
        assert!(!doc.element(appear).unwrap().has_class("triggered"));
        assert!(!doc.element(interactive).unwrap().has_class("triggered"));
        assert!(!runtime.is_observed(page));
        assert!(runtime.is_observed(appear));
        assert!(!runtime.is_observed(interactive));
        assert_eq!(runtime.phase(page), None);
        assert_eq!(runtime.phase(appear), Some(ElementPhase::Unseen));
        assert_eq!(
            doc.element(appear).unwrap().style_value("--mb-slide-x"),
            None,
            "direction props wait for the entrance"
        );
    }

    #[test]
    fn prefixed_markup_round_trips_through_the_runtime() {
        let markup = MarkupConfig::with_prefix("mb");
        let mut doc = Document::new();
        let id = doc.insert(element_for(
            json!({ "animationMode": "page-load", "animationType": "wipe",
                    "animationDirection": "ttb", "animationDuration": 1.5 }),
            &markup,
        ));

        let mut runtime = TriggerRuntime::new(markup, RuntimeConfig::default());
        runtime.init(&mut doc);

        let element = doc.element(id).unwrap();
        assert!(element.has_class("mb-triggered"));
        assert_eq!(element.style_value("--mb-duration"), Some("1.5s"));
        assert_eq!(element.style_value("--mb-wipe-from"), Some("inset(100% 0 0 0)"));
    }
}
