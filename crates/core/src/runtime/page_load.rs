use super::{
    Document, Element, IntersectionEntry, ObserverId, ObserverOptions, ObserverRegistry,
    ObserverRole, RuntimeContext,
};
use crate::{compile::keys, schema::Repeat};

/// Triggers every page-load element immediately, optionally pausing it
/// while it is scrolled out of view.
#[derive(Debug, Default)]
pub(super) struct PageLoadStrategy {
    pause_observer: Option<ObserverId>,
}

impl PageLoadStrategy {
    pub(super) fn init(
        &mut self,
        context: &RuntimeContext,
        observers: &mut ObserverRegistry,
        document: &mut Document,
    ) -> usize {
        let targets = document.query_class(&context.markup.class("mode-page-load"));
        let triggered = context.markup.triggered_class();

        for &target in &targets {
            let Some(element) = document.element_mut(target) else {
                continue;
            };
            context.apply_main_timing(element);
            context.apply_main_direction(element);
            context.apply_blur(element);

            match context.keyword::<Repeat>(element, keys::REPEAT) {
                Some(Repeat::Loop) => {
                    element.set_style("animation-iteration-count", "infinite");
                    element.set_style("animation-fill-mode", "none");
                }
                Some(Repeat::Alternate) => {
                    element.set_style("animation-iteration-count", "infinite");
                    element.set_style("animation-direction", "alternate");
                    element.set_style("animation-fill-mode", "none");
                }
                Some(Repeat::Once) | None => {}
            }

            element.add_class(&triggered);

            if context.flag(element, keys::PAUSE_OFFSCREEN) == Some(true) {
                let observer = *self.pause_observer.get_or_insert_with(|| {
                    observers.create(
                        ObserverRole::PauseOffscreen,
                        ObserverOptions {
                            threshold: context.config.pause_threshold,
                            ..ObserverOptions::default()
                        },
                    )
                });
                observers.observe(observer, target);
            }
        }
        targets.len()
    }

    /// Any visible sliver keeps the animation running.
    pub(super) fn on_intersection(&mut self, element: &mut Element, entry: IntersectionEntry) {
        let state = if entry.is_intersecting {
            "running"
        } else {
            "paused"
        };
        element.set_style("animation-play-state", state);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        config::MarkupConfig,
        runtime::{tests::element_for, Document, IntersectionEntry, TriggerRuntime},
    };

    #[test]
    fn looping_element_triggers_at_load_and_pauses_offscreen() {
        let mut doc = Document::new();
        let id = doc.insert(element_for(
            json!({
                "animationMode": "page-load",
                "animationType": "fade",
                "animationRepeat": "loop",
                "animationPauseOffscreen": true,
            }),
            &MarkupConfig::default(),
        ));

        let mut runtime = TriggerRuntime::default();
        runtime.init(&mut doc);

        let element = doc.element(id).unwrap();
        assert!(element.has_class("triggered"));
        assert_eq!(element.style_value("animation-iteration-count"), Some("infinite"));
        assert_eq!(element.style_value("animation-fill-mode"), Some("none"));
        assert_eq!(element.style_value("animation-direction"), None);
        assert_eq!(element.style_value("--mb-duration"), Some("0.6s"));
        assert_eq!(element.style_value("--mb-delay"), Some("0.4s"));
        assert!(runtime.is_observed(id));
        assert_eq!(runtime.phase(id), None);

        assert!(runtime.dispatch(&mut doc, IntersectionEntry::hidden(id)));
        assert_eq!(
            doc.element(id).unwrap().style_value("animation-play-state"),
            Some("paused")
        );
        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        assert_eq!(
            doc.element(id).unwrap().style_value("animation-play-state"),
            Some("running")
        );
    }

    #[test]
    fn alternate_runs_back_and_forth() {
        let mut doc = Document::new();
        let id = doc.insert(element_for(
            json!({
                "animationMode": "page-load",
                "animationType": "blur",
                "animationRepeat": "alternate",
                "animationBlurAmount": 3,
                "animationPauseOffscreen": false,
            }),
            &MarkupConfig::default(),
        ));

        let mut runtime = TriggerRuntime::default();
        runtime.init(&mut doc);

        let element = doc.element(id).unwrap();
        assert_eq!(element.style_value("animation-direction"), Some("alternate"));
        assert_eq!(element.style_value("--mb-blur-amount"), Some("3px"));
        assert!(!runtime.is_observed(id));
        assert!(runtime.observers().is_empty());
    }

    #[test]
    fn play_once_keeps_stylesheet_iteration() {
        let mut doc = Document::new();
        let id = doc.insert(element_for(
            json!({ "animationMode": "page-load", "animationType": "slide",
                    "animationDirection": "rtl" }),
            &MarkupConfig::default(),
        ));

        TriggerRuntime::default().init(&mut doc);

        let element = doc.element(id).unwrap();
        assert!(element.has_class("triggered"));
        assert_eq!(element.style_value("animation-iteration-count"), None);
        assert_eq!(element.style_value("--mb-slide-x"), Some("30px"));
    }
}
