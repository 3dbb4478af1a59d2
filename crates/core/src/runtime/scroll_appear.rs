use std::collections::BTreeMap;

use super::{
    Document, Element, ElementId, ElementPhase, IntersectionEntry, ObserverId, ObserverOptions,
    ObserverRegistry, ObserverRole, RootMargin, RuntimeContext,
};
use crate::{
    compile::keys,
    schema::{ExitMode, ScrollTrigger},
};

/// Per-element state of the enter/exit machine.
#[derive(Debug, Clone, Copy)]
struct AppearState {
    phase: ElementPhase,
    trigger: ScrollTrigger,
    play_once: bool,
    exit_mode: ExitMode,
    /// Set once the element may play an exit. Exit-only elements start live
    /// because they are assumed visible at load.
    live: bool,
}

/// Plays enter and exit animations as elements cross the viewport.
#[derive(Debug, Default)]
pub(super) struct ScrollAppearStrategy {
    states: BTreeMap<ElementId, AppearState>,
}

impl ScrollAppearStrategy {
    pub(super) fn init(
        &mut self,
        context: &RuntimeContext,
        observers: &mut ObserverRegistry,
        document: &mut Document,
    ) -> usize {
        let targets = document.query_class(&context.markup.class("mode-scroll-appear"));
        if targets.is_empty() {
            return 0;
        }

        let observer = observers.create(
            ObserverRole::ScrollAppear,
            ObserverOptions {
                threshold: context.config.appear_threshold,
                root_margin: RootMargin::vertical_inset(context.config.appear_margin_percent),
            },
        );
        for &target in &targets {
            let Some(element) = document.element(target) else {
                continue;
            };
            let trigger = context
                .keyword::<ScrollTrigger>(element, keys::SCROLL_TRIGGER)
                .unwrap_or_default();
            let state = AppearState {
                phase: ElementPhase::Unseen,
                trigger,
                play_once: context.flag(element, keys::PLAY_ONCE) != Some(false),
                exit_mode: context
                    .keyword::<ExitMode>(element, keys::EXIT_MODE)
                    .unwrap_or_default(),
                live: trigger == ScrollTrigger::Exit,
            };
            self.states.insert(target, state);
            observers.observe(observer, target);
        }
        targets.len()
    }

    pub(super) fn phase(&self, target: ElementId) -> Option<ElementPhase> {
        self.states.get(&target).map(|state| state.phase)
    }

    pub(super) fn on_intersection(
        &mut self,
        context: &RuntimeContext,
        observers: &mut ObserverRegistry,
        observer: ObserverId,
        element: &mut Element,
        entry: IntersectionEntry,
    ) {
        let Some(state) = self.states.get_mut(&entry.target) else {
            return;
        };
        let triggered = context.markup.triggered_class();
        let exit_triggered = context.markup.exit_triggered_class();
        let previous = state.phase;

        if entry.is_intersecting {
            context.apply_main_direction(element);
            context.apply_main_timing(element);
            context.apply_blur(element);
            element.remove_class(&exit_triggered);
            element.add_class(&triggered);
            state.phase = ElementPhase::Entered;
            state.live = true;

            if state.trigger == ScrollTrigger::Enter && state.play_once {
                observers.unobserve(observer, entry.target);
                tracing::debug!(element = %entry.target, "entrance played once, detached");
            }
        } else if state.trigger.plays_exit() {
            if !state.live || state.phase == ElementPhase::Exited {
                return;
            }
            apply_exit_props(context, element, state);
            element.remove_class(&triggered);
            element.add_class(&exit_triggered);
            state.phase = ElementPhase::Exited;

            if state.play_once {
                observers.unobserve(observer, entry.target);
                tracing::debug!(element = %entry.target, "exit played once, detached");
            }
        } else if !state.play_once && state.phase == ElementPhase::Entered {
            // Hide again so the entrance replays on the next pass.
            element.remove_class(&triggered);
            state.phase = ElementPhase::Unseen;
        }

        if previous != state.phase {
            tracing::trace!(
                element = %entry.target,
                from = ?previous,
                to = ?state.phase,
                "scroll-appear transition"
            );
        }
    }
}

/// Exit visuals and timing come from the custom exit fields when the exit
/// mode is custom, otherwise from the main animation.
fn apply_exit_props(context: &RuntimeContext, element: &mut Element, state: &AppearState) {
    if state.exit_mode == ExitMode::Custom {
        context.apply_direction(element, keys::EXIT_TYPE, keys::EXIT_DIRECTION);
        context.apply_timing(
            element,
            keys::EXIT_DURATION,
            keys::EXIT_DELAY,
            keys::EXIT_ACCELERATION,
        );
    } else {
        context.apply_main_direction(element);
        context.apply_main_timing(element);
    }
    context.apply_blur(element);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        config::MarkupConfig,
        runtime::{
            tests::element_for, Document, ElementId, ElementPhase, IntersectionEntry,
            TriggerRuntime,
        },
    };

    fn setup(value: serde_json::Value) -> (TriggerRuntime, Document, ElementId) {
        let mut doc = Document::new();
        let id = doc.insert(element_for(value, &MarkupConfig::default()));
        let mut runtime = TriggerRuntime::default();
        runtime.init(&mut doc);
        (runtime, doc, id)
    }

    fn classes(doc: &Document, id: ElementId) -> (bool, bool) {
        let element = doc.element(id).unwrap();
        (
            element.has_class("triggered"),
            element.has_class("exit-triggered"),
        )
    }

    #[test]
    fn observer_uses_inset_margin_and_low_threshold() {
        let (runtime, _, id) = setup(json!({
            "animationMode": "scroll-appear", "animationType": "fade",
        }));
        let (observer, _) = runtime.observers().watching(id)[0];
        let options = runtime.observers().options(observer).unwrap();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin.to_string(), "-15% 0px -15% 0px");
    }

    #[test]
    fn play_once_entrance_is_terminal() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "slide",
            "animationDirection": "btt",
            "animationScrollTrigger": "enter",
            "animationPlayOnce": true,
        }));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Unseen));
        assert_eq!(classes(&doc, id), (false, false));

        assert!(runtime.dispatch(&mut doc, IntersectionEntry::visible(id)));
        assert_eq!(classes(&doc, id), (true, false));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Entered));
        assert!(!runtime.is_observed(id));
        assert_eq!(doc.element(id).unwrap().style_value("--mb-slide-y"), Some("30px"));

        let before = doc.element(id).cloned();
        assert!(!runtime.dispatch(&mut doc, IntersectionEntry::hidden(id)));
        assert!(!runtime.dispatch(&mut doc, IntersectionEntry::visible(id)));
        assert_eq!(doc.element(id).cloned(), before);
        assert_eq!(runtime.phase(id), Some(ElementPhase::Entered));
    }

    #[test]
    fn repeating_entrance_replays() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "fade",
            "animationPlayOnce": false,
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        assert_eq!(classes(&doc, id), (true, false));
        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        assert_eq!(classes(&doc, id), (false, false));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Unseen));
        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        assert_eq!(classes(&doc, id), (true, false));
        assert!(runtime.is_observed(id));
    }

    #[test]
    fn exit_waits_for_a_first_entrance() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "fade",
            "animationScrollTrigger": "both",
            "animationPlayOnce": false,
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        assert_eq!(classes(&doc, id), (false, false));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Unseen));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        assert_eq!(classes(&doc, id), (false, true));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Exited));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        assert_eq!(classes(&doc, id), (true, false));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Entered));
    }

    #[test]
    fn both_with_play_once_detaches_after_exit() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "scale",
            "animationScrollTrigger": "both",
            "animationPlayOnce": true,
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        assert!(runtime.is_observed(id));
        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        assert!(!runtime.is_observed(id));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Exited));
        assert!(!runtime.dispatch(&mut doc, IntersectionEntry::visible(id)));
        assert_eq!(classes(&doc, id), (false, true));
    }

    #[test]
    fn exit_only_starts_live() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "wipe",
            "animationDirection": "btt",
            "animationScrollTrigger": "exit",
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        assert_eq!(classes(&doc, id), (false, true));
        assert_eq!(runtime.phase(id), Some(ElementPhase::Exited));
        assert_eq!(
            doc.element(id).unwrap().style_value("--mb-wipe-from"),
            Some("inset(0 0 100% 0)")
        );
        assert!(!runtime.is_observed(id));
    }

    #[test]
    fn custom_exit_applies_exit_visuals_and_timing() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "slide",
            "animationDirection": "ltr",
            "animationAcceleration": "ease-in",
            "animationScrollTrigger": "both",
            "animationExitMode": "custom",
            "animationExitType": "curtain",
            "animationExitDirection": "inward",
            "animationExitDuration": 1.1,
            "animationExitDelay": 0.2,
            "animationPlayOnce": false,
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        let element = doc.element(id).unwrap();
        assert_eq!(element.style_value("--mb-slide-x"), Some("-30px"));
        assert_eq!(element.style_value("--mb-duration"), Some("0.6s"));
        assert_eq!(element.style_value("--mb-timing"), Some("ease-in"));

        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        let element = doc.element(id).unwrap();
        assert_eq!(element.style_value("--mb-curtain-from"), Some("inset(50% 0 50% 0)"));
        assert_eq!(element.style_value("--mb-duration"), Some("1.1s"));
        assert_eq!(element.style_value("--mb-delay"), Some("0.2s"));
        assert_eq!(element.style_value("--mb-timing"), Some("ease"));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        let element = doc.element(id).unwrap();
        assert_eq!(element.style_value("--mb-duration"), Some("0.6s"));
        assert_eq!(element.style_value("--mb-timing"), Some("ease-in"));
    }

    #[test]
    fn exit_only_custom_exit_uses_exit_visuals() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "fade",
            "animationScrollTrigger": "exit",
            "animationExitMode": "custom",
            "animationExitType": "slide",
            "animationExitDirection": "ltr",
            "animationExitDuration": 0.9,
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        let element = doc.element(id).unwrap();
        assert!(element.has_class("exit-slide"));
        assert!(element.has_class("exit-triggered"));
        assert_eq!(element.style_value("--mb-slide-x"), Some("-30px"));
        assert_eq!(element.style_value("--mb-duration"), Some("0.9s"));
    }

    #[test]
    fn custom_blur_amount_is_applied_on_enter_and_exit() {
        let (mut runtime, mut doc, id) = setup(json!({
            "animationMode": "scroll-appear",
            "animationType": "blur",
            "animationBlurAmount": 16,
            "animationScrollTrigger": "both",
            "animationPlayOnce": false,
        }));

        runtime.dispatch(&mut doc, IntersectionEntry::visible(id));
        let element = doc.element(id).unwrap();
        assert_eq!(element.attribute("data-blur-amount"), Some("16"));
        assert_eq!(element.style_value("--mb-blur-amount"), Some("16px"));

        runtime.dispatch(&mut doc, IntersectionEntry::hidden(id));
        assert_eq!(
            doc.element(id).unwrap().style_value("--mb-blur-amount"),
            Some("16px")
        );
    }
}
