use super::{Document, RuntimeContext};
use crate::{compile::keys, timeline::ScrollRange};

/// Binds scroll-interactive elements to their view timeline. The platform
/// drives progress from there; nothing runs per frame.
#[derive(Debug, Default)]
pub(super) struct ScrollInteractiveStrategy;

impl ScrollInteractiveStrategy {
    pub(super) fn init(&mut self, context: &RuntimeContext, document: &mut Document) -> usize {
        let targets = document.query_class(&context.markup.class("mode-scroll-interactive"));
        if targets.is_empty() {
            return 0;
        }
        if !context.config.scroll_timeline_supported {
            tracing::debug!(
                elements = targets.len(),
                "scroll timelines unsupported, leaving elements static"
            );
            return targets.len();
        }

        let defaults = ScrollRange::default();
        for &target in &targets {
            let Some(element) = document.element_mut(target) else {
                continue;
            };
            context.apply_main_direction(element);
            context.apply_blur(element);

            let start = context
                .data(element, keys::RANGE_START)
                .map(str::to_string)
                .unwrap_or_else(|| defaults.start.to_string());
            let end = context
                .data(element, keys::RANGE_END)
                .map(str::to_string)
                .unwrap_or_else(|| defaults.end.to_string());
            element.set_style("animation-timeline", "view()");
            element.set_style("animation-range-start", start);
            element.set_style("animation-range-end", end);
        }
        targets.len()
    }
}
