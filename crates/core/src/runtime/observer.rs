use std::{collections::BTreeSet, fmt};

use serde::Serialize;

use super::ElementId;

/// Shrinks the viewport's top and bottom edges before intersection is
/// computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RootMargin {
    pub top_percent: f64,
    pub bottom_percent: f64,
}

impl RootMargin {
    /// Same inset on the top and bottom edges.
    pub fn vertical_inset(percent: f64) -> Self {
        Self {
            top_percent: percent,
            bottom_percent: percent,
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = |percent: f64| {
            if percent == 0.0 {
                "0px".to_string()
            } else {
                format!("{}%", -percent)
            }
        };
        write!(
            f,
            "{} 0px {} 0px",
            edge(self.top_percent),
            edge(self.bottom_percent)
        )
    }
}

/// Visibility observer settings, as the host's intersection primitive
/// expects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObserverId(usize);

/// Which strategy an observer reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObserverRole {
    PauseOffscreen,
    ScrollAppear,
}

#[derive(Debug)]
struct Observer {
    role: ObserverRole,
    options: ObserverOptions,
    targets: BTreeSet<ElementId>,
}

/// Bookkeeping for every visibility observer the runtime has attached.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    observers: Vec<Observer>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, role: ObserverRole, options: ObserverOptions) -> ObserverId {
        self.observers.push(Observer {
            role,
            options,
            targets: BTreeSet::new(),
        });
        ObserverId(self.observers.len() - 1)
    }

    pub fn observe(&mut self, observer: ObserverId, target: ElementId) {
        if let Some(observer) = self.observers.get_mut(observer.0) {
            observer.targets.insert(target);
        }
    }

    /// Detaches `target`; no further events reach it through this observer.
    pub fn unobserve(&mut self, observer: ObserverId, target: ElementId) {
        if let Some(observer) = self.observers.get_mut(observer.0) {
            observer.targets.remove(&target);
        }
    }

    pub fn options(&self, observer: ObserverId) -> Option<ObserverOptions> {
        self.observers.get(observer.0).map(|observer| observer.options)
    }

    /// Observers currently watching `target`.
    pub fn watching(&self, target: ElementId) -> Vec<(ObserverId, ObserverRole)> {
        self.observers
            .iter()
            .enumerate()
            .filter(|(_, observer)| observer.targets.contains(&target))
            .map(|(index, observer)| (ObserverId(index), observer.role))
            .collect()
    }

    pub fn is_observed(&self, target: ElementId) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.targets.contains(&target))
    }

    /// Number of observers created, attached or not.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
