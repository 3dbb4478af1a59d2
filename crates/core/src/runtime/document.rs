use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{render::RenderProps, MotionError, Result};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Live element state the runtime reads and mutates: class list,
/// attributes and inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the element a host would parse out of persisted markup.
    pub fn from_props(props: RenderProps) -> Self {
        let mut element = Self {
            classes: Vec::new(),
            attributes: props.attributes,
            style: props.style,
        };
        for class in props.class_name.as_deref().unwrap_or("").split_whitespace() {
            element.add_class(class);
        }
        element
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn style(&self) -> &BTreeMap<String, String> {
        &self.style
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.style.insert(property.into(), value.into());
    }
}

/// Flat element store standing in for the host document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Like [`Document::element`], for callers that treat a stale id as an
    /// error.
    pub fn get(&self, id: ElementId) -> Result<&Element> {
        self.element(id).ok_or(MotionError::UnknownElement(id))
    }

    /// Elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.has_class(class))
            .map(|(index, _)| ElementId(index))
            .collect()
    }
}
