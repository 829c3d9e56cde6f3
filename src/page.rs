//! In-memory page model.
//!
//! A `Page` is the document the listeners and the language manager operate
//! on: a root element (the `<html>` analogue, addressed by its id) followed by
//! the body elements in document order. Element content is the rendered
//! markup and is replaced wholesale, like `innerHTML`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Page shared between the listener callbacks and the language manager.
pub type SharedPage = Arc<Mutex<Page>>;

/// A single page element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub content: String,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class` if absent, remove it if present.
    ///
    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn id_is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// A whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub root: Element,

    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            elements: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Wrap the page for sharing with listeners and the language manager.
    pub fn into_shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }

    /// Id of the root element, if it has one.
    pub fn root_id(&self) -> Option<&str> {
        self.root.id.as_deref()
    }

    /// All elements in document order, root first.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        std::iter::once(&self.root).chain(self.elements.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        std::iter::once(&mut self.root).chain(self.elements.iter_mut())
    }

    /// First element whose id is `id`.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.iter().find(|e| e.id_is(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.iter_mut().find(|e| e.id_is(id))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.element_by_id(id).is_some()
    }

    /// Ids of the elements carrying `class`, in document order.
    ///
    /// Elements without an id cannot be wired to events and are skipped.
    pub fn ids_by_class(&self, class: &str) -> Vec<String> {
        self.iter()
            .filter(|e| e.has_class(class))
            .filter_map(|e| e.id.clone())
            .collect()
    }

    /// Elements carrying attribute `name`, in document order.
    pub fn elements_with_attribute_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.iter_mut()
            .filter(move |e| e.attributes.contains_key(name))
    }
}
