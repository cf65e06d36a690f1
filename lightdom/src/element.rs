use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the element tree.
///
/// Elements carry no layout of their own: structure, class names and inline
/// style are handed to whatever renders them, which is free to theme the tree
/// by class name alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: &'static str,

    // Styling hooks
    pub classes: Vec<String>,
    /// Inline style declarations, in insertion order.
    pub style: Vec<(String, String)>,

    pub content: Content,

    // Interaction
    pub clickable: bool,

    // Custom data storage
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div",
            classes: Vec::new(),
            style: Vec::new(),
            content: Content::None,
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    fn tagged(tag: &'static str) -> Self {
        Self {
            id: generate_id(tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::tagged("div")
    }

    pub fn ul() -> Self {
        Self::tagged("ul")
    }

    pub fn li() -> Self {
        Self::tagged("li")
    }

    /// Buttons are clickable from the start.
    pub fn button() -> Self {
        Self {
            clickable: true,
            ..Self::tagged("button")
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged("span")
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Append one or more space separated class names. Empty input is ignored.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes
            .extend(class.as_ref().split_whitespace().map(str::to_string));
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.style.push((property, value)),
        }
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The `class` attribute as a browser would print it.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.child_elements().iter().find_map(|child| child.find(id))
    }

    /// Every descendant (including self) carrying `class`, in document order.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut result = Vec::new();
        collect_by_class(self, class, &mut result);
        result
    }
}

fn collect_by_class<'a>(element: &'a Element, class: &str, result: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        result.push(element);
    }
    for child in element.child_elements() {
        collect_by_class(child, class, result);
    }
}
