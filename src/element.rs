//! XML elements.

use crate::attribute::Attribute;
use crate::error::{Error, Result};
use crate::escape::escape_text;
use crate::name::validate_element_name;

/// An XML element: a name, an optional namespace prefix, optional text
/// content, and ordered attribute and child lists.
///
/// Child and attribute lists are allocated lazily on first use, so leaf
/// elements in large trees stay cheap. Insertion order is preserved and
/// determines output order. Name and namespace are fixed at construction.
///
/// # Example
///
/// ```
/// use minxml::Element;
///
/// let mut row = Element::new("row").unwrap();
/// row.add_attribute("r", "1").unwrap();
/// row.add_child(Element::new("c").unwrap());
///
/// let mut out = String::new();
/// row.append_to(&mut out);
/// assert_eq!(out, "<row r=\"1\"><c/></row>");
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    value: Option<String>,
    children: Option<Vec<Element>>,
    attributes: Option<Vec<Attribute>>,
}

impl Element {
    /// Creates an element with a validated name.
    pub fn new(name: &str) -> Result<Self> {
        if !validate_element_name(name) {
            return Err(Error::invalid_element_name(name));
        }
        Ok(Self::new_unchecked(name))
    }

    /// Creates an element with a validated name and namespace prefix.
    ///
    /// The namespace is validated with the element name rules and fails
    /// with [`ErrorKind::InvalidNamespace`](crate::ErrorKind::InvalidNamespace)
    /// so the caller can tell which field was bad.
    pub fn new_ns(name: &str, namespace: &str) -> Result<Self> {
        if !validate_element_name(name) {
            return Err(Error::invalid_element_name(name));
        }
        if !validate_element_name(namespace) {
            return Err(Error::invalid_namespace(namespace));
        }
        Ok(Self::new_ns_unchecked(name, namespace))
    }

    /// Creates an element with a trusted name, skipping validation.
    ///
    /// A malformed name will serialize into malformed XML without error.
    pub fn new_unchecked(name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: None,
            value: None,
            children: None,
            attributes: None,
        }
    }

    /// Creates an element with a trusted name and namespace prefix.
    pub fn new_ns_unchecked(name: &str, namespace: &str) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new_unchecked(name)
        }
    }

    /// Returns the element name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace prefix, if any.
    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the stored (already escaped) text content, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True iff the element has no text content (not merely empty text).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the child elements in insertion order.
    pub fn children(&self) -> &[Element] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        self.attributes.as_deref().unwrap_or(&[])
    }

    /// Pre-allocates room for `additional` children.
    pub fn reserve_children(&mut self, additional: usize) {
        self.children.get_or_insert_with(Vec::new).reserve(additional);
    }

    /// Pre-allocates room for `additional` attributes.
    pub fn reserve_attributes(&mut self, additional: usize) {
        self.attributes.get_or_insert_with(Vec::new).reserve(additional);
    }

    /// Sets the text content, escaping it for the element context.
    pub fn set_text(&mut self, text: &str) {
        self.value = Some(escape_text(text).into_owned());
    }

    /// Sets the text content verbatim, without escaping.
    pub fn set_raw_text(&mut self, text: &str) {
        self.value = Some(text.to_string());
    }

    /// Clears the text content back to absent, so an element without
    /// children renders self-closing again.
    pub fn clear_text(&mut self) {
        self.value = None;
    }

    /// Appends a child element and returns a reference to it for further
    /// tree building. O(1) amortized.
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        let children = self.children.get_or_insert_with(Vec::new);
        children.push(child);
        let index = children.len() - 1;
        &mut children[index]
    }

    /// Adds an attribute with a validated name and an escaped value.
    ///
    /// On failure nothing is appended; the element keeps its last valid
    /// state.
    pub fn add_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let attribute = Attribute::new(name, Some(value))?;
        self.push_attribute(attribute);
        Ok(())
    }

    /// Adds an attribute with a trusted name and an escaped value.
    pub fn add_attribute_unchecked(&mut self, name: &str, value: &str) {
        self.push_attribute(Attribute::new_unchecked(name, Some(value)));
    }

    /// Adds an attribute with a trusted name and a verbatim value, for
    /// known-safe vocabularies.
    pub fn add_raw_attribute(&mut self, name: &str, value: &str) {
        self.push_attribute(Attribute::raw(name, Some(value)));
    }

    /// Adds an integer attribute without going through a heap-allocated
    /// intermediate string.
    pub fn add_int_attribute(&mut self, name: &str, value: i64) {
        let mut buffer = itoa::Buffer::new();
        self.push_attribute(Attribute::raw(name, Some(buffer.format(value))));
    }

    /// Adds a floating point attribute, formatted with the shortest
    /// round-trippable representation.
    pub fn add_float_attribute(&mut self, name: &str, value: f64) {
        let mut buffer = ryu::Buffer::new();
        self.push_attribute(Attribute::raw(name, Some(buffer.format(value))));
    }

    /// Appends a pre-built attribute.
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
    }

    /// Renders the element and, recursively, its children into the shared
    /// output buffer (depth-first, pre-order).
    ///
    /// An element with no children and no text content renders
    /// self-closing. When both text and children are present, the text is
    /// written directly after the opening tag, followed by the children
    /// (mixed content).
    pub fn append_to(&self, out: &mut String) {
        out.push('<');
        if let Some(namespace) = &self.namespace {
            out.push_str(namespace);
            out.push(':');
        }
        out.push_str(&self.name);
        if let Some(attributes) = &self.attributes {
            for attribute in attributes {
                attribute.append_to(out);
            }
        }

        let has_children = self.children.as_ref().is_some_and(|c| !c.is_empty());
        if self.value.is_none() && !has_children {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(value) = &self.value {
            out.push_str(value);
        }
        if let Some(children) = &self.children {
            for child in children {
                child.append_to(out);
            }
        }
        out.push_str("</");
        if let Some(namespace) = &self.namespace {
            out.push_str(namespace);
            out.push(':');
        }
        out.push_str(&self.name);
        out.push('>');
    }
}
