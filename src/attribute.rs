//! XML attributes.

use crate::error::{Error, Result};
use crate::escape::escape_attr;
use crate::name::validate_attribute_name;

/// An XML attribute: a name with an optional value.
///
/// An absent value renders as a bare name, an empty value renders as
/// `name=""`. The name is fixed at construction; only the value mutates.
///
/// # Example
///
/// ```
/// use minxml::Attribute;
///
/// let attr = Attribute::new("id", Some("a < b")).unwrap();
/// let mut out = String::new();
/// attr.append_to(&mut out);
/// assert_eq!(out, " id=\"a &lt; b\"");
/// ```
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    /// Creates an attribute with a validated name and an escaped value.
    ///
    /// An absent `value` is normalized to the empty string, as escaping
    /// normalizes its input. Fails with the offending name when `name` does
    /// not satisfy the XML attribute name rules.
    pub fn new(name: &str, value: Option<&str>) -> Result<Self> {
        if !validate_attribute_name(name) {
            return Err(Error::invalid_attribute_name(name));
        }
        Ok(Self::new_unchecked(name, value))
    }

    /// Creates an attribute with a trusted name and an escaped value.
    ///
    /// The name is stored verbatim; a malformed name will serialize into
    /// malformed XML without error.
    pub fn new_unchecked(name: &str, value: Option<&str>) -> Self {
        let mut attribute = Self {
            name: name.to_string(),
            value: None,
        };
        attribute.set_value(value);
        attribute
    }

    /// Creates an attribute with a trusted name and a verbatim value.
    ///
    /// Neither the name nor the value is checked or escaped. An absent
    /// `value` stays absent and renders as a bare name.
    pub fn raw(name: &str, value: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }

    /// Returns the attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored (already escaped) value, if any.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True iff the value is absent (not merely empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Overwrites the value, escaping it for the attribute context.
    ///
    /// `None` is normalized to the empty string.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.value = Some(escape_attr(value.unwrap_or_default()).into_owned());
    }

    /// Overwrites the value verbatim. `None` clears it back to absent.
    pub fn set_raw_value(&mut self, value: Option<&str>) {
        self.value = value.map(str::to_string);
    }

    /// Appends ` name="value"` (or ` name` for an absent value) to the
    /// shared output buffer.
    pub fn append_to(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.name);
        if let Some(value) = &self.value {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}
