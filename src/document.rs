//! XML documents.

use crate::element::Element;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Initial capacity of the shared serialization buffer.
const DEFAULT_BUFFER_CAPACITY: usize = 512;

/// Default buffer size for file persistence.
const DEFAULT_FILE_BUFFER_SIZE: usize = 8192;

/// An XML document: a declaration, an ordered list of top-level elements,
/// and a reusable serialization buffer.
///
/// The declaration is fixed at construction. [`serialize`](Self::serialize)
/// clears and refills the owned buffer, so repeated serialization of the
/// same document reuses its allocation.
///
/// # Example
///
/// ```
/// use minxml::{Document, Element};
///
/// let mut doc = Document::new(1, Some("UTF-8"), Some(true));
/// let root = doc.add_element("root").unwrap();
/// root.add_child(Element::new("x").unwrap()).add_attribute("y", "z").unwrap();
///
/// assert_eq!(
///     doc.serialize(),
///     "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><root><x y=\"z\"/></root>"
/// );
/// ```
#[derive(Debug)]
pub struct Document {
    declaration: String,
    pub(crate) children: Vec<Element>,
    buffer: String,
}

impl Document {
    /// Creates a document.
    ///
    /// `estimated_element_count` is a capacity hint for the top-level
    /// element list. The declaration always starts with
    /// `<?xml version="1.0"`; ` encoding="…"` is appended only for a
    /// non-empty encoding, ` standalone="yes"`/`"no"` only when the flag is
    /// set.
    pub fn new(
        estimated_element_count: usize,
        encoding: Option<&str>,
        standalone: Option<bool>,
    ) -> Self {
        let mut declaration = String::from("<?xml version=\"1.0\"");
        if let Some(encoding) = encoding {
            if !encoding.is_empty() {
                declaration.push_str(" encoding=\"");
                declaration.push_str(encoding);
                declaration.push('"');
            }
        }
        match standalone {
            Some(true) => declaration.push_str(" standalone=\"yes\""),
            Some(false) => declaration.push_str(" standalone=\"no\""),
            None => {}
        }
        declaration.push_str("?>");

        Self {
            declaration,
            children: Vec::with_capacity(estimated_element_count),
            buffer: String::with_capacity(DEFAULT_BUFFER_CAPACITY),
        }
    }

    /// Returns the precomputed XML declaration.
    #[inline]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Returns the top-level elements in insertion order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a prepared top-level element and returns a reference to it.
    pub fn add_child(&mut self, element: Element) -> &mut Element {
        self.children.push(element);
        let index = self.children.len() - 1;
        &mut self.children[index]
    }

    /// Creates a validated element, appends it, and returns a reference to
    /// it for further building. Validation failures propagate and leave the
    /// document untouched.
    pub fn add_element(&mut self, name: &str) -> Result<&mut Element> {
        let element = Element::new(name)?;
        Ok(self.add_child(element))
    }

    /// Like [`add_element`](Self::add_element), with a namespace prefix.
    pub fn add_element_ns(&mut self, name: &str, namespace: &str) -> Result<&mut Element> {
        let element = Element::new_ns(name, namespace)?;
        Ok(self.add_child(element))
    }

    /// Serializes the whole document into the shared buffer and returns it.
    ///
    /// The buffer is cleared (keeping its capacity) and refilled on every
    /// call: declaration first, then each top-level element in insertion
    /// order. Calling this twice without mutating the document in between
    /// yields identical output.
    pub fn serialize(&mut self) -> &str {
        self.buffer.clear();
        self.buffer.push_str(&self.declaration);
        for child in &self.children {
            child.append_to(&mut self.buffer);
        }
        &self.buffer
    }

    /// Serializes the document and writes it to a file.
    ///
    /// Thin wrapper over [`serialize`](Self::serialize); I/O errors
    /// propagate to the caller unchanged.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.save_with_buffer(path, DEFAULT_FILE_BUFFER_SIZE)
    }

    /// Like [`save`](Self::save), with an explicit write buffer size.
    pub fn save_with_buffer<P: AsRef<Path>>(&mut self, path: P, buffer_size: usize) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::with_capacity(buffer_size, file);
        self.serialize();
        writer.write_all(self.buffer.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Serializes the document and writes it to an arbitrary sink.
    pub fn save_to_writer<W: Write>(&mut self, mut writer: W) -> Result<()> {
        self.serialize();
        writer.write_all(self.buffer.as_bytes())?;
        Ok(())
    }
}

impl Default for Document {
    /// A document with room for ten elements, UTF-8 encoding, standalone.
    fn default() -> Self {
        Self::new(10, Some("UTF-8"), Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_full_document_scenario() {
        let mut doc = Document::new(1, Some("UTF-8"), Some(true));
        let root = doc.add_element("root").unwrap();
        let x = root.add_child(Element::new("x").unwrap());
        x.add_attribute("y", "z").unwrap();
        assert_eq!(
            doc.serialize(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><root><x y=\"z\"/></root>"
        );
    }

    #[test]
    fn test_declaration_variants() {
        assert_eq!(
            Document::new(0, None, None).declaration(),
            "<?xml version=\"1.0\"?>"
        );
        assert_eq!(
            Document::new(0, Some(""), None).declaration(),
            "<?xml version=\"1.0\"?>"
        );
        assert_eq!(
            Document::new(0, Some("ASCII"), Some(false)).declaration(),
            "<?xml version=\"1.0\" encoding=\"ASCII\" standalone=\"no\"?>"
        );
        assert_eq!(
            Document::new(0, None, Some(true)).declaration(),
            "<?xml version=\"1.0\" standalone=\"yes\"?>"
        );
    }

    #[test]
    fn test_default_document() {
        let mut doc = Document::default();
        assert_eq!(
            doc.serialize(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"
        );
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut doc = Document::default();
        doc.add_element("root").unwrap().set_text("data");
        let first = doc.serialize().to_string();
        let second = doc.serialize().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialize_reflects_mutation() {
        let mut doc = Document::new(2, None, None);
        doc.add_element("a").unwrap();
        assert_eq!(doc.serialize(), "<?xml version=\"1.0\"?><a/>");
        doc.add_element("b").unwrap();
        assert_eq!(doc.serialize(), "<?xml version=\"1.0\"?><a/><b/>");
    }

    #[test]
    fn test_top_level_insertion_order() {
        let mut doc = Document::new(3, None, None);
        for name in ["first", "second", "third"] {
            doc.add_element(name).unwrap();
        }
        assert_eq!(
            doc.serialize(),
            "<?xml version=\"1.0\"?><first/><second/><third/>"
        );
    }

    #[test]
    fn test_add_element_propagates_validation() {
        let mut doc = Document::new(1, None, None);
        let err = doc.add_element("xmlRoot").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidElementName(_)));
        assert!(doc.children().is_empty());

        let err = doc.add_element_ns("root", "bad ns").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidNamespace(_)));
        assert!(doc.children().is_empty());
    }

    #[test]
    fn test_save_to_writer_matches_serialize() {
        let mut doc = Document::default();
        let root = doc.add_element("test").unwrap();
        root.add_attribute("testAttribute", "attributeValue").unwrap();
        root.set_text("testContent");

        let expected = doc.serialize().to_string();
        let mut sink = Vec::new();
        doc.save_to_writer(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), expected);
    }

    #[test]
    fn test_save_round_trips_through_file() {
        let mut doc = Document::default();
        doc.add_element("root").unwrap().set_text("persisted");
        let expected = doc.serialize().to_string();

        let path = std::env::temp_dir().join("minxml_save_test.xml");
        doc.save_with_buffer(&path, 1024).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(written, expected);
    }

    #[test]
    fn test_save_propagates_io_errors() {
        let mut doc = Document::default();
        let missing_dir = std::env::temp_dir().join("minxml_missing_dir").join("out.xml");
        let err = doc.save(&missing_dir).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io(_)));
    }
}
