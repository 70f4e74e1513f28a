//! Content-type and relationship manifests.
//!
//! Higher-level document helpers for package formats that describe their
//! parts through a `[Content_Types].xml` document and per-part `.rels`
//! relationship documents. These are plain compositions of [`Document`],
//! [`Element`] and raw attributes over known-safe vocabularies; they add no
//! serialization logic of their own.

use crate::document::Document;
use crate::element::Element;

/// A content type manifest: `<Types xmlns="…">` with `Default` and
/// `Override` entries.
///
/// # Example
///
/// ```
/// use minxml::manifest::ContentTypes;
///
/// let mut types = ContentTypes::new("http://schemas.example.com/content-types", 2);
/// types.add_default("application/xml", "xml");
/// assert!(types.serialize().contains("<Default ContentType=\"application/xml\" Extension=\"xml\"/>"));
/// ```
#[derive(Debug)]
pub struct ContentTypes {
    document: Document,
}

impl ContentTypes {
    /// Creates a content type manifest with the given namespace declaration.
    ///
    /// The namespace value is written verbatim; an empty string is emitted
    /// as-is.
    pub fn new(xmlns: &str, estimated_entry_count: usize) -> Self {
        let mut document = Document::new(1, Some("UTF-8"), Some(true));
        let mut types = Element::new_unchecked("Types");
        types.reserve_children(estimated_entry_count);
        types.add_raw_attribute("xmlns", xmlns);
        document.add_child(types);
        Self { document }
    }

    fn root_mut(&mut self) -> &mut Element {
        // The root Types element is installed by the constructor.
        &mut self.document.children[0]
    }

    /// Adds a `<Default ContentType="…" Extension="…"/>` entry.
    pub fn add_default(&mut self, content_type: &str, extension: &str) {
        let mut element = Element::new_unchecked("Default");
        element.reserve_attributes(2);
        element.add_raw_attribute("ContentType", content_type);
        element.add_raw_attribute("Extension", extension);
        self.root_mut().add_child(element);
    }

    /// Adds an `<Override ContentType="…" PartName="…"/>` entry.
    pub fn add_override(&mut self, content_type: &str, part_name: &str) {
        let mut element = Element::new_unchecked("Override");
        element.reserve_attributes(2);
        element.add_raw_attribute("ContentType", content_type);
        element.add_raw_attribute("PartName", part_name);
        self.root_mut().add_child(element);
    }

    /// Serializes the manifest document.
    pub fn serialize(&mut self) -> &str {
        self.document.serialize()
    }

    /// Returns the underlying document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

/// A relationship manifest: `<Relationships xmlns="…">` with one
/// `<Relationship Id="…" Type="…" Target="…"/>` entry per part.
#[derive(Debug)]
pub struct Relationships {
    document: Document,
}

impl Relationships {
    /// Creates a relationship manifest with the given namespace declaration.
    pub fn new(xmlns: &str, estimated_entry_count: usize) -> Self {
        let mut document = Document::new(1, Some("UTF-8"), Some(true));
        let mut relationships = Element::new_unchecked("Relationships");
        relationships.reserve_children(estimated_entry_count);
        relationships.add_raw_attribute("xmlns", xmlns);
        document.add_child(relationships);
        Self { document }
    }

    /// Adds a relationship entry.
    pub fn add_relationship(&mut self, id: &str, rel_type: &str, target: &str) {
        let mut element = Element::new_unchecked("Relationship");
        element.reserve_attributes(3);
        element.add_raw_attribute("Id", id);
        element.add_raw_attribute("Type", rel_type);
        element.add_raw_attribute("Target", target);
        // Installed by the constructor.
        self.document.children[0].add_child(element);
    }

    /// Serializes the manifest document.
    pub fn serialize(&mut self) -> &str {
        self.document.serialize()
    }

    /// Returns the underlying document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

/// Everything needed to register one part in a [`DocumentCollection`]:
/// its relationship triple, its content type, and where it lives.
#[derive(Debug, Clone, Copy)]
pub struct PartEntry<'a> {
    /// Unique relationship ID of the part.
    pub id: &'a str,
    /// Relationship type, usually a schema URL.
    pub rel_type: &'a str,
    /// Path of the part relative to its section.
    pub target_path: &'a str,
    /// Content type of the part, usually a schema URL.
    pub content_type: &'a str,
    /// Base path prepended to `target_path` in the content type override.
    pub base_path: &'a str,
}

/// One relationship section of a [`DocumentCollection`]: a `.rels` manifest
/// plus the documents it describes.
#[derive(Debug)]
pub struct RelationshipSection {
    relationships: Relationships,
    path: String,
    documents: Vec<Document>,
}

impl RelationshipSection {
    /// Path of the section inside the package.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The section's relationship manifest.
    pub fn relationships_mut(&mut self) -> &mut Relationships {
        &mut self.relationships
    }

    /// The documents registered in this section, in registration order.
    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }
}

/// A collection of documents described by one content type manifest and a
/// set of relationship sections.
#[derive(Debug)]
pub struct DocumentCollection {
    content_types: ContentTypes,
    sections: Vec<RelationshipSection>,
    relationship_xmlns: String,
}

impl DocumentCollection {
    /// Creates a collection with the two manifest namespaces.
    pub fn new(
        content_type_xmlns: &str,
        relationship_xmlns: &str,
        estimated_content_type_count: usize,
        estimated_section_count: usize,
    ) -> Self {
        Self {
            content_types: ContentTypes::new(content_type_xmlns, estimated_content_type_count),
            sections: Vec::with_capacity(estimated_section_count),
            relationship_xmlns: relationship_xmlns.to_string(),
        }
    }

    /// Adds a new section and returns its index.
    pub fn add_section(&mut self, path: &str, estimated_document_count: usize) -> usize {
        self.sections.push(RelationshipSection {
            relationships: Relationships::new(&self.relationship_xmlns, estimated_document_count),
            path: path.to_string(),
            documents: Vec::with_capacity(estimated_document_count),
        });
        self.sections.len() - 1
    }

    /// Registers `document` in the section at `section_index`: adds the
    /// content type override, the relationship entry, and stores the
    /// document. Returns a reference to the stored document, or `None` for
    /// an unknown section index.
    pub fn add_document(
        &mut self,
        section_index: usize,
        part: &PartEntry<'_>,
        document: Document,
    ) -> Option<&mut Document> {
        let section = self.sections.get_mut(section_index)?;
        let part_name = format!("{}{}", part.base_path, part.target_path);
        self.content_types.add_override(part.content_type, &part_name);
        section
            .relationships
            .add_relationship(part.id, part.rel_type, part.target_path);
        section.documents.push(document);
        let index = section.documents.len() - 1;
        Some(&mut section.documents[index])
    }

    /// The collection's content type manifest.
    pub fn content_types_mut(&mut self) -> &mut ContentTypes {
        &mut self.content_types
    }

    /// The section at `index`, if any.
    pub fn section_mut(&mut self, index: usize) -> Option<&mut RelationshipSection> {
        self.sections.get_mut(index)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CT_XMLNS: &str = "http://schemas.example.com/package/content-types";
    const REL_XMLNS: &str = "http://schemas.example.com/package/relationships";

    #[test]
    fn test_content_types_output() {
        let mut types = ContentTypes::new(CT_XMLNS, 2);
        types.add_default("application/xml", "xml");
        types.add_override("application/vnd.sheet+xml", "/book/sheet1.xml");
        assert_eq!(
            types.serialize(),
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <Types xmlns=\"{CT_XMLNS}\">\
                 <Default ContentType=\"application/xml\" Extension=\"xml\"/>\
                 <Override ContentType=\"application/vnd.sheet+xml\" PartName=\"/book/sheet1.xml\"/>\
                 </Types>"
            )
        );
    }

    #[test]
    fn test_relationships_output() {
        let mut rels = Relationships::new(REL_XMLNS, 1);
        rels.add_relationship("rId1", "http://schemas.example.com/sheet", "sheet1.xml");
        assert_eq!(
            rels.serialize(),
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <Relationships xmlns=\"{REL_XMLNS}\">\
                 <Relationship Id=\"rId1\" Type=\"http://schemas.example.com/sheet\" Target=\"sheet1.xml\"/>\
                 </Relationships>"
            )
        );
    }

    #[test]
    fn test_manifest_values_are_not_escaped() {
        // Known-safe vocabulary: the raw path stores URLs verbatim.
        let mut rels = Relationships::new("http://a?b&c", 1);
        assert!(rels.serialize().contains("xmlns=\"http://a?b&c\""));
    }

    #[test]
    fn test_collection_wires_all_three_sides() {
        let mut collection = DocumentCollection::new(CT_XMLNS, REL_XMLNS, 4, 1);
        let section = collection.add_section("book/", 2);

        let part = PartEntry {
            id: "rId1",
            rel_type: "http://schemas.example.com/sheet",
            target_path: "sheet1.xml",
            content_type: "application/vnd.sheet+xml",
            base_path: "/book/",
        };
        let document = collection
            .add_document(section, &part, Document::default())
            .unwrap();
        document.add_element("worksheet").unwrap();

        let section = collection.section_mut(section).unwrap();
        assert_eq!(section.path(), "book/");
        assert_eq!(section.documents_mut().len(), 1);
        assert!(section
            .relationships_mut()
            .serialize()
            .contains("<Relationship Id=\"rId1\""));
        assert!(collection
            .content_types_mut()
            .serialize()
            .contains("PartName=\"/book/sheet1.xml\""));
    }

    #[test]
    fn test_collection_rejects_unknown_section() {
        let mut collection = DocumentCollection::new(CT_XMLNS, REL_XMLNS, 0, 0);
        let part = PartEntry {
            id: "rId1",
            rel_type: "t",
            target_path: "x.xml",
            content_type: "c",
            base_path: "/",
        };
        assert!(collection.add_document(7, &part, Document::default()).is_none());
        assert_eq!(collection.section_count(), 0);
    }
}
