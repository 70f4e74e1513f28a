//! # minxml
//!
//! A fast, allocation-conscious XML document generator.
//!
//! Element trees are built programmatically and serialized directly into a
//! single growable string buffer, skipping the object-graph-then-serialize
//! round trip of DOM-style writers.
//!
//! ## Features
//!
//! - Direct-to-buffer serialization, depth-first and pre-order
//! - One reusable buffer per document; repeated serialization reallocates
//!   nothing
//! - Copy-free escaping when input needs no substitution
//! - XML name validation (NameStartChar/NameChar, reserved `xml` prefix)
//!   with explicit opt-out for trusted vocabularies
//! - Lazily allocated child and attribute lists, so leaf-heavy trees stay
//!   small
//! - Content-type and relationship manifest helpers for package formats
//!
//! ## Quick Start
//!
//! ```rust
//! use minxml::{Document, Element};
//!
//! let mut doc = Document::new(1, Some("UTF-8"), Some(true));
//! let root = doc.add_element("root").unwrap();
//! let x = root.add_child(Element::new("x").unwrap());
//! x.add_attribute("y", "z").unwrap();
//!
//! assert_eq!(
//!     doc.serialize(),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><root><x y=\"z\"/></root>"
//! );
//! ```
//!
//! ## Escaping
//!
//! Text and attribute values are escaped when they are set, not when the
//! document is serialized, so serialization itself is a pure buffer append:
//!
//! ```rust
//! use minxml::Element;
//!
//! let mut note = Element::new("note").unwrap();
//! note.set_text("salt & pepper");
//! assert_eq!(note.text(), Some("salt &amp; pepper"));
//! ```
//!
//! ## Trusted vocabularies
//!
//! Builders of known-safe documents (manifests, fixed schemas) can skip
//! validation and escaping entirely; the generator then writes names and
//! values verbatim, well-formedness becoming the caller's contract:
//!
//! ```rust
//! use minxml::Element;
//!
//! let mut rel = Element::new_unchecked("Relationship");
//! rel.add_raw_attribute("Target", "sheet1.xml");
//!
//! let mut out = String::new();
//! rel.append_to(&mut out);
//! assert_eq!(out, "<Relationship Target=\"sheet1.xml\"/>");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod attribute;
pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod manifest;
pub mod name;

// Re-export main types and functions
pub use attribute::Attribute;
pub use document::Document;
pub use element::Element;
pub use error::{Error, ErrorKind, Result};
pub use escape::{escape_attr, escape_text};
pub use name::{validate_attribute_name, validate_element_name};
