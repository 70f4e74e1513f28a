//! Manifest example: describe a small document package.

use minxml::manifest::{DocumentCollection, PartEntry};
use minxml::Document;

fn main() {
    let mut collection = DocumentCollection::new(
        "http://schemas.example.com/package/content-types",
        "http://schemas.example.com/package/relationships",
        4,
        1,
    );
    collection
        .content_types_mut()
        .add_default("application/xml", "xml");

    let section = collection.add_section("book/", 2);
    let part = PartEntry {
        id: "rId1",
        rel_type: "http://schemas.example.com/sheet",
        target_path: "sheet1.xml",
        content_type: "application/vnd.sheet+xml",
        base_path: "/book/",
    };

    if let Some(sheet) = collection.add_document(section, &part, Document::default()) {
        if let Ok(data) = sheet.add_element("sheetData") {
            data.add_int_attribute("rows", 0);
        }
        println!("{}", sheet.serialize());
    }

    println!("{}", collection.content_types_mut().serialize());
    if let Some(section) = collection.section_mut(section) {
        println!("{}", section.relationships_mut().serialize());
    }
}
