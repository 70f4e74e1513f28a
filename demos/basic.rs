//! Basic example: build a small document and print it.

use minxml::{Document, Element};

fn main() -> minxml::Result<()> {
    let mut doc = Document::new(1, Some("UTF-8"), Some(true));

    let library = doc.add_element("library")?;
    let book = library.add_child(Element::new("book")?);
    book.add_attribute("year", "2021")?;

    let title = book.add_child(Element::new("title")?);
    title.set_text("Ampersands & Angle Brackets");

    let author = book.add_child(Element::new("author")?);
    author.set_text("A. Nonymous");

    println!("{}", doc.serialize());
    Ok(())
}
