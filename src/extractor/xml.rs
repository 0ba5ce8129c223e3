use crate::extractor::{ParseError, ParseResult};
use crate::record::Record;
use roxmltree::{Document, Node};

/// Parses tree-markup content: a root element with one child element per
/// person, each carrying `name`, `height`, and `weight` leaves. Document
/// order is preserved as row order.
pub fn parse(content: &str) -> ParseResult {
    let document =
        Document::parse(content).map_err(|e| ParseError::new(format!("invalid XML: {}", e)))?;

    let mut rows = Vec::new();
    for person in document.root_element().children().filter(Node::is_element) {
        let name = child_text(&person, "name")?;
        let height = child_number(&person, "height")?;
        let weight = child_number(&person, "weight")?;
        rows.push(Record::new(name, height, weight));
    }

    Ok(rows)
}

fn child_text(person: &Node, tag: &str) -> std::result::Result<String, ParseError> {
    let child = person
        .children()
        .find(|n| n.has_tag_name(tag))
        .ok_or_else(|| ParseError::new(format!("missing <{}> element", tag)))?;

    match child.text() {
        Some(text) => Ok(text.trim().to_string()),
        None => Err(ParseError::new(format!("empty <{}> element", tag))),
    }
}

fn child_number(person: &Node, tag: &str) -> std::result::Result<f64, ParseError> {
    let text = child_text(person, tag)?;
    text.parse::<f64>()
        .map_err(|_| ParseError::new(format!("non-numeric <{}> value '{}'", tag, text)))
}
