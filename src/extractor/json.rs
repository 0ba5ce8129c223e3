use crate::extractor::{ParseError, ParseResult};
use crate::record::Record;

/// Parses structured-record content: a top-level array of objects, each
/// keyed by the `name`, `height`, and `weight` fields.
pub fn parse(content: &str) -> ParseResult {
    serde_json::from_str::<Vec<Record>>(content).map_err(|e| ParseError::new(e.to_string()))
}
