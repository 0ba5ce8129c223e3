use crate::extractor::{ParseError, ParseResult};
use crate::record::Record;
use csv::{ReaderBuilder, Trim};

/// Parses comma-separated content whose first row is a header naming the
/// `name`, `height`, and `weight` fields. Missing columns and non-numeric
/// measurements fail the whole file.
pub fn parse(content: &str) -> ParseResult {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize::<Record>() {
        let record = result.map_err(|e| ParseError::new(e.to_string()))?;
        rows.push(record);
    }

    Ok(rows)
}
