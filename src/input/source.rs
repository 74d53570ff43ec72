use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::{Deserializer, Value};

use crate::input::InputError;

pub fn read_text_maybe_gz(path: &Path) -> Result<String, InputError> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;
    Ok(text)
}

/// Decodes either bare JSON or the page-script form `var data = [...];`.
///
/// Bare JSON must be a single value. In the script form only the value
/// assigned by the first `=` is read; whatever follows it (`;`, comments,
/// further statements) is ignored.
pub fn parse_payload(text: &str) -> Result<Value, InputError> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).map_err(|e| InputError::Parse(e.to_string()));
    }
    let Some(eq) = trimmed.find('=') else {
        return Err(InputError::Parse(
            "input is neither JSON nor a `data = ...` script".to_string(),
        ));
    };
    let rhs = trimmed[eq + 1..].trim_start();
    if rhs.is_empty() || rhs.starts_with(';') {
        return Err(InputError::Parse("empty `data` assignment".to_string()));
    }
    match Deserializer::from_str(rhs).into_iter::<Value>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(InputError::Parse(e.to_string())),
        None => Err(InputError::Parse("empty `data` assignment".to_string())),
    }
}
