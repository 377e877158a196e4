use serde_json::Value as JsonValue;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no bracketed array found in model output")]
    NoArray,

    #[error("bracketed span is not a JSON array: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("array element {index} is not an object")]
    NotAnObject { index: usize },
}

/// Pulls the JSON array out of free-form model output. The span runs from the
/// first `[` to the last `]`, so prose or markdown fences around it are ignored.
/// Every element must be a JSON object; field contents are left to the validator.
pub fn extract(raw: &str) -> Result<Vec<JsonValue>, ExtractionError> {
    let start = raw.find('[').ok_or(ExtractionError::NoArray)?;
    let end = raw.rfind(']').ok_or(ExtractionError::NoArray)?;
    if end < start {
        return Err(ExtractionError::NoArray);
    }

    let candidates: Vec<JsonValue> = serde_json::from_str(&raw[start..=end])?;
    if let Some(index) = candidates.iter().position(|c| !c.is_object()) {
        return Err(ExtractionError::NotAnObject { index });
    }
    Ok(candidates)
}
