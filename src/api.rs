use crate::error::{DocumentError, ParsecError};
use crate::json::{json_value, JsonValue};
use crate::outcome::Outcome;
use crate::position::{offset_of_remaining, position_at};
use crate::serialization::{to_value, Value};
use log::debug;
use miette::NamedSource;
use serde::{Serialize, Serializer};
use std::path::Path;

/// The result of successfully analyzing a whole document: the parsed value
/// tree plus serialization helpers.
#[derive(Debug)]
pub struct AnalysisResult {
    pub root: JsonValue,
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl AnalysisResult {
    /// The parsed document as a generic, serializable `Value`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        to_value(&self.root)
    }

    /// The parsed document as a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// The parsed document as a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Runs the document grammar over the whole of `source`.
///
/// The grammar must consume every character: leftover input is an error,
/// not a partial success. Parse failures come back as diagnostics that
/// locate the failure in the named source.
///
/// # Errors
///
/// Returns a `ParsecError` when the source does not match the grammar or
/// when input remains after the document.
pub fn analyze(source: &str, file_name: &str) -> Result<AnalysisResult, ParsecError> {
    debug!("analyzing '{file_name}' ({} bytes)", source.len());
    match json_value().run_str(source) {
        Outcome::Success(pair) => {
            if pair.second.non_empty() {
                let remaining = pair.second.fold_left(0usize, |count, _| count + 1);
                let offset = offset_of_remaining(source, remaining);
                let position = position_at(source, offset);
                debug!(
                    "'{file_name}' has trailing input at line {} column {}",
                    position.line, position.column
                );
                return Err(DocumentError::TrailingInput {
                    src: NamedSource::new(file_name, source.to_string()),
                    span: (offset, source.len() - offset).into(),
                }
                .into());
            }
            debug!("'{file_name}' analyzed successfully");
            Ok(AnalysisResult { root: pair.first })
        }
        Outcome::Failure(error) => {
            let remaining = error
                .remaining()
                .map(|rest| rest.chars().count())
                .unwrap_or(0);
            let offset = offset_of_remaining(source, remaining);
            let position = position_at(source, offset);
            debug!(
                "'{file_name}' failed to parse at line {} column {}: {error}",
                position.line, position.column
            );
            Err(DocumentError::Syntax {
                src: NamedSource::new(file_name, source.to_string()),
                span: (offset, source.len().saturating_sub(offset).min(1)).into(),
                message: error.to_string(),
            }
            .into())
        }
    }
}

/// Reads `path` and [`analyze`]s its contents, naming the source after the
/// file for diagnostics.
///
/// # Errors
///
/// Returns `DocumentError::Unreadable` when the file cannot be read, plus
/// everything `analyze` can return.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<AnalysisResult, ParsecError> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let source = std::fs::read_to_string(path).map_err(|_| DocumentError::Unreadable {
        path: path.display().to_string(),
    })?;
    analyze(&source, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use crate::analyze;

    #[test]
    fn test_simple_document_to_json() {
        let source = r#"{ "name": "deep thought", "answer": 42 }"#;
        let result = analyze(source, "answer.json").expect("document should parse");
        let json = result.to_json().unwrap();
        assert!(json.contains("\"answer\": 42"));
        assert!(json.contains("\"name\": \"deep thought\""));
    }

    #[test]
    fn test_scalar_document() {
        let result = analyze("  42  ", "scalar.json").expect("scalar should parse");
        assert_eq!(result.to_json().unwrap(), "42.0");
    }
}
