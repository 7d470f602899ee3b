//! Asciicast v2 header codec.
//!
//! The header is the single leading JSON object of a recording stream. The
//! `version`, `width`, and `height` fields are required; everything else is
//! optional and omitted from serialized output when unset, so a field the
//! recorder never wrote survives a round trip as absent rather than as a
//! zero value.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CastError, Result};

/// Terminal color theme embedded in a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Default foreground color.
    pub fg: String,
    /// Default background color.
    pub bg: String,
    /// Colon-separated color palette.
    pub palette: String,
}

/// The single leading metadata record of a recording stream.
///
/// Field declaration order is the serialized key order; encode output is
/// byte-reproducible for equal headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Format version.
    pub version: u64,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
    /// Unix timestamp of the recording start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Total duration of the recording, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Idle time cap applied while recording, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_time_limit: Option<f64>,
    /// Command that was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Recording title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Captured environment variables, sorted by key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    /// Terminal color theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: 2,
            width: 80,
            height: 24,
            timestamp: None,
            duration: None,
            idle_time_limit: None,
            command: None,
            title: None,
            env: None,
            theme: None,
        }
    }
}

impl Header {
    /// Create a version-2 header with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the recorded command.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the recording title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the recording start timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Decode a header from one line of JSON.
    ///
    /// `version`, `width`, and `height` must be present and integral; any
    /// optional field that is present must match its declared type. Unknown
    /// fields are ignored.
    pub fn decode(line: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| CastError::malformed(format!("header is not valid JSON: {e}")))?;
        let Value::Object(fields) = value else {
            return Err(CastError::malformed("header is not a JSON object"));
        };

        Ok(Self {
            version: required_integer(&fields, "version")?,
            width: required_dimension(&fields, "width")?,
            height: required_dimension(&fields, "height")?,
            timestamp: optional(&fields, "timestamp", Value::as_u64)?,
            duration: optional(&fields, "duration", Value::as_f64)?,
            idle_time_limit: optional(&fields, "idle_time_limit", Value::as_f64)?,
            command: optional(&fields, "command", as_string)?,
            title: optional(&fields, "title", as_string)?,
            env: optional(&fields, "env", as_env)?,
            theme: optional_theme(&fields)?,
        })
    }

    /// Encode the header as one line of JSON, without a trailing newline.
    ///
    /// Unset optional fields are omitted entirely; keys appear in field
    /// declaration order.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("a validated header always serializes")
    }
}

/// Extract a required integer field.
fn required_integer(fields: &Map<String, Value>, field: &str) -> Result<u64> {
    fields
        .get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| CastError::field(field))
}

/// Extract a required terminal dimension, which must also fit in `u16`.
fn required_dimension(fields: &Map<String, Value>, field: &str) -> Result<u16> {
    let raw = required_integer(fields, field)?;
    u16::try_from(raw).map_err(|_| CastError::field(field))
}

/// Extract an optional field, failing if it is present with the wrong type.
fn optional<T>(
    fields: &Map<String, Value>,
    field: &str,
    extract: impl Fn(&Value) -> Option<T>,
) -> Result<Option<T>> {
    fields.get(field).map_or(Ok(None), |value| {
        extract(value)
            .map(Some)
            .ok_or_else(|| CastError::field(field))
    })
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(String::from)
}

fn as_env(value: &Value) -> Option<BTreeMap<String, String>> {
    value
        .as_object()?
        .iter()
        .map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
        .collect()
}

/// Extract the optional theme; its `fg`, `bg`, and `palette` fields are all
/// required strings when the theme itself is present.
fn optional_theme(fields: &Map<String, Value>) -> Result<Option<Theme>> {
    let Some(value) = fields.get("theme") else {
        return Ok(None);
    };
    let theme = value.as_object().ok_or_else(|| CastError::field("theme"))?;

    Ok(Some(Theme {
        fg: theme_field(theme, "fg")?,
        bg: theme_field(theme, "bg")?,
        palette: theme_field(theme, "palette")?,
    }))
}

fn theme_field(theme: &Map<String, Value>, field: &str) -> Result<String> {
    theme
        .get(field)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| CastError::field(format!("theme.{field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header() -> Header {
        Header {
            version: 2,
            width: 80,
            height: 24,
            timestamp: Some(1_504_467_315),
            duration: Some(1.23),
            idle_time_limit: Some(4.56),
            command: Some("/bin/zsh -l".to_string()),
            title: Some("Demo".to_string()),
            env: Some(BTreeMap::from([
                ("SHELL".to_string(), "/bin/zsh".to_string()),
                ("TERM".to_string(), "xterm-256color".to_string()),
            ])),
            theme: Some(Theme {
                fg: "#d0d0d0".to_string(),
                bg: "#212121".to_string(),
                palette: "#151515:#ac4142".to_string(),
            }),
        }
    }

    #[test]
    fn decode_required_only() {
        let header = Header::decode(r#"{"version": 2, "width": 80, "height": 24}"#).unwrap();

        assert_eq!(header, Header::new(80, 24));
        assert_eq!(header.timestamp, None);
        assert_eq!(header.env, None);
    }

    #[test]
    fn decode_all_fields() {
        let line = concat!(
            r#"{"version": 2, "width": 80, "height": 24, "timestamp": 1504467315,"#,
            r#" "duration": 1.23, "idle_time_limit": 4.56, "command": "/bin/zsh -l","#,
            r#" "title": "Demo", "env": {"SHELL": "/bin/zsh", "TERM": "xterm-256color"},"#,
            r##" "theme": {"fg": "#d0d0d0", "bg": "#212121", "palette": "#151515:#ac4142"}}"##,
        );
        let header = Header::decode(line).unwrap();

        assert_eq!(header, full_header());
    }

    #[test]
    fn decode_missing_required_field() {
        let err = Header::decode(r#"{"version": 2, "width": 80}"#).unwrap_err();

        assert!(matches!(
            err,
            CastError::MissingOrInvalidField { ref field } if field == "height"
        ));
    }

    #[test]
    fn decode_required_field_wrong_type() {
        let err = Header::decode(r#"{"version": 2, "width": "80", "height": 24}"#).unwrap_err();

        assert!(matches!(
            err,
            CastError::MissingOrInvalidField { ref field } if field == "width"
        ));
    }

    #[test]
    fn decode_fractional_version_rejected() {
        let err = Header::decode(r#"{"version": 2.5, "width": 80, "height": 24}"#).unwrap_err();

        assert!(matches!(
            err,
            CastError::MissingOrInvalidField { ref field } if field == "version"
        ));
    }

    #[test]
    fn decode_optional_field_wrong_type() {
        let err = Header::decode(
            r#"{"version": 2, "width": 80, "height": 24, "duration": "1.23"}"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CastError::MissingOrInvalidField { ref field } if field == "duration"
        ));
    }

    #[test]
    fn decode_env_with_non_string_value() {
        let err = Header::decode(
            r#"{"version": 2, "width": 80, "height": 24, "env": {"COLUMNS": 80}}"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CastError::MissingOrInvalidField { ref field } if field == "env"
        ));
    }

    #[test]
    fn decode_theme_missing_subfield() {
        let err = Header::decode(
            r##"{"version": 2, "width": 80, "height": 24, "theme": {"fg": "#fff", "bg": "#000"}}"##,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CastError::MissingOrInvalidField { ref field } if field == "theme.palette"
        ));
    }

    #[test]
    fn decode_integer_duration_accepted() {
        let header =
            Header::decode(r#"{"version": 2, "width": 80, "height": 24, "duration": 5}"#).unwrap();

        assert_eq!(header.duration, Some(5.0));
    }

    #[test]
    fn decode_unknown_fields_ignored() {
        let header = Header::decode(
            r#"{"version": 2, "width": 80, "height": 24, "interactive": true}"#,
        )
        .unwrap();

        assert_eq!(header, Header::new(80, 24));
    }

    #[test]
    fn decode_rejects_non_object() {
        let err = Header::decode(r#"[2, 80, 24]"#).unwrap_err();

        assert!(matches!(err, CastError::MalformedRecord { .. }));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = Header::decode("{\"version\": 2,").unwrap_err();

        assert!(matches!(err, CastError::MalformedRecord { .. }));
    }

    #[test]
    fn encode_required_only() {
        let header = Header::new(80, 24);

        assert_eq!(header.encode(), r#"{"version":2,"width":80,"height":24}"#);
    }

    #[test]
    fn encode_omits_unset_optionals() {
        let header = Header::new(80, 24).with_timestamp(1_504_467_315);
        let encoded = header.encode();

        assert_eq!(
            encoded,
            r#"{"version":2,"width":80,"height":24,"timestamp":1504467315}"#
        );
        assert!(!encoded.contains("duration"));
        assert!(!encoded.contains("null"));
    }

    #[test]
    fn encode_key_order_is_stable() {
        let encoded = full_header().encode();
        let positions: Vec<usize> = ["version", "width", "height", "timestamp", "duration",
            "idle_time_limit", "command", "title", "env", "theme"]
            .iter()
            .map(|key| encoded.find(&format!("\"{key}\"")).unwrap())
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn roundtrip_required_only() {
        let header = Header::new(80, 24);

        assert_eq!(Header::decode(&header.encode()).unwrap(), header);
    }

    #[test]
    fn roundtrip_all_fields() {
        let header = full_header();

        assert_eq!(Header::decode(&header.encode()).unwrap(), header);
    }

    #[test]
    fn builder_helpers() {
        let header = Header::new(120, 40)
            .with_command("bash -l")
            .with_title("Build log");

        assert_eq!(header.width, 120);
        assert_eq!(header.command, Some("bash -l".to_string()));
        assert_eq!(header.title, Some("Build log".to_string()));
    }
}
