use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read-only view over a drafted patent document.
///
/// Every field is optional on the wire. Absent or `null` values become empty,
/// scalar values are coerced to their string form, and a bare string is
/// accepted wherever a list is expected. Scoring treats empty fields as the
/// absence of signal, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentDocumentView {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub background: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: String,
    #[serde(
        default,
        alias = "detailedDescription",
        deserialize_with = "lenient_text"
    )]
    pub detailed_description: String,
    #[serde(default, deserialize_with = "lenient_claims")]
    pub claims: Vec<String>,
    #[serde(default, deserialize_with = "lenient_figures")]
    pub figures: Vec<FigureRef>,
    #[serde(rename = "abstract", default, deserialize_with = "lenient_text")]
    pub abstract_text: String,
}

/// Figure reference; only the title participates in scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureRef {
    #[serde(default)]
    pub title: String,
}

impl FigureRef {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl PatentDocumentView {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.background.is_empty()
            && self.summary.is_empty()
            && self.detailed_description.is_empty()
            && self.claims.is_empty()
            && self.figures.is_empty()
            && self.abstract_text.is_empty()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(coerce_text).unwrap_or_default())
}

fn lenient_claims<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let claims = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(coerce_text).collect(),
        Some(Value::String(text)) if text.trim().is_empty() => Vec::new(),
        Some(other) => vec![coerce_text(other)],
    };
    Ok(claims)
}

fn lenient_figures<'de, D>(deserializer: D) -> Result<Vec<FigureRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let figures = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(figure_from_value).collect(),
        Some(other) => vec![figure_from_value(other)],
    };
    Ok(figures)
}

fn figure_from_value(value: Value) -> FigureRef {
    match value {
        Value::Object(mut fields) => FigureRef {
            title: fields.remove("title").map(coerce_text).unwrap_or_default(),
        },
        other => FigureRef {
            title: coerce_text(other),
        },
    }
}

fn coerce_text(value: Value) -> String {
    match value {
        Value::Null | Value::Object(_) => String::new(),
        Value::String(text) => text,
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .into_iter()
            .map(coerce_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
