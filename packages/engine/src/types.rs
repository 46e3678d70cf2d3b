use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

/// A single cell returned by the database engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    /// Date/time values, kept in the textual form the engine reports.
    Timestamp(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Structural equality used when judging answers.
    ///
    /// Same variants compare by value. A few cross-variant pairs denote the
    /// same datum and match as well: an integer and a real with equal numeric
    /// value, a boolean and the integer 0/1, a timestamp and a text with
    /// identical content. `Null` only matches `Null`.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Real(b)) | (Value::Real(b), Value::Integer(a)) => {
                integer_equals_real(*a, *b)
            }
            (Value::Boolean(a), Value::Integer(b)) | (Value::Integer(b), Value::Boolean(a)) => {
                i64::from(*a) == *b
            }
            (Value::Timestamp(a), Value::Text(b)) | (Value::Text(b), Value::Timestamp(a)) => a == b,
            _ => self == other,
        }
    }

    /// Text shown in result tables.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(v) => v.to_string(),
            Value::Real(v) => v.to_string(),
            Value::Text(v) | Value::Timestamp(v) => v.clone(),
            Value::Boolean(v) => v.to_string(),
            Value::Blob(bytes) => bytes_to_hex(bytes),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Integer(v) => JsonValue::from(*v),
            Value::Real(v) => serde_json::Number::from_f64(*v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Text(v) | Value::Timestamp(v) => JsonValue::from(v.clone()),
            Value::Boolean(v) => JsonValue::from(*v),
            Value::Blob(bytes) => JsonValue::from(bytes_to_hex(bytes)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// 2^63; reals at or beyond it cannot equal any `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn integer_equals_real(integer: i64, real: f64) -> bool {
    real.is_finite()
        && real.fract() == 0.0
        && (-I64_BOUND..I64_BOUND).contains(&real)
        && real as i64 == integer
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// One result row; values are aligned with `QueryResult::columns`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row(pub Vec<Value>);

impl Row {
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn matches(&self, other: &Row) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(left, right)| left.matches(right))
    }

    /// Renders the row as a JSON object keyed by column name, keeping the
    /// column order of the result.
    pub fn render(&self, columns: &[String]) -> String {
        let fields = self
            .0
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let name = columns
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| format!("column{}", idx + 1));
                format!(
                    "{}:{}",
                    JsonValue::String(name),
                    value.to_json()
                )
            })
            .collect::<Vec<_>>();
        format!("{{{}}}", fields.join(","))
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row(values)
    }
}

/// Raw output of a backend call, before timing and error capture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub success: bool,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    pub row_count: usize,
    pub execution_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    pub(crate) fn succeeded(row_set: RowSet, execution_time_ms: f64) -> Self {
        let row_count = row_set.rows.len();
        Self {
            success: true,
            columns: row_set.columns,
            rows: row_set.rows,
            row_count,
            execution_time_ms,
            error: None,
        }
    }

    pub(crate) fn failed(error: String, execution_time_ms: f64) -> Self {
        Self {
            success: false,
            columns: Vec::new(),
            rows: Vec::new(),
            row_count: 0,
            execution_time_ms,
            error: Some(error),
        }
    }

    /// Looks up a value by column name. Duplicate names resolve to the first
    /// column carrying that name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row)?.0.get(idx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub passed: bool,
    pub message: String,
    pub user_row_count: usize,
    pub expected_row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<Vec<String>>,
}
