//! Method arguments passed to [`ApiClient::call`](crate::clients::ApiClient::call).

use std::collections::BTreeMap;
use std::fmt;

/// A single method argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Binary buffer (only valid as a file upload)
    Bytes(Vec<u8>),
    /// Collection of records, sent as a JSON string
    Array(Vec<serde_json::Value>),
}

impl ArgValue {
    /// Renders the value as a query-string or form field.
    ///
    /// Returns `None` for [`ArgValue::Bytes`], which has no text form.
    #[must_use]
    pub fn to_field_value(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Bytes(_) => None,
            Self::Array(items) => Some(serde_json::Value::Array(items.clone()).to_string()),
        }
    }

    /// Short name of the variant, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Array(_) => "array",
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for ArgValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for ArgValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<serde_json::Value>> for ArgValue {
    fn from(value: Vec<serde_json::Value>) -> Self {
        Self::Array(value)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_field_value() {
            Some(value) => f.write_str(&value),
            None => write!(f, "<{} bytes>", self.kind()),
        }
    }
}

/// Named arguments for an API method call.
///
/// Keys are kept sorted so encoded requests are deterministic.
///
/// # Example
///
/// ```
/// use slackey::MethodArgs;
///
/// let args = MethodArgs::new()
///     .with("channel", "C024BE91L")
///     .with("text", "Hello")
///     .with("unfurl_links", false);
/// assert_eq!(args.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodArgs {
    values: BTreeMap<String, ArgValue>,
}

impl MethodArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, replacing any previous value under the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an argument, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Option<ArgValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Returns the value of an argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Removes an argument and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<ArgValue> {
        self.values.remove(name)
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over arguments in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for MethodArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for MethodArgs {
    type Item = (String, ArgValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
