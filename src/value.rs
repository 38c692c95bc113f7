use indexmap::IndexMap;

/// An owned document tree.
///
/// Objects keep their members in insertion order, which is the order wildcard
/// paths report matches in. Numbers keep the `serde_json::Number` they were
/// read as, so `u64` values and float spellings survive a round trip.
///
/// # Examples
///
/// ```
/// use clove_path::Value;
/// use indexmap::IndexMap;
///
/// let mut obj = IndexMap::new();
/// obj.insert("y".to_string(), Value::Number(2.into()));
/// obj.insert("x".to_string(), Value::Number(1.into()));
///
/// let keys: Vec<_> = match &Value::Object(obj) {
///     Value::Object(map) => map.keys().cloned().collect(),
///     _ => unreachable!(),
/// };
/// assert_eq!(keys, ["y", "x"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Number, exactly as parsed
    Number(serde_json::Number),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Members in insertion order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Human-readable name of the value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(Into::into).collect()),
            Value::Object(obj) => {
                serde_json::Value::Object(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_convert_without_loss() {
        let source = json!({"big": u64::MAX, "neg": -3, "f": 1.0, "e": 1e300});
        let owned = Value::from(source.clone());

        match &owned {
            Value::Object(map) => {
                assert_eq!(map["big"], Value::Number(u64::MAX.into()));
                assert_eq!(map["big"].type_name(), "number");
            }
            other => panic!("expected an object, got {:?}", other),
        }
        assert_eq!(serde_json::Value::from(owned), source);
    }
}
