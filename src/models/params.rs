use serde_json::{Map, Value};

/// One raw Dialogflow parameter, in whichever shape the platform chose to
/// send it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Missing,
    Scalar(String),
    Keyed(Map<String, Value>),
    Sequence(Vec<Value>),
}

impl ParamValue {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => ParamValue::Missing,
            Some(Value::String(s)) => ParamValue::Scalar(s.clone()),
            Some(Value::Number(n)) => ParamValue::Scalar(n.to_string()),
            Some(Value::Bool(b)) => ParamValue::Scalar(b.to_string()),
            Some(Value::Object(map)) => ParamValue::Keyed(map.clone()),
            Some(Value::Array(items)) => ParamValue::Sequence(items.clone()),
        }
    }

    /// Compact JSON text of the value. Last resort when nothing else
    /// resolves, so containers never render as empty.
    pub fn dump(&self) -> String {
        match self {
            ParamValue::Missing => String::new(),
            ParamValue::Scalar(s) => s.clone(),
            ParamValue::Keyed(map) => Value::Object(map.clone()).to_string(),
            ParamValue::Sequence(items) => Value::Array(items.clone()).to_string(),
        }
    }
}
