//! In-memory representation of a JavaScript config module

use serde_json::Value;

/// An expression inside a config module
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<Node>),
    Object(Vec<Property>),
    /// Reference to an imported binding, optionally through members
    /// (`eslint.configs.recommended`)
    Path(Vec<String>),
    /// `...expr`, valid inside arrays and call arguments
    Spread(Box<Node>),
    /// `callee(arg, ...)`
    Call { callee: Vec<String>, args: Vec<Node> },
}

/// An entry of an object literal
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Field(String, Node),
    Spread(Node),
}

impl Node {
    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    pub fn path<S: AsRef<str>>(segments: &[S]) -> Self {
        Node::Path(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }

    pub fn spread(inner: Node) -> Self {
        Node::Spread(Box::new(inner))
    }

    pub fn call<S: AsRef<str>>(callee: &[S], args: Vec<Node>) -> Self {
        Node::Call {
            callee: callee.iter().map(|s| s.as_ref().to_string()).collect(),
            args,
        }
    }

    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Object(
            fields
                .into_iter()
                .map(|(key, value)| Property::Field(key.into(), value))
                .collect(),
        )
    }

    pub fn strings<S: AsRef<str>>(values: &[S]) -> Self {
        Node::Array(values.iter().map(|v| Node::string(v.as_ref())).collect())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, value)| Property::Field(key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

/// A binding imported at the top of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub binding: String,
    pub source: String,
}

impl Import {
    pub fn new(binding: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            source: source.into(),
        }
    }
}

/// A config file: its imports and the single exported value
#[derive(Debug, Clone, PartialEq)]
pub struct JsModule {
    pub imports: Vec<Import>,
    pub export: Node,
}

impl JsModule {
    /// Module exporting a plain value with no imports
    pub fn exporting(export: Node) -> Self {
        Self {
            imports: Vec::new(),
            export,
        }
    }
}
