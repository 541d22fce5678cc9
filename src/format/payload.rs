//! Message payloads.
//!
//! A log call carries an ordered list of values. The list is classified once
//! into a [`Payload`] variant which decides how it is rendered.

use std::error::Error as StdError;

use serde_json::Value;

use super::template;

/// Message body of a log record.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No arguments; nothing is written.
    Empty,
    /// A single value rendered as-is, without template interpretation.
    Plain(Value),
    /// A template string followed by positional values.
    Template { template: String, values: Vec<Value> },
    /// Several values whose first element is not a string.
    Values(Vec<Value>),
    /// An error: message plus optional stack.
    Error(ErrorValue),
}

/// Captured error message and stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    pub message: String,
    pub stack: Option<String>,
}

impl ErrorValue {
    pub fn new(message: impl Into<String>, stack: Option<String>) -> Self {
        Self {
            message: message.into(),
            stack,
        }
    }

    /// Capture an error and its `source()` chain. Each cause becomes one
    /// stack line.
    pub fn capture(err: &(dyn StdError + 'static)) -> Self {
        let mut lines = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            lines.push(format!("    caused by: {}", cause));
            source = cause.source();
        }

        Self {
            message: err.to_string(),
            stack: if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            },
        }
    }
}

impl Payload {
    /// Classify an ordered argument list.
    pub fn from_args(mut args: Vec<Value>) -> Self {
        match args.len() {
            0 => Payload::Empty,
            1 => Payload::Plain(args.remove(0)),
            _ => match args.remove(0) {
                Value::String(template) => Payload::Template {
                    template,
                    values: args,
                },
                first => {
                    args.insert(0, first);
                    Payload::Values(args)
                }
            },
        }
    }

    /// Template with positional values.
    pub fn template(template: impl Into<String>, values: Vec<Value>) -> Self {
        Payload::Template {
            template: template.into(),
            values,
        }
    }

    pub fn error(err: &(dyn StdError + 'static)) -> Self {
        Payload::Error(ErrorValue::capture(err))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// Render the message body. `None` means the call writes nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            Payload::Empty => None,
            Payload::Plain(value) => Some(display(value)),
            Payload::Template { template, values } => Some(template::expand(template, values)),
            Payload::Values(values) => Some(
                values
                    .iter()
                    .map(display)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Payload::Error(err) => Some(match &err.stack {
                Some(stack) => format!("{}\n{}", err.message, stack),
                None => err.message.clone(),
            }),
        }
    }
}

/// Default string representation of a value: strings verbatim, everything
/// else as compact JSON.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Plain(Value::String(s.to_string()))
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Plain(Value::String(s))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Plain(value)
    }
}

impl From<Vec<Value>> for Payload {
    fn from(args: Vec<Value>) -> Self {
        Payload::from_args(args)
    }
}

impl From<ErrorValue> for Payload {
    fn from(err: ErrorValue) -> Self {
        Payload::Error(err)
    }
}
