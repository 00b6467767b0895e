use serde_yaml::{Mapping, Value};

use super::ParseProblem;

/// Parse a metadata block with the YAML library.
pub(super) fn parse(raw: &str) -> Result<Mapping, ParseProblem> {
    if raw.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(raw) {
        Ok(Value::Mapping(fields)) => Ok(fields),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(other) => Err(ParseProblem::NotAMapping(describe(&other))),
        Err(e) => Err(ParseProblem::Syntax(e.to_string())),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Sequence(_) => "a sequence",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        _ => "a tagged value",
    }
}
