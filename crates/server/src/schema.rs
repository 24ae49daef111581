#![forbid(unsafe_code)]

use serde_json::{Map, Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParamKind {
    Str,
    Int,
    Num,
    Bool,
    IntList,
}

impl ParamKind {
    fn as_str(self) -> &'static str {
        match self {
            ParamKind::Str => "string",
            ParamKind::Int => "integer",
            ParamKind::Num => "number",
            ParamKind::Bool => "boolean",
            ParamKind::IntList => "array",
        }
    }
}

/// One declared parameter: type, required/optional, default, and numeric
/// range constraints. For `IntList` the range constraints apply per item.
#[derive(Clone, Debug)]
pub(crate) struct ParamSpec {
    pub(crate) name: &'static str,
    pub(crate) kind: ParamKind,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    pub(crate) min: Option<f64>,
    pub(crate) min_exclusive: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) non_empty: bool,
}

impl ParamSpec {
    pub(crate) fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            min: None,
            min_exclusive: None,
            max: None,
            non_empty: false,
        }
    }

    pub(crate) fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    pub(crate) fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub(crate) fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub(crate) fn min_exclusive(mut self, min: f64) -> Self {
        self.min_exclusive = Some(min);
        self
    }

    pub(crate) fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ToolSchema {
    params: Vec<ParamSpec>,
}

impl ToolSchema {
    pub(crate) fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// Validate `arguments` and apply defaults. On failure, every offending
    /// field is reported; a single bad call surfaces all of its problems at
    /// once instead of one per retry.
    pub(crate) fn validate(
        &self,
        arguments: &Map<String, Value>,
    ) -> Result<Map<String, Value>, Vec<String>> {
        let mut problems = Vec::new();
        let mut validated = Map::new();

        for key in arguments.keys() {
            if !self.params.iter().any(|p| p.name == key) {
                problems.push(format!("{key}: unknown argument"));
            }
        }

        for param in &self.params {
            match arguments.get(param.name) {
                Some(value) => {
                    if let Some(problem) = check_value(param, value) {
                        problems.push(problem);
                    } else {
                        validated.insert(param.name.to_string(), value.clone());
                    }
                }
                None if param.required => {
                    problems.push(format!("{}: required argument is missing", param.name));
                }
                None => {
                    if let Some(default) = &param.default {
                        validated.insert(param.name.to_string(), default.clone());
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(validated)
        } else {
            Err(problems)
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in &self.params {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(param.kind.as_str()));
            if param.kind == ParamKind::IntList {
                let mut items = Map::new();
                items.insert("type".to_string(), json!("integer"));
                if let Some(min) = param.min {
                    items.insert("minimum".to_string(), json!(min));
                }
                prop.insert("items".to_string(), Value::Object(items));
            } else {
                if let Some(min) = param.min {
                    prop.insert("minimum".to_string(), json!(min));
                }
                if let Some(min) = param.min_exclusive {
                    prop.insert("exclusiveMinimum".to_string(), json!(min));
                }
                if let Some(max) = param.max {
                    prop.insert("maximum".to_string(), json!(max));
                }
            }
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(param.name.to_string(), Value::Object(prop));
            if param.required {
                required.push(json!(param.name));
            }
        }
        json!({
            "type": "object",
            "properties": Value::Object(properties),
            "required": required
        })
    }
}

fn check_value(param: &ParamSpec, value: &Value) -> Option<String> {
    let name = param.name;
    match param.kind {
        ParamKind::Str => {
            let Some(text) = value.as_str() else {
                return Some(format!("{name}: must be a string"));
            };
            if param.non_empty && text.trim().is_empty() {
                return Some(format!("{name}: must be a non-empty string"));
            }
            None
        }
        ParamKind::Int => {
            let Some(number) = value.as_i64() else {
                return Some(format!("{name}: must be an integer"));
            };
            check_range(name, number as f64, param)
        }
        ParamKind::Num => {
            let Some(number) = value.as_f64().filter(|v| v.is_finite()) else {
                return Some(format!("{name}: must be a finite number"));
            };
            check_range(name, number, param)
        }
        ParamKind::Bool => {
            if value.as_bool().is_none() {
                return Some(format!("{name}: must be a boolean"));
            }
            None
        }
        ParamKind::IntList => {
            let Some(items) = value.as_array() else {
                return Some(format!("{name}: must be an array of integers"));
            };
            if param.non_empty && items.is_empty() {
                return Some(format!("{name}: must not be empty"));
            }
            for (index, item) in items.iter().enumerate() {
                let Some(number) = item.as_i64() else {
                    return Some(format!("{name}: item at index {index} must be an integer"));
                };
                if let Some(problem) = check_range(name, number as f64, param) {
                    return Some(format!("{problem} (item at index {index})"));
                }
            }
            None
        }
    }
}

fn check_range(name: &str, value: f64, param: &ParamSpec) -> Option<String> {
    if let Some(min) = param.min
        && value < min
    {
        return Some(format!("{name}: must be at least {min}"));
    }
    if let Some(min) = param.min_exclusive
        && value <= min
    {
        return Some(format!("{name}: must be greater than {min}"));
    }
    if let Some(max) = param.max
        && value > max
    {
        return Some(format!("{name}: must be at most {max}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            ParamSpec::required("seed", ParamKind::Str).non_empty(),
            ParamSpec::optional("length", ParamKind::Int)
                .with_default(json!(144))
                .min(1.0),
            ParamSpec::optional("rate", ParamKind::Num).min_exclusive(1.0),
        ])
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn defaults_are_applied() {
        let validated = schema().validate(&args(json!({"seed": "Alpha"}))).expect("valid");
        assert_eq!(validated.get("length"), Some(&json!(144)));
    }

    #[test]
    fn every_offending_field_is_named() {
        let problems = schema()
            .validate(&args(json!({"length": 0, "rate": 1.0, "bogus": true})))
            .expect_err("invalid");
        let joined = problems.join("; ");
        assert!(joined.contains("seed"), "{joined}");
        assert!(joined.contains("length"), "{joined}");
        assert!(joined.contains("rate"), "{joined}");
        assert!(joined.contains("bogus"), "{joined}");
    }

    #[test]
    fn type_mismatches_are_rejected() {
        let problems = schema()
            .validate(&args(json!({"seed": 7, "length": "many"})))
            .expect_err("invalid");
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn blank_required_strings_are_rejected() {
        let problems = schema()
            .validate(&args(json!({"seed": "   "})))
            .expect_err("invalid");
        assert_eq!(problems, vec!["seed: must be a non-empty string".to_string()]);
    }

    #[test]
    fn int_list_items_are_checked() {
        let schema = ToolSchema::new(vec![
            ParamSpec::required("windowSizes", ParamKind::IntList)
                .min(1.0)
                .non_empty(),
        ]);
        assert!(schema.validate(&args(json!({"windowSizes": [1, 2, 3]}))).is_ok());
        let problems = schema
            .validate(&args(json!({"windowSizes": [1, 0]})))
            .expect_err("invalid");
        assert!(problems[0].contains("index 1"), "{problems:?}");
        let problems = schema
            .validate(&args(json!({"windowSizes": []})))
            .expect_err("invalid");
        assert!(problems[0].contains("must not be empty"), "{problems:?}");
    }
}
