#![forbid(unsafe_code)]

use crate::envelope::ToolError;
use crate::schema::ToolSchema;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

pub(crate) type Handler = fn(&Map<String, Value>) -> Result<Value, ToolError>;

pub(crate) struct ToolDefinition {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) schema: ToolSchema,
    pub(crate) handler: Handler,
}

pub(crate) struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    by_name: BTreeMap<&'static str, usize>,
}

impl ToolRegistry {
    pub(crate) fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// A name collision is a build-time programming error; the caller is
    /// expected to propagate it out of `main` so the server never boots with
    /// an ambiguous surface.
    pub(crate) fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        if self.by_name.contains_key(definition.name) {
            return Err(ToolError::duplicate_tool(definition.name));
        }
        self.by_name.insert(definition.name, self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.by_name.get(name).and_then(|idx| self.tools.get(*idx))
    }

    pub(crate) fn definitions_json(&self) -> Value {
        Value::Array(
            self.by_name
                .values()
                .filter_map(|idx| self.tools.get(*idx))
                .map(|tool| {
                    json!({
                        "name": tool.name,
                        "description": tool.description,
                        "inputSchema": tool.schema.to_json(),
                    })
                })
                .collect(),
        )
    }

}

pub(crate) fn build_registry() -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(crate::tools::sequence::definition())?;
    registry.register(crate::tools::score::definition())?;
    registry.register(crate::tools::contraction::definition())?;
    registry.register(crate::tools::growth::definition())?;
    registry.register(crate::tools::convergence::definition())?;
    registry.register(crate::tools::bridge::definition())?;
    Ok(registry)
}
