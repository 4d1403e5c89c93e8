use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde_json::{Map, Value};

/// Generate the JSON schema for a tool input type.
///
/// Uses Draft-07 for compatibility with MCP clients like VSCode/Copilot that
/// don't support newer drafts.
pub(crate) fn schema_from_type<T: JsonSchema>() -> Map<String, Value> {
    let generator = SchemaSettings::draft07().into_generator();
    let schema = generator.into_root_schema_for::<T>();
    // serializing a derived schema is infallible
    match serde_json::to_value(schema) {
        Ok(Value::Object(schema)) => schema,
        _ => Map::default(),
    }
}
