use serde::{Deserialize, Serialize};

/// A factory recipe: fixed inputs, one output and a cycle duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schematic {
    pub schematic_id: i64,
    pub name: String,
    pub cycle_time_seconds: i64,
    pub inputs: Vec<SchematicMaterial>,
    pub output: SchematicMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchematicMaterial {
    pub type_id: i64,
    pub quantity: i64,
}
