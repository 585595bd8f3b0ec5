//! Reader for Il2CppDumper's script.json

use offsetgen_core::{FunctionRecord, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// JSON script format written by Il2CppDumper for IDA/Ghidra.
///
/// Only `ScriptMethod` is read. The other sections the dumper writes
/// (`ScriptString`, `ScriptMetadata`, `ScriptMetadataMethod`, `Addresses`)
/// are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptJson {
    #[serde(rename = "ScriptMethod")]
    pub methods: Vec<FunctionRecord>,
}

impl ScriptJson {
    pub fn new(methods: Vec<FunctionRecord>) -> Self {
        Self { methods }
    }

    /// Parse a script document
    pub fn parse(content: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(content)?;
        debug!("Parsed {} script methods", script.methods.len());
        Ok(script)
    }

    /// Load from a script.json file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading script from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let script = Self::parse(&content)?;
        info!("Loaded {} methods", script.methods.len());
        Ok(script)
    }

    /// Write to JSON file
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
