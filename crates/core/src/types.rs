//! Common types used throughout the generator

use serde::{Deserialize, Serialize};

/// Represents an offset from the module base (supports both 32 and 64 bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(pub u64);

impl Address {
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One reflected native function, as listed under `ScriptMethod` in script.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    #[serde(rename = "Address")]
    pub address: Address,
    #[serde(rename = "Signature")]
    pub signature: String,
    /// Human-readable label, only used in generated comments
    #[serde(rename = "Name")]
    pub display_name: String,
    #[serde(rename = "TypeSignature", default, skip_serializing_if = "Option::is_none")]
    pub type_signature: Option<String>,
}

impl FunctionRecord {
    pub fn new(address: impl Into<Address>, signature: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            signature: signature.into(),
            display_name: display_name.into(),
            type_signature: None,
        }
    }
}

/// Declarations generated for a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclaration {
    /// Base function name, or `name_N` for the Nth repeated overload
    pub resolved_name: String,
    pub offset_literal: String,
    /// `typedef ... (__fastcall *p_name)(...);`
    pub pointer_type_text: String,
    /// `p_name name = (p_name)(Base + offsets::name);`
    pub binding_text: String,
    pub display_name: String,
    pub address: Address,
}

/// Statistics about a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStatistics {
    pub total_records: usize,
    pub overloaded_names: usize,
    pub total_parameters: usize,
}
