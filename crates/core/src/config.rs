//! Generator configuration

use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Namespace wrapping every generated declaration
    pub namespace: String,
    /// Nested namespace holding the offset constants
    pub offsets_namespace: String,
    /// Interop header included by the helper header
    pub interop_header: String,
    /// File name of the function pointer header
    pub helper_file_name: String,
    /// File name of the offsets header
    pub offsets_file_name: String,
    /// Module whose base address the offsets are relative to
    pub module_name: String,
    /// Name of the variable holding the module base
    pub module_base: String,
    /// Calling convention tag placed in every typedef, may be empty
    pub calling_convention: String,
    /// Integer type used for the module base and the offsets
    pub offset_type: String,
    pub offset_radix: OffsetRadix,
    pub header_guard: HeaderGuard,
    /// Indentation unit for one nesting level
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "il2cppdumper".to_string(),
            offsets_namespace: "offsets".to_string(),
            interop_header: "il2cpp.h".to_string(),
            helper_file_name: "il2cpp_helper.hpp".to_string(),
            offsets_file_name: "offsets.hpp".to_string(),
            module_name: "GameAssembly.dll".to_string(),
            module_base: "GameAssembly".to_string(),
            calling_convention: "__fastcall".to_string(),
            offset_type: "uintptr_t".to_string(),
            offset_radix: OffsetRadix::Hex,
            header_guard: HeaderGuard::PragmaOnce,
            indent: "\t".to_string(),
        }
    }
}

/// Textual base used for offset literals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetRadix {
    #[default]
    Hex,
    Decimal,
}

impl OffsetRadix {
    /// Render an address as a C++ integer literal
    pub fn literal(&self, address: Address) -> String {
        match self {
            OffsetRadix::Hex => format!("0x{:X}", address.as_u64()),
            OffsetRadix::Decimal => address.as_u64().to_string(),
        }
    }
}

/// How generated headers protect against double inclusion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderGuard {
    None,
    #[default]
    PragmaOnce,
    /// `#ifndef FILE_NAME_HPP` / `#define` / `#endif`
    IncludeGuard,
}

/// The part of the configuration the signature translator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationStyle {
    pub calling_convention: String,
    pub module_base: String,
    pub offsets_namespace: String,
    pub offset_radix: OffsetRadix,
}

impl Default for DeclarationStyle {
    fn default() -> Self {
        GeneratorConfig::default().declaration_style()
    }
}

impl GeneratorConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> crate::Result<Self> {
        info!("Loading configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(
            "Configuration: namespace {}, module {}, radix {:?}, guard {:?}",
            config.namespace, config.module_name, config.offset_radix, config.header_guard
        );
        Ok(config)
    }

    pub fn declaration_style(&self) -> DeclarationStyle {
        DeclarationStyle {
            calling_convention: self.calling_convention.clone(),
            module_base: self.module_base.clone(),
            offsets_namespace: self.offsets_namespace.clone(),
            offset_radix: self.offset_radix,
        }
    }

    /// Check that every name ends up as valid C++ in the generated headers
    pub fn validate(&self) -> crate::Result<()> {
        let identifiers = [
            ("namespace", &self.namespace),
            ("offsets_namespace", &self.offsets_namespace),
            ("module_base", &self.module_base),
        ];
        for (field, value) in identifiers {
            if !is_identifier(value) {
                return Err(crate::Error::config(format!(
                    "{} must be a C++ identifier, got {:?}",
                    field, value
                )));
            }
        }

        if self.offset_type.split_whitespace().next().is_none()
            || !self.offset_type.split_whitespace().all(is_identifier)
        {
            return Err(crate::Error::config(format!(
                "offset_type must be one or more identifiers, got {:?}",
                self.offset_type
            )));
        }

        if !self.calling_convention.is_empty() && !is_identifier(&self.calling_convention) {
            return Err(crate::Error::config(format!(
                "calling_convention must be empty or an identifier, got {:?}",
                self.calling_convention
            )));
        }

        for (field, value) in [
            ("helper_file_name", &self.helper_file_name),
            ("offsets_file_name", &self.offsets_file_name),
            ("module_name", &self.module_name),
            ("interop_header", &self.interop_header),
        ] {
            if value.trim().is_empty() {
                return Err(crate::Error::config(format!("{} must not be empty", field)));
            }
            if value.contains('"') {
                return Err(crate::Error::config(format!("{} must not contain quotes", field)));
            }
        }

        if self.helper_file_name == self.offsets_file_name {
            return Err(crate::Error::config(
                "helper_file_name and offsets_file_name must differ",
            ));
        }

        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(crate::Error::config("indent may only contain spaces and tabs"));
        }

        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
