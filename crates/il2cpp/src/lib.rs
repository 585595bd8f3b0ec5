//! Il2CppDumper script.json to C++ header generator
//!
//! This crate turns the `ScriptMethod` records of an Il2CppDumper script into
//! two headers: one declaring a typed function pointer per method bound to
//! `module base + offset`, and one listing the offsets themselves.

pub mod script;
pub mod signature;
pub mod registry;
pub mod translator;
pub mod output;

pub use output::{GeneratedHeaders, HeaderGenerator};
pub use registry::OverloadRegistry;
pub use script::ScriptJson;
pub use signature::{ParsedSignature, SignatureError};
pub use translator::{translate, translate_all, Translation};

use offsetgen_core::{FunctionRecord, GenerationStatistics, GeneratorConfig, Result};
use std::path::Path;
use tracing::info;

/// Translate records and render both headers without touching the filesystem
pub fn generate(
    records: &[FunctionRecord],
    config: &GeneratorConfig,
) -> Result<(GeneratedHeaders, GenerationStatistics)> {
    let translation = translate_all(records, &config.declaration_style())?;
    let headers = GeneratedHeaders::render(config, &translation.declarations);
    Ok((headers, translation.statistics))
}

/// Load a script, generate the headers and write them into `output_dir`.
///
/// Nothing is written unless the whole script translated successfully.
pub fn generate_headers(
    script_path: &Path,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<GenerationStatistics> {
    let script = ScriptJson::load(script_path)?;
    let (headers, statistics) = generate(&script.methods, config)?;
    headers.write_to_dir(config, output_dir)?;

    info!(
        "Generation complete: {} functions, {} overloaded names, {} parameters",
        statistics.total_records, statistics.overloaded_names, statistics.total_parameters
    );

    Ok(statistics)
}
