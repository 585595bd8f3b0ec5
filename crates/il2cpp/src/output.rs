//! C++ header output for generated declarations

use offsetgen_core::{GeneratedDeclaration, GeneratorConfig, HeaderGuard, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Both generated headers, fully rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeaders {
    /// Function pointer typedefs and bindings
    pub helper: String,
    /// Offset constants
    pub offsets: String,
}

impl GeneratedHeaders {
    /// Render both headers in memory
    pub fn render(config: &GeneratorConfig, declarations: &[GeneratedDeclaration]) -> Self {
        Self {
            helper: HeaderGenerator::helper_header(config, declarations),
            offsets: HeaderGenerator::offsets_header(config, declarations),
        }
    }

    /// Write both headers into `dir` using the configured file names.
    ///
    /// Both headers are staged as `<name>.tmp` and only renamed into place
    /// once both were written, so a failed run leaves no new header behind.
    pub fn write_to_dir(&self, config: &GeneratorConfig, dir: &Path) -> Result<()> {
        let files = [
            (dir.join(&config.helper_file_name), &self.helper),
            (dir.join(&config.offsets_file_name), &self.offsets),
        ];
        let staged: Vec<(PathBuf, &PathBuf)> = files
            .iter()
            .map(|(path, _)| (Self::staging_path(path), path))
            .collect();

        let result = Self::stage(&files, &staged).and_then(|()| {
            for (tmp, path) in &staged {
                std::fs::rename(tmp, path)?;
                info!("Wrote {:?}", path);
            }
            Ok(())
        });

        if result.is_err() {
            for (tmp, _) in &staged {
                if tmp.exists() {
                    if let Err(e) = std::fs::remove_file(tmp) {
                        warn!("Failed to remove {:?}: {}", tmp, e);
                    }
                }
            }
        }

        result
    }

    fn stage(files: &[(PathBuf, &String); 2], staged: &[(PathBuf, &PathBuf)]) -> Result<()> {
        for ((_, content), (tmp, _)) in files.iter().zip(staged) {
            std::fs::write(tmp, content)?;
            debug!("Staged {:?}", tmp);
        }

        // Renaming onto a directory would fail halfway through the commit
        for (_, path) in staged {
            if path.is_dir() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!("{} is a directory", path.display()),
                )
                .into());
            }
        }

        Ok(())
    }

    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

/// C/C++ header output
pub struct HeaderGenerator;

impl HeaderGenerator {
    /// Generate the header declaring one function pointer per record
    pub fn helper_header(config: &GeneratorConfig, declarations: &[GeneratedDeclaration]) -> String {
        let indent = &config.indent;
        let mut output = String::new();

        output.push_str(&Self::open_guard(config.header_guard, &config.helper_file_name));
        output.push_str(&format!("#include \"{}\"\n", config.interop_header));
        output.push_str(&format!("#include \"{}\"\n\n", config.offsets_file_name));

        output.push_str(&format!("namespace {} {{\n", config.namespace));
        output.push_str(&format!("{}// Pointer to {} base\n", indent, config.module_name));
        output.push_str(&format!(
            "{}{} {} = ({})GetModuleHandle(TEXT(\"{}\"));\n",
            indent, config.offset_type, config.module_base, config.offset_type, config.module_name
        ));

        for decl in declarations {
            output.push_str(&format!("{}// {}\n", indent, Self::comment_text(&decl.display_name)));
            output.push_str(&format!("{}{}\n", indent, decl.pointer_type_text));
            output.push_str(&format!("{}{}\n", indent, decl.binding_text));
        }

        output.push_str("}\n");
        output.push_str(&Self::close_guard(config.header_guard, &config.helper_file_name));

        output
    }

    /// Generate the header holding one offset constant per record
    pub fn offsets_header(config: &GeneratorConfig, declarations: &[GeneratedDeclaration]) -> String {
        let indent = &config.indent;
        let mut output = String::new();

        output.push_str(&Self::open_guard(config.header_guard, &config.offsets_file_name));
        output.push_str(&format!("namespace {} {{\n", config.namespace));
        output.push_str(&format!("{}namespace {} {{\n", indent, config.offsets_namespace));

        for decl in declarations {
            output.push_str(&format!(
                "{}{}{} {} = ({}){};\n",
                indent,
                indent,
                config.offset_type,
                decl.resolved_name,
                config.offset_type,
                decl.offset_literal
            ));
        }

        output.push_str(&format!("{}}}\n", indent));
        output.push_str("}\n");
        output.push_str(&Self::close_guard(config.header_guard, &config.offsets_file_name));

        output
    }

    fn open_guard(guard: HeaderGuard, file_name: &str) -> String {
        match guard {
            HeaderGuard::None => String::new(),
            HeaderGuard::PragmaOnce => "#pragma once\n\n".to_string(),
            HeaderGuard::IncludeGuard => {
                let macro_name = Self::guard_macro(file_name);
                format!("#ifndef {0}\n#define {0}\n\n", macro_name)
            }
        }
    }

    fn close_guard(guard: HeaderGuard, file_name: &str) -> String {
        match guard {
            HeaderGuard::IncludeGuard => format!("\n#endif // {}\n", Self::guard_macro(file_name)),
            HeaderGuard::None | HeaderGuard::PragmaOnce => String::new(),
        }
    }

    /// `offsets.hpp` -> `OFFSETS_HPP`
    fn guard_macro(file_name: &str) -> String {
        let name: String = file_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{}", name)
        } else {
            name
        }
    }

    // Display names end up on a single // line; a trailing backslash would
    // splice the next declaration into the comment
    fn comment_text(name: &str) -> String {
        name.replace(['\r', '\n'], " ")
            .trim_end_matches(|c: char| c == '\\' || c.is_whitespace())
            .to_string()
    }
}
