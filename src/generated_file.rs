use std::path::Path;

use anyhow::{anyhow, bail, Result};

use crate::{is_valid_identifier, EmbedConfig, EmbeddedDeclaration};

const STANDARD_INCLUDES: &str = "#include <vector>\n#include <cstdint>\n\n";

/// Derives the include guard token from the base name of an output file. Every character that is not an ASCII
/// letter or digit becomes an underscore and the result is upper-cased, so `shaders.h` becomes `SHADERS_H`
pub fn include_guard_token(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// The contents of one generated source file: the boilerplate described by an `EmbedConfig` wrapped around a list
/// of `EmbeddedDeclaration`s
#[derive(Debug)]
pub struct GeneratedFile<'a> {
    config: &'a EmbedConfig,
    guard_macro: Option<String>,
    declarations: Vec<EmbeddedDeclaration>,
}

impl<'a> GeneratedFile<'a> {
    /// Creates an empty file for the given `output_path`. The path is only used to derive the include guard.
    ///
    /// # Errors
    ///
    /// If `config` has an include guard and `output_path` has no valid Unicode file name, or the resulting guard
    /// macro is no valid C++ identifier (e.g. an empty prefix with a file name starting with a digit), an error is
    /// returned.
    pub fn new<P: AsRef<Path>>(config: &'a EmbedConfig, output_path: P) -> Result<Self> {
        let guard_macro = match config.include_guard() {
            Some(guard) => {
                let output_path = output_path.as_ref();
                let file_name = output_path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| {
                        anyhow!(
                            "Cannot derive an include guard from output path {}",
                            output_path.display()
                        )
                    })?;
                let guard_macro = format!("{}{}", guard.prefix(), include_guard_token(file_name));
                if !is_valid_identifier(&guard_macro) {
                    bail!(
                        "Include guard '{}' derived from output path {} is no valid C++ identifier",
                        guard_macro,
                        output_path.display()
                    );
                }
                Some(guard_macro)
            }
            None => None,
        };

        Ok(Self {
            config,
            guard_macro,
            declarations: vec![],
        })
    }

    /// The full include guard macro, if the config asks for one
    pub fn guard_macro(&self) -> Option<&str> {
        self.guard_macro.as_deref()
    }

    pub fn declarations(&self) -> &[EmbeddedDeclaration] {
        &self.declarations
    }

    /// Appends `declaration` after all previously pushed declarations
    ///
    /// # Errors
    ///
    /// If a declaration with the same name was already pushed, an error is returned.
    pub fn push(&mut self, declaration: EmbeddedDeclaration) -> Result<()> {
        if self
            .declarations
            .iter()
            .any(|existing| existing.name() == declaration.name())
        {
            bail!("Shader name '{}' is used more than once", declaration.name());
        }
        self.declarations.push(declaration);
        Ok(())
    }

    /// Renders the complete file
    pub fn render(&self) -> String {
        let mut source = String::new();

        if let Some(guard_macro) = &self.guard_macro {
            source.push_str(&format!("#ifndef {0}\n#define {0}\n\n", guard_macro));
        }
        source.push_str(STANDARD_INCLUDES);

        for namespace in self.config.namespaces() {
            source.push_str(&format!("namespace {} {{\n", namespace));
        }
        if self.config.blank_lines() {
            source.push('\n');
        }

        for declaration in &self.declarations {
            source.push_str(&declaration.render());
            if self.config.blank_lines() {
                source.push('\n');
            }
        }

        for _ in self.config.namespaces() {
            source.push_str("}\n");
        }
        if self.guard_macro.is_some() {
            source.push_str("#endif");
        }

        source
    }
}
