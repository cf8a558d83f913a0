use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};

use crate::{write_atomically, EmbedConfig, EmbeddedDeclaration, GeneratedFile, ShaderBinary};

/// A shader to embed: the symbol name of the generated constant and the SPIR-V file that provides its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPair {
    name: String,
    path: PathBuf,
}

impl ShaderPair {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Splits alternating `name file name file ...` arguments into `ShaderPair`s. File arguments are taken as they
/// are, so they do not need to be valid UTF-8
///
/// # Errors
///
/// If the number of arguments is odd, an error naming the unmatched argument is returned. If a name is no valid
/// UTF-8, an error is returned as well.
pub fn pairs_from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Vec<ShaderPair>> {
    if args.len() % 2 != 0 {
        bail!(
            "Expected pairs of shader name and shader file, but argument '{}' has no partner",
            args[args.len() - 1].as_ref().to_string_lossy()
        );
    }
    args.chunks_exact(2)
        .map(|pair| {
            let name = pair[0].as_ref();
            let name = name.to_str().ok_or_else(|| {
                anyhow!(
                    "Shader name '{}' is no valid UTF-8",
                    name.to_string_lossy()
                )
            })?;
            Ok(ShaderPair::new(name, pair[1].as_ref()))
        })
        .collect()
}

/// Turns a list of SPIR-V files into a single generated C++ source file, shaped according to an `EmbedConfig`
#[derive(Debug, Clone)]
pub struct Embedder {
    config: EmbedConfig,
}

impl Embedder {
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Reads all `shaders` and returns the source text that [`Embedder::embed`] would write to `output_path`.
    /// Declarations appear in the same order as `shaders`.
    ///
    /// # Errors
    ///
    /// Returns an error if any shader file cannot be read or is misaligned (depending on the alignment policy),
    /// if a shader name is no valid C++ identifier or is used twice, or if no include guard can be derived from
    /// `output_path`.
    pub fn generate<P: AsRef<Path>>(&self, output_path: P, shaders: &[ShaderPair]) -> Result<String> {
        let mut file = GeneratedFile::new(&self.config, output_path)?;
        for shader in shaders {
            let binary = ShaderBinary::from_path(shader.path())?;
            let words = binary.words(self.config.alignment())?;
            debug!(
                "Embedding {} as '{}' ({} words)",
                shader.path().display(),
                shader.name(),
                words.len()
            );
            let declaration = EmbeddedDeclaration::new(shader.name(), words)
                .with_context(|| format!("Cannot embed {}", shader.path().display()))?;
            file.push(declaration)?;
        }
        Ok(file.render())
    }

    /// Generates the source file for `shaders` and writes it to `output_path`, replacing any previous contents.
    /// Nothing is written if any of the shaders fails to embed.
    pub fn embed<P: AsRef<Path>>(&self, output_path: P, shaders: &[ShaderPair]) -> Result<()> {
        let output_path = output_path.as_ref();
        let source = self.generate(output_path, shaders)?;
        write_atomically(output_path, source.as_bytes())?;
        info!(
            "Wrote {} shader(s) to {}",
            shaders.len(),
            output_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_from_args() -> Result<()> {
        let pairs = pairs_from_args(&["kA", "a.spv", "kB", "b.spv"])?;
        assert_eq!(
            vec![
                ShaderPair::new("kA", "a.spv"),
                ShaderPair::new("kB", "b.spv")
            ],
            pairs
        );
        Ok(())
    }

    #[test]
    fn test_pairs_from_no_args() -> Result<()> {
        let args: Vec<String> = vec![];
        assert!(pairs_from_args(&args[..])?.is_empty());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "argument 'kB' has no partner")]
    fn test_pairs_from_odd_args() {
        pairs_from_args(&["kA", "a.spv", "kB"]).unwrap();
    }

    #[test]
    fn test_generate_missing_file() {
        let embedder = Embedder::new(EmbedConfig::plain());
        let err = embedder
            .generate("out.cpp", &[ShaderPair::new("kA", "does/not/exist.spv")])
            .expect_err("Missing shader was embedded");
        assert!(err.to_string().contains("does/not/exist.spv"));
    }

    #[test]
    fn test_generate_no_shaders() -> Result<()> {
        let embedder = Embedder::new(EmbedConfig::plain());
        let source = embedder.generate("out.cpp", &[])?;
        assert!(!source.contains("std::vector<uint32_t> "));
        assert!(source.starts_with("#include <vector>"));
        assert!(source.ends_with("}\n}\n"));
        Ok(())
    }
}
