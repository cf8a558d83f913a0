use anyhow::{bail, Result};

use crate::is_valid_identifier;

/// How to treat shader binaries whose length is not a multiple of 4 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlignmentPolicy {
    /// Reject misaligned binaries with an error
    Strict,
    /// Drop the trailing 1 to 3 bytes and log a warning
    Truncate,
}

impl Default for AlignmentPolicy {
    fn default() -> Self {
        AlignmentPolicy::Strict
    }
}

/// An `#ifndef`/`#define`/`#endif` block around the generated file. The guard macro is `prefix` followed by the
/// token derived from the output file name (see [`include_guard_token`](crate::include_guard_token))
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeGuard {
    prefix: String,
}

impl IncludeGuard {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Describes the shape of a generated file: the nested namespaces the declarations live in, an optional include
/// guard, whether declarations are separated by blank lines, and how misaligned binaries are handled.
///
/// The two layouts used by the visualization code are available as [`EmbedConfig::plain`] and
/// [`EmbedConfig::guarded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    namespaces: Vec<String>,
    include_guard: Option<IncludeGuard>,
    blank_lines: bool,
    alignment: AlignmentPolicy,
}

impl EmbedConfig {
    /// Creates a new `EmbedConfig` with the given namespace path, outermost scope first. The config has no include
    /// guard, no blank lines between declarations and a strict alignment policy.
    ///
    /// # Errors
    ///
    /// If any of the `namespaces` is not a valid C++ identifier, an error is returned.
    pub fn new<I, S>(namespaces: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let namespaces = namespaces.into_iter().map(Into::into).collect::<Vec<_>>();
        for namespace in &namespaces {
            if !is_valid_identifier(namespace) {
                bail!("Namespace '{}' is no valid C++ identifier", namespace);
            }
        }
        Ok(Self {
            namespaces,
            include_guard: None,
            blank_lines: false,
            alignment: AlignmentPolicy::default(),
        })
    }

    /// Layout of `visualization/shaders`: namespace `visualization::shaders`, no include guard, declarations on
    /// consecutive lines
    pub fn plain() -> Self {
        Self {
            namespaces: vec!["visualization".into(), "shaders".into()],
            include_guard: None,
            blank_lines: false,
            alignment: AlignmentPolicy::Strict,
        }
    }

    /// Layout of `visualization/vulkan/shaders`: namespace `visualization::vulkan::shaders`, an include guard
    /// prefixed with `BB8_VISUALIZATION_SHADERS_` and a blank line after every declaration
    pub fn guarded() -> Self {
        Self {
            namespaces: vec!["visualization".into(), "vulkan".into(), "shaders".into()],
            include_guard: Some(IncludeGuard::new("BB8_VISUALIZATION_SHADERS_")),
            blank_lines: true,
            alignment: AlignmentPolicy::Strict,
        }
    }

    /// Adds an include guard whose macro starts with `prefix`. The prefix may be empty, in which case the macro is
    /// just the token derived from the output file name.
    ///
    /// # Errors
    ///
    /// If `prefix` contains characters other than ASCII letters, digits and underscores, or starts with a digit, an
    /// error is returned.
    pub fn with_include_guard<S: Into<String>>(mut self, prefix: S) -> Result<Self> {
        let prefix = prefix.into();
        if !prefix.is_empty() && !is_valid_identifier(&prefix) {
            bail!("Include guard prefix '{}' is no valid C++ identifier", prefix);
        }
        self.include_guard = Some(IncludeGuard::new(prefix));
        Ok(self)
    }

    pub fn with_blank_lines(mut self, blank_lines: bool) -> Self {
        self.blank_lines = blank_lines;
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn include_guard(&self) -> Option<&IncludeGuard> {
        self.include_guard.as_ref()
    }

    pub fn blank_lines(&self) -> bool {
        self.blank_lines
    }

    pub fn alignment(&self) -> AlignmentPolicy {
        self.alignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts() {
        let plain = EmbedConfig::plain();
        assert_eq!(&["visualization", "shaders"], plain.namespaces());
        assert!(plain.include_guard().is_none());
        assert!(!plain.blank_lines());

        let guarded = EmbedConfig::guarded();
        assert_eq!(&["visualization", "vulkan", "shaders"], guarded.namespaces());
        assert_eq!(
            Some("BB8_VISUALIZATION_SHADERS_"),
            guarded.include_guard().map(IncludeGuard::prefix)
        );
        assert!(guarded.blank_lines());
        assert_eq!(AlignmentPolicy::Strict, guarded.alignment());
    }

    #[test]
    fn test_new_matches_plain_layout() -> Result<()> {
        let config = EmbedConfig::new(vec!["visualization", "shaders"])?;
        assert_eq!(EmbedConfig::plain(), config);
        Ok(())
    }

    #[test]
    fn test_builder() -> Result<()> {
        let config = EmbedConfig::new(vec!["gfx"])?
            .with_include_guard("GFX_")?
            .with_blank_lines(true)
            .with_alignment(AlignmentPolicy::Truncate);
        assert_eq!(Some("GFX_"), config.include_guard().map(IncludeGuard::prefix));
        assert!(config.blank_lines());
        assert_eq!(AlignmentPolicy::Truncate, config.alignment());
        Ok(())
    }

    #[test]
    fn test_include_guard_prefix() -> Result<()> {
        let config = EmbedConfig::plain().with_include_guard("")?;
        assert_eq!(Some(""), config.include_guard().map(IncludeGuard::prefix));
        assert!(EmbedConfig::plain().with_include_guard("MY-PROJECT_").is_err());
        assert!(EmbedConfig::plain().with_include_guard("3D_").is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_namespace() {
        assert!(EmbedConfig::new(vec!["visualization", "vulkan-shaders"]).is_err());
        assert!(EmbedConfig::new(vec!["2d"]).is_err());
    }
}
