use anyhow::{bail, Result};
use itertools::Itertools;

/// Returns `true` if `name` is a syntactically valid C++ identifier, i.e. it starts with an ASCII letter or an
/// underscore and contains only ASCII letters, digits and underscores
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// A named `std::vector<uint32_t>` constant holding the words of one shader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedDeclaration {
    name: String,
    words: Vec<u32>,
}

impl EmbeddedDeclaration {
    /// Binds `words` to the symbol `name`
    ///
    /// # Errors
    ///
    /// If `name` is not a valid C++ identifier, an error is returned.
    pub fn new<S: Into<String>>(name: S, words: Vec<u32>) -> Result<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            bail!("Shader name '{}' is no valid C++ identifier", name);
        }
        Ok(Self { name, words })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Renders this declaration as a single line of C++, including the terminating newline
    pub fn render(&self) -> String {
        format!(
            "const std::vector<uint32_t> {} = std::vector<uint32_t> {{ {} }};\n",
            self.name,
            self.words.iter().join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in &["kTest", "vert_shader", "_private", "a1", "X"] {
            assert!(is_valid_identifier(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in &["", "1shader", "vert-shader", "frag.spv", "name with space", "naïve"] {
            assert!(!is_valid_identifier(name), "{} should be invalid", name);
        }
    }

    #[test]
    fn test_render() -> Result<()> {
        let declaration = EmbeddedDeclaration::new("kTest", vec![1, 2, 4_294_967_295])?;
        assert_eq!(
            "const std::vector<uint32_t> kTest = std::vector<uint32_t> { 1,2,4294967295 };\n",
            declaration.render()
        );
        Ok(())
    }

    #[test]
    fn test_render_empty() -> Result<()> {
        let declaration = EmbeddedDeclaration::new("kEmpty", vec![])?;
        assert_eq!(
            "const std::vector<uint32_t> kEmpty = std::vector<uint32_t> {  };\n",
            declaration.render()
        );
        Ok(())
    }

    #[test]
    #[should_panic(expected = "no valid C++ identifier")]
    fn test_invalid_name() {
        EmbeddedDeclaration::new("frag.spv", vec![1]).unwrap();
    }
}
