use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::{thread_rng, Rng};

/// Writes `words` in native byte order to `dir/file_name` and returns the path of the new file
pub fn write_words(dir: &Path, file_name: &str, words: &[u32]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let bytes = words
        .iter()
        .flat_map(|word| word.to_ne_bytes())
        .collect::<Vec<_>>();
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Random words that start with the SPIR-V magic number, so they at least look like a shader
pub fn random_shader_words(count: usize) -> Vec<u32> {
    let mut rng = thread_rng();
    std::iter::once(0x0723_0203)
        .chain((1..count).map(|_| rng.gen::<u32>()))
        .collect()
}

/// Extracts the words of the declaration named `name` from generated source
pub fn parse_declaration(source: &str, name: &str) -> Option<Vec<u32>> {
    let prefix = format!(
        "const std::vector<uint32_t> {} = std::vector<uint32_t> {{ ",
        name
    );
    let line = source.lines().find(|line| line.starts_with(&prefix))?;
    let initializer = line.strip_prefix(&prefix)?.strip_suffix(" };")?;
    if initializer.is_empty() {
        return Some(vec![]);
    }
    initializer
        .split(',')
        .map(|word| word.parse::<u32>().ok())
        .collect()
}
