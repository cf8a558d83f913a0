//! Embeds compiled SPIR-V shader binaries into generated C++ source files, so that the shader bytecode ships
//! inside the compiled program instead of being read from disk at runtime.
//!
//! The entry point is the [`Embedder`], which reads a list of `(name, file)` pairs, reinterprets each file as a
//! sequence of native-order `u32` words and writes one `std::vector<uint32_t>` constant per shader into a single
//! generated file. The shape of that file (namespaces, include guard, spacing) is described by an [`EmbedConfig`].
//!
//! ```no_run
//! use anyhow::Result;
//! use spirv_embed::{EmbedConfig, Embedder, ShaderPair};
//! fn main() -> Result<()> {
//!     let embedder = Embedder::new(EmbedConfig::guarded());
//!     embedder.embed(
//!         "shaders.h",
//!         &[
//!             ShaderPair::new("vert_shader", "vert.spv"),
//!             ShaderPair::new("frag_shader", "frag.spv"),
//!         ],
//!     )?;
//!     Ok(())
//! }
//! ```

mod config;
pub use self::config::*;

mod binary;
pub use self::binary::*;

mod declaration;
pub use self::declaration::*;

mod generated_file;
pub use self::generated_file::*;

mod writer;
pub use self::writer::*;

mod embedder;
pub use self::embedder::*;

pub mod cli;
