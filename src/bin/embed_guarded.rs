#![warn(clippy::all)]

use anyhow::Result;
use spirv_embed::{cli, EmbedConfig};

fn main() -> Result<()> {
    pretty_env_logger::init();
    cli::run(
        "embed_guarded",
        "Embeds SPIR-V binaries into an include-guarded C++ header in namespace visualization::vulkan::shaders",
        EmbedConfig::guarded(),
    )
}
