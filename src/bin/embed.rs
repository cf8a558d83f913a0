#![warn(clippy::all)]

use anyhow::Result;
use spirv_embed::{cli, EmbedConfig};

fn main() -> Result<()> {
    pretty_env_logger::init();
    cli::run(
        "embed",
        "Embeds SPIR-V binaries into a C++ source file in namespace visualization::shaders",
        EmbedConfig::plain(),
    )
}
