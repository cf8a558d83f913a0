//! Command line interface shared by the `embed` and `embed_guarded` binaries:
//!
//! ```text
//! <binary> <output_file> [<name_1> <input_1> [<name_2> <input_2> ...]]
//! ```

use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use clap::{App, Arg, ArgMatches};

use crate::{pairs_from_args, EmbedConfig, Embedder, ShaderPair};

pub struct Args {
    pub output_file: PathBuf,
    pub shaders: Vec<ShaderPair>,
}

fn app<'a, 'b>(name: &str, about: &'b str) -> App<'a, 'b> {
    App::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::with_name("OUTPUT")
                .value_name("OUTPUT")
                .help("Generated C++ source file. Existing contents are replaced")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("SHADERS")
                .value_name("NAME FILE")
                .help("Pairs of C++ symbol name and SPIR-V file, e.g. 'vert_shader vert.spv frag_shader frag.spv'")
                .multiple(true)
                .index(2),
        )
}

fn args_from_matches(matches: &ArgMatches) -> Result<Args> {
    let output_file = PathBuf::from(matches.value_of_os("OUTPUT").unwrap_or_default());
    let shader_args = matches
        .values_of_os("SHADERS")
        .map(|values| values.collect::<Vec<_>>())
        .unwrap_or_default();
    let shaders = pairs_from_args(&shader_args[..])?;

    Ok(Args {
        output_file,
        shaders,
    })
}

/// Parses the arguments of the current process. Exits the process on `--help`, `--version` and invalid usage
pub fn get_args(name: &str, about: &str) -> Result<Args> {
    let matches = app(name, about).get_matches();
    args_from_matches(&matches)
}

/// Parses `args`, whose first element is the binary name. Usage errors are returned instead of exiting
pub fn get_args_from<I, T>(name: &str, about: &str, args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app(name, about).get_matches_from_safe(args)?;
    args_from_matches(&matches)
}

/// Entry point of the binaries: parses the command line and embeds all given shaders using `config`
pub fn run(name: &str, about: &str, config: EmbedConfig) -> Result<()> {
    let args = get_args(name, about)?;
    Embedder::new(config).embed(&args.output_file, &args.shaders)
}
