use clap::CommandFactory;
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;
use std::path::PathBuf;

use minicover_runner::cli::Cli;

fn main() -> Result<(), Error> {
    let outdir = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_else(|| "completions".into()));
    std::fs::create_dir_all(&outdir)?;

    let mut cmd = Cli::command();

    generate_to(Bash, &mut cmd, "mcr", &outdir)?;
    generate_to(Zsh, &mut cmd, "mcr", &outdir)?;
    generate_to(Fish, &mut cmd, "mcr", &outdir)?;

    println!("Generated completion scripts in: {}", outdir.display());

    Ok(())
}
