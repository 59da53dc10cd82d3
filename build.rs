use clap_complete::{generate_to, Shell};
use std::fs;

include!("src/cli/cli.rs");

fn main() {
    let var = std::env::var_os("SHELL_COMPLETIONS_DIR").or_else(|| std::env::var_os("OUT_DIR"));
    let outdir = match var {
        None => return,
        Some(outdir) => outdir,
    };
    if fs::create_dir_all(&outdir).is_err() {
        return;
    }

    let mut cmd = build_cli();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        if let Err(err) = generate_to(shell, &mut cmd, crate_name!(), &outdir) {
            println!("cargo:warning=could not generate {shell} completions: {err}");
        }
    }
    println!("cargo:rerun-if-changed=src/cli/cli.rs");
}
