// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Options shared by `convert` and `check`
fn convert_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("PATH")
            .help("TOML config file"),
        Arg::new("input_dir")
            .short('i')
            .long("input-dir")
            .value_name("DIR")
            .help("Directory holding the band files (default: current directory)"),
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("PATH")
            .help("Header file to write (default: eq.h)"),
        Arg::new("pattern")
            .short('p')
            .long("pattern")
            .value_name("GLOB")
            .help("Glob matched against file names (default: *.hz)"),
        Arg::new("legacy")
            .long("legacy")
            .action(ArgAction::SetTrue)
            .help("Use the historical text-substitution conversion (no validation)"),
        Arg::new("no_validate")
            .long("no-validate")
            .action(ArgAction::SetTrue)
            .help("Warn about bands with the wrong shape instead of failing"),
        Arg::new("crlf")
            .long("crlf")
            .action(ArgAction::SetTrue)
            .help("Write CRLF line endings"),
        Arg::new("array_name")
            .long("array-name")
            .help("Name of the declared array"),
        Arg::new("element_type")
            .long("element-type")
            .help("C element type of the array"),
        Arg::new("stdout")
            .long("stdout")
            .action(ArgAction::SetTrue)
            .help("Print the header to stdout instead of writing the output file"),
    ]
}

fn build_cli() -> Command {
    Command::new("eqbands")
        .version(env!("CARGO_PKG_VERSION"))
        .author("eqbands Contributors")
        .about("Convert .hz equalizer band dumps into a C array header")
        .subcommand_required(false)
        .args(convert_args())
        .subcommand(
            Command::new("convert")
                .about("Convert band files into a C header (default)")
                .args(convert_args()),
        )
        .subcommand(
            Command::new("check")
                .about("Parse and validate band files without writing anything")
                .args(convert_args()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("eqbands.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
