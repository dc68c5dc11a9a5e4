// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::*;
use cobol_to_java::{translate_with_options, Options};
use colored::Colorize;
use log::{debug, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Translates a COBOL program into an equivalent Java class. Reads the COBOL source from INPUT, or from stdin when no file is given, and writes <ClassName>.java",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Args {
    /// COBOL source file, `-` for stdin
    pub input: Option<PathBuf>,

    /// Directory the generated Java file is written to
    #[clap(long = "output-dir", short = 'o')]
    pub output_dir: Option<String>,

    /// Print the generated Java source to stdout instead of writing a file
    #[clap(long)]
    pub stdout: bool,

    /// Don't add explanatory comments to the generated source
    #[clap(long)]
    pub no_comments: bool,

    /// Don't print optimization tips
    #[clap(long)]
    pub no_tips: bool,

    /// Translator options in toml format
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the effective options as toml and exit
    #[clap(long)]
    pub print_config: bool,

    /// Display trace output
    #[clap(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// File options first, then command line overrides.
    fn options(&self) -> anyhow::Result<Options> {
        let mut options = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                toml::from_str::<Options>(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Options::default(),
        };
        if let Some(dir) = &self.output_dir {
            options.output_dir = dir.clone();
        }
        if self.no_comments {
            options.annotate = false;
        }
        if self.no_tips {
            options.suggest_optimizations = false;
        }
        if self.verbose {
            options.verbosity_level = LevelFilter::Trace;
        }
        Ok(options)
    }
}

fn read_source(input: Option<&Path>) -> anyhow::Result<String> {
    let source = match input.filter(|path| *path != Path::new("-")) {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            source
        }
    };
    if source.trim().is_empty() {
        bail!("no COBOL source to translate");
    }
    Ok(source)
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = args.options()?;
    if args.print_config {
        print!("{}", toml::to_string(&options)?);
        return Ok(());
    }

    // a second logger cannot be installed; ignore the error
    let _ = TermLogger::init(options.verbosity_level, Config::default(), TerminalMode::Stderr);
    debug!("cobol-refactor version: {}", env!("CARGO_PKG_VERSION"));

    let cobol = read_source(args.input.as_deref())?;
    let translation = translate_with_options(&cobol, &options);

    if args.stdout {
        print!("{}", translation.source);
    } else {
        let output_dir = Path::new(&options.output_dir);
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create {}", output_dir.display()))?;
        let path = output_dir.join(translation.file_name());
        fs::write(&path, &translation.source)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    if !translation.tips.is_empty() {
        let mut tips = format!("\n{}\n", "Optimization tips:".bold());
        for tip in &translation.tips {
            tips.push_str(&format!("• {tip}\n"));
        }
        // stdout carries the Java source in --stdout mode
        if args.stdout {
            eprint!("{tips}");
        } else {
            print!("{tips}");
        }
    }
    Ok(())
}

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    if let Err(err) = run(Args::parse()) {
        let err = format!("{:?}", err);
        println!("{}", err.bold().red());
        std::process::exit(1);
    }
}
