use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use kbhelper_cli::{check_file, key_table, parse_modifier_tags};
use kbhelper_core::descriptor;
use kbhelper_core::{ModifierSet, Platform};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse and validate keyboard shortcut descriptors", long_about = None)]
struct Args {
    /// Key table to use
    #[arg(long, value_enum, global = true)]
    platform: Option<PlatformArg>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse descriptors such as "<Command><Shift>Q"
    Parse {
        #[arg(required = true)]
        descriptors: Vec<String>,
    },
    /// Render a raw key code
    Describe {
        code: u16,
        /// Modifier tags held, e.g. "<Option><Shift>"
        #[arg(short, long, default_value = "")]
        modifiers: String,
    },
    /// List the key table
    Keys {
        /// Only list F1 through F24
        #[arg(long)]
        functions: bool,
    },
    /// Validate a shortcut list, one descriptor per line
    Check { file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlatformArg {
    Desktop,
    Touch,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Desktop => Platform::Desktop,
            PlatformArg::Touch => Platform::Touch,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn run(args: Args) -> Result<()> {
    let platform = args.platform.map(Platform::from).unwrap_or_default();
    log::debug!("Using {} key table", platform);

    match args.command {
        Command::Parse { descriptors } => {
            for text in &descriptors {
                let combination = descriptor::parse(text)?;
                println!(
                    "{:<24} {:?} ({}) modifiers={:#x} -> {}",
                    text,
                    combination.key_code,
                    combination.key_code.raw(),
                    combination.modifiers.bits(),
                    descriptor::render(&combination)
                );
            }
        }
        Command::Describe { code, modifiers } => {
            let modifiers: ModifierSet = parse_modifier_tags(&modifiers)?;
            if platform.lookup(code).raw() != code {
                log::warn!("Key code {} is not in the {} key table", code, platform);
            }
            println!("{}", descriptor::render_raw(code, modifiers));
        }
        Command::Keys { functions } => {
            for row in key_table(platform, functions) {
                println!("{:>5}  {:<24} {:?}", row.raw, format!("{:?}", row.code), row.token);
            }
        }
        Command::Check { file } => {
            let lines = check_file(&file)?;
            let mut failures = 0;
            for checked in &lines {
                match &checked.result {
                    Ok(combination) => {
                        if let Some(previous) = checked.replaces {
                            println!(
                                "{}:{}: warning: {} replaces the binding on line {}",
                                file.display(),
                                checked.line,
                                combination,
                                previous
                            );
                        }
                    }
                    Err(e) => {
                        failures += 1;
                        println!("{}:{}: error: {}", file.display(), checked.line, e);
                    }
                }
            }
            println!("{} descriptors checked, {} failed", lines.len(), failures);
            if failures > 0 {
                bail!("{} invalid descriptors in {}", failures, file.display());
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
