use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info, warn};
use passone::{Assembler, Config, MnemonicTable, PoolMode};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pass one of a two-pass assembler: symbol, literal and pool tables, intermediate code"
)]
struct Opts {
    /// Source file, one statement per line
    input: PathBuf,
    /// Directory for the four table files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Mnemonic table to use instead of the built-in one (MNEMONIC CODE CLASS LENGTH per line)
    #[arg(long)]
    mnemonics: Option<PathBuf>,
    /// Write the mnemonic table in use to this file
    #[arg(long)]
    dump_mnemonics: Option<PathBuf>,
    /// Which literals each pool receives
    #[arg(long, value_enum, default_value_t = PoolArg::Cumulative)]
    pool_mode: PoolArg,
    /// Location counter before the first statement
    #[arg(long, default_value_t = 0)]
    start: i64,
    /// Do not write table files
    #[arg(long)]
    no_save: bool,
    /// Do not print tables to stdout
    #[arg(short, long)]
    quiet: bool,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PoolArg {
    /// Every pool repeats all literals seen so far
    Cumulative,
    /// Every pool gets only the literals since the previous pool
    PerPool,
}

impl From<PoolArg> for PoolMode {
    fn from(arg: PoolArg) -> Self {
        match arg {
            PoolArg::Cumulative => PoolMode::Cumulative,
            PoolArg::PerPool => PoolMode::PerPool,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_mnemonics(opts: &Opts) -> Result<MnemonicTable> {
    match &opts.mnemonics {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening mnemonic table {}", path.display()))?;
            let table = MnemonicTable::read_from(BufReader::new(file))
                .with_context(|| format!("reading mnemonic table {}", path.display()))?;
            info!("loaded {} mnemonics from {}", table.len(), path.display());
            Ok(table)
        }
        None => Ok(MnemonicTable::builtin()),
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let mnemonics = load_mnemonics(&opts)?;
    if let Some(path) = &opts.dump_mnemonics {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        mnemonics.write_to(file)?;
        info!("mnemonic table written to {}", path.display());
    }

    let mut assembler = Assembler::with_table(mnemonics);
    assembler.set_config(
        Config::default()
            .with_pool_mode(opts.pool_mode.into())
            .with_start_address(opts.start),
    );

    let out = assembler
        .assemble_file(&opts.input)
        .with_context(|| format!("assembling {}", opts.input.display()))?;

    if !opts.quiet {
        out.print_tables()?;
    }

    if !opts.no_save {
        fs::create_dir_all(&opts.out_dir)
            .with_context(|| format!("creating {}", opts.out_dir.display()))?;
        out.save_tables(&opts.out_dir)
            .with_context(|| format!("saving tables to {}", opts.out_dir.display()))?;
        info!("tables saved to {}", opts.out_dir.display());
    }

    let pending: Vec<&str> = out.symbols.unresolved().collect();
    if !pending.is_empty() {
        info!("symbols left for pass two to resolve: {}", pending.join(", "));
    }
    if out.has_diagnostics() {
        warn!("{} line(s) skipped", out.diagnostics.len());
    }

    Ok(())
}
