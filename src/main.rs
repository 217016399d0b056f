use std::{
    fs::File,
    io::{self, BufRead, BufReader, LineWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use movies2sql::{Dialect, DialectKind, Stats, Statement};

const LOG_ENV: &str = "MOVIES2SQL_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Convert a movie catalogue into SQL INSERT statements.
///
/// Each input line describes one movie, followed by its genre, director and
/// actor lists. Statements are written one per line, suitable for piping into
/// `mysql` or `psql`. Malformed entries are reported on standard error.
#[derive(StructOpt)]
struct Opt {
    /// SQL dialect to generate.
    #[structopt(possible_values = DialectKind::NAMES, case_insensitive = true)]
    dialect: DialectKind,
    /// Database (mysql, required) or schema (postgres) to switch to.
    database: Option<String>,
    /// Read the catalogue from a file instead of standard input.
    #[structopt(short = "i", long = "input")]
    input: Option<PathBuf>,
    /// Write statements to a file instead of standard output.
    #[structopt(short = "o", long = "output")]
    output: Option<PathBuf>,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("unable to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    })
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(LineWriter::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn run(opt: &Opt, dialect: &dyn Dialect, preamble: Option<&Statement>) -> anyhow::Result<Stats> {
    let input = open_input(opt.input.as_deref())?;
    let output = open_output(opt.output.as_deref())?;
    let stats = movies2sql::run(dialect, preamble, input, output, io::stderr().lock())
        .context("conversion aborted")?;
    Ok(stats)
}

fn main() {
    let opt = Opt::from_args();
    init_logging();
    let dialect = opt.dialect.build();
    let preamble = match dialect.preamble(opt.database.as_deref()) {
        Ok(preamble) => preamble,
        Err(e) => {
            eprintln!("error: {}\n", e);
            let _ = Opt::clap().write_help(&mut io::stderr());
            eprintln!();
            std::process::exit(1);
        }
    };
    let rc = match run(&opt, &*dialect, preamble.as_ref()) {
        Ok(stats) => {
            debug!(
                lines = stats.lines,
                statements = stats.statements,
                diagnostics = stats.diagnostics,
                "conversion finished"
            );
            0
        }
        Err(e) => {
            for (i, e) in e.chain().enumerate() {
                if i == 0 {
                    eprintln!("{}", e);
                } else {
                    eprintln!("caused by: {}", e);
                }
            }
            1
        }
    };
    std::process::exit(rc);
}
