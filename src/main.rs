mod codegen;
mod config;
mod error;
mod logger;
mod output;
mod report;
mod request;

use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Settings,
    logger::{log, LogLevel, Logger},
    report::GenerationReport,
    request::{GenerationRequest, Language, Safety},
};

#[derive(Parser, Debug)]
#[command(
    name = "seqbr",
    version,
    about = "Generate sequential-branch test inputs for symbolic execution and verification tools."
)]
struct Cli {
    #[arg(value_enum, help = "Target language of the generated file")]
    language: Language,

    #[arg(
        allow_negative_numbers = true,
        help = "Number of sequential branches to generate"
    )]
    n: i64,

    #[arg(value_enum, help = "safe: only additions; unsafe: alternating signs")]
    safety: Safety,

    #[arg(long, help = "Directory to write the file into (default: current dir)")]
    out_dir: Option<PathBuf>,

    #[arg(long, help = "Seed for the Rust dialect's input literals (or set SEQBR_SEED)")]
    seed: Option<u64>,

    #[arg(long, default_value_t = false, help = "Print the generation report as JSON")]
    json: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Suppress info output (or set SEQBR_QUIET)"
    )]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = Logger::new(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log(&logger, LogLevel::Error, e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = Settings::resolve(cli.seed, cli.quiet, cli.out_dir)?;
    let logger = Logger::new(settings.quiet);

    // validated before anything touches the filesystem
    let request = GenerationRequest::new(cli.language, cli.n, cli.safety)?;

    log(
        &logger,
        LogLevel::Info,
        format!(
            "generating {} {:?} fixture with {} branch(es)",
            request.safety.label(),
            request.language,
            request.n()
        ),
    );

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let source = codegen::render(&request, &mut rng);
    let written = output::write_fixture(&settings.out_dir, &request, &source)?;
    if written.replaced {
        log(
            &logger,
            LogLevel::Warn,
            format!("replaced existing {}", written.path.display()),
        );
    }

    let report = GenerationReport::new(&request, &written.path, settings.seed);

    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    for line in report.summary_lines() {
        println!("{line}");
    }
    log(&logger, LogLevel::Success, "done");

    Ok(())
}
