use anyhow::{bail, Context, Result};
use clap::Parser as clapParser;
use falalang_lib::lexer::read_program;
use falalang_lib::{Interpreter, InterpreterConfig, DEFAULT_MAX_DEPTH, SAMPLE_PROGRAM};
use std::io::{self, Read};

/// Runs a FALA program and prints what it shows.
#[derive(clapParser)]
struct Args {
    /// Path to a program file. Reads standard input when omitted
    file_path: Option<std::path::PathBuf>,

    /// Run the bundled example program
    #[arg(long, conflicts_with = "file_path")]
    sample: bool,

    /// Stop at the first statement that cannot be executed
    #[arg(long)]
    strict: bool,

    /// Deepest nesting of se / enquanto bodies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

/// Enable with `RUST_LOG=falalang_lib=debug` or `RUST_LOG=falalang_lib=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args: Args = Args::parse();

    let program = if args.sample {
        SAMPLE_PROGRAM.to_string()
    } else if let Some(file_path) = &args.file_path {
        read_program(file_path)
            .with_context(|| format!("could not read program '{}'", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("could not read program from standard input")?;
        buffer
    };

    let mut interpreter = Interpreter::with_config(InterpreterConfig {
        max_depth: args.max_depth,
        strict: args.strict,
    });
    let transcript = interpreter.run(&program);

    for entry in transcript.entries() {
        println!("{entry}");
    }

    if transcript.is_halted() {
        bail!("execution halted at the first diagnostic (--strict)");
    }

    tracing::debug!(bindings = interpreter.environment().len(), "run finished");
    Ok(())
}
