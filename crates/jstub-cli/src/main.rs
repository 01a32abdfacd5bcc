use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jstub_driver::convert_to_python_stubs;

/// Generate Python type stubs from Java `.class` files, `.jar`s, or `.aar`s.
#[derive(Parser)]
#[command(name = "jstub", version, about = "Generate Python type stubs from Java bytecode")]
struct Cli {
    /// One or more `.jar`/`.aar` files or directories of `.class` files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Path to the bytecode parser's runtime, if the substituted parser needs one.
    ///
    /// The bundled parser is pure Rust and never starts a JVM, so this flag has no
    /// effect here; it exists so a JVM-backed parser can be swapped in without
    /// changing the command line.
    #[arg(long)]
    jvmpath: Option<PathBuf>,

    /// Directory to write `__init__.pyi` files into
    #[arg(long, default_value = "./dist/stubs")]
    output_dir: PathBuf,

    /// Do not clear the output directory before writing
    #[arg(long)]
    no_clean: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    if let Some(jvmpath) = &cli.jvmpath {
        tracing::debug!(jvmpath = %jvmpath.display(), "ignoring --jvmpath: bundled parser needs no JVM");
    }

    for input in &cli.inputs {
        if !input.exists() {
            eprintln!("input not found: {}", input.display());
            return ExitCode::from(1);
        }
    }

    match convert_to_python_stubs(&cli.inputs, &cli.output_dir, !cli.no_clean, None) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
