mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dockgen",
    about = "Generate a multi-stage Dockerfile for the Go project in the current directory"
)]
#[command(version)]
struct Cli {
    /// Name of the binary which is created (defaults to the last import path segment)
    #[arg(long = "binaryname", value_name = "NAME")]
    binary_name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="unset or invalid RUST_LOG falls back to info"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    commands::generate(cli.binary_name.as_deref())?;

    Ok(())
}
