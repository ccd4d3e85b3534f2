use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use topo_order::areas::repository::Repository;
use topo_order::artifacts::core::Output;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "topo-order",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Print the commit graph of a git repository in topological order",
    long_about = "Lists every commit reachable from a local branch, children before parents, \
    each followed by the branches pointing at it. Jumps between unrelated commits are \
    marked with `parents=` and `=children` lines separated by a blank line.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        help = "Directory to start searching for the repository from (defaults to the current directory)"
    )]
    path: Option<PathBuf>,
    #[arg(short, long, help = "Log debug information to stderr, on top of any RUST_LOG filter")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.verbose {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let start = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let output = Output::detect();
    let repository = Repository::discover(&start, output.writer())?;
    repository.topo_order()?;
    drop(repository);

    output.finish()
}
