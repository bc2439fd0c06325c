// ABOUTME: Main entry point for the deck-slides program.
// ABOUTME: Drives the build lifecycle over one Markdown file and writes the pages.

use clap::{Args, Parser, Subcommand};
use deck_slides::{emit, run_build, Config, DeckHooks, MemoryStore, SourceNode};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build slide pages from a Markdown document
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Path to the markdown file
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the generated pages are written to
    #[arg(short, long)]
    output: PathBuf,

    /// Project root used for template and context paths
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Build(args)) => build(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
    println!("Building slide pages from {:?}...", args.input);

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {:?}", args.input);
    }
    let raw_body = fs::read_to_string(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read input file: {}", e))?;

    let id = args
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let source = SourceNode::markdown(id, raw_body);

    let hooks = DeckHooks::new(Config::new(&args.root));
    let store = MemoryStore::new();
    run_build(&hooks, &store, std::slice::from_ref(&source))?;

    emit::write_pages(&store, &args.output)?;

    println!(
        "Build complete: {} pages written to {:?}",
        store.pages().len(),
        args.output
    );
    Ok(())
}
