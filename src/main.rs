use clap::{Parser, Subcommand};
use invitation::{config, generate, output, wedding};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "invitation")]
#[command(about = "Static site generator for animated wedding invitations")]
#[command(long_about = "\
Static site generator for animated wedding invitations

One document describes the couple and the sections to show. The build
renders a single self-contained index.html and copies your photos beside it.

Content structure:

  content/
  ├── wedding.json                 # The invitation (or wedding.toml)
  ├── config.toml                  # Build config (optional): palette, timings
  └── assets/                      # Photos, audio → copied to output root
      ├── images/hero.jpg          # Referenced as \"/images/hero.jpg\"
      └── audio/shehnai.mp3

Sections, in page order (each shown only when \"enabled\": true):
  hero, story, venue, reception, livestream, memories, closing

Run 'invitation sample' for a starter wedding.json and
'invitation gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the invitation and copy assets into the output directory
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a starter wedding.json with every section enabled
    Sample,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report, &cli.source);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let inventory = generate::check(&cli.source)?;
            output::print_check_output(&inventory, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Sample => {
            print!("{}", wedding::sample_document());
        }
    }

    Ok(())
}
