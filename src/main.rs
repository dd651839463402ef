use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studio_page::catalog::Catalog;
use studio_page::{config, output, site};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "studio-page")]
#[command(about = "Single-page static site generator for photography studios")]
#[command(long_about = "\
Single-page static site generator for photography studios

Renders a studio landing site — hero, filterable gallery, pricing, booking
form, contact — as plain static HTML. The site's two state cells (active
section, gallery filter) are pre-rendered as a page matrix, so the gallery
filter persists across navigation without any JavaScript:

  dist/
  ├── index.html                   # home, no filter (the default state)
  ├── site.json                    # build summary manifest
  ├── portfolio/
  │   ├── all/index.html
  │   ├── landscape/index.html
  │   ├── portraits/index.html
  │   └── wildlife/index.html
  └── home/ pricing/ booking/ contact/ ...   # same per-filter layout

Site content (studio name, contact details, booking endpoint, colors) comes
from config.toml in the config directory; every key is optional and falls
back to a stock default.

Run 'studio-page gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full page matrix into the output directory
    Build,
    /// Validate config.toml without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            let catalog = Catalog::stock();
            let summary = site::generate(&catalog, &site_config, &cli.output)?;
            output::print_build(&summary);
            println!("Site generated at {}", cli.output.display());
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            output::print_check(&site_config);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
