//! Paradise Nursery - Terminal plant shop.
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive session (cart kept in .paradise-nursery/)
//! paradise-nursery
//!
//! # Same, keeping the cart in memory and mirroring each page to HTML
//! paradise-nursery --memory --html-snapshot page.html shell
//!
//! # Print one page and exit
//! paradise-nursery render cart --format html
//! ```
//!
//! # Architecture
//!
//! - Navigation controller owns the catalog, cart store, and current page
//! - Askama templates for text and HTML presentation
//! - Cart mirrored to a JSON key-value slot after every change
//!
//! Logs go to stderr so they never interleave with the shop on stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paradise_nursery_storefront::config::{StorageBackend, StorefrontConfig};
use paradise_nursery_storefront::error::Result;
use paradise_nursery_storefront::terminal::Terminal;
use paradise_nursery_storefront::{
    Action, Catalog, FileStorage, KeyValueStore, MemoryStorage, Page, Storefront,
};

#[derive(Parser)]
#[command(name = "paradise-nursery")]
#[command(author, version, about = "Paradise Nursery plant shop")]
struct Cli {
    /// Directory for the cart storage file (overrides `PARADISE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep the cart in memory only
    #[arg(long, global = true)]
    memory: bool,

    /// Write the HTML of every render to this file
    #[arg(long, global = true)]
    html_snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shopping session (default)
    Shell,
    /// Print one page and exit
    Render {
        /// Page identifier (`landing`, `products`, `cart`)
        page: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

fn main() {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "paradise_nursery_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.memory {
        config.storage = StorageBackend::Memory;
    }
    if cli.html_snapshot.is_some() {
        config.html_snapshot = cli.html_snapshot;
    }

    let storage: Box<dyn KeyValueStore> = match config.storage {
        StorageBackend::File => {
            tracing::info!(dir = %config.data_dir.display(), "Using file storage");
            Box::new(FileStorage::new(&config.data_dir))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Box::new(MemoryStorage::new())
        }
    };
    let mut shop = Storefront::open(Catalog::paradise(), storage);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock())
                .with_html_snapshot(config.html_snapshot);
            terminal.run(&mut shop)?;
        }
        Commands::Render { page, format } => {
            let page = page.parse::<Page>()?;
            shop.dispatch(Action::NavLink(page.id().to_string()));
            let screen = shop.screen();
            if let Some(path) = &config.html_snapshot {
                screen.write_html_snapshot(path)?;
            }
            let rendered = match format {
                Format::Text => screen.render_text()?,
                Format::Html => screen.render_html()?,
            };
            writeln!(io::stdout().lock(), "{rendered}")?;
        }
    }
    Ok(())
}
