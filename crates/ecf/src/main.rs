//! E-commerce Service Composition - Entry Point
//!
//! Loads a configuration, composes it and reports the result without
//! building any service. Useful for validating tenant configurations in CI.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ecf check` | Compose and report definition counts (default) |
//! | `ecf describe` | List locator names and published parameters |
//! | `ecf describe --json` | Dump every definition as JSON |
//! | `ecf types` | List link-time constructors |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ecf::application::list_linked_constructors;
use ecf::domain::value_objects::Category;
use ecf::infrastructure::config::ConfigLoader;
use ecf::infrastructure::di::init_app_with_logging;
use ecf::{CompositionEngine, ConstructorRegistry, ServiceLocators};

/// Command line interface for the composition engine
#[derive(Parser, Debug)]
#[command(name = "ecf")]
#[command(about = "E-commerce service composition - validate and inspect service wiring")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Require a constructor for every implementation id
    #[arg(long, global = true)]
    pub verify_types: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Compose the configuration and report what was defined
    Check,
    /// Describe the composed service graph
    Describe {
        /// Dump definitions as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List constructors registered at link time
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Check);

    if let Command::Types = command {
        for (type_id, description) in list_linked_constructors() {
            println!("{type_id:<40} {description}");
        }
        return Ok(());
    }

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("Failed to load configuration")?;
    config.composition.verify_service_types |= cli.verify_types;

    let engine = CompositionEngine::new(ConstructorRegistry::linked());
    let context = init_app_with_logging(config, engine).context("Composition failed")?;
    let locators = context.locators();

    match command {
        Command::Describe { json: true } => {
            println!("{}", serde_json::to_string_pretty(locators.definitions())?);
        }
        Command::Describe { json: false } => describe(locators),
        _ => println!(
            "OK: {} definitions, {} parameters",
            locators.definitions().len(),
            locators.parameters().len()
        ),
    }
    Ok(())
}

fn describe(locators: &ServiceLocators) {
    for category in Category::ALL {
        if !category.publishes_locator() {
            continue;
        }
        let names = locators.names(category);
        if names.is_empty() {
            println!("{category}: -");
        } else {
            println!("{category}: {}", names.join(", "));
        }
    }
    for (tenant, worker) in locators.index_workers() {
        println!("index worker {tenant}: {worker}");
    }
    for (key, value) in locators.parameters() {
        println!("{key} = {value}");
    }
}
