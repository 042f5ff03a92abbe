use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tagdex::{Catalog, SearchEngine, Validator};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            process::exit(1);
        }
    }
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Could not load catalog from {}", path.display())),
        None => Catalog::builtin().context("Embedded catalog is malformed"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

/// Run one subcommand. `Ok(false)` means the command ran but failed its check.
fn run(cli: Cli) -> Result<bool> {
    let catalog = load_catalog(&cli)?;
    log::info!("catalog has {} services", catalog.len());
    let engine = SearchEngine::new(catalog);

    match &cli.command {
        Commands::Search { query } => {
            let results = engine.search(query);
            if cli.json {
                print_json(&results)?;
            } else {
                let label = if query.trim().is_empty() {
                    "All services".to_string()
                } else {
                    format!("Results for \"{}\"", query.trim())
                };
                display::print_services(&label, &results);
            }
        }

        Commands::Show { id } => {
            let service = engine
                .service_by_id(id)
                .with_context(|| format!("No service with id '{}'", id))?;
            if cli.json {
                print_json(service)?;
            } else {
                display::print_service_detail(service);
            }
        }

        Commands::Keywords => {
            let keywords = engine.all_keywords();
            if cli.json {
                print_json(&keywords)?;
            } else {
                display::print_list("Keywords", &keywords);
            }
        }

        Commands::Suggest { partial, limit } => {
            let suggestions = engine.keyword_suggestions(partial, *limit);
            if cli.json {
                print_json(&suggestions)?;
            } else {
                display::print_list(&format!("Suggestions for \"{}\"", partial), &suggestions);
            }
        }

        Commands::Technologies => {
            let technologies = engine.all_technologies();
            if cli.json {
                print_json(&technologies)?;
            } else {
                display::print_list("Technologies", &technologies);
            }
        }

        Commands::Projects { tech } => {
            let projects = match tech {
                Some(tech) => engine.catalog().projects_using(tech),
                None => engine.all_projects(),
            };
            if cli.json {
                print_json(&projects)?;
            } else {
                display::print_projects(&projects);
            }
        }

        Commands::Stats => {
            let stats = engine.stats();
            if cli.json {
                print_json(&stats)?;
            } else {
                display::print_stats(&stats);
            }
        }

        Commands::Validate { strict } => {
            let result = Validator::new(engine.catalog()).validate_all_services();
            if cli.json {
                print_json(&result)?;
            } else {
                display::print_validation(&result);
            }
            return Ok(result.valid && !(*strict && result.has_warnings()));
        }
    }

    Ok(true)
}
