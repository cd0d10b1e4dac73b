//! Skillgraph: taxonomy-driven skill extraction and job matching

use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info};
use skillgraph::catalog::JobCatalog;
use skillgraph::cli::{self, Cli, Commands, ConfigAction, TaxonomyAction};
use skillgraph::config::Config;
use skillgraph::error::{Result, SkillGraphError};
use skillgraph::input::manager::InputManager;
use skillgraph::market::MarketDataClient;
use skillgraph::output::formatter::ReportGenerator;
use skillgraph::processing::analyzer::AnalysisEngine;
use skillgraph::processing::extractor::SkillExtractor;
use skillgraph::taxonomy::SkillTaxonomy;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    match custom_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn load_taxonomy(path: Option<&PathBuf>) -> Result<Arc<SkillTaxonomy>> {
    let taxonomy = match path {
        Some(path) => {
            cli::validate_file_extension(path, &["json"])
                .map_err(|e| SkillGraphError::InvalidInput(format!("Taxonomy file: {}", e)))?;
            SkillTaxonomy::from_json_file(path)?
        }
        None => SkillTaxonomy::builtin(),
    };
    Ok(Arc::new(taxonomy))
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            jobs,
            taxonomy,
            output,
            save,
            detailed,
            no_enrichment,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| SkillGraphError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(SkillGraphError::InvalidInput)?;

            info!("Starting skill match analysis");

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let taxonomy = load_taxonomy(taxonomy.as_ref())?;
            let catalog = match &jobs {
                Some(path) => {
                    cli::validate_file_extension(path, &["json"]).map_err(|e| {
                        SkillGraphError::InvalidInput(format!("Job catalog file: {}", e))
                    })?;
                    JobCatalog::from_json_file(path)?
                }
                None => JobCatalog::builtin(),
            };

            let market = if no_enrichment || !config.enrichment.enabled {
                None
            } else {
                let client = match &config.enrichment.signals_file {
                    Some(path) => MarketDataClient::from_json_file(path)?,
                    None => MarketDataClient::builtin(),
                };
                Some(Arc::new(client))
            };

            let engine = AnalysisEngine::new(taxonomy, catalog, market, &config);

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing resume against catalog...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let report = engine.analyze(&resume_text).await?;
            spinner.finish_and_clear();

            let detailed = detailed || config.output.detailed;
            let use_colors =
                config.output.color_output && output_format == skillgraph::config::OutputFormat::Console;
            let generator = ReportGenerator::new(use_colors, detailed);

            println!("{}", generator.generate(&report, output_format)?);

            if let Some(save_path) = save {
                generator.save(&report, output_format, &save_path)?;
                println!("Report saved to {}", save_path.display());
            }
        }

        Commands::Extract {
            resume,
            taxonomy,
            output,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| SkillGraphError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let taxonomy = load_taxonomy(taxonomy.as_ref())?;
            let extractor =
                SkillExtractor::new(taxonomy).with_mode(config.extraction.match_mode);
            let extracted = extractor.extract(&resume_text);

            match output.to_lowercase().as_str() {
                "json" => {
                    let concepts: Vec<_> =
                        extracted.iter().map(|c| c.as_ref().clone()).collect();
                    println!("{}", serde_json::to_string_pretty(&concepts)?);
                }
                "console" => {
                    println!("Extracted {} skills:", extracted.len());
                    for concept in extracted.iter() {
                        println!("  • {} [{}]", concept.name, concept.category);
                    }
                }
                other => {
                    return Err(SkillGraphError::InvalidInput(format!(
                        "Invalid output format: {}. Supported: console, json",
                        other
                    )));
                }
            }
        }

        Commands::Taxonomy { action } => match action {
            TaxonomyAction::List { category } => {
                let taxonomy = SkillTaxonomy::builtin();
                println!("Taxonomy: {} concepts\n", taxonomy.len());
                for concept in taxonomy.concepts() {
                    if let Some(filter) = &category {
                        if !concept
                            .category
                            .to_string()
                            .eq_ignore_ascii_case(filter)
                        {
                            continue;
                        }
                    }
                    println!(
                        "{} — {} [{}]\n  forms: {}",
                        concept.id,
                        concept.name,
                        concept.category,
                        concept.synonyms.join(", ")
                    );
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration ({})\n", Config::config_path().display());
                println!(
                    "Scoring: required weight {}, bonus weight {}",
                    config.scoring.required_weight, config.scoring.bonus_weight
                );
                println!("Extraction mode: {:?}", config.extraction.match_mode);
                println!(
                    "Enrichment: {}",
                    if config.enrichment.enabled {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
                println!("Output format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
