//! Spring Boot Analyzer - Command-line tool for mapping the structure of a Spring Boot project.
//!
//! This binary walks a Java project, recognizes controllers, services, repositories and JPA
//! entities by their annotations, and writes everything it finds into one JSON document.
//!
//! # Usage
//!
//! ```bash
//! springboot-analyzer [OPTIONS] [PROJECT_PATH] [OUTPUT_PATH]
//! ```
//!
//! # Examples
//!
//! Analyze a project into the default `project-analysis.json`:
//! ```bash
//! springboot-analyzer ./shop-service
//! ```
//!
//! Write YAML and print a summary:
//! ```bash
//! springboot-analyzer ./shop-service shop.yaml -f yaml --summary
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! springboot-analyzer ./shop-service -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use springboot_analyzer::cli;

fn main() -> Result<()> {
    // Parse once up front to read the verbose flag before the logger exists
    let args_for_verbose = cli::CliArgs::parse();

    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Spring Boot Analyzer starting...");

    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("Analysis finished successfully");

    Ok(())
}
