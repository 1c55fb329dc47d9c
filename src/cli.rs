use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Spring Boot Analyzer - Extract controllers, services, repositories and entities from a
/// Spring Boot project into a single JSON document
#[derive(Parser, Debug)]
#[command(name = "springboot-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Spring Boot project directory
    #[arg(value_name = "PROJECT_PATH", default_value = "path/to/your/default/project")]
    pub project_path: PathBuf,

    /// Path of the analysis file to write
    #[arg(value_name = "OUTPUT_PATH", default_value = "project-analysis.json")]
    pub output_path: PathBuf,

    /// Output format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Print a human-readable project summary after writing the analysis
    #[arg(short = 's', long = "summary")]
    pub summary: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output file: {}", args.output_path.display());
    info!("Output format: {:?}", args.output_format);

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::analyzer::ProjectAnalyzer;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting Spring Boot project analysis...");

    // Step 1: Scan, classify and extract
    let analyzer = ProjectAnalyzer::new(args.project_path.clone());
    let analysis = analyzer
        .analyze()
        .with_context(|| format!("Failed to analyze {}", args.project_path.display()))?;

    if analysis.result.is_empty() {
        warn!("No Spring components found in the project");
    }

    // Step 2: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Json => serialize_json(&analysis.result)?,
        OutputFormat::Yaml => serialize_yaml(&analysis.result)?,
    };

    // Step 3: Write the analysis file
    info!("Writing output to: {}", args.output_path.display());
    write_to_file(&content, &args.output_path)?;

    // Step 4: Display summary
    if args.summary {
        println!("{}", analysis.result.summary());
    }

    let [controllers, services, repositories, entities] = analysis.result.counts();
    info!("Summary:");
    info!("  - Files scanned: {}", analysis.files_scanned);
    info!("  - Files classified: {}", analysis.files_classified);
    info!("  - Files with errors: {}", analysis.diagnostics.len());
    info!("  - Controllers: {}", controllers);
    info!("  - Services: {}", services);
    info!("  - Repositories: {}", repositories);
    info!("  - Entities: {}", entities);

    println!("Analysis complete: {}", args.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["springboot-analyzer"]).unwrap();

        assert_eq!(args.project_path, PathBuf::from("path/to/your/default/project"));
        assert_eq!(args.output_path, PathBuf::from("project-analysis.json"));
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(!args.summary);
        assert!(!args.verbose);
    }

    #[test]
    fn test_positional_and_flags() {
        let args = CliArgs::try_parse_from([
            "springboot-analyzer",
            "./shop",
            "out/shop.yaml",
            "-f",
            "yaml",
            "--summary",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.project_path, PathBuf::from("./shop"));
        assert_eq!(args.output_path, PathBuf::from("out/shop.yaml"));
        assert_eq!(args.output_format, OutputFormat::Yaml);
        assert!(args.summary);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = CliArgs::try_parse_from(["springboot-analyzer", ".", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_missing_path() {
        let args = CliArgs::try_parse_from(["springboot-analyzer", "/nonexistent/shop"]).unwrap();
        let err = parse_args_from_parsed(args).unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validation_rejects_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("pom.xml");
        fs::write(&file, "<project/>").unwrap();

        let args =
            CliArgs::try_parse_from(["springboot-analyzer", file.to_str().unwrap()]).unwrap();
        let err = parse_args_from_parsed(args).unwrap_err();

        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_run_writes_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(
            project.join("Customer.java"),
            "@Entity public class Customer { @Id private Long id; }",
        )
        .unwrap();
        let output = temp_dir.path().join("analysis.json");

        let args = CliArgs::try_parse_from([
            "springboot-analyzer",
            project.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(parse_args_from_parsed(args).unwrap()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["entities"][0]["className"], "Customer");
        assert_eq!(json["controllers"].as_array().unwrap().len(), 0);
    }
}
