//! Spring Boot Analyzer - Static structure extraction for Spring Boot projects.
//!
//! This library walks a Java source tree and recognizes the four building blocks of a typical
//! Spring Boot application by their annotations and supertypes. Nothing is compiled or
//! resolved; every decision is made from the text and syntax tree of a single file.
//!
//! # Components
//!
//! - **Controllers**: `@RestController` / `@Controller` classes and their mapped endpoints
//! - **Services**: `@Service` classes, their `@Autowired` fields and public methods
//! - **Repositories**: `@Repository` interfaces and Spring Data repository subtypes
//! - **Entities**: `@Entity` classes, their columns and JPA relationships
//!
//! # Architecture
//!
//! 1. [`scanner`] - Recursively collects the non-test `.java` files of a project
//! 2. [`classifier`] - Routes each file to at most one category by a textual marker check
//! 3. [`parser`] - Parses Java source with tree-sitter into a small declaration model
//! 4. [`extractor`] - Builds the per-category records from parsed declarations
//! 5. [`analyzer`] - Drives the scan and collects the [`model::ScanResult`]
//! 6. [`serializer`] - Writes the result as JSON or YAML
//!
//! # Example Usage
//!
//! ```no_run
//! use springboot_analyzer::{analyzer::ProjectAnalyzer, serializer::serialize_json};
//! use std::path::PathBuf;
//!
//! let analysis = ProjectAnalyzer::new(PathBuf::from("./shop-service"))
//!     .analyze()
//!     .unwrap();
//!
//! for route in analysis.result.endpoint_routes() {
//!     println!("{}", route);
//! }
//!
//! let json = serialize_json(&analysis.result).unwrap();
//! println!("{}", json);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod extractor;
pub mod markers;
pub mod model;
pub mod parser;
pub mod scanner;
pub mod serializer;
