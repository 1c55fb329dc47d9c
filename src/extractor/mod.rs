//! Component extraction from parsed Java files.
//!
//! Each Spring stereotype has its own extractor that knows which declarations are
//! eligible and how to read their annotations into a model record:
//!
//! - **Controllers**: See [`controller::ControllerExtractor`]
//! - **Services**: See [`service::ServiceExtractor`]
//! - **Repositories**: See [`repository::RepositoryExtractor`]
//! - **Entities**: See [`entity::EntityExtractor`]
//!
//! # Example
//!
//! ```no_run
//! use springboot_analyzer::extractor::{ComponentExtractor, controller::ControllerExtractor};
//! use springboot_analyzer::parser::AstParser;
//! use std::path::Path;
//!
//! let parsed = AstParser::parse_file(Path::new("src/main/java/UserController.java")).unwrap();
//! if let Some(controller) = ControllerExtractor.extract(&parsed) {
//!     println!("{} has {} endpoints", controller.class_name, controller.endpoints.len());
//! }
//! ```

pub mod controller;
pub mod entity;
pub mod repository;
pub mod service;

use crate::model::{MethodInfo, ParameterInfo};
use crate::parser::{MethodDeclaration, ParsedFile};

/// Trait for extracting one component description from a parsed Java file.
///
/// Implementations return `None` when the file holds no eligible declaration. When a file
/// holds several, the name of the last one is kept and their members are accumulated in
/// declaration order.
pub trait ComponentExtractor {
    type Output;

    fn extract(&self, parsed: &ParsedFile) -> Option<Self::Output>;
}

/// Parameters of a method without binding markers.
pub(crate) fn plain_parameters(method: &MethodDeclaration) -> Vec<ParameterInfo> {
    method
        .parameters
        .iter()
        .map(|p| ParameterInfo::new(p.name.clone(), p.type_name.clone()))
        .collect()
}

/// Name, return type and plain parameters of a method.
pub(crate) fn method_signature(method: &MethodDeclaration) -> MethodInfo {
    MethodInfo {
        name: method.name.clone(),
        return_type: method.return_type.clone(),
        parameters: plain_parameters(method),
    }
}

/// Removes every double quote from an annotation value (`"/users"` -> `/users`).
pub(crate) fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::parser::{AstParser, ParsedFile};
    use std::path::Path;

    pub fn parse_code(code: &str) -> ParsedFile {
        AstParser::parse_source(Path::new("Test.java"), code).expect("Failed to parse test code")
    }
}
