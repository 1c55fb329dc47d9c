use log::debug;

use crate::extractor::{method_signature, ComponentExtractor};
use crate::markers::{simple_name, RepositoryBase, REPOSITORY_ANNOTATION};
use crate::model::RepositoryInfo;
use crate::parser::{ParsedFile, TypeDeclaration};

/// Spring Data repository extractor
pub struct RepositoryExtractor;

impl ComponentExtractor for RepositoryExtractor {
    type Output = RepositoryInfo;

    fn extract(&self, parsed: &ParsedFile) -> Option<RepositoryInfo> {
        let mut info: Option<RepositoryInfo> = None;

        for decl in parsed.types.iter().filter(|t| is_repository(t)) {
            let repository = info.get_or_insert_with(|| RepositoryInfo {
                interface_name: String::new(),
                entity_type: None,
                id_type: None,
                custom_methods: Vec::new(),
            });
            repository.interface_name = decl.name.clone();

            if let Some((entity_type, id_type)) = generic_types(decl) {
                repository.entity_type = Some(entity_type);
                repository.id_type = Some(id_type);
            }

            repository
                .custom_methods
                .extend(decl.methods.iter().map(method_signature));

            debug!(
                "Repository {} for {:?} with {} method(s)",
                repository.interface_name,
                repository.entity_type,
                repository.custom_methods.len()
            );
        }

        info
    }
}

/// Only interfaces qualify: annotated `@Repository` or extending a well-known base.
fn is_repository(decl: &TypeDeclaration) -> bool {
    if !decl.is_interface() {
        return false;
    }
    decl.annotations
        .iter()
        .any(|a| simple_name(&a.name) == REPOSITORY_ANNOTATION)
        || decl
            .extends
            .iter()
            .any(|t| RepositoryBase::from_name(&t.name).is_some())
}

/// Entity and id type from the first well-known base carrying two type arguments.
///
/// Interfaces that extend no well-known base fall back to the first extends clause with at
/// least two type arguments.
fn generic_types(decl: &TypeDeclaration) -> Option<(String, String)> {
    let has_known_base = decl
        .extends
        .iter()
        .any(|t| RepositoryBase::from_name(&t.name).is_some());

    decl.extends
        .iter()
        .filter(|t| !has_known_base || RepositoryBase::from_name(&t.name).is_some())
        .find(|t| t.arguments.len() >= 2)
        .map(|t| (t.arguments[0].clone(), t.arguments[1].clone()))
}
