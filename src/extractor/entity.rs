use log::debug;

use crate::extractor::{strip_quotes, ComponentExtractor};
use crate::markers::{EntityMarker, FieldMarker, RelationshipKind};
use crate::model::{EntityInfo, FieldInfo, RelationshipInfo};
use crate::parser::{FieldDeclaration, ParsedFile, TypeDeclaration};

/// JPA entity extractor
pub struct EntityExtractor;

impl ComponentExtractor for EntityExtractor {
    type Output = EntityInfo;

    fn extract(&self, parsed: &ParsedFile) -> Option<EntityInfo> {
        let mut info: Option<EntityInfo> = None;

        for decl in parsed.types.iter().filter(|t| is_entity(t)) {
            let entity = info.get_or_insert_with(|| EntityInfo {
                class_name: String::new(),
                table_name: None,
                fields: Vec::new(),
                relationships: Vec::new(),
            });
            entity.class_name = decl.name.clone();
            entity.table_name = table_name(decl);

            for field in &decl.fields {
                match relationship_kind(field) {
                    Some(kind) => entity.relationships.push(RelationshipInfo {
                        kind,
                        field_name: field.first_name().to_string(),
                        target_entity: target_entity(field),
                    }),
                    None => entity.fields.push(FieldInfo {
                        name: field.first_name().to_string(),
                        type_name: field.element_type.clone(),
                        annotations: field
                            .annotations
                            .iter()
                            .filter_map(|a| FieldMarker::from_name(&a.name))
                            .collect(),
                    }),
                }
            }

            debug!(
                "Entity {}: {} field(s), {} relationship(s)",
                entity.class_name,
                entity.fields.len(),
                entity.relationships.len()
            );
        }

        info
    }
}

fn is_entity(decl: &TypeDeclaration) -> bool {
    decl.annotations
        .iter()
        .any(|a| EntityMarker::from_name(&a.name) == Some(EntityMarker::Entity))
}

/// `name` attribute of `@Table`; positional and absent forms yield `None`.
fn table_name(decl: &TypeDeclaration) -> Option<String> {
    decl.annotations
        .iter()
        .find(|a| EntityMarker::from_name(&a.name) == Some(EntityMarker::Table))
        .and_then(|a| a.attribute("name"))
        .map(strip_quotes)
}

/// First relationship marker on the field, in source order.
fn relationship_kind(field: &FieldDeclaration) -> Option<RelationshipKind> {
    field
        .annotations
        .iter()
        .find_map(|a| RelationshipKind::from_name(&a.name))
}

/// Target type of a relationship field.
///
/// Collection fields (`List<Order>`, `Set<Tag>`) yield the text between the first `<` and
/// the first `>` of the declared type, so `Map<K, List<V>>`-style declarations are truncated
/// rather than parsed. A collection type without brackets yields `None`.
pub fn target_entity(field: &FieldDeclaration) -> Option<String> {
    if field.element_type.contains("List") || field.element_type.contains("Set") {
        let declared = &field.type_name;
        let start = declared.find('<')?;
        let end = declared.find('>')?;
        declared.get(start + 1..end).map(str::to_string)
    } else {
        Some(field.element_type.clone())
    }
}
