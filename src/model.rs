//! Architecture model records produced by the extractors.
//!
//! Each record is built once per source file and never mutated after it has been
//! appended to the [`ScanResult`]. Field names serialize in camelCase and optional
//! values serialize as an explicit `null`, which keeps the JSON shape stable for
//! consumers that index into it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markers::{BindingMarker, FieldMarker, RelationshipKind};

/// HTTP verbs an endpoint can be routed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// Explicit verb that is not one of the above (e.g. `RequestMethod.HEAD`)
    Unknown,
}

impl HttpMethod {
    /// Parses a verb name such as `POST`, ignoring case. Anything unrecognized is `Unknown`.
    pub fn from_verb(verb: &str) -> Self {
        match verb.trim().to_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            _ => HttpMethod::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single method argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Request binding marker; always `None` outside controllers
    pub annotation: Option<BindingMarker>,
}

impl ParameterInfo {
    pub fn new(name: String, type_name: String) -> Self {
        Self {
            name,
            type_name,
            annotation: None,
        }
    }
}

impl fmt::Display for ParameterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(annotation) = &self.annotation {
            write!(f, "@{} ", annotation.as_str())?;
        }
        write!(f, "{} {}", self.type_name, self.name)
    }
}

fn join_parameters(parameters: &[ParameterInfo]) -> String {
    parameters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One routed handler method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointInfo {
    pub http_method: HttpMethod,
    /// Route relative to the controller base path; empty for the root
    pub path: String,
    pub method_name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterInfo>,
}

impl fmt::Display for EndpointInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}({}) : {}",
            self.http_method,
            self.path,
            self.method_name,
            join_parameters(&self.parameters),
            self.return_type
        )
    }
}

/// An endpoint-bearing class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerInfo {
    pub class_name: String,
    pub base_path: String,
    pub endpoints: Vec<EndpointInfo>,
}

impl ControllerInfo {
    /// Route of an endpoint including the controller's base path.
    pub fn full_path(&self, endpoint: &EndpointInfo) -> String {
        format!("{}{}", self.base_path, endpoint.path)
    }
}

impl fmt::Display for ControllerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Controller: {}", self.class_name)?;
        writeln!(f, "Base Path: {}", self.base_path)?;
        writeln!(f, "Endpoints:")?;
        for endpoint in &self.endpoints {
            writeln!(f, "  {}", endpoint)?;
        }
        Ok(())
    }
}

/// A public method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterInfo>,
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) : {}",
            self.name,
            join_parameters(&self.parameters),
            self.return_type
        )
    }
}

/// An injected collaborator field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInfo {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

impl fmt::Display for DependencyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// A business-component class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub class_name: String,
    pub dependencies: Vec<DependencyInfo>,
    pub methods: Vec<MethodInfo>,
}

impl fmt::Display for ServiceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Service: {}", self.class_name)?;
        writeln!(f, "Dependencies:")?;
        for dependency in &self.dependencies {
            writeln!(f, "  {}", dependency)?;
        }
        writeln!(f, "Methods:")?;
        for method in &self.methods {
            writeln!(f, "  {}", method)?;
        }
        Ok(())
    }
}

/// A repository-style data-access interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub interface_name: String,
    pub entity_type: Option<String>,
    pub id_type: Option<String>,
    pub custom_methods: Vec<MethodInfo>,
}

impl fmt::Display for RepositoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repository: {}", self.interface_name)?;
        writeln!(f, "Entity: {}", self.entity_type.as_deref().unwrap_or("null"))?;
        writeln!(f, "ID Type: {}", self.id_type.as_deref().unwrap_or("null"))?;
        writeln!(f, "Custom Methods:")?;
        for method in &self.custom_methods {
            writeln!(f, "  {}", method)?;
        }
        Ok(())
    }
}

/// A persisted scalar attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub annotations: Vec<FieldMarker>,
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.annotations.is_empty() {
            let markers: Vec<_> = self.annotations.iter().map(FieldMarker::as_str).collect();
            write!(f, "[{}] ", markers.join(", "))?;
        }
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// A persisted association to another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipInfo {
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    pub field_name: String,
    pub target_entity: Option<String>,
}

impl fmt::Display for RelationshipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{} {} {}",
            self.kind.as_str(),
            self.target_entity.as_deref().unwrap_or("null"),
            self.field_name
        )
    }
}

/// A persisted entity class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    pub class_name: String,
    /// Explicit table name; `None` when the class has no `@Table(name = ...)`
    pub table_name: Option<String>,
    pub fields: Vec<FieldInfo>,
    pub relationships: Vec<RelationshipInfo>,
}

impl EntityInfo {
    /// Table name for display, falling back to the class name.
    pub fn display_table(&self) -> &str {
        self.table_name.as_deref().unwrap_or(&self.class_name)
    }
}

impl fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entity: {}", self.class_name)?;
        writeln!(f, "Table: {}", self.display_table())?;
        writeln!(f, "Fields:")?;
        for field in &self.fields {
            writeln!(f, "  {}", field)?;
        }
        writeln!(f, "Relationships:")?;
        for relationship in &self.relationships {
            writeln!(f, "  {}", relationship)?;
        }
        Ok(())
    }
}

/// Aggregate of everything discovered in one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub controllers: Vec<ControllerInfo>,
    pub services: Vec<ServiceInfo>,
    pub repositories: Vec<RepositoryInfo>,
    pub entities: Vec<EntityInfo>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
            && self.services.is_empty()
            && self.repositories.is_empty()
            && self.entities.is_empty()
    }

    /// Component counts in output order: controllers, services, repositories, entities.
    pub fn counts(&self) -> [usize; 4] {
        [
            self.controllers.len(),
            self.services.len(),
            self.repositories.len(),
            self.entities.len(),
        ]
    }

    /// One line per endpoint, e.g. `GET /api/users/{id} -> UserController.getUser()`.
    pub fn endpoint_routes(&self) -> Vec<String> {
        self.controllers
            .iter()
            .flat_map(|controller| {
                controller.endpoints.iter().map(move |endpoint| {
                    format!(
                        "{} {} -> {}.{}()",
                        endpoint.http_method,
                        controller.full_path(endpoint),
                        controller.class_name,
                        endpoint.method_name
                    )
                })
            })
            .collect()
    }

    /// Human-readable report of every discovered component.
    pub fn summary(&self) -> String {
        let mut out = String::from("=== PROJECT SUMMARY ===\n\n");

        out.push_str(&format!("CONTROLLERS ({}):\n", self.controllers.len()));
        for controller in &self.controllers {
            out.push_str(&controller.to_string());
        }

        out.push_str(&format!("SERVICES ({}):\n", self.services.len()));
        for service in &self.services {
            out.push_str(&service.to_string());
        }

        out.push_str(&format!("REPOSITORIES ({}):\n", self.repositories.len()));
        for repository in &self.repositories {
            out.push_str(&repository.to_string());
        }

        out.push_str(&format!("ENTITIES ({}):\n", self.entities.len()));
        for entity in &self.entities {
            out.push_str(&entity.to_string());
        }

        out
    }
}
