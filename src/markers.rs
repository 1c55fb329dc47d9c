//! Recognized Spring and JPA annotation vocabulary.
//!
//! Every concept the extractors care about (controllers, routes, parameter bindings,
//! persistence markers, injection, repositories) has its own enumeration with a
//! `from_name` lookup from the literal annotation name found in source. Lookups compare
//! the last dotted segment, so `@GetMapping` and
//! `@org.springframework.web.bind.annotation.GetMapping` resolve to the same marker.
//! Unknown names are simply `None`.

use serde::{Deserialize, Serialize};

use crate::model::HttpMethod;

/// Returns the simple (last-segment) form of a possibly qualified name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name).trim()
}

/// Class-level markers that expose a class as an HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerMarker {
    RestController,
    Controller,
}

impl ControllerMarker {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "RestController" => Some(Self::RestController),
            "Controller" => Some(Self::Controller),
            _ => None,
        }
    }
}

/// Method-level routing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMarker {
    GetMapping,
    PostMapping,
    PutMapping,
    DeleteMapping,
    PatchMapping,
    RequestMapping,
}

impl RouteMarker {
    /// Lookup order used when a method carries more than one routing marker.
    pub const PRIORITY: [RouteMarker; 6] = [
        RouteMarker::GetMapping,
        RouteMarker::PostMapping,
        RouteMarker::PutMapping,
        RouteMarker::DeleteMapping,
        RouteMarker::PatchMapping,
        RouteMarker::RequestMapping,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "GetMapping" => Some(Self::GetMapping),
            "PostMapping" => Some(Self::PostMapping),
            "PutMapping" => Some(Self::PutMapping),
            "DeleteMapping" => Some(Self::DeleteMapping),
            "PatchMapping" => Some(Self::PatchMapping),
            "RequestMapping" => Some(Self::RequestMapping),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetMapping => "GetMapping",
            Self::PostMapping => "PostMapping",
            Self::PutMapping => "PutMapping",
            Self::DeleteMapping => "DeleteMapping",
            Self::PatchMapping => "PatchMapping",
            Self::RequestMapping => "RequestMapping",
        }
    }

    /// The verb implied by the marker itself. `RequestMapping` carries its verb in an attribute.
    pub fn default_verb(&self) -> Option<HttpMethod> {
        match self {
            Self::GetMapping => Some(HttpMethod::Get),
            Self::PostMapping => Some(HttpMethod::Post),
            Self::PutMapping => Some(HttpMethod::Put),
            Self::DeleteMapping => Some(HttpMethod::Delete),
            Self::PatchMapping => Some(HttpMethod::Patch),
            Self::RequestMapping => None,
        }
    }
}

/// Parameter markers describing where a request value is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingMarker {
    PathVariable,
    RequestParam,
    RequestBody,
    RequestHeader,
}

impl BindingMarker {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "PathVariable" => Some(Self::PathVariable),
            "RequestParam" => Some(Self::RequestParam),
            "RequestBody" => Some(Self::RequestBody),
            "RequestHeader" => Some(Self::RequestHeader),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PathVariable => "PathVariable",
            Self::RequestParam => "RequestParam",
            Self::RequestBody => "RequestBody",
            Self::RequestHeader => "RequestHeader",
        }
    }
}

/// Class-level persistence markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityMarker {
    Entity,
    Table,
}

impl EntityMarker {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "Entity" => Some(Self::Entity),
            "Table" => Some(Self::Table),
            _ => None,
        }
    }
}

/// Scalar column markers, recorded by presence only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldMarker {
    #[serde(rename = "@Id")]
    Id,
    #[serde(rename = "@Column")]
    Column,
    #[serde(rename = "@GeneratedValue")]
    GeneratedValue,
}

impl FieldMarker {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "Id" => Some(Self::Id),
            "Column" => Some(Self::Column),
            "GeneratedValue" => Some(Self::GeneratedValue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "@Id",
            Self::Column => "@Column",
            Self::GeneratedValue => "@GeneratedValue",
        }
    }
}

/// Association markers between persisted entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipKind {
    OneToMany,
    ManyToOne,
    OneToOne,
    ManyToMany,
}

impl RelationshipKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "OneToMany" => Some(Self::OneToMany),
            "ManyToOne" => Some(Self::ManyToOne),
            "OneToOne" => Some(Self::OneToOne),
            "ManyToMany" => Some(Self::ManyToMany),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToMany => "OneToMany",
            Self::ManyToOne => "ManyToOne",
            Self::OneToOne => "OneToOne",
            Self::ManyToMany => "ManyToMany",
        }
    }
}

/// Business-component markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMarker {
    Service,
}

impl ServiceMarker {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "Service" => Some(Self::Service),
            _ => None,
        }
    }
}

/// Field-level dependency injection markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionMarker {
    Autowired,
}

impl InjectionMarker {
    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "Autowired" => Some(Self::Autowired),
            _ => None,
        }
    }
}

/// Annotation marking an interface as a data-access repository.
pub const REPOSITORY_ANNOTATION: &str = "Repository";

/// Well-known generic repository base interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryBase {
    JpaRepository,
    CrudRepository,
    PagingAndSortingRepository,
    MongoRepository,
}

impl RepositoryBase {
    pub const ALL: [RepositoryBase; 4] = [
        RepositoryBase::JpaRepository,
        RepositoryBase::CrudRepository,
        RepositoryBase::PagingAndSortingRepository,
        RepositoryBase::MongoRepository,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match simple_name(name) {
            "JpaRepository" => Some(Self::JpaRepository),
            "CrudRepository" => Some(Self::CrudRepository),
            "PagingAndSortingRepository" => Some(Self::PagingAndSortingRepository),
            "MongoRepository" => Some(Self::MongoRepository),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JpaRepository => "JpaRepository",
            Self::CrudRepository => "CrudRepository",
            Self::PagingAndSortingRepository => "PagingAndSortingRepository",
            Self::MongoRepository => "MongoRepository",
        }
    }
}
