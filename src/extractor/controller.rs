use log::debug;

use crate::extractor::{strip_quotes, ComponentExtractor};
use crate::markers::{BindingMarker, ControllerMarker, RouteMarker};
use crate::model::{ControllerInfo, EndpointInfo, HttpMethod, ParameterInfo};
use crate::parser::{Annotation, AnnotationArguments, MethodDeclaration, ParsedFile, TypeDeclaration};

/// Spring MVC controller extractor
pub struct ControllerExtractor;

impl ComponentExtractor for ControllerExtractor {
    type Output = ControllerInfo;

    fn extract(&self, parsed: &ParsedFile) -> Option<ControllerInfo> {
        let mut info: Option<ControllerInfo> = None;

        for decl in parsed.types.iter().filter(|t| is_controller(t)) {
            let endpoints: Vec<EndpointInfo> =
                decl.methods.iter().filter_map(extract_endpoint).collect();
            debug!(
                "Controller {} in {}: {} endpoint(s)",
                decl.name,
                parsed.path.display(),
                endpoints.len()
            );

            let base_path = class_base_path(decl);
            match info.as_mut() {
                Some(existing) => {
                    existing.class_name = decl.name.clone();
                    existing.base_path = base_path;
                    existing.endpoints.extend(endpoints);
                }
                None => {
                    info = Some(ControllerInfo {
                        class_name: decl.name.clone(),
                        base_path,
                        endpoints,
                    });
                }
            }
        }

        info
    }
}

fn is_controller(decl: &TypeDeclaration) -> bool {
    decl.annotations
        .iter()
        .any(|a| ControllerMarker::from_name(&a.name).is_some())
}

/// Path of the class-level `@RequestMapping`, or empty.
fn class_base_path(decl: &TypeDeclaration) -> String {
    decl.annotation(RouteMarker::RequestMapping.as_str())
        .map(annotation_path)
        .unwrap_or_default()
}

/// Builds an endpoint from the first routing marker found in priority order.
fn extract_endpoint(method: &MethodDeclaration) -> Option<EndpointInfo> {
    let (marker, annotation) = RouteMarker::PRIORITY.iter().find_map(|marker| {
        method
            .annotation(marker.as_str())
            .map(|annotation| (*marker, annotation))
    })?;

    Some(EndpointInfo {
        http_method: http_method(marker, annotation),
        path: annotation_path(annotation),
        method_name: method.name.clone(),
        return_type: method.return_type.clone(),
        parameters: bound_parameters(method),
    })
}

fn http_method(marker: RouteMarker, annotation: &Annotation) -> HttpMethod {
    if let Some(verb) = marker.default_verb() {
        return verb;
    }
    // `method = RequestMethod.POST`, `method = {RequestMethod.GET, ...}` or a static import
    match annotation.attribute("method") {
        Some(value) => {
            let value = value.replace("RequestMethod.", "");
            let first = value
                .trim_matches(|c: char| c == '{' || c == '}' || c.is_whitespace())
                .split(',')
                .next()
                .unwrap_or_default();
            HttpMethod::from_verb(first)
        }
        None => HttpMethod::Get,
    }
}

/// Route from `@X("/p")`, `@X(value = "/p")` or `@X(path = "/p")`.
fn annotation_path(annotation: &Annotation) -> String {
    match &annotation.arguments {
        AnnotationArguments::Single(value) => strip_quotes(value),
        AnnotationArguments::Named(pairs) => pairs
            .iter()
            .find(|(key, _)| key == "value" || key == "path")
            .map(|(_, value)| strip_quotes(value))
            .unwrap_or_default(),
        AnnotationArguments::None => String::new(),
    }
}

/// Parameters with their request binding; with several binding markers the last one wins.
fn bound_parameters(method: &MethodDeclaration) -> Vec<ParameterInfo> {
    method
        .parameters
        .iter()
        .map(|param| {
            let mut info = ParameterInfo::new(param.name.clone(), param.type_name.clone());
            for annotation in &param.annotations {
                if let Some(binding) = BindingMarker::from_name(&annotation.name) {
                    info.annotation = Some(binding);
                }
            }
            info
        })
        .collect()
}
