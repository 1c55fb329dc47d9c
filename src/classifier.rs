use crate::markers::RepositoryBase;

/// Component category a source file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Controller,
    Service,
    Repository,
    Entity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Controller => "controller",
            Category::Service => "service",
            Category::Repository => "repository",
            Category::Entity => "entity",
        }
    }
}

/// Decides which extractor, if any, applies to a Java source file.
///
/// Classification is a cheap textual check on the raw file content, done before the file
/// is parsed. Categories are tested in the fixed order controller, service, repository,
/// entity, and the first match wins, so a file is never filed under two categories.
/// Files with none of the markers return `None` and are skipped without being parsed.
///
/// # Example
///
/// ```
/// use springboot_analyzer::classifier::{classify, Category};
///
/// let source = "@Service public class BillingService {}";
/// assert_eq!(classify(source), Some(Category::Service));
/// assert_eq!(classify("public class Util {}"), None);
/// ```
pub fn classify(content: &str) -> Option<Category> {
    if is_controller(content) {
        Some(Category::Controller)
    } else if is_service(content) {
        Some(Category::Service)
    } else if is_repository(content) {
        Some(Category::Repository)
    } else if is_entity(content) {
        Some(Category::Entity)
    } else {
        None
    }
}

fn is_controller(content: &str) -> bool {
    content.contains("@RestController") || content.contains("@Controller")
}

fn is_service(content: &str) -> bool {
    content.contains("@Service")
}

fn is_repository(content: &str) -> bool {
    content.contains("@Repository")
        || RepositoryBase::ALL
            .iter()
            .any(|base| content.contains(&format!("extends {}", base.as_str())))
}

fn is_entity(content: &str) -> bool {
    content.contains("@Entity")
}
