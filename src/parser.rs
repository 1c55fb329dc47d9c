use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tree_sitter::Node;

use crate::error::{Error, Result};
use crate::markers::simple_name;

/// Java source parser backed by tree-sitter.
///
/// The `AstParser` turns a Java compilation unit into a [`ParsedFile`]: a flat list of the
/// class and interface declarations it contains, each with the annotations, supertypes,
/// fields and methods the extractors need. Type names are kept exactly as written in source;
/// nothing is resolved across files.
///
/// tree-sitter recovers from syntax errors on its own, so the parser checks the resulting
/// tree and reports any error or missing node as [`Error::Parse`] instead of handing a
/// partially recovered tree to the extractors.
///
/// # Example
///
/// ```no_run
/// use springboot_analyzer::parser::AstParser;
/// use std::path::Path;
///
/// let parsed = AstParser::parse_file(Path::new("src/main/java/UserController.java")).unwrap();
/// println!("Parsed {} type declarations", parsed.types.len());
/// ```
pub struct AstParser;

/// A successfully parsed Java file.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// Every class and interface declaration, in document order (nested ones included)
    pub types: Vec<TypeDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

/// A class or interface declaration.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    pub annotations: Vec<Annotation>,
    /// Superclass of a class, or the extended interfaces of an interface
    pub extends: Vec<TypeRef>,
    pub fields: Vec<FieldDeclaration>,
    pub methods: Vec<MethodDeclaration>,
}

impl TypeDeclaration {
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// First annotation whose simple name equals `name`.
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, name)
    }
}

/// A reference to a named type, e.g. `JpaRepository<User, Long>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Simple name without package or type arguments (`JpaRepository`)
    pub name: String,
    /// Literal text of each type argument, in order (`["User", "Long"]`)
    pub arguments: Vec<String>,
}

/// Arguments attached to an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArguments {
    /// `@Marker`
    None,
    /// `@Marker("value")`
    Single(String),
    /// `@Marker(key = "value", ...)`, also `@Marker()`
    Named(Vec<(String, String)>),
}

/// A declarative marker on a class, field, method or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name as written, possibly qualified
    pub name: String,
    pub arguments: AnnotationArguments,
}

impl Annotation {
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    /// Source text of the named attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match &self.arguments {
            AnnotationArguments::Named(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// A field (or interface constant) declaration.
#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    /// Declared type as written (`List<Order>`, `String[]`)
    pub type_name: String,
    /// Declared type with array dimensions removed
    pub element_type: String,
    /// Declarator names; `int a, b;` yields two
    pub names: Vec<String>,
    pub annotations: Vec<Annotation>,
}

impl FieldDeclaration {
    pub fn first_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    pub name: String,
    pub return_type: String,
    pub is_public: bool,
    pub annotations: Vec<Annotation>,
    pub parameters: Vec<ParameterDeclaration>,
}

impl MethodDeclaration {
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, name)
    }
}

#[derive(Debug, Clone)]
pub struct ParameterDeclaration {
    pub name: String,
    pub type_name: String,
    pub annotations: Vec<Annotation>,
}

fn find_annotation<'a>(annotations: &'a [Annotation], name: &str) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.simple_name() == name)
}

impl AstParser {
    /// Parses a single Java source file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid Java syntax
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_source(path, &content)
    }

    /// Parses Java source text that has already been read from `path`.
    pub fn parse_source(path: &Path, source: &str) -> Result<ParsedFile> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_java::LANGUAGE.into())?;

        let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
            file: path.to_path_buf(),
            message: "parser produced no syntax tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let message = match first_error(root) {
                Some(node) => {
                    let pos = node.start_position();
                    let what = if node.is_missing() {
                        format!("missing `{}`", node.kind())
                    } else {
                        "syntax error".to_string()
                    };
                    format!("{} at line {}, column {}", what, pos.row + 1, pos.column + 1)
                }
                None => "syntax error".to_string(),
            };
            return Err(Error::Parse {
                file: path.to_path_buf(),
                message,
            });
        }

        let src = source.as_bytes();
        let mut types = Vec::new();
        collect_types(root, src, &mut types);

        debug!(
            "Parsed {}: {} type declaration(s)",
            path.display(),
            types.len()
        );

        Ok(ParsedFile {
            path: path.to_path_buf(),
            types,
        })
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn text<'a>(node: Node, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn is_comment(node: &Node) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

/// Named children without comments.
fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .collect();
    children
}

fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

fn collect_types(node: Node, src: &[u8], out: &mut Vec<TypeDeclaration>) {
    let kind = match node.kind() {
        "class_declaration" => Some(TypeKind::Class),
        "interface_declaration" => Some(TypeKind::Interface),
        _ => None,
    };
    if let Some(kind) = kind {
        if let Some(decl) = type_declaration(node, kind, src) {
            out.push(decl);
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_types(child, src, out);
    }
}

fn type_declaration(node: Node, kind: TypeKind, src: &[u8]) -> Option<TypeDeclaration> {
    let name = text(node.child_by_field_name("name")?, src).to_string();

    let mut extends = Vec::new();
    match kind {
        TypeKind::Class => {
            if let Some(superclass) = node.child_by_field_name("superclass") {
                extends.extend(named_children(superclass).into_iter().map(|t| type_ref(t, src)));
            }
        }
        TypeKind::Interface => {
            if let Some(clause) = child_of_kind(node, "extends_interfaces") {
                for child in named_children(clause) {
                    if child.kind() == "type_list" {
                        extends.extend(named_children(child).into_iter().map(|t| type_ref(t, src)));
                    } else {
                        extends.push(type_ref(child, src));
                    }
                }
            }
        }
    }

    let mut fields = Vec::new();
    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        for member in named_children(body) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    fields.push(field_declaration(member, src));
                }
                "method_declaration" => {
                    if let Some(method) = method_declaration(member, src) {
                        methods.push(method);
                    }
                }
                _ => {}
            }
        }
    }

    Some(TypeDeclaration {
        kind,
        name,
        annotations: annotations(node, src),
        extends,
        fields,
        methods,
    })
}

fn type_ref(node: Node, src: &[u8]) -> TypeRef {
    let full = text(node, src).to_string();
    if node.kind() == "generic_type" {
        let children = named_children(node);
        let name = children
            .iter()
            .find(|c| c.kind() != "type_arguments")
            .map(|c| simple_name(text(*c, src)).to_string())
            .unwrap_or_else(|| full.clone());
        let arguments = children
            .iter()
            .find(|c| c.kind() == "type_arguments")
            .map(|args| {
                named_children(*args)
                    .into_iter()
                    .map(|a| text(a, src).to_string())
                    .collect()
            })
            .unwrap_or_default();
        TypeRef { name, arguments }
    } else {
        TypeRef {
            name: simple_name(&full).to_string(),
            arguments: Vec::new(),
        }
    }
}

/// Annotations inside the `modifiers` child of a declaration or parameter.
fn annotations(node: Node, src: &[u8]) -> Vec<Annotation> {
    let Some(modifiers) = child_of_kind(node, "modifiers") else {
        return Vec::new();
    };
    named_children(modifiers)
        .into_iter()
        .filter_map(|child| annotation(child, src))
        .collect()
}

fn annotation(node: Node, src: &[u8]) -> Option<Annotation> {
    let name = text(node.child_by_field_name("name")?, src).to_string();
    let arguments = match node.kind() {
        "marker_annotation" => AnnotationArguments::None,
        "annotation" => match node.child_by_field_name("arguments") {
            Some(list) => annotation_arguments(list, src),
            None => AnnotationArguments::None,
        },
        _ => return None,
    };
    Some(Annotation { name, arguments })
}

fn annotation_arguments(list: Node, src: &[u8]) -> AnnotationArguments {
    let children = named_children(list);
    if children.iter().any(|c| c.kind() == "element_value_pair") {
        let pairs = children
            .iter()
            .filter(|c| c.kind() == "element_value_pair")
            .filter_map(|pair| {
                let key = pair.child_by_field_name("key")?;
                let value = pair.child_by_field_name("value")?;
                Some((text(key, src).to_string(), text(value, src).to_string()))
            })
            .collect();
        return AnnotationArguments::Named(pairs);
    }
    match children.first() {
        Some(value) => AnnotationArguments::Single(text(*value, src).to_string()),
        None => AnnotationArguments::Named(Vec::new()),
    }
}

fn is_public(node: Node) -> bool {
    let Some(modifiers) = child_of_kind(node, "modifiers") else {
        return false;
    };
    let mut cursor = modifiers.walk();
    let public = modifiers.children(&mut cursor).any(|m| m.kind() == "public");
    public
}

fn field_declaration(node: Node, src: &[u8]) -> FieldDeclaration {
    let type_node = node.child_by_field_name("type");
    let type_name = type_node.map(|t| text(t, src).to_string()).unwrap_or_default();
    let element_type = type_node
        .filter(|t| t.kind() == "array_type")
        .and_then(|t| t.child_by_field_name("element"))
        .map(|e| text(e, src).to_string())
        .unwrap_or_else(|| type_name.clone());

    let mut cursor = node.walk();
    let names = node
        .children_by_field_name("declarator", &mut cursor)
        .filter_map(|d| d.child_by_field_name("name"))
        .map(|n| text(n, src).to_string())
        .collect();

    FieldDeclaration {
        type_name,
        element_type,
        names,
        annotations: annotations(node, src),
    }
}

fn method_declaration(node: Node, src: &[u8]) -> Option<MethodDeclaration> {
    let name = text(node.child_by_field_name("name")?, src).to_string();
    let return_type = node
        .child_by_field_name("type")
        .map(|t| text(t, src).to_string())
        .unwrap_or_default();

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| {
            named_children(params)
                .into_iter()
                .filter_map(|p| parameter_declaration(p, src))
                .collect()
        })
        .unwrap_or_default();

    Some(MethodDeclaration {
        name,
        return_type,
        is_public: is_public(node),
        annotations: annotations(node, src),
        parameters,
    })
}

fn parameter_declaration(node: Node, src: &[u8]) -> Option<ParameterDeclaration> {
    match node.kind() {
        "formal_parameter" => Some(ParameterDeclaration {
            name: text(node.child_by_field_name("name")?, src).to_string(),
            type_name: text(node.child_by_field_name("type")?, src).to_string(),
            annotations: annotations(node, src),
        }),
        // `String... values`: the element type sits between the modifiers and the declarator
        "spread_parameter" => {
            let children = named_children(node);
            let type_node = children
                .iter()
                .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))?;
            let declarator = children.iter().find(|c| c.kind() == "variable_declarator")?;
            Some(ParameterDeclaration {
                name: text(declarator.child_by_field_name("name")?, src).to_string(),
                type_name: text(*type_node, src).to_string(),
                annotations: annotations(node, src),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn parse(code: &str) -> ParsedFile {
        AstParser::parse_source(Path::new("Test.java"), code).expect("Failed to parse test code")
    }

    /// Helper function to create a temporary file with content
    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    #[test]
    fn test_parse_class_with_annotations_fields_and_methods() {
        let parsed = parse(
            r#"
            package com.example.demo;

            import org.springframework.stereotype.Service;

            @Service
            public class UserService {
                @Autowired
                private UserRepository userRepository;

                private final int a, b;

                public User find(Long id) { return null; }

                void hidden() {}
            }
            "#,
        );

        assert_eq!(parsed.types.len(), 1);
        let class = &parsed.types[0];
        assert_eq!(class.kind, TypeKind::Class);
        assert_eq!(class.name, "UserService");
        assert!(class.annotation("Service").is_some());

        assert_eq!(class.fields.len(), 2);
        assert_eq!(class.fields[0].type_name, "UserRepository");
        assert_eq!(class.fields[0].names, vec!["userRepository"]);
        assert_eq!(class.fields[0].annotations[0].name, "Autowired");
        assert_eq!(class.fields[1].names, vec!["a", "b"]);

        assert_eq!(class.methods.len(), 2);
        assert_eq!(class.methods[0].name, "find");
        assert_eq!(class.methods[0].return_type, "User");
        assert!(class.methods[0].is_public);
        assert_eq!(class.methods[0].parameters[0].name, "id");
        assert_eq!(class.methods[0].parameters[0].type_name, "Long");
        assert!(!class.methods[1].is_public);
    }

    #[test]
    fn test_annotation_argument_forms() {
        let parsed = parse(
            r#"
            @RestController
            @RequestMapping("/api")
            class C {
                @GetMapping(value = "/a", produces = "application/json")
                public String a() { return ""; }

                @PostMapping()
                public void b() {}
            }
            "#,
        );

        let class = &parsed.types[0];
        assert_eq!(class.annotations[0].arguments, AnnotationArguments::None);
        assert_eq!(
            class.annotations[1].arguments,
            AnnotationArguments::Single("\"/api\"".to_string())
        );

        let get = &class.methods[0].annotations[0];
        assert_eq!(get.attribute("value"), Some("\"/a\""));
        assert_eq!(get.attribute("produces"), Some("\"application/json\""));
        assert_eq!(get.attribute("path"), None);

        let post = &class.methods[1].annotations[0];
        assert_eq!(post.arguments, AnnotationArguments::Named(Vec::new()));
    }

    #[test]
    fn test_interface_extends_type_arguments() {
        let parsed = parse(
            r#"
            public interface UserRepository extends JpaRepository<User, Long>, Auditable {
                Optional<User> findByEmail(String email);
            }
            "#,
        );

        let repo = &parsed.types[0];
        assert!(repo.is_interface());
        assert_eq!(repo.extends.len(), 2);
        assert_eq!(repo.extends[0].name, "JpaRepository");
        assert_eq!(repo.extends[0].arguments, vec!["User", "Long"]);
        assert_eq!(repo.extends[1].name, "Auditable");
        assert!(repo.extends[1].arguments.is_empty());
        assert_eq!(repo.methods[0].return_type, "Optional<User>");
    }

    #[test]
    fn test_qualified_annotations_and_supertypes() {
        let parsed = parse(
            r#"
            @org.springframework.stereotype.Repository
            interface R extends org.springframework.data.repository.CrudRepository<Item, String> {}
            "#,
        );

        let repo = &parsed.types[0];
        assert_eq!(repo.annotations[0].simple_name(), "Repository");
        assert_eq!(repo.extends[0].name, "CrudRepository");
        assert_eq!(repo.extends[0].arguments, vec!["Item", "String"]);
    }

    #[test]
    fn test_nested_types_in_document_order() {
        let parsed = parse(
            r#"
            public class Outer {
                static class Inner {}
                interface Callback {}
            }
            enum Color { RED; static class InEnum {} }
            record Point(int x, int y) {}
            "#,
        );

        let names: Vec<_> = parsed.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner", "Callback", "InEnum"]);
        // Outer's own members do not include the nested declarations
        assert!(parsed.types[0].methods.is_empty());
    }

    #[test]
    fn test_array_and_varargs_types() {
        let parsed = parse(
            r#"
            class C {
                private String[] tags;
                public void log(final String format, Object... args) {}
            }
            "#,
        );

        let class = &parsed.types[0];
        assert_eq!(class.fields[0].type_name, "String[]");
        assert_eq!(class.fields[0].element_type, "String");

        let params = &class.methods[0].parameters;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].type_name, "String");
        assert_eq!(params[1].name, "args");
        assert_eq!(params[1].type_name, "Object");
    }

    #[test]
    fn test_parameter_annotations() {
        let parsed = parse(
            r#"
            class C {
                public void update(@PathVariable("id") Long id, @Valid @RequestBody UserDto body) {}
            }
            "#,
        );

        let params = &parsed.types[0].methods[0].parameters;
        assert_eq!(params[0].annotations[0].name, "PathVariable");
        let names: Vec<_> = params[1].annotations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Valid", "RequestBody"]);
    }

    #[test]
    fn test_parse_invalid_java_source() {
        let result = AstParser::parse_source(
            Path::new("Broken.java"),
            "public class Broken { public void run( { int x = ; }",
        );

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        let msg = err.to_string();
        assert!(msg.contains("Broken.java"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_parse_file_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "Item.java", "@Entity public class Item { @Id Long id; }");

        let parsed = AstParser::parse_file(&path).unwrap();
        assert_eq!(parsed.path, path);
        assert_eq!(parsed.types[0].name, "Item");
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = AstParser::parse_file(Path::new("/nonexistent/File.java"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_empty_source() {
        let parsed = parse("");
        assert!(parsed.types.is_empty());
    }
}
