use log::debug;

use crate::extractor::{method_signature, ComponentExtractor};
use crate::markers::{InjectionMarker, ServiceMarker};
use crate::model::{DependencyInfo, ServiceInfo};
use crate::parser::{FieldDeclaration, ParsedFile, TypeDeclaration};

/// Spring service extractor
pub struct ServiceExtractor;

impl ComponentExtractor for ServiceExtractor {
    type Output = ServiceInfo;

    fn extract(&self, parsed: &ParsedFile) -> Option<ServiceInfo> {
        let mut info: Option<ServiceInfo> = None;

        for decl in parsed.types.iter().filter(|t| is_service(t)) {
            let service = info.get_or_insert_with(|| ServiceInfo {
                class_name: String::new(),
                dependencies: Vec::new(),
                methods: Vec::new(),
            });
            service.class_name = decl.name.clone();
            service
                .dependencies
                .extend(decl.fields.iter().filter_map(injected_dependency));
            service.methods.extend(
                decl.methods
                    .iter()
                    .filter(|m| m.is_public)
                    .map(method_signature),
            );

            debug!(
                "Service {}: {} dependencies, {} public method(s)",
                service.class_name,
                service.dependencies.len(),
                service.methods.len()
            );
        }

        info
    }
}

fn is_service(decl: &TypeDeclaration) -> bool {
    decl.annotations
        .iter()
        .any(|a| ServiceMarker::from_name(&a.name).is_some())
}

fn injected_dependency(field: &FieldDeclaration) -> Option<DependencyInfo> {
    let injected = field
        .annotations
        .iter()
        .any(|a| InjectionMarker::from_name(&a.name).is_some());
    if !injected {
        return None;
    }
    Some(DependencyInfo {
        type_name: field.element_type.clone(),
        name: field.first_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::test_support::parse_code;
    use pretty_assertions::assert_eq;

    fn extract(code: &str) -> Option<ServiceInfo> {
        ServiceExtractor.extract(&parse_code(code))
    }

    #[test]
    fn test_dependencies_and_public_methods() {
        let info = extract(
            r#"
            @Service
            public class OrderService {
                @Autowired
                private OrderRepository orderRepository;

                @Autowired
                private PaymentGateway gateway;

                private final Clock clock = Clock.systemUTC();

                public Order place(Long customerId, List<Item> items) { return null; }

                protected void audit(Order order) {}

                private void notify(Order order) {}

                public static OrderService noop() { return null; }
            }
            "#,
        )
        .unwrap();

        assert_eq!(info.class_name, "OrderService");
        assert_eq!(
            info.dependencies,
            vec![
                DependencyInfo {
                    type_name: "OrderRepository".to_string(),
                    name: "orderRepository".to_string()
                },
                DependencyInfo {
                    type_name: "PaymentGateway".to_string(),
                    name: "gateway".to_string()
                },
            ]
        );

        let names: Vec<_> = info.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["place", "noop"]);
        assert_eq!(info.methods[0].parameters[1].type_name, "List<Item>");
        assert_eq!(info.methods[0].return_type, "Order");
    }

    #[test]
    fn test_constructor_injection_records_no_dependencies() {
        let info = extract(
            r#"
            @Service
            public class MailService {
                private final MailSender sender;

                public MailService(MailSender sender) { this.sender = sender; }

                public void send(String to) {}
            }
            "#,
        )
        .unwrap();

        assert!(info.dependencies.is_empty());
        assert_eq!(info.methods.len(), 1);
        assert_eq!(info.methods[0].name, "send");
    }

    #[test]
    fn test_several_services_in_one_file() {
        let info = extract(
            r#"
            @Service
            class PricingService {
                @Autowired
                private TaxTable taxTable;

                public Money price(Item item) { return null; }
            }

            @Service
            class DiscountService {
                @Autowired
                private CouponRepository coupons;

                public Money discount(Cart cart) { return null; }
            }
            "#,
        )
        .unwrap();

        assert_eq!(info.class_name, "DiscountService");
        let dependencies: Vec<_> = info.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(dependencies, vec!["taxTable", "coupons"]);
        let methods: Vec<_> = info.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["price", "discount"]);
    }

    #[test]
    fn test_non_service_file_yields_none() {
        assert!(extract("@Component public class Helper { public void x() {} }").is_none());
    }
}
