//! Traversal protocol tests against a fully populated Consent

use ferrum_model::prelude::*;
use ferrum_model::resource::consent::{ConsentState, Policy, Provision, ConsentProvisionType};
use ferrum_model::visitor::{CollectingVisitor, PathVisitor};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Pre(&'static str),
    Start(String, Slot, &'static str),
    Visit(String),
    End(String),
    Post(&'static str),
    ListStart(String, usize, &'static str),
    ListEnd(String, usize),
    Value(String, String),
}

/// Records every callback; configurable pruning and failure points
#[derive(Default)]
struct RecordingVisitor {
    events: Vec<Event>,
    depth: usize,
    skip_type: Option<&'static str>,
    prune_type: Option<&'static str>,
    fail_on: Option<&'static str>,
}

impl RecordingVisitor {
    fn child_starts(&self) -> Vec<(String, Slot)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Start(name, slot, _) => Some((name.clone(), *slot)),
                _ => None,
            })
            .collect()
    }
}

impl Visitor for RecordingVisitor {
    type Error = String;

    fn pre_visit(&mut self, node: &dyn Node) -> Result<bool, String> {
        self.events.push(Event::Pre(node.type_name()));
        Ok(self.skip_type != Some(node.type_name()))
    }

    fn visit_start(&mut self, name: &str, slot: Slot, node: &dyn Node) -> Result<(), String> {
        if self.fail_on == Some(name) {
            return Err(format!("refused {}", name));
        }
        self.depth += 1;
        self.events.push(Event::Start(name.to_string(), slot, node.type_name()));
        Ok(())
    }

    fn visit(&mut self, name: &str, _slot: Slot, node: &dyn Node) -> Result<bool, String> {
        self.events.push(Event::Visit(name.to_string()));
        Ok(self.prune_type != Some(node.type_name()))
    }

    fn visit_end(&mut self, name: &str, _slot: Slot, _node: &dyn Node) -> Result<(), String> {
        self.depth -= 1;
        self.events.push(Event::End(name.to_string()));
        Ok(())
    }

    fn post_visit(&mut self, node: &dyn Node) -> Result<(), String> {
        self.events.push(Event::Post(node.type_name()));
        Ok(())
    }

    fn visit_list_start(&mut self, name: &str, len: usize, item_type: &'static str) -> Result<(), String> {
        self.events.push(Event::ListStart(name.to_string(), len, item_type));
        Ok(())
    }

    fn visit_list_end(&mut self, name: &str, len: usize, _item_type: &'static str) -> Result<(), String> {
        self.events.push(Event::ListEnd(name.to_string(), len));
        Ok(())
    }

    fn visit_value(&mut self, name: &str, value: Value<'_>) -> Result<(), String> {
        let rendered = match value {
            Value::Boolean(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::String(s) => s.to_string(),
        };
        self.events.push(Event::Value(name.to_string(), rendered));
        Ok(())
    }
}

fn text(value: &str) -> CodeableConcept {
    CodeableConcept::builder()
        .text(FhirString::of(value).unwrap())
        .build()
        .unwrap()
}

fn reference(literal: &str) -> Reference {
    Reference::builder()
        .reference(FhirString::of(literal).unwrap())
        .build()
        .unwrap()
}

/// status, scope, patient (scalars), source (choice), two categories
fn consent() -> Consent {
    Consent::builder()
        .status(ConsentState::Active)
        .scope(text("privacy"))
        .add_category(text("first"))
        .add_category(text("second"))
        .patient(reference("Patient/p1"))
        .source(reference("Consent/c0"))
        .build()
        .unwrap()
}

/// Visitor that only records direct children of the root
#[derive(Default)]
struct ChildRecorder {
    depth: usize,
    children: Vec<(String, Slot, &'static str)>,
}

impl Visitor for ChildRecorder {
    type Error = std::convert::Infallible;

    fn visit_start(&mut self, name: &str, slot: Slot, node: &dyn Node) -> Result<(), Self::Error> {
        if self.depth == 1 {
            self.children.push((name.to_string(), slot, node.type_name()));
        }
        self.depth += 1;
        Ok(())
    }

    fn visit_end(&mut self, _name: &str, _slot: Slot, _node: &dyn Node) -> Result<(), Self::Error> {
        self.depth -= 1;
        Ok(())
    }
}

#[test]
fn test_children_visited_in_declaration_order() {
    let mut visitor = ChildRecorder::default();
    consent().accept("Consent", &mut visitor).unwrap();

    assert_eq!(
        visitor.children,
        vec![
            ("status".to_string(), Slot::Single, "code"),
            ("scope".to_string(), Slot::Single, "CodeableConcept"),
            ("category".to_string(), Slot::Item(0), "CodeableConcept"),
            ("category".to_string(), Slot::Item(1), "CodeableConcept"),
            ("patient".to_string(), Slot::Single, "Reference"),
            ("source".to_string(), Slot::Choice, "Reference"),
        ]
    );
}

#[test]
fn test_list_items_follow_list_order() {
    let mut visitor = RecordingVisitor::default();
    consent().accept("Consent", &mut visitor).unwrap();

    let texts: Vec<_> = visitor
        .events
        .iter()
        .filter_map(|event| match event {
            Event::Value(name, value) if name == "value" => Some(value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["active", "privacy", "first", "second", "Patient/p1", "Consent/c0"]);

    let list_start = visitor
        .events
        .iter()
        .position(|e| *e == Event::ListStart("category".to_string(), 2, "CodeableConcept"))
        .unwrap();
    let list_end = visitor
        .events
        .iter()
        .position(|e| *e == Event::ListEnd("category".to_string(), 2))
        .unwrap();
    assert!(list_start < list_end);
    assert_eq!(visitor.depth, 0);
}

#[test]
fn test_root_events_bracket_traversal() {
    let mut visitor = RecordingVisitor::default();
    consent().accept("Consent", &mut visitor).unwrap();

    assert_eq!(visitor.events.first(), Some(&Event::Pre("Consent")));
    assert_eq!(
        visitor.events[1],
        Event::Start("Consent".to_string(), Slot::Single, "Consent")
    );
    assert_eq!(visitor.events[2], Event::Visit("Consent".to_string()));
    let n = visitor.events.len();
    assert_eq!(visitor.events[n - 2], Event::End("Consent".to_string()));
    assert_eq!(visitor.events[n - 1], Event::Post("Consent"));
}

#[test]
fn test_visit_false_prunes_children_only() {
    let mut visitor = RecordingVisitor {
        prune_type: Some("Consent"),
        ..RecordingVisitor::default()
    };
    consent().accept("Consent", &mut visitor).unwrap();

    assert_eq!(
        visitor.events,
        vec![
            Event::Pre("Consent"),
            Event::Start("Consent".to_string(), Slot::Single, "Consent"),
            Event::Visit("Consent".to_string()),
            Event::End("Consent".to_string()),
            Event::Post("Consent"),
        ]
    );
}

#[test]
fn test_pruned_subtree_still_closes() {
    let mut visitor = RecordingVisitor {
        prune_type: Some("CodeableConcept"),
        ..RecordingVisitor::default()
    };
    consent().accept("Consent", &mut visitor).unwrap();

    let scope_start = visitor
        .events
        .iter()
        .position(|e| *e == Event::Start("scope".to_string(), Slot::Single, "CodeableConcept"))
        .unwrap();
    assert_eq!(visitor.events[scope_start + 1], Event::Visit("scope".to_string()));
    assert_eq!(visitor.events[scope_start + 2], Event::End("scope".to_string()));
    assert!(!visitor
        .events
        .iter()
        .any(|e| matches!(e, Event::Value(_, v) if v == "privacy")));
}

#[test]
fn test_pre_visit_false_skips_node_entirely() {
    let mut visitor = RecordingVisitor {
        skip_type: Some("Reference"),
        ..RecordingVisitor::default()
    };
    consent().accept("Consent", &mut visitor).unwrap();

    let starts = visitor.child_starts();
    assert!(!starts.iter().any(|(name, _)| name == "patient" || name == "source"));
    assert!(!visitor.events.contains(&Event::Post("Reference")));
    assert_eq!(
        visitor.events.iter().filter(|e| **e == Event::Pre("Reference")).count(),
        2
    );
}

#[test]
fn test_visitor_error_propagates_unchanged() {
    let mut visitor = RecordingVisitor {
        fail_on: Some("patient"),
        ..RecordingVisitor::default()
    };
    let err = consent().accept("Consent", &mut visitor).unwrap_err();
    assert_eq!(err, "refused patient");

    assert_eq!(visitor.events.last(), Some(&Event::Pre("Reference")));
    assert!(!visitor.events.contains(&Event::End("Consent".to_string())));
}

#[test]
fn test_modifier_extensions_are_visited() {
    let revoked = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/revoked")
        .value(Boolean::of(true).unwrap())
        .build()
        .unwrap();
    let policy = Policy::builder()
        .uri(Uri::of("http://hl7.org/fhir/ConsentPolicy/opt-in").unwrap())
        .add_modifier_extension(revoked.clone())
        .build()
        .unwrap();
    let consent = consent().to_builder().add_policy(policy).build().unwrap();

    let mut paths = PathVisitor::new();
    consent.accept("Consent", &mut paths).unwrap();
    assert!(paths
        .paths()
        .iter()
        .any(|(path, type_name)| path == "Consent.policy[0].modifierExtension[0]" && *type_name == "Extension"));

    let mut extensions = CollectingVisitor::<Extension>::new();
    consent.accept("Consent", &mut extensions).unwrap();
    assert_eq!(extensions.into_result(), vec![revoked]);
}

#[test]
fn test_recursive_provisions_and_paths() {
    let inner = Provision::builder()
        .type_(ConsentProvisionType::Deny)
        .build()
        .unwrap();
    let outer = Provision::builder()
        .type_(ConsentProvisionType::Permit)
        .add_provision(inner)
        .build()
        .unwrap();
    let consent = consent().to_builder().provision(outer).build().unwrap();

    let mut visitor = PathVisitor::new();
    consent.accept("Consent", &mut visitor).unwrap();
    let paths: Vec<_> = visitor.paths().iter().map(|(p, _)| p.as_str()).collect();
    assert!(paths.contains(&"Consent.sourceReference"));
    assert!(paths.contains(&"Consent.category[1]"));
    assert!(paths.contains(&"Consent.provision.provision[0].type"));

    let mut provisions = CollectingVisitor::<Provision>::new();
    consent.accept("Consent", &mut provisions).unwrap();
    assert_eq!(provisions.result().len(), 2);
}

#[test]
fn test_empty_root_name_uses_type_name() {
    let mut visitor = PathVisitor::new();
    consent().accept("", &mut visitor).unwrap();
    assert_eq!(visitor.paths()[0], ("Consent".to_string(), "Consent"));
}
