use std::sync::Arc;
use std::thread;

use serde_json::json;
use wirecheck_data::DataContainer;
use wirecheck_schema::{ContentType, Schema, SchemaBuilder, SchemaError, SchemaRegistry, TypeConstraint};

fn counter_schema(name: &str) -> Schema {
    let mut builder = SchemaBuilder::new(name, ContentType::Json);
    builder
        .add_constraint("count", TypeConstraint::Int, true)
        .expect("object schema accepts constraints");
    builder.build().expect("schema should compile")
}

#[test]
fn concurrent_registration_admits_exactly_one_writer() {
    let registry = SchemaRegistry::new();

    let outcomes: Vec<Result<(), SchemaError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = &registry;
                scope.spawn(move || {
                    let content_type = if i % 2 == 0 {
                        ContentType::Json
                    } else {
                        ContentType::Binary
                    };
                    let schema = Schema::new("shared", content_type, &json!({"type": "object"}))
                        .expect("schema should compile");
                    registry.register(schema)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("register thread panicked"))
            .collect()
    });

    let accepted = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let rejected = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Err(SchemaError::Redefinition(_))))
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(rejected, 7);
    assert_eq!(registry.len(), 1);
}

#[test]
fn validation_runs_concurrently_with_registration() {
    let registry = Arc::new(SchemaRegistry::new());
    registry.register(counter_schema("counter")).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for n in 0..50 {
                    let mut data = DataContainer::new();
                    data.set("count", n + i);
                    registry.validate(&data, "counter").expect("valid document");

                    let mut bad = DataContainer::new();
                    bad.set("count", "many");
                    assert!(matches!(
                        registry.validate(&bad, "counter"),
                        Err(SchemaError::ValidationFailed { .. })
                    ));
                }
            })
        })
        .collect();

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for n in 0..50 {
                registry
                    .register(counter_schema(&format!("extra-{n}")))
                    .expect("fresh names register");
            }
        })
    };

    for reader in readers {
        reader.join().expect("reader panicked");
    }
    writer.join().expect("writer panicked");

    assert_eq!(registry.len(), 51);
    assert!(registry.includes_schema("extra-49"));
}

#[test]
fn failed_redefinition_keeps_original_semantics() {
    let registry = SchemaRegistry::new();
    registry.register(counter_schema("S")).unwrap();

    let mut permissive = SchemaBuilder::with_type("S", ContentType::Binary, TypeConstraint::Any);
    permissive.strict(false);
    assert!(matches!(
        registry.register(permissive.build().unwrap()),
        Err(SchemaError::Redefinition(_))
    ));

    let data = DataContainer::parse(r#"{"count":"not a number"}"#).unwrap();
    assert!(registry.validate(&data, "S").is_err());
    assert_eq!(registry.schema_content_type("S").unwrap(), ContentType::Json);
}

#[test]
fn unknown_schema_rejects_every_document() {
    let registry = SchemaRegistry::new();
    for text in ["{}", "[]", "null", r#"{"count": 1}"#] {
        let data = DataContainer::parse(text).unwrap();
        assert!(matches!(
            registry.validate(&data, "nope"),
            Err(SchemaError::NotFound(name)) if name == "nope"
        ));
    }
}

#[test]
fn schema_from_container_validates_containers() {
    let mut document = DataContainer::new();
    document.set("type", "object");
    document.set(["properties", "id", "type"], "string");
    document.set("required", vec!["id"]);

    let registry = SchemaRegistry::new();
    registry
        .register(Schema::from_container("envelope", ContentType::Json, &document).unwrap())
        .unwrap();

    let mut message = DataContainer::new();
    message.set("id", "abc");
    assert!(registry.validate(&message, "envelope").is_ok());

    message.set("id", 12);
    let err = registry.validate(&message, "envelope").unwrap_err();
    assert!(err.to_string().starts_with("does not match schema 'envelope': ERROR1:"));
}
