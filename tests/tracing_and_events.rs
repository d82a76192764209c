//! Integration tests for tracing and event monitoring.
//!
//! The trace callback reports every registry operation, which shows exactly when an
//! instance was constructed and when later requests were served from the registry.

use pattern_catalog::{define_registry, RegistryEvent};
use std::sync::{Arc, Mutex};

fn collect_events(
    events: &Arc<Mutex<Vec<RegistryEvent>>>,
) -> impl Fn(&RegistryEvent) + Send + Sync {
    let events = events.clone();
    move |event: &RegistryEvent| events.lock().unwrap().push(event.clone())
}

#[test]
fn test_construct_then_reuse() {
    define_registry!(traced1);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced1::set_trace_callback(collect_events(&events));

    traced1::get_or_init(|| 42i32).unwrap();
    traced1::get_or_init(|| 43i32).unwrap();
    traced1::get_or_init(|| 44i32).unwrap();

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            RegistryEvent::Construct { type_name: "i32" },
            RegistryEvent::Reuse { type_name: "i32" },
            RegistryEvent::Reuse { type_name: "i32" },
        ]
    );
}

#[test]
fn test_failed_construction_event() {
    define_registry!(traced2);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced2::set_trace_callback(collect_events(&events));

    let _ = traced2::get_or_try_init::<u32, _, _>(|| Err("disk full"));
    traced2::get_or_init(|| 999u32).unwrap();

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            RegistryEvent::ConstructFailed { type_name: "u32" },
            RegistryEvent::Construct { type_name: "u32" },
        ]
    );
}

#[test]
fn test_trace_get_found_and_not_found() {
    define_registry!(traced3);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced3::set_trace_callback(collect_events(&events));

    traced3::get_or_init(|| 123i64).unwrap();
    let _: Arc<i64> = traced3::get().unwrap();
    let _: Result<Arc<f32>, _> = traced3::get();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert_eq!(
        captured[1].to_string(),
        "get { type_name: i64, found: true }"
    );
    assert_eq!(
        captured[2].to_string(),
        "get { type_name: f32, found: false }"
    );
}

#[test]
fn test_trace_contains_event() {
    define_registry!(traced4);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced4::set_trace_callback(collect_events(&events));

    let _ = traced4::contains::<String>();
    traced4::get_or_init(|| "test".to_string()).unwrap();
    let _ = traced4::contains::<String>();

    let captured: Vec<String> = events
        .lock()
        .unwrap()
        .iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        captured,
        vec![
            "contains { type_name: alloc::string::String, found: false }",
            "construct { type_name: alloc::string::String }",
            "contains { type_name: alloc::string::String, found: true }",
        ]
    );
}

#[test]
fn test_clear_trace_callback_stops_events() {
    define_registry!(traced5);

    let events = Arc::new(Mutex::new(Vec::new()));
    traced5::set_trace_callback(collect_events(&events));

    traced5::get_or_init(|| 10u16).unwrap();
    traced5::clear_trace_callback();

    traced5::get_or_init(|| 20u16).unwrap();
    let _ = traced5::get::<u16>();
    let _ = traced5::contains::<u16>();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0], RegistryEvent::Construct { type_name: "u16" });
}

#[test]
fn test_replacing_the_callback() {
    define_registry!(traced6);

    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    traced6::set_trace_callback(collect_events(&first));
    traced6::get_or_init(|| 'a').unwrap();

    traced6::set_trace_callback(collect_events(&second));
    traced6::get_or_init(|| 'b').unwrap();

    assert_eq!(
        *first.lock().unwrap(),
        vec![RegistryEvent::Construct { type_name: "char" }]
    );
    assert_eq!(
        *second.lock().unwrap(),
        vec![RegistryEvent::Reuse { type_name: "char" }]
    );
}

#[test]
fn test_callback_may_use_another_registry() {
    define_registry!(traced7);
    define_registry!(audit);

    traced7::set_trace_callback(|event: &RegistryEvent| {
        let log: Arc<Mutex<Vec<String>>> = audit::get_or_init(Mutex::default).unwrap();
        log.lock().unwrap().push(event.to_string());
    });

    traced7::get_or_init(|| 7u64).unwrap();
    let _ = traced7::contains::<u64>();

    let log: Arc<Mutex<Vec<String>>> = audit::get().unwrap();
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "construct { type_name: u64 }",
            "contains { type_name: u64, found: true }",
        ]
    );
}
