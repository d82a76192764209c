//! Single-threaded singleton example.
//!
//! Demonstrates:
//! - `LocalRegistry` handing out the same `Rc` for every request
//! - No locking: the registry and its instances stay on one thread
//!
//! Run with: `cargo run --example singleton_non_thread_safe`

use pattern_catalog::LocalRegistry;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Singleton;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== pattern-catalog: Non-Thread-Safe Singleton ===\n");

    let registry = LocalRegistry::new();
    let s1 = registry.get_or_init(Singleton::default)?;
    let s2 = registry.get_or_init(Singleton::default)?;

    if Rc::ptr_eq(&s1, &s2) {
        println!("Singleton works, both variables contain the same instance.");
    } else {
        println!("Singleton failed, variables contain different instances.");
    }

    Ok(())
}
