//! Thread-safe singleton example.
//!
//! Demonstrates:
//! - Two threads racing to create the same singleton with different values
//! - Exactly one construction: both threads print the same value
//! - Registry events showing which request constructed and which reused
//!
//! Run with: `cargo run --example singleton_thread_safe`
//! Set `RUST_LOG=pattern_catalog=debug` to see the registry's log output.

use pattern_catalog::{define_registry, RegistryError, Singleton};
use std::convert::Infallible;
use std::thread;
use tracing_subscriber::EnvFilter;

define_registry!(app);

struct AppSingleton {
    value: String,
}

impl Singleton for AppSingleton {
    type Args = String;
    type Error = Infallible;

    fn construct(value: String) -> Result<Self, Infallible> {
        Ok(AppSingleton { value })
    }
}

fn test_singleton(value: &str) -> Result<String, RegistryError> {
    let singleton = app::get_instance::<AppSingleton>(value.to_string())?;
    Ok(singleton.value.clone())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== pattern-catalog: Thread-Safe Singleton ===\n");
    println!("If you see the same value, then singleton was reused (yay!)");
    println!("If you see different values, then 2 singletons were created (booo!!)\n");

    app::set_trace_callback(|event| println!("   [registry] {}", event));

    println!("RESULT:\n");
    let handles: Vec<_> = ["FOO", "BAR"]
        .into_iter()
        .map(|value| thread::spawn(move || test_singleton(value)))
        .collect();

    for handle in handles {
        let value = handle.join().map_err(|_| "singleton thread panicked")??;
        println!("{}", value);
    }

    app::clear_trace_callback();
    Ok(())
}
