//! # Pattern Catalog
//!
//! Classic design patterns expressed with Rust traits and ownership, built around a
//! thread-safe singleton registry with exactly-once lazy construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use pattern_catalog::get_or_init;
//! use std::sync::Arc;
//!
//! struct Settings {
//!     name: String,
//! }
//!
//! let first: Arc<Settings> = get_or_init(|| Settings { name: "FOO".into() }).unwrap();
//! let second: Arc<Settings> = get_or_init(|| Settings { name: "BAR".into() }).unwrap();
//!
//! // The second initializer never ran.
//! assert_eq!(second.name, "FOO");
//! assert!(Arc::ptr_eq(&first, &second));
//! ```
//!
//! ## Singleton
//!
//! - **Exactly once**: concurrent first requests for a type construct it once
//! - **First request wins**: arguments supplied after construction are ignored
//! - **Retryable**: a failed constructor records nothing
//! - **Isolated registries**: [`define_registry!`] creates independent registries
//! - **Single-threaded variant**: [`LocalRegistry`] takes no locks
//! - **Tracing support**: optional callback receiving [`RegistryEvent`]s
//!
//! ## Other Patterns
//!
//! - [`factory`] - Abstract Factory with two product variants
//! - [`adapter`] - Adapter by composition
//! - [`observer`] - Subject/observer notification in attachment order
//!
//! ## Main Functions
//!
//! - [`get_instance`] - Get or construct a [`Singleton`] from constructor arguments
//! - [`get_or_init`] / [`get_or_try_init`] - Get or construct from a closure
//! - [`get`] - Retrieve an already-constructed instance
//! - [`contains`] - Check if a type has been constructed
//! - [`set_trace_callback`] - Set up tracing for registry operations

pub mod adapter;
pub mod factory;
mod local;
mod macros;
pub mod observer;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;
mod singleton;

pub use local::LocalRegistry;
pub use registry::{
    clear_trace_callback, contains, get, get_instance, get_or_init, get_or_try_init,
    set_trace_callback, GlobalRegistry,
};
pub use registry_error::{BoxError, RegistryError};
pub use registry_event::RegistryEvent;
pub use registry_trait::{RegistryApi, Storage, TraceCallback};
pub use singleton::Singleton;
