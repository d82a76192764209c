//! The process-wide default registry.
//!
//! Instances constructed here live until the process exits. Use
//! [`define_registry!`](crate::define_registry) when a separate, isolated
//! registry is needed.
//!
//! # Examples
//!
//! ```
//! use pattern_catalog::{get, get_or_init};
//! use std::sync::Arc;
//!
//! struct Banner(&'static str);
//!
//! get_or_init(|| Banner("Hello, World!")).unwrap();
//!
//! let banner: Arc<Banner> = get().unwrap();
//! assert_eq!(banner.0, "Hello, World!");
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, RwLock},
};

use crate::registry_error::BoxError;
use crate::registry_trait::{Storage, TraceCallback};
use crate::{RegistryApi, RegistryError, RegistryEvent, Singleton};

/// Instances of the global registry, keyed by `TypeId`.
static GLOBAL_STORAGE: Storage = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Serializes first-time construction in the global registry.
static GLOBAL_INIT: Mutex<()> = Mutex::new(());

/// Holds an optional user-defined tracing callback.
static GLOBAL_TRACE: TraceCallback = LazyLock::new(|| Mutex::new(None));

/// Handle to the process-wide registry.
///
/// The free functions of this module delegate to it; it is public so the global
/// registry can be passed wherever a `RegistryApi` implementor is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalRegistry;

impl RegistryApi for GlobalRegistry {
    fn storage() -> &'static Storage {
        &GLOBAL_STORAGE
    }

    fn init_lock() -> &'static Mutex<()> {
        &GLOBAL_INIT
    }

    fn trace() -> &'static TraceCallback {
        &GLOBAL_TRACE
    }
}

/// Returns the instance of `T` from the global registry, constructing it from
/// `args` on the first request.
///
/// Arguments passed after the instance exists are ignored.
///
/// # Examples
///
/// ```
/// use pattern_catalog::{get_instance, Singleton};
/// use std::convert::Infallible;
///
/// struct Database {
///     url: String,
/// }
///
/// impl Singleton for Database {
///     type Args = &'static str;
///     type Error = Infallible;
///
///     fn construct(url: &'static str) -> Result<Self, Infallible> {
///         Ok(Database { url: url.to_string() })
///     }
/// }
///
/// let db = get_instance::<Database>("postgres://primary").unwrap();
/// let again = get_instance::<Database>("postgres://replica").unwrap();
/// assert_eq!(again.url, "postgres://primary");
/// # let _ = db;
/// ```
pub fn get_instance<T: Singleton>(args: T::Args) -> Result<Arc<T>, RegistryError> {
    GlobalRegistry.get_instance(args)
}

/// Returns the instance of `T` from the global registry, running `init` on the
/// first request.
///
/// If `init` fails nothing is recorded and the error is returned as
/// [`RegistryError::Construction`].
pub fn get_or_try_init<T, E, F>(init: F) -> Result<Arc<T>, RegistryError>
where
    T: Send + Sync + 'static,
    E: Into<BoxError>,
    F: FnOnce() -> Result<T, E>,
{
    GlobalRegistry.get_or_try_init(init)
}

/// Returns the instance of `T` from the global registry, running `init` on the
/// first request.
pub fn get_or_init<T, F>(init: F) -> Result<Arc<T>, RegistryError>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    GlobalRegistry.get_or_init(init)
}

/// Retrieves the instance of `T` from the global registry without constructing it.
///
/// # Returns
///
/// - `Ok(Arc<T>)` if the instance exists
/// - `Err(RegistryError::TypeNotFound)` if it was never constructed
/// - `Err(RegistryError::RegistryLock)` if the lock is poisoned
pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, RegistryError> {
    GlobalRegistry.get()
}

/// Checks if an instance of `T` exists in the global registry.
pub fn contains<T: Send + Sync + 'static>() -> Result<bool, RegistryError> {
    GlobalRegistry.contains::<T>()
}

/// Sets a tracing callback that will be invoked on every global registry interaction.
///
/// # Example
/// ```rust
/// use pattern_catalog::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[registry-trace] {}", event));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    GlobalRegistry.set_trace_callback(callback)
}

/// Clears the tracing callback (disables global registry tracing).
pub fn clear_trace_callback() {
    GlobalRegistry.clear_trace_callback()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::convert::Infallible;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[derive(Debug)]
    struct Config {
        value: String,
    }

    impl Singleton for Config {
        type Args = String;
        type Error = Infallible;

        fn construct(value: String) -> Result<Self, Infallible> {
            Ok(Config { value })
        }
    }

    #[test]
    #[serial]
    fn test_get_instance_ignores_later_arguments() {
        let first = get_instance::<Config>("FOO".to_string()).unwrap();
        let second = get_instance::<Config>("BAR".to_string()).unwrap();

        assert_eq!(first.value, "FOO");
        assert_eq!(second.value, "FOO");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    #[serial]
    fn test_concurrent_first_access() {
        struct Shared(usize);

        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    get_or_init(|| Shared(i)).unwrap()
                })
            })
            .collect();

        let results: Vec<Arc<Shared>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], result));
        }
        assert!(results[0].0 < 8);
    }

    #[test]
    #[serial]
    fn test_trace_callback_sees_global_events() {
        struct Traced;

        let events = Arc::new(std::sync::Mutex::new(Vec::new()));
        let events_clone = events.clone();
        set_trace_callback(move |event| {
            events_clone.lock().unwrap().push(event.clone());
        });

        get_or_init(|| Traced).unwrap();
        get_or_init(|| Traced).unwrap();
        clear_trace_callback();
        get_or_init(|| Traced).unwrap();

        let type_name = std::any::type_name::<Traced>();
        let captured = events.lock().unwrap();
        assert_eq!(
            *captured,
            vec![
                RegistryEvent::Construct { type_name },
                RegistryEvent::Reuse { type_name },
            ]
        );
    }

    #[test]
    #[serial]
    fn test_contains_and_get() {
        struct Lookup(u8);

        assert!(!contains::<Lookup>().unwrap());
        assert!(get::<Lookup>().is_err());

        get_or_try_init(|| Ok::<_, Infallible>(Lookup(9))).unwrap();

        assert!(contains::<Lookup>().unwrap());
        assert_eq!(get::<Lookup>().unwrap().0, 9);
    }
}
