//! Macros for creating singleton registries.
//!
//! This module provides a simple macro-based approach to create isolated,
//! thread-safe singleton registries.

/// Creates a complete singleton registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Construction lock static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`
/// - Free functions delegating to `Api`
///
/// # Examples
///
/// ```rust
/// use pattern_catalog::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(global);
///
/// let first: Arc<String> = global::get_or_init(|| "first".to_string()).unwrap();
/// let second: Arc<String> = global::get_or_init(|| "second".to_string()).unwrap();
///
/// assert_eq!(&**second, "first");
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
///
/// # Multiple Registries
///
/// Each registry is completely isolated:
///
/// ```rust
/// use pattern_catalog::define_registry;
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// database::get_or_init(|| "db_connection".to_string()).unwrap();
///
/// assert!(database::contains::<String>().unwrap());
/// assert!(!cache::contains::<String>().unwrap());
/// ```
///
/// # Trait-Based Usage
///
/// The `API` constant is available for trait-based access:
///
/// ```rust
/// use pattern_catalog::{define_registry, RegistryApi};
/// use std::sync::Arc;
///
/// define_registry!(app);
///
/// let value: Arc<i32> = app::API.get_or_init(|| 100).unwrap();
/// assert_eq!(*value, 100);
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex, RwLock};

            // Storage for constructed instances (module-private)
            static STORAGE: $crate::Storage = LazyLock::new(|| RwLock::new(HashMap::new()));

            // Serializes first-time construction (module-private)
            static INIT: Mutex<()> = Mutex::new(());

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceCallback = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            ///
            /// All registry operations are provided by the `RegistryApi` trait's
            /// default implementations. This struct only provides access to the statics.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage() -> &'static $crate::Storage {
                    &STORAGE
                }

                fn init_lock() -> &'static Mutex<()> {
                    &INIT
                }

                fn trace() -> &'static $crate::TraceCallback {
                    &TRACE
                }
            }

            /// Convenient constant for accessing the registry API.
            pub const API: Api = Api;

            /// Return the instance of `T`, constructing it from `args` on first request.
            pub fn get_instance<T: $crate::Singleton>(
                args: T::Args,
            ) -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get_instance(args)
            }

            /// Return the instance of `T`, running `init` on first request.
            pub fn get_or_try_init<T, E, F>(init: F) -> Result<Arc<T>, $crate::RegistryError>
            where
                T: Send + Sync + 'static,
                E: Into<$crate::BoxError>,
                F: FnOnce() -> Result<T, E>,
            {
                use $crate::RegistryApi;
                API.get_or_try_init(init)
            }

            /// Return the instance of `T`, running the infallible `init` on first request.
            pub fn get_or_init<T, F>(init: F) -> Result<Arc<T>, $crate::RegistryError>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> T,
            {
                use $crate::RegistryApi;
                API.get_or_init(init)
            }

            /// Retrieve an already-constructed instance.
            pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get()
            }

            /// Check if an instance of `T` has been constructed.
            pub fn contains<T: Send + Sync + 'static>() -> Result<bool, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.contains::<T>()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    #[test]
    fn test_define_registry_macro() {
        define_registry!(test_reg);

        let value: Arc<i32> = test_reg::get_or_init(|| 100).unwrap();
        assert_eq!(*value, 100);

        assert!(test_reg::contains::<i32>().unwrap());
        assert!(!test_reg::contains::<f64>().unwrap());
    }

    #[test]
    fn test_multiple_registries() {
        define_registry!(reg_a);
        define_registry!(reg_b);

        let a_val = reg_a::get_or_init(|| 1i32).unwrap();
        let b_val = reg_b::get_or_init(|| 2i32).unwrap();

        assert_eq!(*a_val, 1);
        assert_eq!(*b_val, 2);
    }

    #[test]
    fn test_tracing() {
        define_registry!(trace_test);

        use std::sync::Mutex;
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        trace_test::set_trace_callback(move |event| {
            events_clone.lock().unwrap().push(format!("{}", event));
        });

        trace_test::get_or_init(|| 42i32).unwrap();
        trace_test::get_or_init(|| 43i32).unwrap();
        let _: Arc<i32> = trace_test::get().unwrap();
        let _ = trace_test::contains::<i32>();

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 4);
        assert!(recorded[0].starts_with("construct"));
        assert!(recorded[1].starts_with("reuse"));
        assert!(recorded[2].starts_with("get"));
        assert!(recorded[3].starts_with("contains"));
    }
}
