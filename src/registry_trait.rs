//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! lazy, exactly-once construction, retrieval and tracing of singleton instances.
//!
//! The registry is type-based: each type (`TypeId`) has at most one instance, created
//! by the first successful request and never replaced afterwards.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

use crate::registry_error::BoxError;
use crate::{RegistryError, RegistryEvent, Singleton};

/// Type alias for the instance storage.
///
/// The `define_registry!` macro declares its statics with this type.
pub type Storage = LazyLock<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// Type alias for the trace callback storage.
///
/// The `define_registry!` macro declares its statics with this type.
pub type TraceCallback = LazyLock<Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>>;

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// three accessor methods (`storage`, `init_lock` and `trace`) to be implemented.
///
/// # Locking
///
/// Lookups take the storage's shared read lock. Construction is serialized by
/// `init_lock`, which is held for the whole of the constructor call; the storage
/// write lock is only taken to publish the finished instance. Readers of types that
/// already exist never wait on a running constructor.
///
/// # Safety Restrictions
///
/// A constructor must NOT request another instance from the same registry: the
/// init lock is not reentrant, so this deadlocks.
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceCallback;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned (due to a panic while holding the lock),
    /// this method automatically recovers by extracting the inner value.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT call any registry methods on the same registry,
    /// as this will cause a deadlock. The callback is invoked while holding
    /// the trace lock.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// After calling this, no tracing events will be emitted.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event to the current callback, if any.
    ///
    /// # Safety Restrictions
    ///
    /// The callback runs while the trace lock is held. It must NOT call
    /// `set_trace_callback`, `clear_trace_callback`, `get` or any other method
    /// on the same registry, as this will cause a deadlock.
    fn emit_event(&self, event: &RegistryEvent) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static Storage;

    /// Access the lock serializing first-time construction.
    fn init_lock() -> &'static Mutex<()>;

    /// Look up the recorded instance of `T` under the shared read lock.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    /// - Type mismatch (extremely rare)
    #[doc(hidden)]
    fn lookup<T: Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>, RegistryError> {
        let any_arc_opt = Self::storage()
            .read()
            .map_err(|_| RegistryError::RegistryLock)?
            .get(&TypeId::of::<T>())
            .cloned();

        let Some(any_arc) = any_arc_opt else {
            return Ok(None);
        };

        let type_name = std::any::type_name::<T>();
        any_arc
            .downcast::<T>()
            .map(Some)
            .map_err(|_| RegistryError::TypeMismatch { type_name })
    }

    /// Return the instance of `T`, constructing it from `args` on first request.
    ///
    /// Once an instance exists, `args` is dropped without being looked at: a
    /// later caller cannot reconfigure the singleton.
    ///
    /// # Errors
    ///
    /// - `T::construct` failed (`RegistryError::Construction`); nothing is recorded
    ///   and the next request constructs again
    /// - Registry lock is poisoned
    fn get_instance<T: Singleton>(&self, args: T::Args) -> Result<Arc<T>, RegistryError> {
        self.get_or_try_init(|| T::construct(args))
    }

    /// Return the instance of `T`, running `init` to create it on first request.
    ///
    /// Uses double-checked locking: a read-locked lookup serves the common case,
    /// then the init lock is taken and the lookup repeated, because another caller
    /// may have finished constructing while this one waited. `init` runs only if
    /// the second lookup also misses, so concurrent first requests construct once.
    ///
    /// # Errors
    ///
    /// - `init` returned `Err` (`RegistryError::Construction`); nothing is recorded
    /// - Registry lock is poisoned
    fn get_or_try_init<T, E, F>(&self, init: F) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E>,
    {
        let type_name = std::any::type_name::<T>();

        if let Some(existing) = self.lookup::<T>()? {
            tracing::trace!(type_name, "singleton fast path hit");
            self.emit_event(&RegistryEvent::Reuse { type_name });
            return Ok(existing);
        }

        // A panicking constructor poisons this lock without leaving an entry behind,
        // so recovering it is enough to let the next caller retry.
        let guard = Self::init_lock().lock().unwrap_or_else(|p| p.into_inner());

        if let Some(existing) = self.lookup::<T>()? {
            drop(guard);
            tracing::trace!(type_name, "singleton constructed by a concurrent caller");
            self.emit_event(&RegistryEvent::Reuse { type_name });
            return Ok(existing);
        }

        let instance = match init() {
            Ok(value) => Arc::new(value),
            Err(err) => {
                drop(guard);
                let source: BoxError = err.into();
                tracing::debug!(type_name, error = %source, "singleton construction failed");
                self.emit_event(&RegistryEvent::ConstructFailed { type_name });
                return Err(RegistryError::Construction { type_name, source });
            }
        };

        Self::storage()
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .insert(TypeId::of::<T>(), instance.clone());
        drop(guard);

        tracing::debug!(type_name, "singleton constructed");
        self.emit_event(&RegistryEvent::Construct { type_name });

        Ok(instance)
    }

    /// Return the instance of `T`, running the infallible `init` on first request.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn get_or_init<T, F>(&self, init: F) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.get_or_try_init(|| Ok::<T, Infallible>(init()))
    }

    /// Retrieve the instance of `T` without constructing it.
    ///
    /// # Errors
    ///
    /// - Type `T` has not been constructed in this registry
    /// - Type mismatch (extremely rare)
    /// - Registry lock is poisoned
    fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        let type_name = std::any::type_name::<T>();

        let result = self
            .lookup::<T>()
            .and_then(|found| found.ok_or(RegistryError::TypeNotFound { type_name }));

        self.emit_event(&RegistryEvent::Get {
            type_name,
            found: result.is_ok(),
        });

        result
    }

    /// Check if an instance of `T` has been constructed.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn contains<T: Send + Sync + 'static>(&self) -> Result<bool, RegistryError> {
        let found = Self::storage()
            .read()
            .map(|m| m.contains_key(&TypeId::of::<T>()))
            .map_err(|_| RegistryError::RegistryLock)?;

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        Ok(found)
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
