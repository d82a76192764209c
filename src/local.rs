//! Single-threaded singleton registry.
//!
//! `LocalRegistry` has the same first-request-wins semantics as the
//! thread-safe registries but takes no locks. It hands out `Rc` handles, so
//! neither the registry nor its instances can cross threads.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::registry_error::BoxError;
use crate::{RegistryError, Singleton};

/// A registry of at most one instance per type, for use on a single thread.
///
/// # Examples
///
/// ```rust
/// use pattern_catalog::LocalRegistry;
/// use std::rc::Rc;
///
/// let registry = LocalRegistry::new();
///
/// let s1 = registry.get_or_init(|| vec![1, 2, 3]).unwrap();
/// let s2 = registry.get_or_init(|| Vec::<i32>::new()).unwrap();
/// assert!(Rc::ptr_eq(&s1, &s2));
/// ```
#[derive(Default)]
pub struct LocalRegistry {
    instances: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup<T: 'static>(&self) -> Result<Option<Rc<T>>, RegistryError> {
        let found = self.instances.borrow().get(&TypeId::of::<T>()).cloned();
        let Some(any_rc) = found else {
            return Ok(None);
        };

        let type_name = std::any::type_name::<T>();
        any_rc
            .downcast::<T>()
            .map(Some)
            .map_err(|_| RegistryError::TypeMismatch { type_name })
    }

    /// Return the instance of `T`, constructing it from `args` on first request.
    ///
    /// Once an instance exists, `args` is dropped unused.
    pub fn get_instance<T: Singleton>(&self, args: T::Args) -> Result<Rc<T>, RegistryError> {
        self.get_or_try_init(|| T::construct(args))
    }

    /// Return the instance of `T`, running `init` on first request.
    ///
    /// No borrow of the registry is held while `init` runs, so `init` may request
    /// other types from the same registry. If it ends up creating `T` itself, the
    /// instance it created is returned and the outer result is discarded, even
    /// when that result is an error.
    pub fn get_or_try_init<T, E, F>(&self, init: F) -> Result<Rc<T>, RegistryError>
    where
        T: 'static,
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E>,
    {
        let type_name = std::any::type_name::<T>();

        if let Some(existing) = self.lookup::<T>()? {
            return Ok(existing);
        }

        let outcome = init();

        if let Some(existing) = self.lookup::<T>()? {
            return Ok(existing);
        }

        let instance = outcome.map_err(|err| {
            let source: BoxError = err.into();
            tracing::debug!(type_name, error = %source, "local singleton construction failed");
            RegistryError::Construction { type_name, source }
        })?;

        let instance = Rc::new(instance);
        self.instances
            .borrow_mut()
            .insert(TypeId::of::<T>(), instance.clone());
        tracing::debug!(type_name, "local singleton constructed");

        Ok(instance)
    }

    /// Return the instance of `T`, running the infallible `init` on first request.
    pub fn get_or_init<T, F>(&self, init: F) -> Result<Rc<T>, RegistryError>
    where
        T: 'static,
        F: FnOnce() -> T,
    {
        self.get_or_try_init(|| Ok::<T, Infallible>(init()))
    }

    /// Retrieve the instance of `T` without constructing it.
    pub fn get<T: 'static>(&self) -> Result<Rc<T>, RegistryError> {
        self.lookup::<T>()?.ok_or(RegistryError::TypeNotFound {
            type_name: std::any::type_name::<T>(),
        })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.instances.borrow().contains_key(&TypeId::of::<T>())
    }

    /// Number of constructed instances.
    pub fn len(&self) -> usize {
        self.instances.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.borrow().is_empty()
    }
}
