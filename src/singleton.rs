//! Types that can be requested from a registry by type alone.

use crate::registry_error::BoxError;

/// A type whose one instance is built on first request.
///
/// `Args` is whatever the first caller has to supply to build the instance.
/// Only the first successful request's arguments ever reach [`construct`];
/// arguments passed with every later request are dropped unused.
///
/// [`construct`]: Singleton::construct
///
/// # Examples
///
/// ```rust
/// use pattern_catalog::{define_registry, Singleton};
/// use std::convert::Infallible;
///
/// struct Greeter {
///     greeting: String,
/// }
///
/// impl Singleton for Greeter {
///     type Args = String;
///     type Error = Infallible;
///
///     fn construct(greeting: String) -> Result<Self, Infallible> {
///         Ok(Greeter { greeting })
///     }
/// }
///
/// define_registry!(app);
///
/// let first = app::get_instance::<Greeter>("hello".to_string()).unwrap();
/// let second = app::get_instance::<Greeter>("bonjour".to_string()).unwrap();
/// assert_eq!(second.greeting, "hello");
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub trait Singleton: Sized + Send + Sync + 'static {
    /// Construction input supplied by the caller.
    type Args;

    /// Failure raised by [`Singleton::construct`].
    type Error: Into<BoxError>;

    /// Build the instance; runs once, on the first successful request.
    fn construct(args: Self::Args) -> Result<Self, Self::Error>;
}
