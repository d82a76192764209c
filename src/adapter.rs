//! Adapter: exposes an incompatible component through the interface clients expect.
//!
//! The adapter wraps its adaptee instead of inheriting from it.

/// The interface client code works with.
pub trait Target {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

/// A plain target using the default behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTarget;

impl Target for DefaultTarget {}

/// The interface of components that need adapting.
///
/// Their output is reversed character by character.
pub trait SpecificRequest {
    fn specific_request(&self) -> String;
}

/// Useful behavior behind an interface clients cannot use directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adaptee;

impl SpecificRequest for Adaptee {
    fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

/// Makes any [`SpecificRequest`] usable as a [`Target`].
#[derive(Debug, Clone, Default)]
pub struct Adapter<A = Adaptee> {
    adaptee: A,
}

impl<A: SpecificRequest> Adapter<A> {
    pub fn new(adaptee: A) -> Self {
        Self { adaptee }
    }

    pub fn adaptee(&self) -> &A {
        &self.adaptee
    }

    pub fn into_inner(self) -> A {
        self.adaptee
    }
}

impl<A: SpecificRequest> Target for Adapter<A> {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {translated}")
    }
}

/// Client code supporting every [`Target`].
pub fn client_code(target: &dyn Target) -> String {
    target.request()
}
