//! Observer: subjects notify attached observers about state changes.
//!
//! Notification is synchronous and single-threaded. Observers are held as
//! `Rc<dyn Observer<S>>` and identified by address, so the same handle can be
//! attached more than once and is then notified once per attachment.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Observer is not attached to this subject")]
    NotAttached,
}

/// Receives updates from a subject of type `S`.
pub trait Observer<S: ?Sized> {
    fn update(&self, subject: &S);
}

/// A publisher managing its own subscribers.
pub trait Subject {
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>);

    /// Remove the first attachment of `observer`.
    ///
    /// # Errors
    ///
    /// `ObserverError::NotAttached` if `observer` is not currently attached.
    fn detach(&mut self, observer: &Rc<dyn Observer<Self>>) -> Result<(), ObserverError>;

    fn notify(&self);
}

/// Ordered list of observer handles for subjects of type `S`.
pub struct ObserverList<S: ?Sized> {
    observers: Vec<Rc<dyn Observer<S>>>,
}

impl<S: ?Sized> ObserverList<S> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer<S>>) {
        self.observers.push(observer);
    }

    pub fn detach(&mut self, observer: &Rc<dyn Observer<S>>) -> Result<(), ObserverError> {
        let position = self
            .observers
            .iter()
            .position(|attached| std::ptr::addr_eq(Rc::as_ptr(attached), Rc::as_ptr(observer)))
            .ok_or(ObserverError::NotAttached)?;
        self.observers.remove(position);
        Ok(())
    }

    /// Call `update` on every observer in attachment order.
    pub fn notify(&self, subject: &S) {
        for observer in &self.observers {
            observer.update(subject);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S: ?Sized> Default for ObserverList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for ObserverList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A subject holding a single small integer state.
#[derive(Debug, Default)]
pub struct ConcreteSubject {
    state: Option<u8>,
    observers: ObserverList<ConcreteSubject>,
}

impl ConcreteSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the state is first set.
    pub fn state(&self) -> Option<u8> {
        self.state
    }

    /// Replace the state and notify every observer, even if the value is unchanged.
    pub fn set_state(&mut self, state: u8) {
        tracing::debug!(state, "subject state changed");
        self.state = Some(state);
        self.notify();
    }

    /// Do "something important": pick a new state in `0..10` and notify.
    pub fn some_business_logic<R: Rng>(&mut self, rng: &mut R) {
        let state = rng.gen_range(0..10);
        self.set_state(state);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for ConcreteSubject {
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>) {
        tracing::debug!(attached = self.observers.len() + 1, "observer attached");
        self.observers.attach(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn Observer<Self>>) -> Result<(), ObserverError> {
        self.observers.detach(observer)?;
        tracing::debug!(attached = self.observers.len(), "observer detached");
        Ok(())
    }

    fn notify(&self) {
        tracing::debug!(observers = self.observers.len(), "notifying observers");
        self.observers.notify(self);
    }
}

/// Reaction bookkeeping shared by the concrete observers.
#[derive(Debug, Default)]
struct Reactions {
    count: Cell<usize>,
    last_state: Cell<Option<u8>>,
}

impl Reactions {
    fn record(&self, subject: &ConcreteSubject) {
        self.count.set(self.count.get() + 1);
        self.last_state.set(subject.state());
    }
}

#[derive(Debug, Default)]
pub struct ConcreteObserverA {
    reactions: Reactions,
}

impl ConcreteObserverA {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reactions(&self) -> usize {
        self.reactions.count.get()
    }

    pub fn last_state(&self) -> Option<u8> {
        self.reactions.last_state.get()
    }
}

impl Observer<ConcreteSubject> for ConcreteObserverA {
    fn update(&self, subject: &ConcreteSubject) {
        self.reactions.record(subject);
        tracing::info!(state = ?subject.state(), "ConcreteObserverA: Reacted to the event");
    }
}

#[derive(Debug, Default)]
pub struct ConcreteObserverB {
    reactions: Reactions,
}

impl ConcreteObserverB {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reactions(&self) -> usize {
        self.reactions.count.get()
    }

    pub fn last_state(&self) -> Option<u8> {
        self.reactions.last_state.get()
    }
}

impl Observer<ConcreteSubject> for ConcreteObserverB {
    fn update(&self, subject: &ConcreteSubject) {
        self.reactions.record(subject);
        tracing::info!(state = ?subject.state(), "ConcreteObserverB: Reacted to the event");
    }
}
