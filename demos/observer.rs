//! Observer example.
//!
//! Demonstrates:
//! - Attaching two observers and notifying them on every state change
//! - Detaching observers one by one
//! - Observer reactions reported through `tracing` (shown at the default `info` level)
//!
//! Run with: `cargo run --example observer`

use pattern_catalog::observer::{
    ConcreteObserverA, ConcreteObserverB, ConcreteSubject, Observer, Subject,
};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== pattern-catalog: Observer ===\n");

    let mut rng = rand::thread_rng();
    let mut subject = ConcreteSubject::new();

    let observer_a = Rc::new(ConcreteObserverA::new());
    let observer_b = Rc::new(ConcreteObserverB::new());
    let handle_a: Rc<dyn Observer<ConcreteSubject>> = observer_a.clone();
    let handle_b: Rc<dyn Observer<ConcreteSubject>> = observer_b.clone();

    println!("Subject: Attached an observer.");
    subject.attach(handle_a.clone());
    println!("Subject: Attached an observer.");
    subject.attach(handle_b.clone());

    run_business_logic(&mut subject, &mut rng);

    subject.detach(&handle_a)?;
    run_business_logic(&mut subject, &mut rng);

    subject.detach(&handle_b)?;
    run_business_logic(&mut subject, &mut rng);

    println!(
        "\nObserver A reacted {} time(s), observer B reacted {} time(s).",
        observer_a.reactions(),
        observer_b.reactions()
    );

    Ok(())
}

fn run_business_logic(subject: &mut ConcreteSubject, rng: &mut impl rand::Rng) {
    println!("\nSubject: I'm doing something important.");
    subject.some_business_logic(rng);
    if let Some(state) = subject.state() {
        println!(
            "Subject: My state has just changed to: {} ({} observer(s) notified)",
            state,
            subject.observer_count()
        );
    }
}
