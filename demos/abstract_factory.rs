//! Abstract Factory example.
//!
//! Demonstrates:
//! - The same client code working with either concrete factory
//! - Products of one family collaborating
//! - A mismatched pairing producing a message plus a `tracing` warning
//!
//! Run with: `cargo run --example abstract_factory`

use pattern_catalog::factory::{client_code, AbstractFactory, ConcreteFactory1, ConcreteFactory2};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== pattern-catalog: Abstract Factory ===\n");

    println!("Client: Testing client code with the first factory type:");
    println!("{}\n", client_code(&ConcreteFactory1));

    println!("Client: Testing the same client code with the second factory type:");
    println!("{}\n", client_code(&ConcreteFactory2));

    println!("Client: Pairing products from different families:");
    let product_b = ConcreteFactory1.create_product_b();
    let foreign_a = ConcreteFactory2.create_product_a();
    println!("{}", product_b.another_useful_function_b(foreign_a.as_ref()));
}
