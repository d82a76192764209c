//! Adapter example.
//!
//! Run with: `cargo run --example adapter`

use pattern_catalog::adapter::{client_code, Adaptee, Adapter, DefaultTarget, SpecificRequest};

fn main() {
    println!("=== pattern-catalog: Adapter ===\n");

    println!("Client: I can work just fine with the Target objects:");
    println!("{}\n", client_code(&DefaultTarget));

    let adaptee = Adaptee;
    println!("Client: The Adaptee class has a weird interface. See, I don't understand it:");
    println!("Adaptee: {}\n", adaptee.specific_request());

    println!("Client: But I can work with it via the Adapter:");
    println!("{}", client_code(&Adapter::new(adaptee)));
}
