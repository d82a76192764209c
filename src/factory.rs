//! Abstract Factory: one factory per variant, each producing a matching
//! family of products.
//!
//! A product B only collaborates meaningfully with the product A of its own
//! variant. Any A is accepted; pairing across variants still returns a
//! message and is reported with a `tracing` warning.

use std::fmt;

/// Tag identifying which family a factory or product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    One,
    Two,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::One => write!(f, "1"),
            Variant::Two => write!(f, "2"),
        }
    }
}

pub trait AbstractProductA {
    fn variant(&self) -> Variant;

    fn useful_function_a(&self) -> String;
}

pub trait AbstractProductB {
    fn variant(&self) -> Variant;

    /// Product B is able to do its own thing...
    fn useful_function_b(&self) -> String;

    /// ...but it can also collaborate with any product A.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

pub trait AbstractFactory {
    fn variant(&self) -> Variant;

    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

fn check_pairing(b: Variant, a: &dyn AbstractProductA) {
    if a.variant() != b {
        tracing::warn!(
            product_b = %b,
            product_a = %a.variant(),
            "collaborating across mismatched product variants"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn variant(&self) -> Variant {
        Variant::One
    }

    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn variant(&self) -> Variant {
        Variant::Two
    }

    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn variant(&self) -> Variant {
        Variant::One
    }

    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        check_pairing(self.variant(), collaborator);
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({result})")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn variant(&self) -> Variant {
        Variant::Two
    }

    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        check_pairing(self.variant(), collaborator);
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({result})")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn variant(&self) -> Variant {
        Variant::One
    }

    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn variant(&self) -> Variant {
        Variant::Two
    }

    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

/// Build both products of `factory`'s family and let them work together.
///
/// Returns product B's own result and its collaboration with product A, one
/// per line.
pub fn client_code(factory: &dyn AbstractFactory) -> String {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    format!(
        "{}\n{}",
        product_b.useful_function_b(),
        product_b.another_useful_function_b(product_a.as_ref())
    )
}
