//! Integration tests for product families created by the concrete factories.

use pattern_catalog::factory::{
    client_code, AbstractFactory, ConcreteFactory1, ConcreteFactory2, Variant,
};

#[test]
fn test_factory_one_family_collaborates() {
    let factory = ConcreteFactory1;
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    assert_eq!(
        product_b.useful_function_b(),
        "The result of the product B1."
    );
    assert_eq!(
        product_b.another_useful_function_b(product_a.as_ref()),
        "The result of the B1 collaborating with the (The result of the product A1.)"
    );
}

#[test]
fn test_factory_two_family_collaborates() {
    let factory = ConcreteFactory2;
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    assert_eq!(product_a.variant(), Variant::Two);
    assert_eq!(
        product_b.another_useful_function_b(product_a.as_ref()),
        "The result of the B2 collaborating with the (The result of the product A2.)"
    );
}

#[test]
fn test_mismatched_variants_still_produce_a_message() {
    let product_b = ConcreteFactory1.create_product_b();
    let foreign_a = ConcreteFactory2.create_product_a();

    let message = product_b.another_useful_function_b(foreign_a.as_ref());

    assert_eq!(
        message,
        "The result of the B1 collaborating with the (The result of the product A2.)"
    );
}

#[test]
fn test_client_code_works_with_any_factory() {
    let factories: Vec<Box<dyn AbstractFactory>> =
        vec![Box::new(ConcreteFactory1), Box::new(ConcreteFactory2)];

    let outputs: Vec<String> = factories.iter().map(|f| client_code(f.as_ref())).collect();

    assert_eq!(
        outputs,
        vec![
            "The result of the product B1.\nThe result of the B1 collaborating with the (The result of the product A1.)",
            "The result of the product B2.\nThe result of the B2 collaborating with the (The result of the product A2.)",
        ]
    );
}
