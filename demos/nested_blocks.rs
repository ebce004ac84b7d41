//! Nested environments and configuration seeding
//!
//! Run with: cargo run --example nested_blocks
//!
//! Variables prefixed with BINDENV_VAR_ are picked up as well, e.g.
//! `BINDENV_VAR_DISCOUNT=0.25 cargo run --example nested_blocks`.

use bindenv_runtime::{Environment, EnvironmentBuilder, EnvironmentConfig, Value};

const CONFIG: &str = r#"
label: order
load_env: true
variables:
  quantity: 3
  unit_price: 12.5
"#;

fn main() -> anyhow::Result<()> {
    bindenv_examples::init_tracing();

    let config = EnvironmentConfig::from_yaml_str(CONFIG)?;
    let mut order = Environment::from_config(&config)?;
    if !order.contains_variable("discount") {
        order.register_variable("discount", 0.1)?;
    }

    // Shipping is computed in its own environment and published as one value
    let shipping_builder = EnvironmentBuilder::new()
        .label("shipping")
        .variable("base", 4)
        .variable("per_item", 0.5)
        .variable("items", order.lookup("quantity")?);
    let shipping_scope = shipping_builder.scope();
    let shipping = shipping_builder
        .function("fee", move || {
            let fee = shipping_scope.number("base")?
                + shipping_scope.number("per_item")? * shipping_scope.number("items")?;
            Ok(Some(Value::Number(fee)))
        })
        .build()?;

    let scope = order.scope();
    order.register_function("subtotal", move || {
        let subtotal = scope.number("quantity")? * scope.number("unit_price")?;
        Ok(Some(Value::Number(subtotal * (1.0 - scope.number("discount")?))))
    })?;
    order.register_block("shipping", shipping)?;

    let scope = order.scope();
    order.register_function("total", move || {
        Ok(Some(Value::Number(
            scope.number("subtotal")? + scope.number("shipping")?,
        )))
    })?;

    println!("Invocation order:");
    for name in order.invocation_order() {
        println!("  {}", name);
    }

    let total = order.invoke()?;
    println!("subtotal = {}", order.lookup("subtotal")?);
    println!("shipping = {}", order.lookup("shipping")?);
    println!("total    = {}", Value::from(total));

    Ok(())
}
