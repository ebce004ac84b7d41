//! Two variables, two functions, one pass
//!
//! Run with: cargo run --example arithmetic

use bindenv_runtime::{Environment, Value};

fn main() -> anyhow::Result<()> {
    bindenv_examples::init_tracing();

    let mut env = Environment::with_label("arithmetic");
    env.register_variable("num1", 1)?;
    env.register_variable("num2", 2)?;

    let scope = env.scope();
    env.register_function("add", move || {
        Ok(Some(Value::Number(scope.number("num1")? + scope.number("num2")?)))
    })?;

    env.register_variable("num3", 3)?;

    let scope = env.scope();
    env.register_function("multiply", move || {
        Ok(Some(Value::Number(scope.number("add")? * scope.number("num3")?)))
    })?;

    for name in env.invocation_order() {
        println!("{}", name);
    }

    match env.invoke()? {
        Some(result) => println!("{}", result),
        None => println!("(no result)"),
    }

    println!("Press Enter to exit...");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(())
}
