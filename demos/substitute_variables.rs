//! Resolve variables through a static table and through a callback.

use std::collections::HashMap;

use shellquote_rs::{Resolver, VarValue, parse_with};

fn main() {
    // Static table: plain text and a structured value.
    let mut vars = HashMap::new();
    vars.insert("USER".to_string(), VarValue::from("ada"));
    vars.insert(
        "LIMITS".to_string(),
        VarValue::from(serde_json::json!({"cpu": 2, "mem": "512M"})),
    );

    let tokens = parse_with("run --as $USER --limits $LIMITS", Resolver::Static(&vars))
        .expect("parse failed");
    println!("Static table:");
    for token in &tokens {
        println!("  {token:?}");
    }

    // Callback: resolve from the process environment instead.
    let mut lookup = |name: &str| std::env::var(name).ok().map(VarValue::from);
    let tokens =
        parse_with("echo \"home is $HOME\"", Resolver::Callback(&mut lookup)).expect("parse failed");
    println!("\nEnvironment callback:");
    for token in &tokens {
        println!("  {token:?}");
    }
}
