//! Expands a sequence of records with `@each` and an alternation group.
//!
//! Run with `cargo run -p jsonium-core --example each_braces`.

use jsonium_core::Generator;
use serde_json::json;

fn main() -> Result<(), serde_json::Error> {
    let templates = [
        json!({"a": [{"c": "{{k2}}", "d": "{{k1}}"}, {"c": "{{k2}}", "d": "{{k1}}"}]}),
        json!({"a": [{"c": "{{k1}}", "d": "{{k2}}"}, {"c": "{{k1}}", "d": "{{k2}}"}]}),
    ];
    let combos = [
        json!({"k1": "v11", "k2": "21"}),
        json!({"k1": "v12", "k2": "22"}),
        json!({"k1": "v13", "k2": "23"}),
        json!({"k1": "v14", "k2": "24"}),
    ];

    let mut generator = Generator::new(&templates);
    generator.generate(["a.@each.{c,d}"], &combos).dedup();

    println!("{}", serde_json::to_string_pretty(generator.results())?);
    Ok(())
}
