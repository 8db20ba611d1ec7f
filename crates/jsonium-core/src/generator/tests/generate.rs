//! `Generator::generate` tests

use super::*;

#[test]
fn test_simple_keys() {
    let generator = flat_generator();

    assert_eq!(
        generator.results(),
        &[
            json!({"key1": "v1 1", "key2": "{{k2}} 1", "key3": "v2 1"}),
            json!({"key1": "v3 1", "key2": "{{k2}} 1", "key3": "v4 1"}),
            json!({"key1": "v1 2", "key2": "{{k2}} 2", "key3": "v2 2"}),
            json!({"key1": "v3 2", "key2": "{{k2}} 2", "key3": "v4 2"}),
        ]
    );
}

#[test]
fn test_nested_keys() {
    let templates = [
        json!({"s": {"key1": "{{k1}} 1", "key2": "{{k2}} 1", "key3": "{{k3}} 1"}}),
        json!({"s": {"key1": "{{k1}} 2", "key2": "{{k2}} 2", "key3": "{{k3}} 2"}}),
    ];

    let mut generator = Generator::new(&templates);
    generator.generate(["s.key1", "s.key3"], &flat_combos());

    let results = generator.results();
    assert_eq!(results.len(), 4);
    assert_eq!(
        results[0]["s"],
        json!({"key1": "v1 1", "key2": "{{k2}} 1", "key3": "v2 1"})
    );
    assert_eq!(
        results[3]["s"],
        json!({"key1": "v3 2", "key2": "{{k2}} 2", "key3": "v4 2"})
    );
}

#[test]
fn test_results_are_template_major() {
    let templates = [json!({"t": "0"}), json!({"t": "1"}), json!({"t": "2"})];
    let combos = [json!({"c": "a"}), json!({"c": "b"})];

    let mut generator = Generator::new(&templates);
    generator.generate(["t"], &combos);

    let results = generator.results();
    assert_eq!(results.len(), templates.len() * combos.len());
    for (i, template) in templates.iter().enumerate() {
        for j in 0..combos.len() {
            assert_eq!(results[i * combos.len() + j], *template);
        }
    }
}

#[test]
fn test_empty_combos_give_no_results() {
    let mut generator = Generator::new(&flat_templates());
    generator.generate(["key1", "key2", "key3"], &Vec::new());

    assert!(generator.results().is_empty());
}

#[test]
fn test_empty_templates_give_no_results() {
    let mut generator = Generator::default();
    generator.generate(["key1"], &flat_combos());

    assert!(generator.results().is_empty());
}

#[test]
fn test_no_paths_copies_templates() {
    let mut generator = Generator::new(&flat_templates());
    generator.generate(Vec::<String>::new(), &flat_combos());

    let results = generator.results();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0], flat_templates()[0]);
    assert_eq!(results[2], flat_templates()[1]);
}

#[test]
fn test_missing_path_is_skipped() {
    let templates = [
        json!({"s": {"key1": "{{k1}} 1", "key2": "{{k2}} 1"}}),
        json!({"s": {"key1": "{{k1}} 2", "key2": "{{k2}} 2"}}),
    ];

    let mut generator = Generator::new(&templates);
    generator.generate(["s.key1", "s.key3"], &flat_combos());

    let results = generator.results();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0]["s"], json!({"key1": "v1 1", "key2": "{{k2}} 1"}));
    assert_eq!(results[3]["s"], json!({"key1": "v3 2", "key2": "{{k2}} 2"}));
}

#[test]
fn test_every_occurrence_is_replaced() {
    let mut generator = Generator::new(&[json!({"a": "{{x}}-{{x}}-{{y}}"})]);
    generator.generate(["a"], &[json!({"x": "1"})]);

    assert_eq!(generator.results()[0], json!({"a": "1-1-{{y}}"}));
}

#[test]
fn test_non_string_replacement_uses_json_text() {
    let mut generator = Generator::new(&[json!({"a": "{{n}}|{{b}}|{{z}}|{{l}}"})]);
    generator.generate(
        ["a"],
        &[json!({"n": 42, "b": true, "z": null, "l": [1, 2]})],
    );

    assert_eq!(generator.results()[0], json!({"a": "42|true|null|[1,2]"}));
}

#[test]
fn test_placeholder_name_is_exact() {
    let mut generator = Generator::new(&[json!({"a": "{{ k }} {{k}}"})]);
    generator.generate(["a"], &[json!({"k": "v"})]);

    assert_eq!(generator.results()[0], json!({"a": "{{ k }} v"}));
}

#[test]
fn test_each_with_alternatives() {
    let mut generator = Generator::new(&sequence_templates());
    generator.generate(["a.@each.{c,d}"], &sequence_combos());

    let results = generator.results();
    assert_eq!(results.len(), 8);
    assert_eq!(
        results[0],
        json!({"a": [{"c": "21", "d": "v11"}, {"c": "21", "d": "v11"}]})
    );
    assert_eq!(
        results[7],
        json!({"a": [{"c": "v14", "d": "24"}, {"c": "v14", "d": "24"}]})
    );
}

#[test]
fn test_each_follows_each_template() {
    let templates = [
        json!({"l": ["{{x}}"]}),
        json!({"l": ["{{x}}", "{{x}}!", "{{x}}?"]}),
    ];

    let mut generator = Generator::new(&templates);
    generator.generate(["l.@each"], &[json!({"x": "v"})]);

    assert_eq!(
        generator.results(),
        &[json!({"l": ["v"]}), json!({"l": ["v", "v!", "v?"]})]
    );
}

#[test]
fn test_non_string_is_overwritten_by_path_key() {
    let mut generator = Generator::new(&[json!({"o": {"n": 1}, "s": "{{x}}"})]);
    generator.generate(["o.n", "s"], &[json!({"x": "a", "o.n": true})]);

    assert_eq!(generator.results()[0], json!({"o": {"n": true}, "s": "a"}));
}

#[test]
fn test_non_string_without_path_key_becomes_null() {
    let mut generator = Generator::new(&[json!({"n": 5, "s": "{{x}}"})]);
    generator.generate(["n", "s"], &[json!({"x": "a"})]);

    assert_eq!(generator.results()[0], json!({"n": null, "s": "a"}));
}

#[test]
fn test_selected_mapping_is_overwritten() {
    let mut generator = Generator::new(&[json!({"o": {"x": "{{a}}"}})]);
    generator.generate(["o"], &[json!({"a": "1"})]);

    assert_eq!(generator.results()[0], json!({"o": null}));
}

#[test]
fn test_non_mapping_combo_copies_template() {
    let template = json!({"a": "{{x}}"});
    let mut generator = Generator::new(&[template.clone()]);
    generator.generate(["a"], &[json!(1), json!("text")]);

    assert_eq!(generator.results(), &[template.clone(), template]);
}

#[test]
fn test_single_combo_value() {
    let mut generator = Generator::new(&flat_templates());
    generator.generate(["key1"], &json!({"k1": "only"}));

    let results = generator.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["key1"], "only 1");
    assert_eq!(results[1]["key1"], "only 2");
}

#[test]
fn test_generate_replaces_previous_results() {
    let mut generator = flat_generator();
    generator.generate(["key1"], &[json!({"k1": "again"})]);

    assert_eq!(generator.results().len(), 2);
    assert_eq!(generator.results()[0]["key1"], "again 1");
}

#[test]
fn test_templates_are_not_modified() {
    let generator = flat_generator();

    assert_eq!(generator.templates(), flat_templates().as_slice());
}

#[test]
fn test_set_templates_ignores_leaves() {
    let mut generator = Generator::new(&[json!({"a": 1})]);
    generator.set_templates(&[json!({}), json!(1)]);

    assert_eq!(generator.templates(), &[json!({"a": 1})]);
}

#[test]
fn test_sequence_templates_are_accepted() {
    let mut generator = Generator::new(&[json!(["{{x}}", "{{y}}"])]);
    generator.generate(["0"], &[json!({"x": "a", "y": "b"})]);

    assert_eq!(generator.results(), &[json!(["a", "{{y}}"])]);
}

#[test]
fn test_new_with_leaf_is_empty() {
    let generator = Generator::new(&[json!("leaf")]);

    assert!(generator.templates().is_empty());
}

#[test]
fn test_each_over_sequence_of_records() {
    let mut generator = Generator::new(&[json!({
        "key1": [{"key2": "{{k2}} 1"}, {"key2": "{{k2}} 2"}]
    })]);
    generator.generate(["key1.@each.key2"], &[json!({"k2": "v2"})]);

    assert_eq!(
        generator.results(),
        &[json!({"key1": [{"key2": "v2 1"}, {"key2": "v2 2"}]})]
    );
}
