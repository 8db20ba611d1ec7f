//! Tests for the combination generator

use super::*;
use crate::config::DedupPolicy;
use jsonium_testkit::fixtures::{flat_combos, flat_templates, sequence_combos, sequence_templates};
use serde_json::json;

mod generate;

/// Generator over the flat fixtures with `key1` and `key3` substituted
fn flat_generator() -> Generator {
    let mut generator = Generator::new(&flat_templates());
    generator.generate(["key1", "key3"], &flat_combos());
    generator
}
