//! Inputs accepted in place of literal document lists

use serde_json::Value;
use std::slice;

use super::Generator;

/// Combos for [`Generator::generate`]
///
/// Another generator supplies its current result set; the borrow guarantees it
/// cannot change while the consumer generates, and every value taken from it is
/// copied into the consumer's results.
#[derive(Debug, Clone, Copy)]
pub enum ComboSource<'a> {
    Records(&'a [Value]),
    Generator(&'a Generator),
}

impl<'a> ComboSource<'a> {
    pub(crate) fn records(&self) -> &'a [Value] {
        match *self {
            ComboSource::Records(records) => records,
            ComboSource::Generator(generator) => generator.results(),
        }
    }
}

impl<'a> From<&'a [Value]> for ComboSource<'a> {
    fn from(records: &'a [Value]) -> Self {
        ComboSource::Records(records)
    }
}

impl<'a, const N: usize> From<&'a [Value; N]> for ComboSource<'a> {
    fn from(records: &'a [Value; N]) -> Self {
        ComboSource::Records(records)
    }
}

impl<'a> From<&'a Vec<Value>> for ComboSource<'a> {
    fn from(records: &'a Vec<Value>) -> Self {
        ComboSource::Records(records)
    }
}

/// A JSON array is a list of combos; any other value is a single combo
impl<'a> From<&'a Value> for ComboSource<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Array(records) => ComboSource::Records(records),
            single => ComboSource::Records(slice::from_ref(single)),
        }
    }
}

impl<'a> From<&'a Generator> for ComboSource<'a> {
    fn from(generator: &'a Generator) -> Self {
        ComboSource::Generator(generator)
    }
}

/// Documents appended by [`Generator::concat`]
#[derive(Debug, Clone, Copy)]
pub enum ConcatSource<'a> {
    Documents(&'a [Value]),
    Generator(&'a Generator),
    /// Anything else; concatenating it changes nothing
    Other,
}

impl<'a> From<&'a [Value]> for ConcatSource<'a> {
    fn from(documents: &'a [Value]) -> Self {
        ConcatSource::Documents(documents)
    }
}

impl<'a, const N: usize> From<&'a [Value; N]> for ConcatSource<'a> {
    fn from(documents: &'a [Value; N]) -> Self {
        ConcatSource::Documents(documents)
    }
}

impl<'a> From<&'a Vec<Value>> for ConcatSource<'a> {
    fn from(documents: &'a Vec<Value>) -> Self {
        ConcatSource::Documents(documents)
    }
}

impl<'a> From<&'a Value> for ConcatSource<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Array(documents) => ConcatSource::Documents(documents),
            _ => ConcatSource::Other,
        }
    }
}

impl<'a> From<&'a Generator> for ConcatSource<'a> {
    fn from(generator: &'a Generator) -> Self {
        ConcatSource::Generator(generator)
    }
}
