//! Combination generator
//!
//! A [`Generator`] owns a template set and a result set. [`Generator::generate`]
//! fills the result set with `templates × combos` documents; the operators in
//! `ops` reshape the result set afterwards and can turn it into the template set
//! of a further stage.

mod ops;
mod sources;
mod substitute;

pub use sources::{ComboSource, ConcatSource};

use serde_json::Value;
use tracing::debug;

use crate::document::all_documents;
use crate::expr::PathExpr;

/// Template set plus the documents generated from it
///
/// Methods that change state take `&mut self` and return `&mut Self`, so calls
/// chain:
///
/// ```
/// use jsonium_core::Generator;
/// use serde_json::json;
///
/// let templates = [
///     json!({"a": [{"c": "{{k2}}", "d": "{{k1}}"}, {"c": "{{k2}}", "d": "{{k1}}"}]}),
///     json!({"a": [{"c": "{{k1}}", "d": "{{k2}}"}, {"c": "{{k1}}", "d": "{{k2}}"}]}),
/// ];
/// let combos = [json!({"k1": "v11", "k2": "21"}), json!({"k1": "v12", "k2": "22"})];
///
/// let results = Generator::new(&templates)
///     .generate(["a.@each.{c,d}"], &combos)
///     .dedup()
///     .results()
///     .to_vec();
///
/// assert_eq!(results.len(), 4);
/// assert_eq!(results[0]["a"][1], json!({"c": "21", "d": "v11"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generator {
    templates: Vec<Value>,
    results: Vec<Value>,
}

impl Generator {
    /// Create a generator holding a copy of `templates`
    ///
    /// Templates that are not all mappings or sequences are ignored, leaving the
    /// template set empty.
    pub fn new(templates: &[Value]) -> Self {
        let mut generator = Self::default();
        generator.set_templates(templates);
        generator
    }

    /// Replace the template set with a copy of `templates`
    ///
    /// When any element is a leaf (string, number, boolean, null) the call is a
    /// no-op and the previous template set is kept.
    pub fn set_templates(&mut self, templates: &[Value]) -> &mut Self {
        if all_documents(templates) {
            self.templates = templates.to_vec();
        } else {
            debug!(
                count = templates.len(),
                "template set ignored: every template must be a mapping or sequence"
            );
        }
        self
    }

    pub fn templates(&self) -> &[Value] {
        &self.templates
    }

    pub fn results(&self) -> &[Value] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Value> {
        self.results
    }

    /// Generate one document per template and combo
    ///
    /// Previous results are discarded; templates are kept. Results are ordered
    /// template-major: all combos of the first template come first.
    ///
    /// For every combo variable `k`, every location selected by `paths` in the
    /// current copy is updated:
    /// - a string has every `{{k}}` replaced by the value of `k`
    /// - any other value is overwritten by the combo entry whose key is the
    ///   dotted resolved path (`null` when the combo has none)
    ///
    /// Locations that do not exist in a copy are skipped.
    pub fn generate<'a, I, S>(&mut self, paths: I, combos: impl Into<ComboSource<'a>>) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exprs: Vec<PathExpr> = paths
            .into_iter()
            .map(|p| PathExpr::new(p.as_ref()))
            .collect();
        let combos: ComboSource<'a> = combos.into();
        let records = combos.records();

        debug!(
            templates = self.templates.len(),
            combos = records.len(),
            paths = exprs.len(),
            "generating combinations"
        );

        let mut results = Vec::with_capacity(self.templates.len() * records.len());
        for template in &self.templates {
            for combo in records {
                let mut doc = template.clone();
                substitute::apply_combo(&mut doc, &exprs, combo);
                results.push(doc);
            }
        }
        self.results = results;

        debug!(results = self.results.len(), "generation finished");
        self
    }
}

#[cfg(test)]
mod tests;
