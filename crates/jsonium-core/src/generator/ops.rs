//! Operators over the result set

use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use super::{ConcatSource, Generator};
use crate::config::DedupPolicy;
use crate::document::{all_documents, serialized_key};

impl Generator {
    /// Append another generator's results or a list of documents
    ///
    /// A list holding a leaf, or a [`ConcatSource::Other`], changes nothing.
    pub fn concat<'a>(&mut self, other: impl Into<ConcatSource<'a>>) -> &mut Self {
        match other.into() {
            ConcatSource::Generator(generator) => {
                self.results.extend_from_slice(generator.results());
            }
            ConcatSource::Documents(documents) if all_documents(documents) => {
                self.results.extend_from_slice(documents);
            }
            _ => debug!("concat ignored: source is not a list of documents"),
        }
        self
    }

    /// Rename top-level fields of every result, pair by pair
    ///
    /// A field that is present has its value moved to the new name (replacing
    /// any value already there) and the old name removed. Absent fields and
    /// results that are not mappings are left alone. Renaming a field to itself
    /// changes nothing.
    pub fn rename<I, K, V>(&mut self, mapping: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = mapping.into_iter().collect();

        for result in &mut self.results {
            let Value::Object(fields) = result else {
                continue;
            };
            for (before, after) in &pairs {
                let (before, after) = (before.as_ref(), after.as_ref());
                if before == after {
                    continue;
                }
                if let Some(value) = fields.remove(before) {
                    fields.insert(after.to_string(), value);
                }
            }
        }
        self
    }

    /// Rename a single top-level field, see [`Generator::rename`]
    pub fn rename_key(&mut self, before: &str, after: &str) -> &mut Self {
        self.rename([(before, after)])
    }

    /// Keep the first occurrence of every structurally distinct result
    pub fn dedup(&mut self) -> &mut Self {
        self.dedup_with(DedupPolicy::Structural)
    }

    /// Keep the first occurrence of every distinct result under `policy`
    ///
    /// [`DedupPolicy::Serialized`] treats documents that differ only in field
    /// order as distinct.
    pub fn dedup_with(&mut self, policy: DedupPolicy) -> &mut Self {
        let before = self.results.len();
        let results = std::mem::take(&mut self.results);

        self.results = match policy {
            DedupPolicy::Structural => {
                let mut unique: Vec<Value> = Vec::with_capacity(results.len());
                for doc in results {
                    if !unique.contains(&doc) {
                        unique.push(doc);
                    }
                }
                unique
            }
            DedupPolicy::Serialized => {
                let mut seen = HashSet::with_capacity(results.len());
                results
                    .into_iter()
                    .filter(|doc| seen.insert(serialized_key(doc)))
                    .collect()
            }
        };

        debug!(
            ?policy,
            before,
            after = self.results.len(),
            "removed duplicate results"
        );
        self
    }

    /// Make the current results the new template set and clear the results
    pub fn adopt_results_as_templates(&mut self) -> &mut Self {
        self.templates = std::mem::take(&mut self.results);
        self
    }

    pub fn clear_results(&mut self) -> &mut Self {
        self.results.clear();
        self
    }

    pub fn clear_templates(&mut self) -> &mut Self {
        self.templates.clear();
        self
    }
}
