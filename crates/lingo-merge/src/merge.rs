//! Folding per-language documents into one merged tree.
//!
//! The merge walks all variants in lockstep. At every node the variants that
//! reach it must agree on its [`JsonKind`]; objects merge key by key over the
//! union of their keys, arrays merge element by element, and scalars either
//! collapse to their common value or become a divergence marker.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use lingo_types::{marker_key, JsonKind, LangCode, LangMap, NodePath};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};

/// One language's contribution at the current node.
type Variant<'a> = (&'a LangCode, &'a Value);

/// Summary of a successful merge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Languages that took part, in merge order.
    pub languages: Vec<LangCode>,
    /// Every location where a divergence marker was written.
    pub divergences: Vec<NodePath>,
}

impl MergeReport {
    /// Number of divergence markers in the merged document.
    pub fn divergence_count(&self) -> usize {
        self.divergences.len()
    }

    /// Returns `true` if every language agreed on every shared scalar.
    pub fn is_uniform(&self) -> bool {
        self.divergences.is_empty()
    }
}

/// The merged document together with its [`MergeReport`].
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    pub document: Value,
    pub report: MergeReport,
}

/// Merges a [`LangMap`] into a single document.
#[derive(Clone, Debug, Default)]
pub struct TreeMerger {
    config: MergeConfig,
}

impl TreeMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge all variants into one document.
    pub fn merge(&self, langs: &LangMap) -> MergeResult<Value> {
        self.merge_with_report(langs).map(|outcome| outcome.document)
    }

    /// Merge all variants and report where they diverged.
    pub fn merge_with_report(&self, langs: &LangMap) -> MergeResult<MergeOutcome> {
        if langs.is_empty() {
            return Err(MergeError::NoLanguages);
        }

        let variants: Vec<Variant<'_>> = langs.iter().collect();
        let mut report = MergeReport {
            languages: langs.keys().cloned().collect(),
            divergences: Vec::new(),
        };
        let mut path = NodePath::root();

        let document = self.merge_node(&variants, &mut path, &mut report)?;
        debug!(
            languages = report.languages.len(),
            divergences = report.divergence_count(),
            "merge complete"
        );
        Ok(MergeOutcome { document, report })
    }

    fn merge_node(
        &self,
        variants: &[Variant<'_>],
        path: &mut NodePath,
        report: &mut MergeReport,
    ) -> MergeResult<Value> {
        // A node only one language reaches is taken as-is, without looking
        // inside it.
        if let [(_, only)] = variants {
            return Ok((*only).clone());
        }

        if path.depth() > self.config.max_depth {
            return Err(MergeError::DepthExceeded {
                path: path.clone(),
                max_depth: self.config.max_depth,
            });
        }

        match agreed_kind(variants, path)? {
            JsonKind::Object => self.merge_objects(variants, path, report),
            JsonKind::Array => self.merge_arrays(variants, path, report),
            JsonKind::Scalar => Ok(merge_scalars(variants, path, report)),
        }
    }

    fn merge_objects(
        &self,
        variants: &[Variant<'_>],
        path: &mut NodePath,
        report: &mut MergeReport,
    ) -> MergeResult<Value> {
        let objects: Vec<(&LangCode, &Map<String, Value>)> = variants
            .iter()
            .filter_map(|(lang, value)| value.as_object().map(|map| (*lang, map)))
            .collect();

        let keys: BTreeSet<&String> = objects.iter().flat_map(|(_, map)| map.keys()).collect();

        let mut merged = Map::new();
        for key in keys {
            let present: Vec<Variant<'_>> = objects
                .iter()
                .filter_map(|(lang, map)| map.get(key).map(|value| (*lang, value)))
                .collect();

            path.push_key(key.as_str());
            let value = self.merge_node(&present, path, report)?;
            path.pop();

            merged.insert(key.clone(), value);
        }
        Ok(Value::Object(merged))
    }

    fn merge_arrays(
        &self,
        variants: &[Variant<'_>],
        path: &mut NodePath,
        report: &mut MergeReport,
    ) -> MergeResult<Value> {
        let arrays: Vec<(&LangCode, &Vec<Value>)> = variants
            .iter()
            .filter_map(|(lang, value)| value.as_array().map(|items| (*lang, items)))
            .collect();

        let len = arrays.first().map(|(_, items)| items.len()).unwrap_or(0);
        if arrays.iter().any(|(_, items)| items.len() != len) {
            return Err(MergeError::LengthMismatch {
                path: path.clone(),
                lengths: arrays
                    .iter()
                    .map(|(lang, items)| ((*lang).clone(), items.len()))
                    .collect(),
            });
        }

        let mut merged = Vec::with_capacity(len);
        for index in 0..len {
            let column: Vec<Variant<'_>> = arrays
                .iter()
                .map(|(lang, items)| (*lang, &items[index]))
                .collect();

            path.push_index(index);
            let value = self.merge_node(&column, path, report)?;
            path.pop();

            merged.push(value);
        }
        Ok(Value::Array(merged))
    }
}

/// Merge with the default configuration.
pub fn merge(langs: &LangMap) -> MergeResult<Value> {
    TreeMerger::default().merge(langs)
}

/// The kind every variant shares, or a `TypeMismatch` naming each one.
fn agreed_kind(variants: &[Variant<'_>], path: &NodePath) -> MergeResult<JsonKind> {
    let kinds: Vec<(&LangCode, JsonKind)> = variants
        .iter()
        .map(|(lang, value)| (*lang, JsonKind::of(value)))
        .collect();

    // Callers never pass an empty slice; an object key is only visited when at
    // least one variant has it.
    let first = kinds.first().map(|(_, kind)| *kind).unwrap_or(JsonKind::Scalar);
    if kinds.iter().all(|(_, kind)| *kind == first) {
        return Ok(first);
    }

    Err(MergeError::TypeMismatch {
        path: path.clone(),
        kinds: kinds
            .into_iter()
            .map(|(lang, kind)| (lang.clone(), kind))
            .collect(),
    })
}

fn merge_scalars(variants: &[Variant<'_>], path: &NodePath, report: &mut MergeReport) -> Value {
    let first = variants.first().map(|(_, value)| *value);
    if let Some(common) = first.filter(|common| variants.iter().all(|(_, v)| v == common)) {
        return common.clone();
    }

    trace!(%path, languages = variants.len(), "divergent scalar");
    report.divergences.push(path.clone());

    let marker: Map<String, Value> = variants
        .iter()
        .map(|(lang, value)| (marker_key(lang), (*value).clone()))
        .collect();
    Value::Object(marker)
}
