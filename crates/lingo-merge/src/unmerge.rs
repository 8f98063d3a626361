//! Splitting a merged document back into per-language documents.
//!
//! Divergence markers are leaves: each language takes the value stored under
//! its own `"@" + code` key. Everything else is copied into every language,
//! recursing through objects and arrays so markers nested anywhere below are
//! resolved.
//!
//! Only the codes the document is known to hold mark an object as a marker:
//! the requested languages plus those declared under `meta.lang`. Other
//! `@`-prefixed keys, such as JSON-LD's `@type`, are ordinary data.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use lingo_types::{is_marker_object, marker_key, LangCode, LangMap, NodePath};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::meta::read_languages;

/// Splits a merged document into a [`LangMap`].
#[derive(Clone, Debug, Default)]
pub struct TreeUnmerger {
    config: MergeConfig,
}

impl TreeUnmerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Produce one document per requested language.
    ///
    /// Repeated codes in `languages` are only produced once. Marker entries
    /// for languages that were not requested are ignored when `meta.lang`
    /// declares them, so a document merged from more languages can be split
    /// into a subset of them.
    pub fn unmerge(&self, doc: &Value, languages: &[LangCode]) -> MergeResult<LangMap> {
        let langs = dedup(languages);
        if langs.is_empty() {
            return Err(MergeError::MissingLanguages);
        }

        let mut known = langs.clone();
        match read_languages(doc) {
            Ok(declared) => known.extend(declared.into_iter().filter(|lang| !langs.contains(lang))),
            Err(err) => debug!(%err, "no usable meta.lang; markers limited to requested languages"),
        }
        self.split(doc, langs, &known)
    }

    /// Read the languages from `meta.lang` and unmerge for all of them.
    ///
    /// Returns the languages in the order `meta.lang` lists them, next to the
    /// split documents.
    pub fn unmerge_declared(&self, doc: &Value) -> MergeResult<(Vec<LangCode>, LangMap)> {
        let languages = read_languages(doc)?;
        let split = self.split(doc, languages.clone(), &languages)?;
        Ok((languages, split))
    }

    fn split(&self, doc: &Value, langs: Vec<LangCode>, known: &[LangCode]) -> MergeResult<LangMap> {
        let mut path = NodePath::root();
        let values = self.unmerge_node(doc, &langs, known, &mut path)?;
        debug!(languages = langs.len(), known = known.len(), "unmerge complete");

        Ok(langs.into_iter().zip(values).collect())
    }

    /// Returns one value per entry of `langs`, in the same order.
    fn unmerge_node(
        &self,
        node: &Value,
        langs: &[LangCode],
        known: &[LangCode],
        path: &mut NodePath,
    ) -> MergeResult<Vec<Value>> {
        if path.depth() > self.config.max_depth {
            return Err(MergeError::DepthExceeded {
                path: path.clone(),
                max_depth: self.config.max_depth,
            });
        }

        match node {
            Value::Object(map) if is_marker_object(map, known) => resolve_marker(map, langs, path),
            Value::Object(map) => {
                let mut outputs = vec![Map::with_capacity(map.len()); langs.len()];
                for (key, child) in map {
                    path.push_key(key.as_str());
                    let parts = self.unmerge_node(child, langs, known, path)?;
                    path.pop();

                    for (output, part) in outputs.iter_mut().zip(parts) {
                        output.insert(key.clone(), part);
                    }
                }
                Ok(outputs.into_iter().map(Value::Object).collect())
            }
            Value::Array(items) => {
                let mut outputs = vec![Vec::with_capacity(items.len()); langs.len()];
                for (index, child) in items.iter().enumerate() {
                    path.push_index(index);
                    let parts = self.unmerge_node(child, langs, known, path)?;
                    path.pop();

                    for (output, part) in outputs.iter_mut().zip(parts) {
                        output.push(part);
                    }
                }
                Ok(outputs.into_iter().map(Value::Array).collect())
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Ok(vec![node.clone(); langs.len()])
            }
        }
    }
}

/// Unmerge with the default configuration.
pub fn unmerge(doc: &Value, languages: &[LangCode]) -> MergeResult<LangMap> {
    TreeUnmerger::default().unmerge(doc, languages)
}

fn dedup(languages: &[LangCode]) -> Vec<LangCode> {
    let mut langs: Vec<LangCode> = Vec::with_capacity(languages.len());
    for lang in languages {
        if !langs.contains(lang) {
            langs.push(lang.clone());
        }
    }
    langs
}

fn resolve_marker(
    marker: &Map<String, Value>,
    langs: &[LangCode],
    path: &NodePath,
) -> MergeResult<Vec<Value>> {
    if marker.len() > langs.len() {
        trace!(%path, entries = marker.len(), "marker holds unrequested languages");
    }
    langs
        .iter()
        .map(|lang| {
            marker
                .get(&marker_key(lang))
                .cloned()
                .ok_or_else(|| MergeError::MissingVariant {
                    path: path.clone(),
                    language: lang.clone(),
                })
        })
        .collect()
}
