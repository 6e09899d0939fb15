//! KAST term access
//!
//! The classifier and the rule helpers never touch a concrete document
//! model. They go through [`KastModel`], which answers "what kind of node is
//! this", exposes the handful of fields they read, and builds the two node
//! kinds they construct. [`JsonKast`] is the bundled model over the KAST
//! JSON encoding emitted by `kompile` into `compiled.json`.

use crate::result::{RulecovError, RulecovResult};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Kind of a KAST node, as far as coverage translation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `KRule` sentence
    Rule,
    /// `KRewrite` term (`lhs => rhs`)
    Rewrite,
    /// `KApply` term (labelled application)
    Apply,
    /// `KSequence` term (`a ~> b`)
    Sequence,
    /// Anything else
    Other,
}

/// Read-and-build interface over some KAST document model
pub trait KastModel {
    /// Term type of the document model
    type Term;

    /// Classify a node
    fn kind(&self, term: &Self::Term) -> NodeKind;

    /// Label of an application
    fn label<'t>(&self, term: &'t Self::Term) -> Option<&'t str>;

    /// Arguments of an application
    fn args<'t>(&self, term: &'t Self::Term) -> &'t [Self::Term];

    /// Items of a sequence
    fn items<'t>(&self, term: &'t Self::Term) -> &'t [Self::Term];

    /// Left-hand side of a rewrite
    fn lhs<'t>(&self, term: &'t Self::Term) -> Option<&'t Self::Term>;

    /// Right-hand side of a rewrite
    fn rhs<'t>(&self, term: &'t Self::Term) -> Option<&'t Self::Term>;

    /// Body of a rule sentence
    fn body<'t>(&self, sentence: &'t Self::Term) -> Option<&'t Self::Term>;

    /// `requires` clause of a rule sentence
    fn requires<'t>(&self, sentence: &'t Self::Term) -> Option<&'t Self::Term>;

    /// `ensures` clause of a rule sentence
    fn ensures<'t>(&self, sentence: &'t Self::Term) -> Option<&'t Self::Term>;

    /// Attribute node of a sentence
    fn att<'t>(&self, sentence: &'t Self::Term) -> Option<&'t Self::Term>;

    /// `UNIQUE_ID` attribute of a sentence
    fn unique_id<'t>(&self, sentence: &'t Self::Term) -> Option<&'t str>;

    /// Modules of a definition
    fn modules<'t>(&self, definition: &'t Self::Term) -> &'t [Self::Term];

    /// Sentences declared locally in a module
    fn local_sentences<'t>(&self, module: &'t Self::Term) -> &'t [Self::Term];

    /// Build a rule sentence
    fn rule(
        &self,
        body: Self::Term,
        requires: Option<Self::Term>,
        ensures: Option<Self::Term>,
        att: Option<Self::Term>,
    ) -> Self::Term;

    /// Build a rewrite
    fn rewrite(&self, lhs: Self::Term, rhs: Self::Term) -> Self::Term;

    /// Whether the node is a rule sentence
    fn is_rule(&self, term: &Self::Term) -> bool {
        self.kind(term) == NodeKind::Rule
    }

    /// Whether the node is a rewrite
    fn is_rewrite(&self, term: &Self::Term) -> bool {
        self.kind(term) == NodeKind::Rewrite
    }

    /// Whether the node is an application
    fn is_apply(&self, term: &Self::Term) -> bool {
        self.kind(term) == NodeKind::Apply
    }

    /// Whether the node is a sequence
    fn is_sequence(&self, term: &Self::Term) -> bool {
        self.kind(term) == NodeKind::Sequence
    }

    /// Iterate every local sentence of every module, in document order
    fn sentences<'t>(
        &'t self,
        definition: &'t Self::Term,
    ) -> Box<dyn Iterator<Item = &'t Self::Term> + 't> {
        Box::new(
            self.modules(definition)
                .iter()
                .flat_map(move |module| self.local_sentences(module).iter()),
        )
    }
}

/// KAST model over `serde_json::Value`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonKast;

impl JsonKast {
    fn array<'t>(term: &'t Value, field: &str) -> &'t [Value] {
        term.get(field)
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    fn true_token() -> Value {
        json!({
            "node": "KToken",
            "token": "true",
            "sort": { "node": "KSort", "name": "Bool" },
        })
    }
}

impl KastModel for JsonKast {
    type Term = Value;

    fn kind(&self, term: &Value) -> NodeKind {
        match term.get("node").and_then(Value::as_str) {
            Some("KRule") => NodeKind::Rule,
            Some("KRewrite") => NodeKind::Rewrite,
            Some("KApply") => NodeKind::Apply,
            Some("KSequence") => NodeKind::Sequence,
            _ => NodeKind::Other,
        }
    }

    fn label<'t>(&self, term: &'t Value) -> Option<&'t str> {
        // Older encodings store the label as a bare string, newer ones as a KLabel node.
        match term.get("label")? {
            Value::String(name) => Some(name.as_str()),
            label => label.get("name").and_then(Value::as_str),
        }
    }

    fn args<'t>(&self, term: &'t Value) -> &'t [Value] {
        Self::array(term, "args")
    }

    fn items<'t>(&self, term: &'t Value) -> &'t [Value] {
        Self::array(term, "items")
    }

    fn lhs<'t>(&self, term: &'t Value) -> Option<&'t Value> {
        term.get("lhs")
    }

    fn rhs<'t>(&self, term: &'t Value) -> Option<&'t Value> {
        term.get("rhs")
    }

    fn body<'t>(&self, sentence: &'t Value) -> Option<&'t Value> {
        sentence.get("body")
    }

    fn requires<'t>(&self, sentence: &'t Value) -> Option<&'t Value> {
        sentence.get("requires")
    }

    fn ensures<'t>(&self, sentence: &'t Value) -> Option<&'t Value> {
        sentence.get("ensures")
    }

    fn att<'t>(&self, sentence: &'t Value) -> Option<&'t Value> {
        sentence.get("att")
    }

    fn unique_id<'t>(&self, sentence: &'t Value) -> Option<&'t str> {
        self.att(sentence)?
            .get("att")?
            .get("UNIQUE_ID")?
            .as_str()
    }

    fn modules<'t>(&self, definition: &'t Value) -> &'t [Value] {
        Self::array(definition, "modules")
    }

    fn local_sentences<'t>(&self, module: &'t Value) -> &'t [Value] {
        Self::array(module, "localSentences")
    }

    fn rule(
        &self,
        body: Value,
        requires: Option<Value>,
        ensures: Option<Value>,
        att: Option<Value>,
    ) -> Value {
        json!({
            "node": "KRule",
            "body": body,
            "requires": requires.unwrap_or_else(Self::true_token),
            "ensures": ensures.unwrap_or_else(Self::true_token),
            "att": att.unwrap_or_else(|| json!({ "node": "KAtt", "att": Map::new() })),
        })
    }

    fn rewrite(&self, lhs: Value, rhs: Value) -> Value {
        json!({ "node": "KRewrite", "lhs": lhs, "rhs": rhs })
    }
}

/// Parse a KAST JSON document, unwrapping the `{"format": "KAST", "term": ..}` envelope
pub fn parse_kast_term(json: &str) -> serde_json::Result<Value> {
    let mut value: Value = serde_json::from_str(json)?;
    let enveloped = value.get("format").and_then(Value::as_str) == Some("KAST")
        && value.get("term").is_some();
    if enveloped {
        if let Some(term) = value.get_mut("term") {
            return Ok(term.take());
        }
    }
    Ok(value)
}

/// Read a KAST JSON file such as `compiled.json`
pub fn read_kast_term(path: &Path) -> RulecovResult<Value> {
    let json = std::fs::read_to_string(path).map_err(|e| RulecovError::io(path, e))?;
    parse_kast_term(&json).map_err(|source| RulecovError::Json {
        path: path.to_path_buf(),
        source,
    })
}
