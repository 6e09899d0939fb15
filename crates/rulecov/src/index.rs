//! Rule-location indices
//!
//! Each kompiled definition ships an `allRules.txt` with one line per rule:
//!
//! ```text
//! 8c3f0e...  /path/to/semantics/imp.k:(12,3,14,20)
//! ```
//!
//! The source side is indexed forward (rule id to location), the destination
//! side inverted (location to rule id), so a rule can be followed from one
//! compilation into the other through its location.

use crate::config::DuplicatePolicy;
use crate::ident::{RuleId, SourceLocation};
use crate::result::{RulecovError, RulecovResult};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Parse one rule table line into its identifier and normalized location
///
/// `line_no` is 1-based and only used for error reporting. Blank lines are
/// malformed; callers reading files drop them first.
pub fn parse_rule_line(line_no: usize, line: &str) -> RulecovResult<(RuleId, SourceLocation)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(id), Some(location), None) => {
            Ok((RuleId::new(id), SourceLocation::from_declared(location)))
        }
        _ => Err(RulecovError::Format {
            line: line_no,
            content: line.to_string(),
        }),
    }
}

fn number_lines<I: IntoIterator>(lines: I) -> impl Iterator<Item = (usize, I::Item)> {
    lines.into_iter().enumerate().map(|(i, line)| (i + 1, line))
}

fn insert_keyed<K, V>(
    map: &mut HashMap<K, V>,
    key: K,
    value: V,
    line: usize,
    policy: DuplicatePolicy,
) -> RulecovResult<()>
where
    K: Eq + Hash + Display,
    V: Display,
{
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => match policy {
            DuplicatePolicy::LastWins => {
                tracing::debug!(
                    key = %slot.key(),
                    previous = %slot.get(),
                    replacement = %value,
                    line,
                    "duplicate rule table key, keeping last"
                );
                slot.insert(value);
            }
            DuplicatePolicy::Reject => {
                return Err(RulecovError::DuplicateKey {
                    key: slot.key().to_string(),
                    line,
                });
            }
        },
    }
    Ok(())
}

/// Forward index: rule identifier to source location
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    locations: HashMap<RuleId, SourceLocation>,
}

impl RuleIndex {
    /// Build from rule table lines
    pub fn from_lines<I, S>(lines: I, policy: DuplicatePolicy) -> RulecovResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_numbered_lines(number_lines(lines), policy)
    }

    /// Build from `(line_no, line)` pairs, e.g. a file with blank lines removed
    pub fn from_numbered_lines<I, S>(lines: I, policy: DuplicatePolicy) -> RulecovResult<Self>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut locations = HashMap::new();
        for (line_no, line) in lines {
            let (id, location) = parse_rule_line(line_no, line.as_ref())?;
            insert_keyed(&mut locations, id, location, line_no, policy)?;
        }
        tracing::debug!(rules = locations.len(), "built source rule index");
        Ok(Self { locations })
    }

    /// Location of a rule, if indexed
    #[must_use]
    pub fn location(&self, rule: &str) -> Option<&SourceLocation> {
        self.locations.get(rule)
    }

    /// Number of indexed rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over `(rule, location)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, &SourceLocation)> {
        self.locations.iter()
    }
}

/// Inverse index: source location to rule identifier
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    rules: HashMap<SourceLocation, RuleId>,
}

impl LocationIndex {
    /// Build from rule table lines, keyed by location
    pub fn from_lines<I, S>(lines: I, policy: DuplicatePolicy) -> RulecovResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_numbered_lines(number_lines(lines), policy)
    }

    /// Build from `(line_no, line)` pairs, keyed by location
    pub fn from_numbered_lines<I, S>(lines: I, policy: DuplicatePolicy) -> RulecovResult<Self>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut rules = HashMap::new();
        for (line_no, line) in lines {
            let (id, location) = parse_rule_line(line_no, line.as_ref())?;
            insert_keyed(&mut rules, location, id, line_no, policy)?;
        }
        tracing::debug!(locations = rules.len(), "built destination location index");
        Ok(Self { rules })
    }

    /// Rule declared at a location, if indexed
    #[must_use]
    pub fn rule(&self, location: &str) -> Option<&RuleId> {
        self.rules.get(location)
    }

    /// Number of indexed locations
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(location, rule)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&SourceLocation, &RuleId)> {
        self.rules.iter()
    }
}
