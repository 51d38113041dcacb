use std::collections::BTreeMap;

use crate::types::RuleEntry;

pub type AnyValue = serde_json::Value;

/// Mapping from field key to the rule (or ordered rules) bound to it.
///
/// Field keys may use one level of `parent.child` dot-path nesting. Map
/// iteration order is not part of the contract; order inside a per-key
/// rule list is.
pub type ValidationSpec = BTreeMap<String, RuleEntry>;
