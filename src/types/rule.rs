use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer, Error as DeError};

use crate::types::{AnyValue, Depends, RangeSpec};

/// A custom check. Receives the resolved attribute value (`None` when the
/// attribute is absent).
pub type Predicate = Arc<dyn Fn(Option<&AnyValue>) -> PredicateOutcome + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateOutcome {
    Pass,
    Fail,
}

impl From<bool> for PredicateOutcome {
    fn from(pass: bool) -> Self {
        if pass {
            PredicateOutcome::Pass
        } else {
            PredicateOutcome::Fail
        }
    }
}

impl From<i64> for PredicateOutcome {
    /// Legacy sentinel convention: `-1` fails, any other code passes.
    fn from(code: i64) -> Self {
        if code == -1 {
            PredicateOutcome::Fail
        } else {
            PredicateOutcome::Pass
        }
    }
}

/// The `type` of a rule: a built-in kind or a caller-supplied predicate.
///
/// Only the built-in kinds can appear in a JSON/YAML spec; predicates are
/// attached from code via [`RuleKind::custom`].
#[derive(Clone)]
pub enum RuleKind {
    Blank,
    Email,
    Custom(Predicate),
}

impl RuleKind {
    pub fn custom<F, O>(f: F) -> Self
    where
        F: Fn(Option<&AnyValue>) -> O + Send + Sync + 'static,
        O: Into<PredicateOutcome>,
    {
        RuleKind::Custom(Arc::new(move |value| f(value).into()))
    }
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Blank => f.write_str("Blank"),
            RuleKind::Email => f.write_str("Email"),
            RuleKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        match kind.as_str() {
            "blank" => Ok(RuleKind::Blank),
            "email" => Ok(RuleKind::Email),
            other => Err(D::Error::unknown_variant(other, &["blank", "email"])),
        }
    }
}

/// One declarative check bound to a field key. Every field is optional;
/// a definition with nothing set at all is a configuration error, caught
/// at evaluation time.
///
/// The owning key is carried alongside by the evaluator rather than
/// stored here, so the same definition value can be shared across keys.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    #[serde(rename = "type", default)]
    pub kind: Option<RuleKind>,

    /// When explicitly `false`, the value must be non-empty. Note that
    /// numeric zero counts as empty.
    #[serde(rename = "allowBlank", default)]
    pub allow_blank: Option<bool>,

    /// Numeric bounds; only consulted when the resolved value is numeric.
    #[serde(default)]
    pub range: Option<RangeSpec>,

    /// Allowed values, tested by equality.
    #[serde(default)]
    pub values: Option<Vec<AnyValue>>,

    #[serde(default)]
    pub depends: Option<Depends>,

    /// Failure message; each check kind has a default when absent.
    #[serde(default)]
    pub msg: Option<String>,

    /// Overrides the field key reported in failures.
    #[serde(rename = "altName", default)]
    pub alt_name: Option<String>,
}

impl RuleDefinition {
    pub(crate) fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.allow_blank.is_none()
            && self.range.is_none()
            && self.values.is_none()
            && self.depends.is_none()
            && self.msg.is_none()
            && self.alt_name.is_none()
    }
}

/// What a spec key binds to: a single definition or an ordered list.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    One(RuleDefinition),
    Many(Vec<RuleDefinition>),
}

impl From<RuleDefinition> for RuleEntry {
    fn from(def: RuleDefinition) -> Self {
        RuleEntry::One(def)
    }
}

impl From<Vec<RuleDefinition>> for RuleEntry {
    fn from(defs: Vec<RuleDefinition>) -> Self {
        RuleEntry::Many(defs)
    }
}
