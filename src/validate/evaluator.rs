use crate::error::DefinitionError;
use crate::model::Model;
use crate::types::{RuleDefinition, RuleEntry, ValidationFailure};

use super::rules;

/// Walks the validation spec and accumulates failures for one pass.
pub(crate) struct Evaluator {
    failures: Vec<ValidationFailure>,
}

impl Evaluator {
    pub(crate) fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Vec<ValidationFailure> {
        self.failures
    }

    /// One full pass over every key in the spec. No short-circuiting:
    /// a failing field does not stop the rest, and rules bound to the
    /// same key run in list order.
    pub(crate) fn run<M>(&mut self, model: &M) -> Result<(), DefinitionError>
    where
        M: Model + ?Sized,
    {
        for (key, entry) in model.validations() {
            match entry {
                RuleEntry::One(def) => {
                    if def.is_empty() {
                        return Err(DefinitionError::Empty { key: key.clone() });
                    }
                    rules::process(self, model, key, def);
                }
                RuleEntry::Many(defs) => {
                    if defs.is_empty() {
                        return Err(DefinitionError::Empty { key: key.clone() });
                    }
                    for def in defs {
                        rules::process(self, model, key, def);
                    }
                }
            }
        }
        Ok(())
    }

    /// Record one failure, honoring the definition's `altName` and `msg`
    /// overrides.
    pub(crate) fn push(&mut self, key: &str, def: &RuleDefinition, default_msg: &str) {
        let key = def.alt_name.as_deref().unwrap_or(key);
        let msg = def.msg.as_deref().unwrap_or(default_msg);
        self.failures.push(ValidationFailure::new(key, msg));
    }
}
