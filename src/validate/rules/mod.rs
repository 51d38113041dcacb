mod checks;
mod depends;

use crate::model::{resolve_path, Model};
use crate::types::RuleDefinition;

use super::evaluator::Evaluator;

/// Evaluate one rule definition bound to `key`.
///
/// The dependency gate runs first, before the attribute's own value is
/// even resolved; a skipped rule contributes nothing.
pub(crate) fn process<M>(ev: &mut Evaluator, model: &M, key: &str, def: &RuleDefinition)
where
    M: Model + ?Sized,
{
    if !depends::gate(model, def) {
        return;
    }

    let value = resolve_path(model, key);
    checks::run(ev, key, def, value);
}
