use crate::model::{is_empty_value, resolve_path, Attributes};
use crate::types::RuleDefinition;

/// Decide whether a rule fires at all.
///
/// With `depends.value` set the rule runs only when the dependency
/// resolves to exactly that value; without it, only when the dependency
/// is non-empty. No `depends` clause means always run.
pub(crate) fn gate<A>(attrs: &A, def: &RuleDefinition) -> bool
where
    A: Attributes + ?Sized,
{
    let Some(depends) = &def.depends else {
        return true;
    };

    let resolved = resolve_path(attrs, &depends.name);
    match &depends.value {
        Some(expected) => resolved == Some(expected),
        None => !is_empty_value(resolved),
    }
}
