use std::sync::LazyLock;

use regex::Regex;

use crate::model::is_empty_value;
use crate::types::{AnyValue, PredicateOutcome, RuleDefinition, RuleKind};
use crate::validate::evaluator::Evaluator;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("valid regex")
});

const MSG_NOT_BLANK: &str = "Empty value or zero is not allowed.";
const MSG_GENERIC: &str = "Did not pass validation";
const MSG_EMAIL: &str = "Failed validation for type email";
const MSG_RANGE: &str = "Value failed range validation";
const MSG_VALUES: &str = "Value not in list of values";

/// Run every applicable check for one gated definition. Each check
/// fails independently, so a definition combining e.g. `allowBlank`
/// and `type` can append more than one failure.
pub(crate) fn run(
    ev: &mut Evaluator,
    key: &str,
    def: &RuleDefinition,
    value: Option<&AnyValue>,
) {
    if def.allow_blank == Some(false) && is_empty_value(value) {
        ev.push(key, def, MSG_NOT_BLANK);
    }

    match &def.kind {
        Some(RuleKind::Blank) => {
            if is_empty_value(value) {
                ev.push(key, def, MSG_GENERIC);
            }
        }
        Some(RuleKind::Email) => {
            if !is_email(value) {
                ev.push(key, def, MSG_EMAIL);
            }
        }
        Some(RuleKind::Custom(predicate)) => {
            if predicate.as_ref()(value) == PredicateOutcome::Fail {
                ev.push(key, def, MSG_GENERIC);
            }
        }
        None => {}
    }

    // Range only applies to numeric values; anything else is left to the
    // other checks.
    if let Some(range) = def.range {
        if let Some(n) = value.and_then(AnyValue::as_f64) {
            let (min, max) = range.bounds();
            if n < min || max.is_some_and(|max| n > max) {
                ev.push(key, def, MSG_RANGE);
            }
        }
    }

    if let Some(allowed) = &def.values {
        if !value.is_some_and(|v| allowed.contains(v)) {
            ev.push(key, def, MSG_VALUES);
        }
    }
}

fn is_email(value: Option<&AnyValue>) -> bool {
    value
        .and_then(AnyValue::as_str)
        .is_some_and(|s| EMAIL_RE.is_match(s))
}
