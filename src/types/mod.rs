mod common;
mod depends;
mod failure;
mod range;
mod rule;

pub use common::{AnyValue, ValidationSpec};
pub use depends::Depends;
pub use failure::ValidationFailure;
pub use range::RangeSpec;
pub use rule::{Predicate, PredicateOutcome, RuleDefinition, RuleEntry, RuleKind};
