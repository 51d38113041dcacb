#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod parser;
pub mod types;
pub mod validate;

pub use crate::error::{DefinitionError, Error, ParseError};
pub use crate::model::{Attributes, Model, Persist, SaveArgs, SaveOptions};
pub use crate::parser::{parse_spec_str, ParsedSpec, SpecFormat};
pub use crate::types::{
    AnyValue, Depends, Predicate, PredicateOutcome, RangeSpec, RuleDefinition, RuleEntry, RuleKind,
    ValidationFailure, ValidationSpec,
};
pub use crate::validate::{ensure_valid, EnsureValid, EnsureValidAndSave, SaveOutcome};
