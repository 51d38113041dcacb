use std::collections::BTreeMap;
use std::fmt;

use crate::types::{AnyValue, ValidationFailure, ValidationSpec};

/// Read access to the host model's attribute store.
///
/// The engine performs its own one-level dot-path splitting on top of
/// `get`, so implementors only ever see top-level keys.
pub trait Attributes {
    fn get(&self, key: &str) -> Option<&AnyValue>;
}

/// A model the engine can validate. `validations` is read fresh on every
/// pass, so the spec may be swapped out between calls.
pub trait Model: Attributes {
    fn validations(&self) -> &ValidationSpec;
}

/// The persistence operation guarded by validation. Opaque to the
/// engine: it is invoked only when a pass produced zero failures.
pub trait Persist {
    fn save(&mut self, args: &SaveArgs, options: &SaveOptions);
}

/// The two historical call shapes of the guarded save: a single
/// key/value pair, or a whole attributes object.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveArgs {
    Single { key: String, value: AnyValue },
    Attrs(BTreeMap<String, AnyValue>),
}

impl From<(&str, AnyValue)> for SaveArgs {
    fn from((key, value): (&str, AnyValue)) -> Self {
        SaveArgs::Single {
            key: key.to_owned(),
            value,
        }
    }
}

impl From<(String, AnyValue)> for SaveArgs {
    fn from((key, value): (String, AnyValue)) -> Self {
        SaveArgs::Single { key, value }
    }
}

impl From<BTreeMap<String, AnyValue>> for SaveArgs {
    fn from(attrs: BTreeMap<String, AnyValue>) -> Self {
        SaveArgs::Attrs(attrs)
    }
}

/// Options forwarded to the guarded save. `validation_error` is invoked
/// with the failure list instead of saving; it defaults to a no-op.
#[derive(Default)]
pub struct SaveOptions {
    pub validation_error: Option<Box<dyn FnMut(&[ValidationFailure])>>,
}

impl SaveOptions {
    pub fn on_validation_error(f: impl FnMut(&[ValidationFailure]) + 'static) -> Self {
        Self {
            validation_error: Some(Box::new(f)),
        }
    }
}

impl fmt::Debug for SaveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveOptions")
            .field("validation_error", &self.validation_error.is_some())
            .finish()
    }
}

/// Resolve a field key against the attribute store, honoring one level
/// of `parent.child` nesting. Segments past the second are ignored, and
/// a missing or non-object parent resolves to absent.
pub fn resolve_path<'a, A: Attributes + ?Sized>(attrs: &'a A, key: &str) -> Option<&'a AnyValue> {
    match key.split_once('.') {
        Some((parent, rest)) => {
            let child = rest.split('.').next().unwrap_or(rest);
            attrs.get(parent).and_then(|v| v.get(child))
        }
        None => attrs.get(key),
    }
}

/// The shared emptiness predicate: absent, null, empty string, empty
/// container, or numeric zero. Zero counting as empty is deliberate, so
/// `allowBlank: false` rejects `0`.
pub fn is_empty_value(value: Option<&AnyValue>) -> bool {
    match value {
        None | Some(AnyValue::Null) => true,
        Some(AnyValue::String(s)) => s.is_empty(),
        Some(AnyValue::Array(items)) => items.is_empty(),
        Some(AnyValue::Object(fields)) => fields.is_empty(),
        Some(AnyValue::Number(n)) => n.as_f64() == Some(0.0),
        Some(AnyValue::Bool(_)) => false,
    }
}
