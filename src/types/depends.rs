use crate::types::AnyValue;

/// Gate on another field's value: the owning rule runs only when the
/// dependency holds.
///
/// With `value` set the dependency must equal it exactly; without, the
/// dependency merely has to be non-empty.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Depends {
    pub name: String,

    #[serde(default)]
    pub value: Option<AnyValue>,
}
