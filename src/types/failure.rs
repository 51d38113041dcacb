/// One failed check. A single evaluation pass may collect several of
/// these for the same field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub key: String,
    pub msg: String,
}

impl ValidationFailure {
    pub fn new(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            msg: msg.into(),
        }
    }
}
