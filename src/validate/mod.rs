mod evaluator;
mod rules;

use crate::error::DefinitionError;
use crate::model::{Model, Persist, SaveArgs, SaveOptions};
use crate::types::ValidationFailure;
use evaluator::Evaluator;

/// Evaluate every rule in the model's validation spec against its
/// current attributes.
///
/// The failure list is rebuilt from scratch on each call and returned to
/// the caller; nothing is cached on the model. An empty
/// [`RuleDefinition`](crate::types::RuleDefinition) anywhere in the spec
/// aborts the pass with [`DefinitionError::Empty`].
pub fn ensure_valid<M>(model: &M) -> Result<Vec<ValidationFailure>, DefinitionError>
where
    M: Model + ?Sized,
{
    let mut ev = Evaluator::new();
    ev.run(model)?;
    Ok(ev.finish())
}

pub trait EnsureValid {
    fn ensure_valid(&self) -> Result<Vec<ValidationFailure>, DefinitionError>;
}

impl<M: Model> EnsureValid for M {
    fn ensure_valid(&self) -> Result<Vec<ValidationFailure>, DefinitionError> {
        ensure_valid(self)
    }
}

/// Result of a guarded save: either the save ran, or validation failed
/// and it never did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    Invalid(Vec<ValidationFailure>),
}

pub trait EnsureValidAndSave {
    /// Run [`ensure_valid`] and forward `args`/`options` to
    /// [`Persist::save`] only when it reports zero failures. With
    /// failures present the `validation_error` callback fires instead
    /// and the save is never invoked.
    fn ensure_valid_and_save<A>(
        &mut self,
        args: A,
        options: SaveOptions,
    ) -> Result<SaveOutcome, DefinitionError>
    where
        A: Into<SaveArgs>;
}

impl<M: Model + Persist> EnsureValidAndSave for M {
    fn ensure_valid_and_save<A>(
        &mut self,
        args: A,
        mut options: SaveOptions,
    ) -> Result<SaveOutcome, DefinitionError>
    where
        A: Into<SaveArgs>,
    {
        let args = args.into();
        let failures = ensure_valid(self)?;
        if !failures.is_empty() {
            if let Some(callback) = options.validation_error.as_mut() {
                callback(&failures);
            }
            return Ok(SaveOutcome::Invalid(failures));
        }
        self.save(&args, &options);
        Ok(SaveOutcome::Saved)
    }
}
