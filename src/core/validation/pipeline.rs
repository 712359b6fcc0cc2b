//! Ordered, short-circuiting chain of request checks

use super::context::RequestContext;
use crate::core::error::ApiError;

type Check<T> = Box<dyn Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync>;

struct Stage<T> {
    name: &'static str,
    check: Check<T>,
}

/// A named list of checks run left to right
///
/// The first failing check wins: its error is returned and no later check
/// runs. Checks never mutate the context.
///
/// ```rust,ignore
/// let pipeline = Pipeline::new("dish.create")
///     .check("required_fields", required_fields("Dish", &["name", "price"]))
///     .check("price", price_is_positive());
///
/// pipeline.run(&RequestContext::new(payload))?;
/// ```
pub struct Pipeline<T> {
    name: &'static str,
    stages: Vec<Stage<T>>,
}

impl<T> Pipeline<T> {
    /// Create an empty pipeline; `name` only shows up in logs
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            stages: Vec::new(),
        }
    }

    /// Append a check after the existing ones
    pub fn check<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + 'static,
    {
        self.stages.push(Stage {
            name,
            check: Box::new(check),
        });
        self
    }

    /// Run every check in order, stopping at the first failure
    pub fn run(&self, ctx: &RequestContext<T>) -> Result<(), ApiError> {
        for stage in &self.stages {
            if let Err(err) = (stage.check)(ctx) {
                tracing::debug!(
                    pipeline = self.name,
                    stage = stage.name,
                    error = %err,
                    "request rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Pipeline name as given to [`Pipeline::new`]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name).collect()
    }
}
