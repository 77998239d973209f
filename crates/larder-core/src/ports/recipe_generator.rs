//! Recipe generation port.

use async_trait::async_trait;

use crate::domain::RecipeResult;

/// A collaborator that turns a prompt into recipe text.
///
/// Implementations never return an error type: transport and provider
/// failures are reported as [`RecipeResult::Failure`] with a reason.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeGeneratorPort: Send + Sync {
    async fn generate(&self, prompt: &str) -> RecipeResult;
}
