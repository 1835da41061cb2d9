//! Async wrappers running the engine on tokio's blocking pool.

use crate::error::{PasswordError, Result};
use crate::settings::Overrides;

pub async fn generate_async(overrides: Option<Overrides>) -> Result<Vec<String>> {
    run_blocking(move || crate::generate(overrides.as_ref())).await
}

pub async fn password_async(overrides: Option<Overrides>) -> Result<String> {
    run_blocking(move || crate::password(overrides.as_ref())).await
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(_) => Err(PasswordError::Cancelled),
    }
}
