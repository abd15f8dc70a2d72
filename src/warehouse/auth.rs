//! OAuth2 bearer tokens for BigQuery requests.
//!
//! Tokens are never minted here: either one is supplied (`BQ_ACCESS_TOKEN`) or
//! the locally authenticated Google Cloud SDK is asked for one.

use tokio::{process::Command, sync::OnceCell};

use crate::{PipelineError, Result};

pub struct AccessToken {
    token: OnceCell<String>,
}

impl AccessToken {
    /// A token issued elsewhere.
    pub fn fixed(token: impl Into<String>) -> Self {
        Self {
            token: OnceCell::new_with(Some(token.into())),
        }
    }

    /// Fetch a token from `gcloud auth print-access-token` on first use.
    pub fn from_gcloud() -> Self {
        Self {
            token: OnceCell::new(),
        }
    }

    pub fn from_setting(token: Option<String>) -> Self {
        match token {
            Some(token) => Self::fixed(token),
            None => Self::from_gcloud(),
        }
    }

    pub async fn get(&self) -> Result<&str> {
        let token = self.token.get_or_try_init(print_access_token).await?;
        Ok(token.as_str())
    }
}

async fn print_access_token() -> Result<String> {
    tracing::debug!("Requesting access token from gcloud");
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .map_err(|e| PipelineError::Auth {
            message: format!("could not run gcloud: {}", e),
        })?;

    if !output.status.success() {
        return Err(PipelineError::Auth {
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(PipelineError::Auth {
            message: "gcloud returned an empty access token".to_string(),
        });
    }
    Ok(token)
}
