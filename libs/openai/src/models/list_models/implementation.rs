use anyhow::Context;

use crate::models::Models;

use super::{ListModels, ModelList};

static MODELS: &str = "models";

impl ListModels for Models {
    async fn list_models(&self) -> anyhow::Result<ModelList> {
        let text = self.get(MODELS).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}
