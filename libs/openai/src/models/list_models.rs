pub mod implementation;

use serde::Deserialize;

pub trait ListModels {
    fn list_models(
        &self,
    ) -> impl std::future::Future<Output = anyhow::Result<ModelList>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<Model>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    pub id: String,
    #[serde(default)]
    pub owned_by: Option<String>,
}
