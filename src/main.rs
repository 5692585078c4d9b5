use api::Config;
use shuttle_runtime::{Error, SecretStore, Secrets};
use tracing::info;

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
) -> shuttle_axum::ShuttleAxum {
    util::init_tracing("translator", secret_store.get("LOKI_URL").as_deref())
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let Some(api_key) = secret_store.get("OPENAI_API_KEY") else {
        return Err(Error::BuildPanic(
            "OPENAI_API_KEY was not found".to_string(),
        ));
    };

    let config_name = format!(
        "Config{}.toml",
        secret_store.get("CONFIG").unwrap_or_default()
    );
    let config = util::load_config::<Config>(&config_name)
        .map_err(|e| Error::BuildPanic(format!("{:#}", e)))?;

    info!(task = "load config", %config_name);

    let router = api::serve(config, &api_key)
        .map_err(|e| Error::BuildPanic(format!("{:#}", e)))?;

    Ok(router.into())
}
