use anyhow::Context;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use url::Url;

/// Installs the global subscriber. When `loki_url` is given, records are
/// also shipped to Loki; its background task is spawned on the current
/// runtime, so this must be called from inside one.
pub fn init_tracing(service: &str, loki_url: Option<&str>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let loki = match loki_url {
        Some(loki_url) => {
            let url = Url::parse(loki_url).context("invalid LOKI_URL")?;
            let (layer, task) = tracing_loki::builder()
                .label("service", service)?
                .build_url(url)
                .context("failed to build loki layer")?;
            tokio::spawn(task);
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(loki)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
