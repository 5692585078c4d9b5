use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use tokio::net::TcpListener;
use toml::{map::Map, Value};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secrets = util::load_env("Secrets.dev.toml")?;

    util::init_tracing("translator", secret(&secrets, "LOKI_URL"))?;

    let api_key = secret(&secrets, "OPENAI_API_KEY")
        .context("OPENAI_API_KEY was not found")?;
    let config_name =
        format!("Config{}.toml", secret(&secrets, "CONFIG").unwrap_or(""));
    let config = util::load_config::<Config>(&config_name)?;
    let port = config.server.port;

    let router = serve(config, api_key)?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        error!(task = "bind", %address, error = e.to_string());
        e
    })?;
    info!(task = "listen", %address);

    Ok(axum::serve(listener, router).await?)
}

fn secret<'a>(secrets: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    secrets.get(name).and_then(|v| v.as_str())
}
