mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod render;

use chrono::Local;
use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    api::elpriset,
    cli::{Args, analyze},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let provider = elpriset::Api::new(args.api_base_url.clone())?;
    let report = analyze(&args, &provider, Local::now().date_naive()).await?;
    print!("{report}");

    info!("done!");
    Ok(())
}
