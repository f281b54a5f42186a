mod cli;
mod command;
mod session;

use std::{io, process::ExitCode, time::Duration};

use clap::Parser;
use pictor::{
    PictorClient,
    huggingface::{HuggingFaceAdapterBuilder, map_model},
};
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Args, session::Session};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();

    let args = Args::parse();

    let mut builder = HuggingFaceAdapterBuilder::new_from_env();
    if let Some(base_url) = &args.base_url {
        builder = builder.with_base_url(base_url);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.with_timeout(Duration::from_secs(secs));
    }

    // Nothing works without a token: print the setup steps and stop.
    let backend = match builder.build() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    };

    let mut client = PictorClient::new(backend);
    if let Some(model) = args.model {
        client = client.with_model(model);
    }
    let model = map_model(client.model());
    tracing::info!(%model, style = %args.style, "session started");

    let mut session = Session::new(client, args.style, args.out_dir);
    let mut stdout = io::stdout();

    if let Some(prompt) = args.prompt {
        let generated = session.generate(&prompt, &mut stdout).await?;
        return Ok(if generated {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    println!("Model: {model}");
    if let Some(describe) = args.style.describe() {
        println!("{describe}");
    }
    println!("{}", command::HELP);

    session.run(BufReader::new(tokio::io::stdin()), &mut stdout).await?;

    Ok(ExitCode::SUCCESS)
}
