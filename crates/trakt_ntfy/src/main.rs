use clap::Parser;
use log::{error, info};
use trakt_client::TraktError;
use trakt_ntfy::{Relay, RunOutcome, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::parse();

    let relay = match Relay::from_settings(&settings) {
        Ok(relay) => relay,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    match relay.run(settings.date, settings.days).await {
        Ok(RunOutcome::Delivered(sent)) => info!("Done, {} notifications sent", sent),
        Ok(RunOutcome::AuthenticationFailed) => info!("Not authenticated, nothing to do"),
        Err(e) => {
            if let Some(status) = e.downcast_ref::<TraktError>().and_then(TraktError::status) {
                println!("{} An error occurred. Please re-run the program", status.as_u16());
            }
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
