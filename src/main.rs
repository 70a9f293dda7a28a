use std::env;

use guestgen::{
    config::Config,
    logger,
    models::RawGenerationParams,
    upstream::{render_outcome, GuestClient},
    validator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(logger::LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    logger::log_config_info(&config);

    // Same shape the web layer hands over: region, name prefix, count.
    let mut args = env::args().skip(1);
    let raw = RawGenerationParams {
        region: args.next(),
        name: args.next(),
        count: args.next(),
    };

    let request = validator::validate(&raw);
    log::info!(
        "🧪 Generating {} guest account(s) in {} with prefix '{}'",
        request.count,
        request.region,
        request.name_prefix
    );

    let client = GuestClient::new(config.upstream)?;
    let outcome = client.generate(&request).await;

    match &outcome {
        Ok(_) => log::info!("✅ Generation succeeded"),
        Err(e) => log::error!("❌ Generation failed: {}", e.detail()),
    }

    println!("{}", render_outcome(&outcome));

    Ok(())
}
