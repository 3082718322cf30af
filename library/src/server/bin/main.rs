use moon_library::core::domain::Configuration;
use moon_library::server::serve;
use moon_library::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let profile = std::env::var("MOON_LIBRARY_PROFILE").unwrap_or_else(|_| "dev".to_string());
    let config = Configuration::from_env(profile.as_str());

    serve(config).await?;
    Ok(())
}
