use std::sync::Arc;

use anyhow::Result;
use mentorkit_pricing::catalog::static_catalog::StandardCatalog;
use mentorkit_pricing::config::config_loader;
use mentorkit_pricing::domain::value_objects::pricing_states::PricingState;
use mentorkit_pricing::usecases::pricing_resolver::PricingResolver;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(error) = run() {
        error!("Pricing harness exited with error: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config_loader::load()?;
    info!("ENV has been loaded");

    let catalog = Arc::new(StandardCatalog::new());
    let resolver = PricingResolver::new(catalog);

    let defaults = config.default_selection;
    let state = PricingState {
        billing_cycle: defaults.billing_cycle,
        creators_bucket_index: resolver.clamp_creators_index(defaults.creators_bucket_index as i64),
        active_users_bucket_index: resolver
            .clamp_active_users_index(defaults.active_users_bucket_index as i64),
    };

    let selection = resolver.compute_pricing_selection(&state);
    println!("{}", serde_json::to_string_pretty(&selection)?);

    Ok(())
}
