use anyhow::{Context, Result};

use super::config_model::{AppConfig, DefaultSelection};
use crate::domain::value_objects::enums::billing_cycles::BillingCycle;

pub fn load() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let billing_cycle = match std::env::var("PRICING_DEFAULT_BILLING") {
        Ok(raw) => BillingCycle::from_str(&raw)
            .with_context(|| format!("PRICING_DEFAULT_BILLING is invalid: {raw}"))?,
        Err(_) => BillingCycle::Yearly,
    };

    let creators_bucket_index = env_index("PRICING_DEFAULT_CREATORS_BUCKET", 1)?;
    let active_users_bucket_index = env_index("PRICING_DEFAULT_ACTIVE_USERS_BUCKET", 2)?;

    Ok(AppConfig {
        default_selection: DefaultSelection {
            billing_cycle,
            creators_bucket_index,
            active_users_bucket_index,
        },
    })
}

fn env_index(name: &str, default: usize) -> Result<usize> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} is invalid: {raw}")),
        Err(_) => Ok(default),
    }
}
