//! System DTOs

use serde::Serialize;

use crate::infrastructure::driven_adapters::config::AppConfig;

/// Non-secret configuration values exposed by `/env-check`
///
/// The database password has no field here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvCheckDto {
    pub db_host: String,
    pub db_user: String,
    pub db_name: String,
    pub auth0_domain: String,
    pub auth0_audience: String,
}

impl From<&AppConfig> for EnvCheckDto {
    fn from(config: &AppConfig) -> Self {
        Self {
            db_host: config.database.host.clone(),
            db_user: config.database.user.clone(),
            db_name: config.database.name.clone(),
            auth0_domain: config.auth.domain.clone(),
            auth0_audience: config.auth.audience.clone(),
        }
    }
}
