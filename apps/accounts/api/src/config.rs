use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use domain_accounts::AccountsConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub accounts: AccountsConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 by default
        let accounts = AccountsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            accounts,
            server,
            environment,
        })
    }
}
