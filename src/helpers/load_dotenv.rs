use std::env;

use crate::constants::envvars;

// Logging is not initialised yet, and stdout carries command output.
pub fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        eprintln!("Loaded local .env")
    }
    // Also load $ENBCFG_CONFIG_DIR/.env if exists
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let config_dir_dotenv = format!("{config_dir}/.env");
        if dotenv::from_path(&config_dir_dotenv).is_ok() {
            eprintln!("Loaded {config_dir_dotenv}");
        }
    }
}
