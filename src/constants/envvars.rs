pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
pub const CONFIG_DIR: &str = "ENBCFG_CONFIG_DIR";
