pub const LOG_LEVEL: &str = "INFO";
pub const STDIN_PATH: &str = "-";
