/// Default config file name, looked up in the current directory
pub const DEFAULT_CONFIG: &str = "mcr_cfg.toml";

/// Name of the external coverage binary
pub const MINICOVER_BIN: &str = "minicover";

/// Environment variable overriding the binary location
pub const MINICOVER_PATH_ENV: &str = "MINICOVER_PATH";
