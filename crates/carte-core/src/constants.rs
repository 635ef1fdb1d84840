/// Defaults shared by the configuration layer and the renderer
pub const CRATE_NAME: &str = "carte";
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_USER_AGENT: &str = const_str::concat!(CRATE_NAME, "/", CRATE_VERSION);

/// Maximum physical line length in octets (RFC 6350 §3.2).
pub const DEFAULT_LINE_WIDTH: usize = 75;
/// Smallest width that still leaves room for a continuation space and one unit.
pub const MIN_LINE_WIDTH: usize = 8;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FETCH_MAX_BYTES: u64 = 5 * 1024 * 1024;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const CONFIG_FILE_NAME: &str = "carte.toml";
