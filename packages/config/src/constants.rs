// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used by tileprobe

// Connection URL
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const PGURL: &str = "PGURL"; // Alias used by the openmaptiles tooling

// libpq-style connection parts
pub const PGHOST: &str = "PGHOST";
pub const PGPORT: &str = "PGPORT";
pub const PGDATABASE: &str = "PGDATABASE";
pub const PGUSER: &str = "PGUSER";
pub const PGPASSWORD: &str = "PGPASSWORD";

// Connection behaviour
pub const TILEPROBE_CONNECT_TIMEOUT_SECS: &str = "TILEPROBE_CONNECT_TIMEOUT_SECS";

// Defaults matching the openmaptiles docker images
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "openmaptiles";
pub const DEFAULT_USER: &str = "openmaptiles";
pub const DEFAULT_PASSWORD: &str = "openmaptiles";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 300;
