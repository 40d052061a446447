use clap::Parser;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "sitescope", version, about = "Location risk report client")]
pub struct Cli {
    /// Coordinate text in "lat, lon" form, e.g. "9.93, 76.27".
    pub coordinates: String,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Analysis service base URL (overrides config file)")]
    pub api_base: Option<String>,
    #[arg(long, help = "Request timeout in milliseconds (overrides config file)")]
    pub timeout_ms: Option<u64>,
    #[arg(long, help = "Render explanation cards expanded instead of collapsed")]
    pub expand_details: bool,
}
