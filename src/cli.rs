use crate::output::DEFAULT_MAX_DEPTH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "layout-find")]
#[command(
    author,
    version,
    about = "Find classes and structs of a given size in a JSON type database"
)]
#[command(
    long_about = "layout-find reads a JSON type database exported from debug info, finds every \
class or struct whose size matches exactly, and prints its members with absolute offsets, \
descending into nested aggregates.\n\n\
Example:\n  layout-find types.json 0x40"
)]
pub struct Cli {
    /// Path to the JSON type database
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// Size in bytes to search for (0x.. hex, 0o../0.. octal, 0b.. binary, else decimal)
    #[arg(value_name = "SIZE", value_parser = parse_size)]
    pub size: u64,

    /// Only show types whose name contains this substring
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Maximum nesting depth to descend into
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Also show base classes before members
    #[arg(long)]
    pub bases: bool,

    /// Also accept the exporter's `structure` and `pointer` type tags
    #[arg(long)]
    pub exporter_tags: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse an integer literal, detecting the base from its prefix.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let cleaned = s.trim().replace('_', "");
    let lower = cleaned.to_ascii_lowercase();

    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (bin, 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() || digits.starts_with('+') {
        return Err(format!("invalid size literal: {}", s));
    }

    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid size literal '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_in_every_base() {
        assert_eq!(parse_size("16"), Ok(16));
        assert_eq!(parse_size("0x10"), Ok(16));
        assert_eq!(parse_size("0X1f"), Ok(31));
        assert_eq!(parse_size("020"), Ok(16));
        assert_eq!(parse_size("0o20"), Ok(16));
        assert_eq!(parse_size("0b10000"), Ok(16));
        assert_eq!(parse_size("0"), Ok(0));
        assert_eq!(parse_size("1_024"), Ok(1024));
    }

    #[test]
    fn invalid_sizes() {
        assert!(parse_size("").is_err());
        assert!(parse_size("0x").is_err());
        assert!(parse_size("-4").is_err());
        assert!(parse_size("+4").is_err());
        assert!(parse_size("09").is_err());
        assert!(parse_size("twelve").is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["layout-find", "db.json", "0x20"]).unwrap();
        assert_eq!(cli.size, 32);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!cli.bases && !cli.exporter_tags && !cli.quiet && !cli.no_color);
        assert!(cli.filter.is_none());
    }

    #[test]
    fn cli_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["layout-find"]).is_err());
        assert!(Cli::try_parse_from(["layout-find", "db.json"]).is_err());
        assert!(Cli::try_parse_from(["layout-find", "db.json", "16", "extra"]).is_err());
    }
}
