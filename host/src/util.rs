use anyhow::{anyhow, Context, Result};

/// Parse a seed word: decimal, or hex with a `0x` prefix.
pub fn parse_seed(seed: &str) -> Result<u64> {
    let s = seed.trim();
    if s.is_empty() {
        return Err(anyhow!("empty seed"));
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(&hex.replace('_', ""), 16)
            .with_context(|| format!("invalid hex seed: {s}"))
    } else {
        s.replace('_', "")
            .parse::<u64>()
            .with_context(|| format!("invalid decimal seed: {s}"))
    }
}

pub fn seed_to_hex(seed: u64) -> String {
    format!("0x{seed:016x}")
}
