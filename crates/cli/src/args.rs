//! Command line arguments for the `libris` binary.

use std::path::PathBuf;

use clap::Parser;
use libris_kernel::settings::MemberSeed;

/// Libris - library inventory and lending console
#[derive(Parser, Debug)]
#[command(name = "libris", version, about = "Library inventory and lending console")]
pub struct Args {
    /// Directory holding base.toml and <env>.toml (defaults to ./config)
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Environment overlay to load: local, staging or production
    #[arg(long, value_name = "ENV")]
    pub env: Option<String>,

    /// Register an extra member before the session starts (repeatable)
    #[arg(long = "member", value_name = "ID=NAME", value_parser = parse_member_seed)]
    pub members: Vec<MemberSeed>,

    /// Log filter directive, e.g. `info` or `libris_app=debug`
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,
}

/// Parse `ID=NAME` into a member seed.
fn parse_member_seed(value: &str) -> Result<MemberSeed, String> {
    let (id, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got '{value}'"))?;
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("member ID '{}' is not a number", id.trim()))?;
    Ok(MemberSeed {
        id,
        name: name.to_string(),
    })
}
