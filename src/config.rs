//! Runtime configuration.
//!
//! All settings come from environment variables with sensible
//! defaults, so the server starts with no configuration at all.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_FILE: &str = "employees.json";
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// JSON file holding the employee directory.
    pub data_file: PathBuf,
    /// Rows per "load more" page in list responses.
    pub page_size: usize,
    /// Keep admin records in the employee list.
    pub include_admins: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PAYSLIP_BIND_ADDR` (default: `127.0.0.1:3000`)
    /// - `PAYSLIP_DATA_FILE` (default: `employees.json`)
    /// - `PAYSLIP_PAGE_SIZE` (default: 20, must be positive)
    /// - `PAYSLIP_INCLUDE_ADMINS` (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "PAYSLIP_BIND_ADDR", DEFAULT_BIND_ADDR, |v| {
            v.parse::<SocketAddr>().ok()
        })?;
        let data_file = lookup("PAYSLIP_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let page_size = parse_var(&lookup, "PAYSLIP_PAGE_SIZE", "20", |v| {
            v.parse::<usize>().ok().filter(|n| *n > 0)
        })?;
        let include_admins = parse_var(&lookup, "PAYSLIP_INCLUDE_ADMINS", "false", |v| {
            match v.to_lowercase().as_str() {
                "1" | "true" | "yes" => Some(true),
                "0" | "false" | "no" => Some(false),
                _ => None,
            }
        })?;
        Ok(Self {
            bind_addr,
            data_file,
            page_size,
            include_admins,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: DEFAULT_PAGE_SIZE,
            include_admins: false,
        }
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    parse(raw.trim()).ok_or(ConfigError::InvalidValue { var, value: raw })
}
