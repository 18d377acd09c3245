/// Configuration resolution module
///
/// This module handles:
/// - Reading the core settings (port, address, UI mode) from the environment
/// - Applying command-line overrides on top
/// - Validating values before any report is built
use crate::cli::CliArgs;
use log::debug;
use std::collections::HashMap;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;

const ENV_PORT: &str = "MO_PORT";
const ENV_ADDRESS: &str = "MO_ADDRESS";
const ENV_DISABLE_UI: &str = "MO_DISABLE_UI";

/// Core settings the startup report depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub port: u16,
    pub address: Option<String>, // None = listen everywhere, advertise localhost + network IP
    pub disable_ui: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, address: None, disable_ui: false }
    }
}

/// Snapshot of the process environment
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn env_snapshot() -> HashMap<String, String> {
    env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = key.unwrap_or_else(|k| k.to_string_lossy().into_owned());
                debug!("Skipping non UTF-8 environment variable {:?}", key);
                None
            }
        })
        .collect()
}

/// Build the core configuration from environment variables and CLI arguments
///
/// CLI arguments take precedence over the environment.
pub fn load_config(args: &CliArgs, vars: &HashMap<String, String>) -> Result<CoreConfig, String> {
    let mut config = CoreConfig::default();

    if let Some(port) = non_empty(vars, ENV_PORT) {
        config.port = parse_port(port).map_err(|e| format!("Invalid {}: {}", ENV_PORT, e))?;
    }
    if let Some(address) = non_empty(vars, ENV_ADDRESS) {
        config.address = Some(address.to_string());
    }
    if let Some(disable_ui) = non_empty(vars, ENV_DISABLE_UI) {
        config.disable_ui = parse_bool(disable_ui).map_err(|e| format!("Invalid {}: {}", ENV_DISABLE_UI, e))?;
    }

    if let Some(port) = args.port {
        debug!("Using port from --port: {}", port);
        config.port = port;
    }
    if let Some(ref address) = args.address {
        debug!("Using address from --address: {}", address);
        config.address = Some(address.clone());
    }
    if args.disable_ui {
        config.disable_ui = true;
    }

    debug!("Resolved core config: {:?}", config);
    Ok(config)
}

/// Look up a variable, treating blank values as unset
fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_port(value: &str) -> Result<u16, String> {
    match value.parse::<u16>() {
        Ok(0) | Err(_) => Err(format!("'{}' is not a port number (1-65535)", value)),
        Ok(port) => Ok(port),
    }
}

/// Parse the boolean spellings accepted in environment variables
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(format!("'{}' is not a boolean (true/false)", value)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
