use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "monitoror-startup")]
#[command(about = "Print the Monitoror startup report: version, enabled monitorables and where the service runs")]
#[command(version = crate::version::VERSION)]
pub struct CliArgs {
    /// Port the service listens on (overrides MO_PORT)
    #[arg(long, short = 'p', value_name = "PORT")]
    pub port: Option<u16>,

    /// Address the service is bound to (overrides MO_ADDRESS)
    /// When unset, localhost and the primary network address are advertised
    #[arg(long, short = 'a', value_name = "ADDRESS")]
    pub address: Option<String>,

    /// The UI is served separately (overrides MO_DISABLE_UI)
    #[arg(long)]
    pub disable_ui: bool,

    /// Never color the output, even on a color terminal
    #[arg(long)]
    pub no_color: bool,

    /// Output the report as JSON instead of the banner
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // An empty --address means "not configured", same as MO_ADDRESS=""
        args.address = args.address.filter(|a| !a.trim().is_empty());

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.port == Some(0) {
            return Err("Port must be between 1 and 65535".to_string());
        }

        if let Some(ref address) = self.address {
            if address.contains("://") {
                return Err(format!("Address '{}' must be a host, not a URL", address));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "monitoror-startup",
            "--port",
            "3000",
            "--address",
            "1.2.3.4",
            "--disable-ui",
            "--no-color",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.port, Some(3000));
        assert_eq!(args.address.as_deref(), Some("1.2.3.4"));
        assert!(args.disable_ui);
        assert!(args.no_color);
        assert!(args.json);
    }

    #[test]
    fn test_defaults_leave_environment_in_charge() {
        let args = CliArgs::try_parse_from(["monitoror-startup"]).unwrap();

        assert_eq!(args.port, None);
        assert_eq!(args.address, None);
        assert!(!args.disable_ui);
    }

    #[test]
    fn test_invalid_port_is_rejected_by_parser() {
        assert!(CliArgs::try_parse_from(["monitoror-startup", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let args = CliArgs { port: Some(0), ..CliArgs::default() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_url_address_fails() {
        let args = CliArgs { address: Some("http://1.2.3.4".to_string()), ..CliArgs::default() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_valid_args_succeeds() {
        let args = CliArgs { port: Some(8080), address: Some("0.0.0.0".to_string()), ..CliArgs::default() };
        assert!(args.validate().is_ok());
    }
}
