mod address;
mod cli;
mod collector;
mod config;
mod console_format;
mod monitorables;
mod registry;
mod report;
mod status;
mod types;
mod ui;
mod version;

use console_format::Emphasis;
use log::debug;
use std::io;
use types::Report;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve core configuration from the environment, CLI flags win
    let vars = config::env_snapshot();
    let core_config = match config::load_config(&args, &vars) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Validate every monitorable variant once
    let registry = monitorables::builtin_registry(&vars);
    let statuses = collector::collect_statuses(&registry);
    debug!("Collected {} monitorable statuses", statuses.len());

    let report = Report::new(version::VERSION, version::BUILD_TAGS, &core_config, statuses);

    let result = if args.json {
        let addresses = report.displayed_addresses(address::discover_primary_ip);
        report::write_json_report(&mut io::stdout().lock(), &report, &addresses)
    } else {
        let emphasis = Emphasis::detect(args.no_color);
        debug!("Colored output: {}", emphasis.uses_colors());
        report::print_startup_report(&report, &emphasis)
    };

    if let Err(e) = result {
        ui::print_error(&format!("Failed to write startup report: {}", e));
        std::process::exit(1);
    }
}
