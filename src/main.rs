// SPDX-License-Identifier: MPL-2.0
use folio_wheel::app::{self, Flags};
use tracing::Level;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio_wheel: browse a project portfolio by category

USAGE:
  folio_wheel [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --category <SLUG>      Category to open (e.g. web-dev-cloud)
  --data <FILE>          Portfolio JSON file to display
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding the session state
  -v                     More logging (repeat for trace)
  -q                     Only log errors
  -h, --help             Print this help
";

fn parse_args() -> Result<(Flags, u8, bool), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let mut verbose = 0u8;
    while args.contains("-v") {
        verbose = verbose.saturating_add(1);
    }
    let quiet = args.contains("-q");

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        category: args.opt_value_from_str("--category")?,
        data_path: args.opt_value_from_str("--data")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }

    Ok((flags, verbose, quiet))
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("folio_wheel={level}").parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> iced::Result {
    let (flags, verbose, quiet) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_logging(verbose, quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting folio_wheel");

    app::run(flags)
}
