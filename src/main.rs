// SPDX-License-Identifier: MPL-2.0
use carnelli_marine::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Carnelli Marine Technology showcase

USAGE:
  carnelli-marine [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <CODE>        Start in the given language (zh, en)
      --section <ID>       Start on a section (home, services, about, contact)
      --config-dir <PATH>  Read settings.toml from PATH

ENVIRONMENT:
  CARNELLI_MARINE_CONFIG_DIR  Config directory, overridden by --config-dir
  RUST_LOG                    Log filter (default: carnelli_marine=info,contact=info)
                              The contact target records submitted forms
";

fn main() -> ExitCode {
    init_logging();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        section: args.opt_value_from_str("--section")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "carnelli_marine=info,contact=info";

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_documents_the_default_log_filter() {
        assert!(HELP.contains(&format!("default: {DEFAULT_LOG_FILTER}")));
    }

    #[test]
    fn flags_are_parsed() {
        let mut args = pico_args::Arguments::from_vec(vec![
            "--lang".into(),
            "en".into(),
            "--section".into(),
            "contact".into(),
        ]);
        let flags = parse_flags(&mut args).unwrap();
        assert_eq!(flags.lang.as_deref(), Some("en"));
        assert_eq!(flags.section.as_deref(), Some("contact"));
        assert_eq!(flags.config_dir, None);
    }
}
