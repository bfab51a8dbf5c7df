// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_folio - browse the images of a folder

USAGE:
  iced_folio [OPTIONS] [DIRECTORY]

OPTIONS:
  --lang <TAG>         UI language (en-US, ja)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

Set RUST_LOG (e.g. RUST_LOG=iced_folio=debug) to change log verbosity.
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang value");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir value");
        None
    });

    let flags = Flags {
        lang,
        config_dir,
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
