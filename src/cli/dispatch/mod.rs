use crate::cli::actions::{gate, serve, Action};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

/// Map parsed arguments to the action to run.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("gate", matches)) => Ok(Action::Gate(gate::Args {
            endpoint: matches.get_one::<String>("endpoint").cloned(),
            session_key: matches
                .get_one::<String>("session-key")
                .cloned()
                .context("missing argument: --session-key")?,
            overlay_id: matches
                .get_one::<String>("overlay-id")
                .cloned()
                .context("missing argument: --overlay-id")?,
            fade_delay_ms: matches.get_one::<u64>("fade-delay").copied().unwrap_or(1500),
            debug: matches.get_flag("debug"),
        })),

        Some(("serve", matches)) => Ok(Action::Serve(serve::Args {
            port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
            codes: matches
                .get_many::<String>("access-code")
                .context("missing required argument: --access-code")?
                .map(|code| SecretString::from(code.clone()))
                .collect(),
            user: matches.get_one::<String>("user").cloned(),
        })),

        _ => Err(anyhow!("missing subcommand")),
    }
}
