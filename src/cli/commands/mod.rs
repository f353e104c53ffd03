use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn gate() -> Command {
    Command::new("gate")
        .about("Run the access gate against a verification endpoint")
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .help("Verification endpoint URL; omit to run without a gate")
                .env("SENTINEL_ENDPOINT"),
        )
        .arg(
            Arg::new("session-key")
                .long("session-key")
                .help("Session-store key for the authenticated flag")
                .default_value("sentinel_authenticated")
                .env("SENTINEL_SESSION_KEY"),
        )
        .arg(
            Arg::new("overlay-id")
                .long("overlay-id")
                .help("Identifier given to the mounted overlay")
                .default_value("sentinelOverlay")
                .env("SENTINEL_OVERLAY_ID"),
        )
        .arg(
            Arg::new("fade-delay")
                .long("fade-delay")
                .help("Milliseconds the success panel stays up before removal")
                .default_value("1500")
                .env("SENTINEL_FADE_DELAY")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Emit gate diagnostics")
                .env("SENTINEL_DEBUG")
                .action(ArgAction::SetTrue),
        )
}

fn serve() -> Command {
    Command::new("serve")
        .about("Run the development verification endpoint")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("SENTINEL_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("access-code")
                .short('c')
                .long("access-code")
                .help("Access code accepted by the endpoint, repeatable")
                .env("SENTINEL_ACCESS_CODE")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .help("User label returned on successful verification")
                .env("SENTINEL_USER"),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("sentinel")
        .about("Session-gated access overlay")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gate())
        .subcommand(serve())
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SENTINEL_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
