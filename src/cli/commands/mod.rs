use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        PossibleValuesParser, ValueParser,
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

pub fn validator_success_rate() -> ValueParser {
    ValueParser::from(move |rate: &str| -> std::result::Result<f64, String> {
        match rate.parse::<f64>() {
            Ok(parsed) if (0.0..=1.0).contains(&parsed) => Ok(parsed),
            _ => Err("success rate must be a number between 0 and 1".to_string()),
        }
    })
}

fn millis_arg(
    name: &'static str,
    env: &'static str,
    help: &'static str,
    default: &'static str,
) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .env(env)
        .global(true)
        .default_value(default)
        .value_parser(clap::value_parser!(u64))
}

fn field_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).default_value("")
}

fn login_command() -> Command {
    Command::new("login")
        .about("Fill in and submit the login panel")
        .arg(field_arg("email", "Email address"))
        .arg(field_arg("password", "Password").env("AUTHFORM_PASSWORD").hide_env_values(true))
}

fn signup_command() -> Command {
    Command::new("signup")
        .about("Switch to the signup panel, fill it in and submit")
        .arg(field_arg("first-name", "First name"))
        .arg(field_arg("last-name", "Last name"))
        .arg(field_arg("email", "Email address"))
        .arg(field_arg("password", "Password").env("AUTHFORM_PASSWORD").hide_env_values(true))
        .arg(field_arg("role", "Role picked from the select box"))
        .arg(
            Arg::new("agree-terms")
                .long("agree-terms")
                .help("Tick the Terms of Service and Privacy Policy checkbox")
                .action(ArgAction::SetTrue),
        )
}

fn replay_command() -> Command {
    Command::new("replay")
        .about("Replay a JSON array of form events")
        .arg(
            Arg::new("script")
                .help("Path to the event script")
                .value_name("FILE")
                .required(true),
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

    Command::new("authform")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(login_command())
        .subcommand(signup_command())
        .subcommand(replay_command())
        .arg(millis_arg(
            "login-delay-ms",
            "AUTHFORM_LOGIN_DELAY_MS",
            "Simulated login round-trip in milliseconds",
            "1500",
        ))
        .arg(millis_arg(
            "signup-delay-ms",
            "AUTHFORM_SIGNUP_DELAY_MS",
            "Simulated signup round-trip in milliseconds",
            "2000",
        ))
        .arg(millis_arg(
            "follow-up-delay-ms",
            "AUTHFORM_FOLLOW_UP_DELAY_MS",
            "Delay before the post-success follow-up in milliseconds",
            "1500",
        ))
        .arg(millis_arg(
            "notification-ttl-ms",
            "AUTHFORM_NOTIFICATION_TTL_MS",
            "How long banners stay on screen in milliseconds",
            "5000",
        ))
        .arg(
            Arg::new("success-rate")
                .long("success-rate")
                .help("Probability that a simulated submission succeeds")
                .env("AUTHFORM_SUCCESS_RATE")
                .global(true)
                .default_value("0.9")
                .value_parser(validator_success_rate()),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .help("Log output format")
                .env("AUTHFORM_LOG_FORMAT")
                .global(true)
                .default_value("pretty")
                .value_parser(PossibleValuesParser::new(["pretty", "json"])),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("AUTHFORM_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 8] = [
        "AUTHFORM_LOGIN_DELAY_MS",
        "AUTHFORM_SIGNUP_DELAY_MS",
        "AUTHFORM_FOLLOW_UP_DELAY_MS",
        "AUTHFORM_NOTIFICATION_TTL_MS",
        "AUTHFORM_SUCCESS_RATE",
        "AUTHFORM_LOG_FORMAT",
        "AUTHFORM_PASSWORD",
        "AUTHFORM_LOG_LEVEL",
    ];

    // Run `f` with every AUTHFORM_* variable unset so defaults are observable.
    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(ENV_VARS.map(|name| (name, None::<String>)), f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "authform");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            env!("CARGO_PKG_DESCRIPTION")
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_login_args() {
        clean_env(|| {
            let matches = new().get_matches_from(vec![
                "authform",
                "login",
                "--email",
                "a@b.com",
                "--password",
                "secret12",
            ]);

            let (name, login) = matches.subcommand().unwrap();
            assert_eq!(name, "login");
            assert_eq!(
                login.get_one::<String>("email").map(|s| s.to_string()),
                Some("a@b.com".to_string())
            );
            assert_eq!(
                login.get_one::<String>("password").map(|s| s.to_string()),
                Some("secret12".to_string())
            );
            assert_eq!(login.get_one::<u64>("login-delay-ms").copied(), Some(1500));
            assert_eq!(login.get_one::<u64>("signup-delay-ms").copied(), Some(2000));
            assert_eq!(login.get_one::<f64>("success-rate").copied(), Some(0.9));
        });
    }

    #[test]
    fn test_signup_args() {
        clean_env(|| {
            let matches = new().get_matches_from(vec![
                "authform",
                "signup",
                "--first-name",
                "Ada",
                "--last-name",
                "Lovelace",
                "--email",
                "ada@example.com",
                "--role",
                "developer",
                "--agree-terms",
            ]);

            let (name, signup) = matches.subcommand().unwrap();
            assert_eq!(name, "signup");
            assert!(signup.get_flag("agree-terms"));
            assert_eq!(
                signup.get_one::<String>("role").map(|s| s.to_string()),
                Some("developer".to_string())
            );
        });
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        clean_env(|| {
            let matches = new().get_matches_from(vec!["authform", "signup"]);
            let (_, signup) = matches.subcommand().unwrap();
            assert_eq!(
                signup.get_one::<String>("password").map(|s| s.to_string()),
                Some(String::new())
            );
            assert!(!signup.get_flag("agree-terms"));
        });
    }

    #[test]
    fn test_replay_requires_script() {
        let result = new().try_get_matches_from(vec!["authform", "replay"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_success_rate_bounds() {
        clean_env(|| {
            let result =
                new().try_get_matches_from(vec!["authform", "--success-rate", "1.5", "login"]);
            assert!(result.is_err());

            let matches = new().get_matches_from(vec!["authform", "login", "--success-rate", "0.25"]);
            let (_, login) = matches.subcommand().unwrap();
            assert_eq!(login.get_one::<f64>("success-rate").copied(), Some(0.25));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("AUTHFORM_LOGIN_DELAY_MS", Some("10")),
                ("AUTHFORM_SIGNUP_DELAY_MS", Some("20")),
                ("AUTHFORM_FOLLOW_UP_DELAY_MS", Some("30")),
                ("AUTHFORM_NOTIFICATION_TTL_MS", Some("40")),
                ("AUTHFORM_SUCCESS_RATE", Some("0.5")),
                ("AUTHFORM_LOG_FORMAT", Some("json")),
                ("AUTHFORM_PASSWORD", Some("from-env")),
                ("AUTHFORM_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["authform", "login"]);
                let (_, login) = matches.subcommand().unwrap();
                assert_eq!(login.get_one::<u64>("login-delay-ms").copied(), Some(10));
                assert_eq!(login.get_one::<u64>("signup-delay-ms").copied(), Some(20));
                assert_eq!(login.get_one::<u64>("follow-up-delay-ms").copied(), Some(30));
                assert_eq!(
                    login.get_one::<u64>("notification-ttl-ms").copied(),
                    Some(40)
                );
                assert_eq!(login.get_one::<f64>("success-rate").copied(), Some(0.5));
                assert_eq!(
                    login.get_one::<String>("log-format").map(|s| s.to_string()),
                    Some("json".to_string())
                );
                assert_eq!(
                    login.get_one::<String>("password").map(|s| s.to_string()),
                    Some("from-env".to_string())
                );
                assert_eq!(login.get_one::<u8>("verbosity").map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("AUTHFORM_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["authform", "login"]);
                let (_, login) = matches.subcommand().unwrap();
                assert_eq!(
                    login.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("AUTHFORM_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["authform".to_string(), "login".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);
                let (_, login) = matches.subcommand().unwrap();

                assert_eq!(
                    login.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
