use clap::{arg, crate_version, Arg, ArgMatches, Command};
use std::str::FromStr;
use thiserror::Error;

use crate::algorithm::HashAlgorithm;
use crate::config::Settings;
use crate::error::OtpError;
use crate::secret::is_base32_key;
use crate::totp::GetTime;
use crate::writer::OutErr;

pub mod hotp;
pub mod totp;

pub const DEFAULT_DIGITS: u32 = 6;

pub enum CommandType {
    Hotp,
    Totp,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Hotp => "hotp",
            CommandType::Totp => "totp",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("A secret key is required, pass --key or set `secret` in the settings file")]
    MissingSecret,
    #[error("Invalid value for --{name}: {message}")]
    InvalidArgument { name: &'static str, message: String },
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Otp(#[from] OtpError),
}

impl From<clap::Error> for CommandError {
    fn from(err: clap::Error) -> Self {
        CommandError::Usage(err.to_string())
    }
}

pub fn app() -> Command<'static> {
    Command::new("otp")
        .version(crate_version!())
        .about("Print HOTP and TOTP one-time passwords")
        .args(&[
            arg!(-f --config <FILE> "Settings file [default: ~/.otp/config.toml]").required(false),
        ])
        .subcommand(hotp::subcommand())
        .subcommand(totp::subcommand())
}

/// Dispatch to the matched subcommand. Without one, print the current TOTP.
pub fn run<W, C>(
    matches: &ArgMatches,
    settings: &Settings,
    clock: &C,
    writer: &mut W,
) -> Result<(), CommandError>
where
    W: OutErr,
    C: GetTime,
{
    match matches.subcommand() {
        Some((name, hotp_args)) if name == CommandType::Hotp.as_str() => {
            hotp::run_hotp(hotp_args, settings, writer)
        }
        Some((name, totp_args)) if name == CommandType::Totp.as_str() => {
            totp::run_totp(totp_args, settings, clock, writer)
        }
        _ => {
            let totp_args = totp::subcommand().try_get_matches_from([CommandType::Totp.as_str()])?;
            totp::run_totp(&totp_args, settings, clock, writer)
        }
    }
}

pub fn key_arg() -> Arg<'static> {
    arg!(-k --key <KEY> "Base32 secret key (overrides the settings file)")
        .required(false)
        .validator(is_base32_key)
}

pub fn digits_arg() -> Arg<'static> {
    arg!(-d --digits <DIGITS> "Number of digits in the code [default: 6]")
        .required(false)
        .validator(|value| value.parse::<u32>())
}

pub fn algorithm_arg() -> Arg<'static> {
    arg!(-a --algorithm <ALGORITHM> "HMAC hash function: sha1, sha256 or sha512 [default: sha1]")
        .required(false)
        .validator(HashAlgorithm::from_str)
}

/// Parameters shared by both subcommands, resolved as flag > settings file > default.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeParams<'a> {
    pub secret: &'a str,
    pub digits: u32,
    pub algorithm: HashAlgorithm,
}

impl<'a> CodeParams<'a> {
    pub fn resolve(args: &'a ArgMatches, settings: &'a Settings) -> Result<Self, CommandError> {
        let secret = args
            .value_of("key")
            .or(settings.secret.as_deref())
            .ok_or(CommandError::MissingSecret)?;
        let digits = parse_arg::<u32>(args, "digits")?
            .or(settings.digits)
            .unwrap_or(DEFAULT_DIGITS);
        let algorithm = parse_arg::<HashAlgorithm>(args, "algorithm")?
            .or(settings.algorithm)
            .unwrap_or_default();

        Ok(CodeParams {
            secret,
            digits,
            algorithm,
        })
    }
}

pub fn parse_arg<T>(args: &ArgMatches, name: &'static str) -> Result<Option<T>, CommandError>
where
    T: FromStr,
    T::Err: ToString,
{
    match args.value_of(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|err| CommandError::InvalidArgument {
                name,
                message: err.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::*;
    use crate::tests::mocks::{MockClock, MockOtpWriter};

    fn run_app(arg_vec: &[&str], settings: &Settings) -> (Result<(), CommandError>, MockOtpWriter) {
        let mut writer = MockOtpWriter::new();
        let matches = app().try_get_matches_from(arg_vec).unwrap();
        let result = run(&matches, settings, &MockClock::new(), &mut writer);
        (result, writer)
    }

    fn key_settings(secret: &str) -> Settings {
        Settings {
            secret: Some(String::from(secret)),
            ..Settings::default()
        }
    }

    #[test]
    fn no_subcommand_prints_current_totp() {
        let (result, writer) = run_app(&["otp"], &key_settings(KEY));

        assert_eq!(result, Ok(()));
        assert_eq!(writer.out_str(), "143627\n");
    }

    #[test]
    fn no_subcommand_still_needs_a_secret() {
        let (result, writer) = run_app(&["otp"], &Settings::default());

        assert_eq!(result, Err(CommandError::MissingSecret));
        assert_eq!(writer.out, Vec::new());
    }

    #[test]
    fn dispatches_hotp() {
        let (result, writer) = run_app(&["otp", "hotp", "-c", "1"], &key_settings(RFC_4226_SECRET));

        assert_eq!(result, Ok(()));
        assert_eq!(writer.out_str(), "287082\n");
    }

    #[test]
    fn dispatches_totp() {
        let (result, writer) = run_app(&["otp", "totp", "-t", "30"], &key_settings(KEY));

        assert_eq!(result, Ok(()));
        assert_eq!(writer.out_str(), "996554\n");
    }

    #[test]
    fn accepts_config_flag_before_subcommand() {
        let matches = app()
            .try_get_matches_from(["otp", "-f", "otp.toml", "totp"])
            .unwrap();

        assert_eq!(matches.value_of("config"), Some("otp.toml"));
        assert_eq!(matches.subcommand_name(), Some("totp"));
    }
}
