use clap::{arg, command, ArgMatches, Command};
use log::debug;

use super::{algorithm_arg, digits_arg, key_arg, parse_arg, CodeParams, CommandError, CommandType};
use crate::config::Settings;
use crate::totp::{generate_totp, generate_totp_with_clock, GetTime, DEFAULT_STEP};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Totp.as_str())
        .about("Print a time-based one-time password (TOTP)")
        .args(&[
            key_arg(),
            digits_arg(),
            arg!(-s --step <SECONDS> "Time step in seconds [default: 30]")
                .required(false)
                .validator(|value| value.parse::<u64>()),
            algorithm_arg(),
            arg!(-t --time <UNIX_TIME> "Unix time to generate the code for instead of now")
                .required(false)
                .validator(|value| value.parse::<u64>()),
        ])
}

pub fn run_totp<W, C>(
    totp_args: &ArgMatches,
    settings: &Settings,
    clock: &C,
    writer: &mut W,
) -> Result<(), CommandError>
where
    W: OutErr,
    C: GetTime,
{
    let params = CodeParams::resolve(totp_args, settings)?;
    let step = parse_arg::<u64>(totp_args, "step")?
        .or(settings.step)
        .unwrap_or(DEFAULT_STEP);
    let at_time = parse_arg::<u64>(totp_args, "time")?;

    debug!(
        "generating {} digit {} TOTP with a {}s step at {}",
        params.digits,
        params.algorithm,
        step,
        at_time.map_or(String::from("now"), |time| time.to_string())
    );
    let CodeParams {
        secret,
        digits,
        algorithm,
    } = params;
    let code = match at_time {
        Some(_) => generate_totp(secret, digits, step, algorithm, at_time)?,
        None => generate_totp_with_clock(secret, digits, step, algorithm, clock)?,
    };
    writer.write(&format!("{}\n", code));

    Ok(())
}
