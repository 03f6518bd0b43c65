use clap::{arg, command, ArgMatches, Command};
use log::debug;

use super::{algorithm_arg, digits_arg, key_arg, parse_arg, CodeParams, CommandError, CommandType};
use crate::config::Settings;
use crate::hotp::{checked_counter, generate};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Hotp.as_str())
        .about("Print a counter-based one-time password (HOTP)")
        .args(&[
            key_arg(),
            arg!(-c --counter <COUNTER> "Moving factor [default: 0]")
                .required(false)
                .allow_hyphen_values(true)
                .validator(|value| value.parse::<i128>()),
            digits_arg(),
            algorithm_arg(),
        ])
}

pub fn run_hotp<W>(
    hotp_args: &ArgMatches,
    settings: &Settings,
    writer: &mut W,
) -> Result<(), CommandError>
where
    W: OutErr,
{
    let params = CodeParams::resolve(hotp_args, settings)?;
    let counter = match parse_arg::<i128>(hotp_args, "counter")? {
        Some(counter) => checked_counter(counter)?,
        None => settings.counter.unwrap_or(0),
    };

    debug!(
        "generating {} digit {} HOTP for counter {}",
        params.digits, params.algorithm, counter
    );
    let code = generate(params.secret, counter, params.digits, params.algorithm)?;
    writer.write(&format!("{}\n", code));

    Ok(())
}
