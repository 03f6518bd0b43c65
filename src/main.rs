use anyhow::Result;
use log::debug;
use std::path::Path;
use std::process;

use otp::cmd;
use otp::config::Settings;
use otp::totp::Clock;
use otp::writer::{OtpWriter, OutErr};

fn main() -> Result<()> {
    env_logger::init();

    let matches = cmd::app().get_matches();
    let settings = Settings::load(matches.value_of("config").map(Path::new))?;
    let mut writer = OtpWriter::new();

    if let Err(err) = cmd::run(&matches, &settings, &Clock::new(), &mut writer) {
        debug!("command failed: {:?}", err);
        writer.write_err(&format!("{}\n", err));
        process::exit(1);
    }

    Ok(())
}
