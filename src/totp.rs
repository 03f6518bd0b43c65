use std::time::SystemTime;

use crate::algorithm::HashAlgorithm;
use crate::error::{OtpError, Result};
use crate::hotp;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// HOTP with a time-based moving factor
// T = (Current Unix time - T0) / X, T0 = 0

pub const DEFAULT_STEP: u64 = 30;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

/// System wall clock.
pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Generate a TOTP code.
///
/// With `at_time` (seconds since the Unix epoch) the result only depends on
/// the arguments; without it the system clock is read once.
pub fn generate_totp(
    secret: &str,
    digits: u32,
    step_seconds: u64,
    algorithm: HashAlgorithm,
    at_time: Option<u64>,
) -> Result<String> {
    match at_time {
        Some(time) => {
            let counter = moving_factor(time, step_seconds)?;
            hotp::generate(secret, counter, digits, algorithm)
        }
        None => generate_totp_with_clock(secret, digits, step_seconds, algorithm, &Clock::new()),
    }
}

pub fn generate_totp_with_clock(
    secret: &str,
    digits: u32,
    step_seconds: u64,
    algorithm: HashAlgorithm,
    clock: &impl GetTime,
) -> Result<String> {
    validate_step(step_seconds)?;
    let counter = moving_factor(unix_time(clock)?, step_seconds)?;
    hotp::generate(secret, counter, digits, algorithm)
}

pub fn moving_factor(unix_time: u64, step_seconds: u64) -> Result<u64> {
    let step_seconds = validate_step(step_seconds)?;
    Ok(unix_time / step_seconds)
}

/// Seconds since the Unix epoch. Readings before the epoch have no counter.
pub fn unix_time(clock: &impl GetTime) -> Result<u64> {
    let time = clock.get_now().duration_since(SystemTime::UNIX_EPOCH);
    match time {
        Ok(duration) => Ok(duration.as_secs()),
        Err(_) => Err(OtpError::CounterOutOfRange),
    }
}

fn validate_step(step_seconds: u64) -> Result<u64> {
    match step_seconds {
        0 => Err(OtpError::InvalidStepSize(step_seconds)),
        _ => Ok(step_seconds),
    }
}
