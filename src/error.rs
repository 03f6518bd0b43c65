use thiserror::Error;

pub type Result<T> = std::result::Result<T, OtpError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    #[error("the key is not a valid base32 encoding: {0}")]
    InvalidSecretEncoding(String),
    #[error("the moving factor does not fit in an unsigned 64-bit counter")]
    CounterOutOfRange,
    #[error("invalid digit count {0}, expected 1 to 10 digits")]
    InvalidDigitCount(u32),
    #[error("invalid time step {0}, expected a positive number of seconds")]
    InvalidStepSize(u64),
}
