use std::ops::{Add, Sub};
use std::time::{Duration, SystemTime};

use crate::totp::GetTime;
use crate::writer::OutErr;

pub struct MockOtpWriter {
    pub out: Vec<u8>,
    pub err: Vec<u8>,
}

impl MockOtpWriter {
    pub fn new() -> Self {
        MockOtpWriter {
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    pub fn out_str(&self) -> String {
        String::from_utf8(self.out.clone()).unwrap()
    }
}

impl OutErr for MockOtpWriter {
    fn write_err(&mut self, s: &str) {
        self.err.append(&mut s.as_bytes().to_vec());
    }

    fn write(&mut self, s: &str) {
        self.out.append(&mut s.as_bytes().to_vec());
    }
}

pub struct MockClock {
    now: SystemTime,
}

impl MockClock {
    pub fn new() -> Self {
        MockClock::at(90)
    }

    pub fn at(secs: u64) -> Self {
        MockClock {
            now: SystemTime::UNIX_EPOCH.add(Duration::new(secs, 0)),
        }
    }

    pub fn before_epoch(secs: u64) -> Self {
        MockClock {
            now: SystemTime::UNIX_EPOCH.sub(Duration::new(secs, 0)),
        }
    }
}

impl GetTime for MockClock {
    fn get_now(&self) -> SystemTime {
        self.now
    }
}
