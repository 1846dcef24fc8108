//! Receiver session bootstrap
//!
//! Turns a [`ReceiverLocator`] into the one receiver handle an invocation
//! works with. A cached receiver is preferred; it is probed with a single
//! status read and replaced through discovery if it no longer answers.

use std::thread;
use std::time::Duration;

use receiver_api::{LocatorError, ReceiverControl, ReceiverError, ReceiverLocator};
use tracing::{debug, error, info, warn};

/// How often discovery is attempted before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of discovery attempts, at least 1
    pub max_attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 12,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Pause after the given (1-based) failed attempt, zero once attempts are exhausted
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 || attempt >= self.max_attempts {
            Duration::ZERO
        } else {
            self.delay
        }
    }
}

/// Options controlling how a session finds its receiver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Drop the cached receiver before anything else
    pub clear_cache: bool,
    pub retry: RetryPolicy,
}

/// Where the session's receiver came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Discovery,
}

/// The receiver handle owned by one invocation
#[derive(Debug)]
pub struct Session<R> {
    receiver: R,
    origin: Origin,
}

impl<R: ReceiverControl> Session<R> {
    /// Obtain a receiver from the cache or, failing that, through discovery
    pub fn open<L>(locator: &L, options: &SessionOptions) -> Result<Self, LocatorError>
    where
        L: ReceiverLocator<Receiver = R>,
    {
        if options.clear_cache {
            info!("clearing receiver cache");
            locator.clear_cache()?;
        }

        if let Some(receiver) = locator.cached_receiver()? {
            match receiver.basic_status() {
                Ok(status) => {
                    debug!(input = %status.input, power = status.power, "cached receiver answered");
                    return Ok(Self {
                        receiver,
                        origin: Origin::Cache,
                    });
                }
                Err(ReceiverError::Network(msg)) => {
                    warn!(error = %msg, "cached receiver unreachable, looking again");
                    locator.clear_cache()?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let receiver = discover(locator, &options.retry)?;
        locator.cache_receiver(&receiver)?;

        Ok(Self {
            receiver,
            origin: Origin::Discovery,
        })
    }

    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}

fn discover<L: ReceiverLocator>(locator: &L, retry: &RetryPolicy) -> Result<L::Receiver, LocatorError> {
    let mut attempt = 1;
    loop {
        info!(attempt, "looking for receivers");
        match locator.find_receiver() {
            Ok(receiver) => return Ok(receiver),
            Err(LocatorError::NotFound) if attempt < retry.max_attempts => {
                let delay = retry.delay_for_attempt(attempt);
                warn!(attempt, ?delay, "no receiver found, retrying");
                if delay > Duration::ZERO {
                    thread::sleep(delay);
                }
                attempt += 1;
            }
            Err(e) => {
                error!(attempt, error = %e, "giving up on receiver discovery");
                return Err(e);
            }
        }
    }
}
