//! Console dispatcher
//!
//! Prints each answer to a writer followed by a dashed rule. Empty answers
//! print nothing.

use std::io::{self, Write};
use std::sync::Mutex;

use futures::future::{self, BoxFuture};

use super::{Answer, DeliveryError, ResultDispatcher};

const RULE_WIDTH: usize = 30;

pub struct ConsoleDispatcher<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleDispatcher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleDispatcher<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_answer(&self, target: u64, answer: &Answer) -> Result<(), DeliveryError> {
        if matches!(answer, Answer::Empty) {
            return Ok(());
        }

        let mut out = self
            .out
            .lock()
            .map_err(|_| DeliveryError::Transport("console writer poisoned".to_string()))?;

        log::debug!("Printing answer for console request {}", target);
        writeln!(out, "{}", answer.render())
            .and_then(|_| writeln!(out, "{}", "-".repeat(RULE_WIDTH)))
            .and_then(|_| out.flush())
            .map_err(|e| DeliveryError::Transport(e.to_string()))
    }
}

impl<W: Write + Send> ResultDispatcher<u64> for ConsoleDispatcher<W> {
    fn deliver(&self, target: u64, answer: Answer) -> BoxFuture<'_, Result<(), DeliveryError>> {
        Box::pin(future::ready(self.write_answer(target, &answer)))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;
