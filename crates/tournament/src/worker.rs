//! Runs a strategy on its own thread so every decision has a hard deadline.
//!
//! The match loop sends a position and waits on `recv_timeout`. A strategy
//! that blows its budget is abandoned: the worker is detached and its late
//! answer, if any, lands on a closed channel.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chess_core::{Move, Position, Strategy, StrategyError};
use tracing::{trace, warn};

use crate::error::MatchFault;

type Reply = Result<Result<Move, StrategyError>, String>;

pub struct StrategyWorker {
    name: String,
    requests: Option<Sender<Position>>,
    replies: Receiver<Reply>,
    handle: Option<JoinHandle<()>>,
    detached: bool,
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

impl StrategyWorker {
    /// Moves `strategy` onto a new thread.
    pub fn spawn(mut strategy: Box<dyn Strategy>) -> std::io::Result<Self> {
        let name = strategy.name().to_string();
        let (req_tx, req_rx) = mpsc::channel::<Position>();
        let (rep_tx, rep_rx) = mpsc::channel::<Reply>();

        let handle = thread::Builder::new()
            .name(format!("strategy-{name}"))
            .spawn(move || {
                for pos in req_rx {
                    let reply = panic::catch_unwind(AssertUnwindSafe(|| strategy.decide(&pos)))
                        .map_err(panic_message);
                    if rep_tx.send(reply).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            name,
            requests: Some(req_tx),
            replies: rep_rx,
            handle: Some(handle),
            detached: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asks for a move and waits at most `timeout` for it.
    ///
    /// After a timeout the worker is unusable; further calls report the
    /// same fault immediately.
    pub fn decide(&mut self, pos: &Position, timeout: Duration) -> Result<Move, MatchFault> {
        if self.detached {
            return Err(MatchFault::StrategyTimeout(timeout));
        }
        let sent = self
            .requests
            .as_ref()
            .is_some_and(|tx| tx.send(pos.clone()).is_ok());
        if !sent {
            return Err(MatchFault::StrategyFault("worker thread has exited".into()));
        }

        match self.replies.recv_timeout(timeout) {
            Ok(Ok(Ok(mv))) => {
                trace!(strategy = %self.name, %mv, "decided");
                Ok(mv)
            }
            Ok(Ok(Err(err))) => Err(MatchFault::StrategyFault(err.to_string())),
            Ok(Err(panic)) => Err(MatchFault::StrategyFault(format!("panicked: {panic}"))),
            Err(RecvTimeoutError::Timeout) => {
                warn!(strategy = %self.name, ?timeout, "decision timed out, detaching worker");
                self.detach();
                Err(MatchFault::StrategyTimeout(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                Err(MatchFault::StrategyFault("worker thread has exited".into()))
            }
        }
    }

    /// Forgets the thread without joining it. It cannot be reclaimed: it runs
    /// until the pending `decide` returns and exits on the closed channel, or
    /// spins for the rest of the process if `decide` never returns.
    fn detach(&mut self) {
        self.detached = true;
        self.requests = None;
        self.handle = None;
    }
}

impl Drop for StrategyWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
