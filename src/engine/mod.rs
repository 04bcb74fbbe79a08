//! Command/response engine.
//!
//! One round-trip is: drain stray input, write the command followed by
//! `\r\n`, collect reply lines until a final result code or the deadline, then
//! classify the lines. All higher level operations are built on
//! [`Engine::execute`] and its typed form [`Engine::send`].

pub mod classify;
pub mod lines;

use core::fmt::Write as _;

use embassy_time::Duration;
use embedded_io::{Read, ReadReady, Write};

use crate::command::{AtCmd, AtResp, CommandBuf};
use crate::error::{Error, Precondition, ProtocolError};
use crate::traits::{Clock, Transport};
use classify::{Expect, Outcome};
use lines::LineBuffer;

/// Snapshot of one round-trip, valid until the next command is issued.
#[derive(Debug)]
pub struct Reply<'a> {
    outcome: Outcome,
    payload: Option<&'a str>,
    lines: &'a LineBuffer,
}

impl<'a> Reply<'a> {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The information text line selected by the [`Expect`] of the command.
    pub fn payload(&self) -> Option<&'a str> {
        self.payload
    }

    pub fn lines(&self) -> &'a LineBuffer {
        self.lines
    }

    /// Turn the outcome into a `Result`, keeping the optional payload.
    pub fn into_result(self) -> Result<Option<&'a str>, Error> {
        match self.outcome {
            Outcome::Ok => Ok(self.payload),
            Outcome::Error(code) => Err(Error::Module(code)),
            Outcome::Timeout => Err(Error::Timeout),
        }
    }

    /// Like [`Reply::into_result`], but an `OK` without information text is
    /// reported as [`ProtocolError::MissingPayload`].
    pub fn into_payload(self) -> Result<&'a str, Error> {
        self.into_result()?
            .ok_or(Error::Protocol(ProtocolError::MissingPayload))
    }
}

pub struct Engine<T, C> {
    transport: T,
    clock: C,
    lines: LineBuffer,
}

impl<T, C> Engine<T, C>
where
    T: Transport,
    C: Clock,
{
    pub fn new(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            lines: LineBuffer::new(),
        }
    }

    /// Give back the transport and clock.
    pub fn release(self) -> (T, C) {
        (self.transport, self.clock)
    }

    /// Discard everything currently readable without waiting for more, e.g.
    /// unsolicited `+CEREG` pushes. Returns the number of bytes dropped.
    pub fn drain(&mut self) -> Result<usize, Error> {
        let mut scratch = [0u8; 32];
        let mut dropped = 0;
        while self.transport.read_ready().map_err(Error::transport)? {
            let n = self
                .transport
                .read(&mut scratch)
                .map_err(Error::transport)?;
            if n == 0 {
                break;
            }
            dropped += n;
        }
        if dropped > 0 {
            trace!("Drained {} stray bytes", dropped);
        }
        Ok(dropped)
    }

    /// Collect reply lines until a final result code arrives, or until
    /// `timeout` passes without a complete line. Returns the number of lines
    /// kept; zero lines is not an error here.
    pub fn read_lines(&mut self, timeout: Duration) -> Result<usize, Error> {
        self.lines.clear();
        let mut deadline = self.clock.now() + timeout;
        let mut byte = [0u8; 1];

        loop {
            // A ready transport may still yield nothing (end of stream)
            let got = if self.transport.read_ready().map_err(Error::transport)? {
                self.transport.read(&mut byte).map_err(Error::transport)?
            } else {
                0
            };

            if got > 0 {
                if self.lines.push(byte[0]) {
                    let line = self.lines.last().unwrap_or("");
                    trace!("<- {}", line);
                    if classify::is_final(line) {
                        break;
                    }
                    deadline = self.clock.now() + timeout;
                }
            } else if self.clock.now() >= deadline {
                debug!("Reply deadline passed after {} lines", self.lines.len());
                break;
            } else {
                core::hint::spin_loop();
            }
        }

        if self.lines.truncated() > 0 || self.lines.overwritten() > 0 {
            warn!(
                "Reply lines lost: {} truncated, {} overwritten",
                self.lines.truncated(),
                self.lines.overwritten()
            );
        }
        Ok(self.lines.len())
    }

    /// Run one round-trip of `command` (without terminator).
    pub fn execute(
        &mut self,
        command: &str,
        expect: Expect,
        timeout: Duration,
    ) -> Result<Reply<'_>, Error> {
        self.drain()?;

        trace!("-> {}", command);
        self.transport
            .write_all(command.as_bytes())
            .map_err(Error::transport)?;
        self.transport
            .write_all(b"\r\n")
            .map_err(Error::transport)?;
        self.transport.flush().map_err(Error::transport)?;

        self.read_lines(timeout)?;

        let outcome = classify::classify(&self.lines);
        match &outcome {
            Outcome::Ok => debug!("{}: OK", command),
            Outcome::Error(code) => warn!("{}: {:?}", command, code),
            Outcome::Timeout => warn!("{}: timeout", command),
        }

        Ok(Reply {
            payload: classify::find_payload(&self.lines, expect),
            outcome,
            lines: &self.lines,
        })
    }

    /// Format and run a typed command, parsing its response.
    pub fn send<A: AtCmd>(&mut self, cmd: &A) -> Result<A::Response, Error> {
        self.send_with(cmd, <A::Response as AtResp>::parse)
    }

    /// Format and run a typed command, handing the information text to `f`
    /// while it still borrows the line buffer.
    pub fn send_with<A, R, F>(&mut self, cmd: &A, f: F) -> Result<R, Error>
    where
        A: AtCmd,
        F: FnOnce(Option<&str>) -> Result<R, Error>,
    {
        let mut buf = CommandBuf::new();
        buf.write_str("AT")
            .and_then(|_| cmd.write(&mut buf))
            .map_err(|_| Error::Precondition(Precondition::CommandTooLong))?;

        let payload = self.execute(&buf, A::EXPECT, A::TIMEOUT)?.into_result()?;
        f(payload)
    }
}
