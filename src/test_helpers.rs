//! Scripted module and clock for driving the engine in tests.

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embassy_time::Instant;
use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write};

use crate::traits::Clock;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptError;

impl embedded_io::Error for ScriptError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::BrokenPipe
    }
}

/// Part of a reply, readable once `after` polls found nothing to read.
#[derive(Debug)]
struct Chunk {
    after: usize,
    bytes: Vec<u8>,
}

#[derive(Debug, Default)]
struct Script {
    rx: VecDeque<u8>,
    replies: VecDeque<Vec<Chunk>>,
    scheduled: VecDeque<Chunk>,
    written: Vec<u8>,
    pending: Vec<u8>,
    commands: Vec<String>,
    fail_writes: bool,
}

impl Script {
    /// Move due chunks to `rx`. An idle poll counts down the next chunk.
    fn release(&mut self, idle_poll: bool) {
        while let Some(chunk) = self.scheduled.front_mut() {
            if chunk.after > 0 {
                if idle_poll {
                    chunk.after -= 1;
                }
                return;
            }
            if let Some(chunk) = self.scheduled.pop_front() {
                self.rx.extend(chunk.bytes);
            }
            if !self.rx.is_empty() {
                return;
            }
        }
    }
}

/// Fake module: each `\r\n` terminated command written releases the next
/// queued reply. Clones share the same script, so a test keeps one clone to
/// inspect what the driver wrote.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the reply to the next command. An empty reply makes that
    /// command time out.
    pub fn reply(self, text: &str) -> Self {
        self.reply_in_parts(&[(0, text)])
    }

    /// Queue a reply that trickles in. Each part becomes readable after the
    /// given number of idle `read_ready` polls, counted from the previous part.
    /// The engine reads the clock once per idle poll, so with [`StepClock`]
    /// a poll is one millisecond.
    pub fn reply_in_parts(self, parts: &[(usize, &str)]) -> Self {
        let chunks = parts
            .iter()
            .map(|&(after, text)| Chunk {
                after,
                bytes: text.as_bytes().to_vec(),
            })
            .collect();
        self.inner.borrow_mut().replies.push_back(chunks);
        self
    }

    /// Bytes readable before any command is written.
    pub fn stray(self, text: &str) -> Self {
        self.inner.borrow_mut().rx.extend(text.bytes());
        self
    }

    pub fn fail_writes(self) -> Self {
        self.inner.borrow_mut().fail_writes = true;
        self
    }

    pub fn written(&self) -> Vec<u8> {
        self.inner.borrow().written.clone()
    }

    /// Commands written so far, without terminator.
    pub fn commands(&self) -> Vec<String> {
        self.inner.borrow().commands.clone()
    }

    pub fn unused_replies(&self) -> usize {
        self.inner.borrow().replies.len()
    }

    /// Bytes readable right now but not yet read.
    pub fn unread(&self) -> usize {
        self.inner.borrow().rx.len()
    }
}

impl ErrorType for ScriptedTransport {
    type Error = ScriptError;
}

impl Read for ScriptedTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut script = self.inner.borrow_mut();
        let mut n = 0;
        while n < buf.len() {
            match script.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

impl ReadReady for ScriptedTransport {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        let mut script = self.inner.borrow_mut();
        if script.rx.is_empty() {
            script.release(true);
        }
        Ok(!script.rx.is_empty())
    }
}

impl Write for ScriptedTransport {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut script = self.inner.borrow_mut();
        if script.fail_writes {
            return Err(ScriptError);
        }

        script.written.extend_from_slice(buf);
        for &b in buf {
            script.pending.push(b);
            if script.pending.ends_with(b"\r\n") {
                let len = script.pending.len() - 2;
                let command = String::from_utf8_lossy(&script.pending[..len]).into_owned();
                script.commands.push(command);
                script.pending.clear();

                if let Some(reply) = script.replies.pop_front() {
                    script.scheduled.extend(reply);
                    script.release(false);
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Link whose far end has gone away: always ready, every read returns zero
/// bytes, writes are swallowed.
#[derive(Debug, Default)]
pub struct EndOfStream {
    pub reads: usize,
}

impl ErrorType for EndOfStream {
    type Error = ScriptError;
}

impl Read for EndOfStream {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.reads += 1;
        Ok(0)
    }
}

impl ReadReady for EndOfStream {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

impl Write for EndOfStream {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Clock advancing one millisecond every time it is read, so deadlines pass
/// after a bounded number of polls.
#[derive(Debug, Default)]
pub struct StepClock {
    ticks: Cell<u64>,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        let t = self.ticks.get() + 1;
        self.ticks.set(t);
        Instant::from_millis(t)
    }
}
