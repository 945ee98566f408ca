use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::channel::{Connect, ConnectError};

#[derive(Default)]
struct State {
    connects: usize,
    writes: usize,
    written: Vec<u8>,
}

/// Scripted connector, refuses connections outright or fails selected write
/// attempts while counting every attempt it sees.
///
/// Attempt numbers are global over the connector's lifetime, not per stream,
/// so reconnect behavior can be scripted across connections. Clones share
/// their counters.
#[derive(Clone)]
pub struct MockConnector {
    state: Rc<RefCell<State>>,
    refuse: bool,
    failing_writes: Rc<Vec<usize>>,
    fail_all_writes: bool,
}

impl MockConnector {
    fn build(refuse: bool, failing_writes: &[usize], fail_all_writes: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(State::default())),
            refuse,
            failing_writes: Rc::new(failing_writes.to_vec()),
            fail_all_writes,
        }
    }

    /// Connects and writes always succeed.
    pub fn healthy() -> Self {
        Self::build(false, &[], false)
    }

    /// Every connect attempt is refused.
    pub fn refused() -> Self {
        Self::build(true, &[], false)
    }

    /// Connects succeed, the given (1-based) write attempts fail.
    pub fn failing_writes(attempts: &[usize]) -> Self {
        Self::build(false, attempts, false)
    }

    /// Connects succeed, every write fails.
    pub fn broken_pipe() -> Self {
        Self::build(false, &[], true)
    }

    pub fn connect_attempts(&self) -> usize {
        self.state.borrow().connects
    }

    pub fn write_attempts(&self) -> usize {
        self.state.borrow().writes
    }

    /// Everything successfully written, across connections.
    pub fn written(&self) -> String {
        String::from_utf8(self.state.borrow().written.clone()).unwrap()
    }
}

impl Connect for MockConnector {
    type Stream = MockStream;

    fn connect(&self) -> Result<MockStream, ConnectError> {
        let mut state = self.state.borrow_mut();
        state.connects += 1;

        if self.refuse {
            return Err(ConnectError::Connect(io::Error::from(
                io::ErrorKind::ConnectionRefused,
            )));
        }

        Ok(MockStream {
            state: Rc::clone(&self.state),
            failing_writes: Rc::clone(&self.failing_writes),
            fail_all_writes: self.fail_all_writes,
        })
    }
}

pub struct MockStream {
    state: Rc<RefCell<State>>,
    failing_writes: Rc<Vec<usize>>,
    fail_all_writes: bool,
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        state.writes += 1;

        if self.fail_all_writes || self.failing_writes.contains(&state.writes) {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }

        state.written.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
