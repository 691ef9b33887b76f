//! Scripted stand-in for yt-dlp.

use std::cell::RefCell;
use std::io;

use tcdl_core::exec::{ExecError, ToolExecutor};

/// What the fake returns for each kind of call.
pub enum Reply {
    Stdout(&'static str),
    Exit(i32),
    NotFound,
    Interrupted,
    /// Spawn failure other than a missing binary.
    Io(io::ErrorKind),
}

pub struct FakeExecutor {
    capture_reply: Reply,
    run_reply: Reply,
    pub captured: RefCell<Vec<Vec<String>>>,
    pub ran: RefCell<Vec<Vec<String>>>,
}

impl FakeExecutor {
    pub fn new(capture_reply: Reply, run_reply: Reply) -> Self {
        Self {
            capture_reply,
            run_reply,
            captured: RefCell::new(Vec::new()),
            ran: RefCell::new(Vec::new()),
        }
    }

    pub fn last_run(&self) -> Vec<String> {
        self.ran.borrow().last().cloned().expect("download was run")
    }
}

fn fail(reply: &Reply, argv: &[String]) -> ExecError {
    match reply {
        Reply::NotFound => ExecError::NotFound {
            program: argv[0].clone(),
        },
        Reply::Interrupted => ExecError::Interrupted,
        Reply::Io(kind) => ExecError::from_io(&argv[0], io::Error::from(*kind)),
        _ => unreachable!("not a failure reply"),
    }
}

impl ToolExecutor for FakeExecutor {
    async fn capture(&self, argv: &[String]) -> Result<String, ExecError> {
        self.captured.borrow_mut().push(argv.to_vec());
        match &self.capture_reply {
            Reply::Stdout(out) => Ok(out.to_string()),
            Reply::Exit(_) => Ok(String::new()),
            other => Err(fail(other, argv)),
        }
    }

    async fn run(&self, argv: &[String]) -> Result<i32, ExecError> {
        self.ran.borrow_mut().push(argv.to_vec());
        match &self.run_reply {
            Reply::Exit(code) => Ok(*code),
            Reply::Stdout(_) => Ok(0),
            other => Err(fail(other, argv)),
        }
    }
}

pub fn count(cmd: &[String], flag: &str) -> usize {
    cmd.iter().filter(|a| *a == flag).count()
}

/// Value following `flag` in `cmd`.
pub fn value_of<'a>(cmd: &'a [String], flag: &str) -> Option<&'a str> {
    cmd.iter()
        .position(|a| a == flag)
        .and_then(|i| cmd.get(i + 1))
        .map(String::as_str)
}
