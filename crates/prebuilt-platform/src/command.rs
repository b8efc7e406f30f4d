use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tracing::trace;

/// A program invocation, described as data so it can be logged and faked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What happens to a child's stdout and stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect both streams into [`CommandOutput`].
    Capture,
    /// Send both streams to the null device.
    Discard,
    /// Share the parent's terminal.
    Inherit,
}

impl OutputMode {
    /// `Inherit` when `verbose`, otherwise `Discard`.
    pub fn forwarded(verbose: bool) -> Self {
        if verbose { Self::Inherit } else { Self::Discard }
    }

    fn stdio(self) -> Stdio {
        match self {
            Self::Capture => Stdio::piped(),
            Self::Discard => Stdio::null(),
            Self::Inherit => Stdio::inherit(),
        }
    }
}

/// How a finished child process ended.
///
/// `stdout`/`stderr` are empty unless the command ran with [`OutputMode::Capture`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub signal: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn signaled(signal: i32) -> Self {
        Self {
            signal: Some(signal),
            ..Self::default()
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status, e.g. `exit code 2` or `signal 9`.
    pub fn status(&self) -> String {
        match (self.code, self.signal) {
            (Some(code), _) => format!("exit code {code}"),
            (None, Some(signal)) => format!("signal {signal}"),
            (None, None) => "abnormal termination".to_string(),
        }
    }

    /// Turn a non-zero exit into [`Error::CommandUnsuccessful`].
    pub fn check(self, command: &Command) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(Error::CommandUnsuccessful {
                cmd: command.to_string(),
                status: self.status(),
            })
        }
    }

    fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Capability to run subprocesses.
///
/// An `Err` means the child could not be started at all; every outcome of a
/// started child, including non-zero exits, is an `Ok(CommandOutput)`.
pub trait CommandRunner {
    fn run(
        &self,
        command: &Command,
        mode: OutputMode,
    ) -> impl Future<Output = Result<CommandOutput>>;
}

/// Runs commands as real child processes on the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

impl TokioRunner {
    /// Locate the program on `PATH`, so that `npm` finds `npm.cmd` on Windows.
    fn resolve(program: &str) -> OsString {
        which::which(program)
            .map(PathBuf::into_os_string)
            .unwrap_or_else(|_| OsString::from(program))
    }
}

impl CommandRunner for TokioRunner {
    async fn run(&self, command: &Command, mode: OutputMode) -> Result<CommandOutput> {
        trace!(%command, ?mode, "spawning");

        let mut inner = tokio::process::Command::new(Self::resolve(&command.program));
        inner
            .args(&command.args)
            .stdout(mode.stdio())
            .stderr(mode.stdio());
        if mode != OutputMode::Inherit {
            inner.stdin(Stdio::null());
        }
        if let Some(dir) = &command.current_dir {
            inner.current_dir(dir);
        }

        let spawn_error = |source| Error::CommandFailed {
            cmd: command.to_string(),
            source,
        };

        if mode == OutputMode::Capture {
            let output = inner.output().await.map_err(spawn_error)?;
            let mut result = CommandOutput::from_status(output.status);
            result.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            result.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            Ok(result)
        } else {
            let status = inner.status().await.map_err(spawn_error)?;
            Ok(CommandOutput::from_status(status))
        }
    }
}
