//! Platform fingerprinting for prebuilt native artifacts.
//!
//! Everything that has to ask the host machine a question lives here: the
//! platform tag (with Linux libc flavor), the CPU architecture name used in
//! asset filenames, the runtime's native ABI version, and the
//! [`CommandRunner`] capability used to run probes, verification scripts and
//! the fallback build.

pub use command::{Command, CommandOutput, CommandRunner, OutputMode, TokioRunner};
pub use error::{Error, Result};
pub use os::{LibcVariant, PlatformTag};

pub mod abi;
pub mod arch;
pub mod command;
mod error;
pub mod os;
