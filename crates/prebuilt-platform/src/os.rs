//! Operating system and libc flavor detection.

use crate::command::{Command, CommandRunner, OutputMode};
use std::fmt;
use tracing::debug;

/// Alternative C libraries that produce binary-incompatible builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibcVariant {
    Musl,
}

impl LibcVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Musl => "musl",
        }
    }
}

/// The platform component of an asset name, e.g. `darwin` or `linux-musl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformTag {
    pub os: String,
    pub libc: Option<LibcVariant>,
}

impl PlatformTag {
    pub fn new(os: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            libc: None,
        }
    }

    pub fn with_libc(mut self, libc: LibcVariant) -> Self {
        self.libc = Some(libc);
        self
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.libc {
            Some(libc) => write!(f, "{}-{}", self.os, libc.as_str()),
            None => f.write_str(&self.os),
        }
    }
}

/// Map a Rust `target_os` name to the name the JavaScript runtime reports.
pub fn runtime_os_name(rust_os: &str) -> &str {
    match rust_os {
        "macos" => "darwin",
        "windows" => "win32",
        "solaris" | "illumos" => "sunos",
        other => other,
    }
}

/// Detect the platform tag of the running host.
///
/// Never fails: probes that cannot run degrade to the plain OS name.
pub async fn detect<R: CommandRunner>(runner: &R) -> PlatformTag {
    detect_for(std::env::consts::OS, runner).await
}

/// Detect the platform tag as if running on `rust_os`.
pub async fn detect_for<R: CommandRunner>(rust_os: &str, runner: &R) -> PlatformTag {
    let os = runtime_os_name(rust_os);
    if os != "linux" {
        return PlatformTag::new(os);
    }

    let tag = PlatformTag::new(os);

    let glibc = Command::new("getconf").arg("GNU_LIBC_VERSION");
    match runner.run(&glibc, OutputMode::Discard).await {
        Ok(output) if output.success() => {
            debug!("glibc detected");
            return tag;
        }
        Ok(output) => debug!(status = %output.status(), "glibc probe failed"),
        Err(e) => debug!(error = %e, "glibc probe failed to start"),
    }

    let ldd = Command::new("ldd").arg("--version");
    let output = match runner.run(&ldd, OutputMode::Capture).await {
        Ok(output) => output,
        Err(e) => {
            debug!(error = %e, "libc probe failed to start");
            return tag;
        }
    };

    // ldd prints its banner to stderr when it exits non-zero (musl does this)
    let text = match output.code {
        None => return tag,
        Some(0) => &output.stdout,
        Some(_) => &output.stderr,
    };
    if text.contains("musl") {
        debug!("musl detected");
        return tag.with_libc(LibcVariant::Musl);
    }
    tag
}
