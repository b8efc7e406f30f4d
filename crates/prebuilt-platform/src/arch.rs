//! Architecture detection.

use tracing::debug;

use crate::command::{Command, CommandRunner, OutputMode};

/// Architecture this binary was compiled for, as the JavaScript runtime spells it.
pub fn detect() -> &'static str {
    runtime_arch_name(std::env::consts::ARCH)
}

/// Ask `node` for `process.arch`, falling back to [`detect`] when that fails.
pub async fn from_runtime<R: CommandRunner>(runner: &R) -> String {
    let command = Command::new("node").args(["-p", "process.arch"]);
    let output = runner
        .run(&command, OutputMode::Capture)
        .await
        .and_then(|output| output.check(&command));
    match output {
        Ok(output) => match parse(&output.stdout) {
            Some(arch) => return arch,
            None => debug!(output = %output.stdout.trim(), "unexpected process.arch"),
        },
        Err(e) => debug!(error = %e, "process.arch query failed"),
    }
    detect().to_string()
}

/// Accept a single lowercase identifier such as `x64` or `loong64`.
pub fn parse(text: &str) -> Option<String> {
    let text = text.trim();
    let valid = !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    valid.then(|| text.to_string())
}

/// Map a Rust `target_arch` name to the runtime's naming (`x86_64` is `x64`).
pub fn runtime_arch_name(rust_arch: &str) -> &str {
    match rust_arch {
        "x86" => "ia32",
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "powerpc" => "ppc",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        "mips64" => "mips64el",
        other => other,
    }
}
