//! Native-module ABI version of the installed JavaScript runtime.

use crate::command::{Command, CommandRunner, OutputMode};
use crate::error::{Error, Result};

/// Ask `node` for its `process.versions.modules` value.
pub async fn detect<R: CommandRunner>(runner: &R) -> Result<String> {
    let command = Command::new("node").args(["-p", "process.versions.modules"]);
    let output = runner
        .run(&command, OutputMode::Capture)
        .await?
        .check(&command)?;
    parse(&output.stdout).ok_or_else(|| Error::UnexpectedOutput {
        cmd: command.to_string(),
        output: output.stdout.clone(),
    })
}

/// Accept a bare positive integer, surrounding whitespace allowed.
pub fn parse(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())).then(|| text.to_string())
}
