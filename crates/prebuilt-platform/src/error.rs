use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("command failed to start: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command `{cmd}` exited unsuccessfully ({status})")]
    CommandUnsuccessful { cmd: String, status: String },

    #[error("unexpected output from `{cmd}`: {output:?}")]
    UnexpectedOutput { cmd: String, output: String },
}
