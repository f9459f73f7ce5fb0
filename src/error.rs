use thiserror::Error;

pub type Result<T> = std::result::Result<T, RevListError>;

#[derive(Error, Debug)]
pub enum RevListError {
    #[error("Usage: {program}\n{message}")]
    Usage { program: String, message: String },
    #[error("Error executing '{program} rev-list'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} rev-list didn't return success ({})", describe_code(.code))]
    SubprocessExit { program: String, code: Option<i32> },
}

impl RevListError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RevListError::Usage { .. } | RevListError::Spawn { .. } => 1,
            RevListError::SubprocessExit { .. } => 2,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
