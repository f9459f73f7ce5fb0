use crate::error::{Result, RevListError};
use crate::model::Captured;
use std::process::{Command, Stdio};

/// Runs an external command to completion and captures its stdout.
pub trait CommandRunner {
    /// `argv[0]` is the program, the rest are its arguments.
    fn run(&self, argv: &[String]) -> Result<Captured>;
}

/// Spawns real processes in the current directory, searching `PATH`
/// for the program.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<Captured> {
        let (program, args) = argv.split_first().ok_or_else(|| RevListError::Spawn {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        })?;

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let output = command.output().map_err(|source| RevListError::Spawn {
            program: program.clone(),
            source,
        })?;

        Ok(Captured {
            stdout: output.stdout,
            code: output.status.code(),
        })
    }
}

/// Run `argv` and hand back its output as text, but only on exit status 0.
pub fn capture_success<R: CommandRunner + ?Sized>(runner: &R, argv: &[String]) -> Result<String> {
    let captured = runner.run(argv)?;
    if !captured.success() {
        // The partial output is dropped here without being looked at.
        return Err(RevListError::SubprocessExit {
            program: argv.first().cloned().unwrap_or_default(),
            code: captured.code,
        });
    }

    log::debug!("captured {} bytes from {}", captured.stdout.len(), argv.join(" "));
    Ok(String::from_utf8_lossy(&captured.stdout).into_owned())
}
