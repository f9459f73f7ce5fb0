use crate::error::RevListError;
use crate::git::SystemRunner;
use crate::model::Filters;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "rev-lister")]
#[command(about = "Count git commits per day")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "AUTHOR", help = "only count commits from AUTHOR")]
    pub author: Option<String>,

    #[arg(short, long, value_name = "DATE", help = "only count commits starting at DATE")]
    pub since: Option<String>,

    #[arg(long, help = "Draw a bar for every day, scaled to the busiest one")]
    pub bars: bool,
}

/// Outcome of parsing the command line.
#[derive(Debug)]
pub enum Parsed {
    Run(Cli),
    /// `--help` or `--version` was requested; the text is ready to print.
    Info(String),
}

impl Cli {
    /// Parse `args`, where the first item is the program name.
    pub fn try_parse_args<I, T>(args: I) -> Result<Parsed, RevListError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rev-lister".to_string());

        match <Self as Parser>::try_parse_from(&args) {
            Ok(cli) => Ok(Parsed::Run(cli)),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Parsed::Info(err.to_string()))
            }
            Err(err) => Err(RevListError::Usage {
                program,
                message: err.to_string().trim_end().to_string(),
            }),
        }
    }

    pub fn filters(&self) -> Filters {
        Filters {
            author: self.author.clone(),
            since: self.since.clone(),
        }
    }

    pub fn execute(self) -> Result<()> {
        let runner = SystemRunner;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        crate::count::exec(&runner, &self.filters(), self.bars, &mut out)
    }
}
