use rev_lister::cli::{Cli, Parsed};
use rev_lister::error::RevListError;
use std::process::ExitCode;

fn main() -> ExitCode {
    rev_lister::logger::init();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::Info(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::warn!("{err:#}");
            let code = err.downcast_ref::<RevListError>().map_or(1, RevListError::exit_code);
            ExitCode::from(code)
        }
    }
}
