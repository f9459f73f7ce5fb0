pub mod command;
pub mod runner;

pub use command::{rev_list_args, GIT};
pub use runner::{capture_success, CommandRunner, SystemRunner};
