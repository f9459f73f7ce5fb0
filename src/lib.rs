pub mod cli;
pub mod count;
pub mod error;
pub mod git;
pub mod logger;
pub mod model;
pub mod util;
