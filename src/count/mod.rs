pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::count_revisions;
pub use exec::exec;
pub use output::print_counts;
