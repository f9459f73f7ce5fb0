use crate::model::Filters;

/// Name of the git executable, resolved through `PATH`.
pub const GIT: &str = "git";

/// Argument vector for
/// `git rev-list --pretty=format:%ai [--since=..] [--author=..] --all`.
///
/// The since filter always precedes the author filter. Filter values are
/// passed through verbatim; git interprets them.
pub fn rev_list_args(filters: &Filters) -> Vec<String> {
    let mut args = vec![
        GIT.to_string(),
        "rev-list".to_string(),
        "--pretty=format:%ai".to_string(),
    ];

    if let Some(since) = &filters.since {
        args.push(format!("--since={since}"));
    }
    if let Some(author) = &filters.author {
        args.push(format!("--author={author}"));
    }

    args.push("--all".to_string());
    args
}
