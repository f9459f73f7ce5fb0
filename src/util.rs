const COMMIT_HEADER: &str = "commit ";

/// Date key carried by a `git rev-list --pretty=format:%ai` output line.
///
/// Empty lines and `commit <sha>` header lines carry no date and yield
/// `None`; any other line yields everything before its first space.
pub fn date_key(line: &str) -> Option<&str> {
    if line.is_empty() || line.starts_with(COMMIT_HEADER) {
        return None;
    }
    line.split(' ').next()
}
