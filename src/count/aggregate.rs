use crate::model::RevisionCounts;
use crate::util::date_key;

/// Tally `git rev-list --pretty=format:%ai` output by date key.
pub fn count_revisions(output: &str) -> RevisionCounts {
    let mut counts = RevisionCounts::new();

    for key in output.split('\n').filter_map(date_key) {
        counts.increment(key);
    }

    counts
}
