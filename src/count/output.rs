use crate::model::RevisionCounts;
use console::style;
use std::io::Write;

/// Width of the bar drawn for the largest count.
const BAR_WIDTH: usize = 40;

/// Print one `<key>: <count>` line per date, ordered by key.
///
/// With `bars` set, each line is followed by a run of `#` scaled against
/// the largest count.
pub fn print_counts<W: Write>(out: &mut W, counts: &RevisionCounts, bars: bool) -> std::io::Result<()> {
    let max = counts.max_count();

    for (key, count) in counts.sorted() {
        if bars {
            let bar = "#".repeat(bar_len(count, max));
            writeln!(out, "{key}: {count} {}", style(bar).green())?;
        } else {
            writeln!(out, "{key}: {count}")?;
        }
    }

    Ok(())
}

fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count_revisions;
    use pretty_assertions::assert_eq;

    fn render(counts: &RevisionCounts, bars: bool) -> String {
        let mut out = Vec::new();
        print_counts(&mut out, counts, bars).unwrap();
        console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned()
    }

    #[test]
    fn plain_lines() {
        let counts = count_revisions("commit a\n2024-01-02 x\ncommit b\n2024-01-01 y\ncommit c\n2024-01-02 z\n");
        assert_eq!(render(&counts, false), "2024-01-01: 1\n2024-01-02: 2\n");
    }

    #[test]
    fn nothing_printed_for_no_entries() {
        assert_eq!(render(&RevisionCounts::new(), false), "");
        assert_eq!(render(&RevisionCounts::new(), true), "");
    }

    #[test]
    fn bars_scale_with_the_maximum() {
        let mut counts = RevisionCounts::new();
        for _ in 0..4 {
            counts.increment("2024-01-01");
        }
        counts.increment("2024-01-02");

        let expected = format!("2024-01-01: 4 {}\n2024-01-02: 1 {}\n", "#".repeat(40), "#".repeat(10));
        assert_eq!(render(&counts, true), expected);
    }

    #[test]
    fn bar_len_never_zero_for_counted_keys() {
        assert_eq!(bar_len(1, 1000), 1);
        assert_eq!(bar_len(1000, 1000), BAR_WIDTH);
        assert_eq!(bar_len(0, 0), 0);
    }
}
