//! Unified diff rendering for conflict review

use std::fmt;

/// Lines of unchanged context around each change
pub const CONTEXT_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Context(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

impl Line<'_> {
    fn in_old(self) -> bool {
        !matches!(self, Line::Added(_))
    }

    fn in_new(self) -> bool {
        !matches!(self, Line::Removed(_))
    }
}

/// Render a unified diff of `old` → `new`. Returns an empty string when the
/// texts have identical lines.
pub fn unified_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let lines: Vec<Line<'_>> = diff::slice(&old_lines, &new_lines)
        .into_iter()
        .map(|d| match d {
            diff::Result::Left(l) => Line::Removed(*l),
            diff::Result::Both(l, _) => Line::Context(*l),
            diff::Result::Right(r) => Line::Added(*r),
        })
        .collect();

    let hunks = hunk_ranges(&lines);
    if hunks.is_empty() {
        return String::new();
    }

    UnifiedDiff {
        lines: &lines,
        hunks: &hunks,
        old_label,
        new_label,
    }
    .to_string()
}

/// Diffed lines grouped into hunks, ready to print
struct UnifiedDiff<'a> {
    lines: &'a [Line<'a>],
    hunks: &'a [(usize, usize)],
    old_label: &'a str,
    new_label: &'a str,
}

impl fmt::Display for UnifiedDiff<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {}", self.old_label)?;
        writeln!(f, "+++ {}", self.new_label)?;

        for &(start, end) in self.hunks {
            let before = &self.lines[..start];
            let hunk = &self.lines[start..end];
            let old_len = hunk.iter().filter(|l| l.in_old()).count();
            let new_len = hunk.iter().filter(|l| l.in_new()).count();

            writeln!(
                f,
                "@@ -{},{} +{},{} @@",
                hunk_start(before.iter().filter(|l| l.in_old()).count(), old_len),
                old_len,
                hunk_start(before.iter().filter(|l| l.in_new()).count(), new_len),
                new_len
            )?;

            for line in hunk {
                match line {
                    Line::Context(l) => writeln!(f, " {l}")?,
                    Line::Removed(l) => writeln!(f, "-{l}")?,
                    Line::Added(l) => writeln!(f, "+{l}")?,
                }
            }
        }

        Ok(())
    }
}

/// Line numbers are 1-based; an empty side points at the line before it.
fn hunk_start(before: usize, len: usize) -> usize {
    if len == 0 { before } else { before + 1 }
}

/// Group changed lines into `[start, end)` index ranges with context,
/// merging groups whose context would overlap.
fn hunk_ranges(lines: &[Line<'_>]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for (idx, _) in lines
        .iter()
        .enumerate()
        .filter(|(_, l)| !matches!(l, Line::Context(_)))
    {
        let start = idx.saturating_sub(CONTEXT_LINES);
        let end = (idx + CONTEXT_LINES + 1).min(lines.len());

        match ranges.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => ranges.push((start, end)),
        }
    }

    ranges
}
