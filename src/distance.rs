//! Levenshtein edit distance and edit script reconstruction.

use serde::{Deserialize, Serialize};

/// A single step in an edit script transforming a source word into a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    Match,
    Substitute,
    Insert,
    Delete,
}

/// One edit operation, positioned against the source word (0-based).
///
/// `from` is `None` for insertions, `to` is `None` for deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub kind: EditKind,
    pub from: Option<char>,
    pub to: Option<char>,
    pub position: usize,
}

/// Minimum number of single-character insertions, deletions, and
/// substitutions needed to transform `a` into `b`.
///
/// Space-optimized to two rows; use [`operations`] when the actual
/// edit script is needed.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;

        for (j, &bc) in b.iter().enumerate() {
            curr[j + 1] = if ac == bc {
                prev[j]
            } else {
                let substitute = prev[j] + 1;
                let insert = curr[j] + 1;
                let delete = prev[j + 1] + 1;
                substitute.min(insert).min(delete)
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Full minimal edit script from `a` to `b`.
///
/// Builds the complete table and backtracks from the final cell. The
/// tie-break order during backtracking is fixed (match, substitution,
/// insertion, deletion) so scripts are reproducible for equal-cost
/// alternatives. The script is at most `|a| + |b|` operations long and
/// its non-match operations number exactly `distance(a, b)`.
pub fn operations(a: &str, b: &str) -> Vec<EditOp> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                let substitute = dp[i - 1][j - 1] + 1;
                let insert = dp[i][j - 1] + 1;
                let delete = dp[i - 1][j] + 1;
                substitute.min(insert).min(delete)
            };
        }
    }

    // Operations are discovered backward, so reverse before returning.
    let mut ops = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            ops.push(EditOp {
                kind: EditKind::Match,
                from: Some(a[i - 1]),
                to: Some(b[j - 1]),
                position: i - 1,
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && dp[i][j] == dp[i - 1][j - 1] + 1 {
            ops.push(EditOp {
                kind: EditKind::Substitute,
                from: Some(a[i - 1]),
                to: Some(b[j - 1]),
                position: i - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && dp[i][j] == dp[i][j - 1] + 1 {
            ops.push(EditOp {
                kind: EditKind::Insert,
                from: None,
                to: Some(b[j - 1]),
                position: i,
            });
            j -= 1;
        } else {
            ops.push(EditOp {
                kind: EditKind::Delete,
                from: Some(a[i - 1]),
                to: None,
                position: i - 1,
            });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Final row of the distance table between `word` and `target`.
///
/// Equivalent to `distance(word, target)` in cost but exposes the whole
/// last row, so a caller scanning many extensions of `word` can bail out
/// as soon as every cell exceeds its threshold.
pub fn partial_row(word: &str, target: &str) -> Vec<usize> {
    let word: Vec<char> = word.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let mut prev: Vec<usize> = (0..=target.len()).collect();
    if word.is_empty() {
        return prev;
    }

    let mut curr: Vec<usize> = vec![0; target.len() + 1];

    for (i, &wc) in word.iter().enumerate() {
        curr[0] = i + 1;

        for (j, &tc) in target.iter().enumerate() {
            curr[j + 1] = if wc == tc {
                prev[j]
            } else {
                let substitute = prev[j] + 1;
                let insert = curr[j] + 1;
                let delete = prev[j + 1] + 1;
                substitute.min(insert).min(delete)
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}
