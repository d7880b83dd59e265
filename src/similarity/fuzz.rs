//! Fuzzy string metrics on a 0-100 scale
//!
//! All metrics are built on the indel (insert/delete only) normalized
//! similarity: `2 * lcs(a, b) / (len(a) + len(b))`. Lengths are in chars.

use std::collections::BTreeSet;

/// Length of the longest common subsequence of two char slices
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Single-row DP over the shorter slice
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for &lc in long {
        let mut diag = 0;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }

    row[short.len()]
}

fn normalized(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_len(a, b) as f64 / total as f64
}

/// Plain ratio of two strings
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    normalized(&a, &b)
}

/// Best ratio of the shorter string against any same-length window of the longer
///
/// Windows hanging off either end of the longer string are scored too, so a
/// short needle matching only the head or tail still counts.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let m = short.len();
    let n = long.len();

    let mut best: f64 = 0.0;

    // Head windows shorter than the needle
    for end in 1..m {
        best = best.max(normalized(short, &long[..end]));
    }

    // Full-width windows
    for start in 0..=(n - m) {
        best = best.max(normalized(short, &long[start..start + m]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Tail windows shorter than the needle
    for start in (n - m + 1)..n {
        best = best.max(normalized(short, &long[start..]));
    }

    best
}

/// Whitespace tokens of a string
fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Ratio after sorting each string's tokens
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let mut ta = tokens(a);
    let mut tb = tokens(b);
    ta.sort_unstable();
    tb.sort_unstable();
    ratio(&ta.join(" "), &tb.join(" "))
}

/// Ratio over token-set intersection and differences
///
/// Returns 100 when one token set is a subset of the other and they share at
/// least one token.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let sa: BTreeSet<&str> = tokens(a).into_iter().collect();
    let sb: BTreeSet<&str> = tokens(b).into_iter().collect();

    if sa.is_empty() || sb.is_empty() {
        return if sa.is_empty() && sb.is_empty() { 100.0 } else { 0.0 };
    }

    let intersection: Vec<&str> = sa.intersection(&sb).copied().collect();
    let diff_ab: Vec<&str> = sa.difference(&sb).copied().collect();
    let diff_ba: Vec<&str> = sb.difference(&sa).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let sect = intersection.join(" ");
    let join = |diff: &[&str]| {
        if sect.is_empty() {
            diff.join(" ")
        } else {
            format!("{} {}", sect, diff.join(" "))
        }
    };
    let combined_ab = join(&diff_ab);
    let combined_ba = join(&diff_ba);

    let mut best = ratio(&combined_ab, &combined_ba);
    if !sect.is_empty() {
        best = best
            .max(ratio(&sect, &combined_ab))
            .max(ratio(&sect, &combined_ba));
    }
    best
}
