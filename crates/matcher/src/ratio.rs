//! Indel similarity ratio.
//!
//! The score is `100 * (1 - indel / (len(a) + len(b)))`, where `indel` is the
//! minimum number of single-character insertions and deletions turning `a`
//! into `b`. Since `indel = len(a) + len(b) - 2 * lcs(a, b)` this equals the
//! share of characters that take part in the longest common subsequence.
//! Lengths are counted in Unicode scalar values, and strings are compared as
//! given (no case folding or trimming).

/// Similarity of `a` and `b` in `[0, 100]`. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    QueryScorer::new(a).score(b)
}

/// A query prepared once and scored against many choices.
#[derive(Debug, Clone)]
pub struct QueryScorer {
    chars: Vec<char>,
}

impl QueryScorer {
    pub fn new(query: &str) -> Self {
        Self {
            chars: query.chars().collect(),
        }
    }

    pub fn score(&self, choice: &str) -> f64 {
        let choice: Vec<char> = choice.chars().collect();
        let total = self.chars.len() + choice.len();
        if total == 0 {
            return 100.0;
        }

        let distance = total - 2 * lcs_len(&self.chars, &choice);
        100.0 * (1.0 - distance as f64 / total as f64)
    }
}

/// Length of the longest common subsequence, single-row DP over the shorter
/// input.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; short.len() + 1];
    for &lc in long {
        let mut diag = 0;
        for (j, &sc) in short.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if lc == sc { diag + 1 } else { up.max(row[j]) };
            diag = up;
        }
    }
    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(ratio("The Matrix", "The Matrix"), 100.0);
        assert_eq!(ratio("", ""), 100.0);
    }

    #[test]
    fn empty_against_non_empty_scores_0() {
        assert_eq!(ratio("", "Inception"), 0.0);
        assert_eq!(ratio("Inception", ""), 0.0);
    }

    #[test]
    fn disjoint_strings_score_0() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn single_insertion() {
        // 14 vs 15 chars, one insertion: 1 - 1/29
        assert!(approx(
            ratio("this is a test", "this is a test!"),
            100.0 * (1.0 - 1.0 / 29.0)
        ));
    }

    #[test]
    fn substring_scores_by_length_share() {
        assert!(approx(ratio("Matrix", "The Matrix"), 75.0));
        assert!(approx(ratio("Matrix", "The Matrix Reloaded"), 48.0));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        // "atrix" is the only common run once the M differs.
        assert!(approx(ratio("matrix", "The Matrix"), 62.5));
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            ("Inception", "Interstellar"),
            ("Alpha", "Beta"),
            ("kitten", "sitting"),
        ];
        for (a, b) in pairs {
            assert!(approx(ratio(a, b), ratio(b, a)), "{a} / {b}");
        }
    }

    #[test]
    fn counts_unicode_scalars_not_bytes() {
        assert!(approx(ratio("café", "cafe"), 75.0));
        assert!(approx(ratio("Amélie", "Amélie"), 100.0));
    }

    #[test]
    fn lcs_handles_interleaving() {
        assert_eq!(lcs_len(&['a', 'b', 'c', 'd'], &['a', 'c', 'b', 'd']), 3);
        assert_eq!(lcs_len(&[], &['a']), 0);
    }
}
