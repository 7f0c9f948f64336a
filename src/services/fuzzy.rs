use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub candidate: String,
    pub score: f64,
}

/// Longest common run `(i, j, len)` within `a[alo..ahi]` and `b[blo..bhi]`.
/// Among runs of equal length the one starting earliest in `a`, then in `b`,
/// wins.
fn longest_run(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    let mut prev = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        let mut cur = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let k = prev[j - blo] + 1;
            cur[j - blo + 1] = k;
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        prev = cur;
    }
    best
}

/// Characters covered by the matching runs: the longest run first, then the
/// same search on the pieces left and right of it.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![((0, a.len()), (0, b.len()))];
    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        let (i, j, k) = longest_run(a, b, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            pending.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            pending.push(((i + k, ahi), (j + k, bhi)));
        }
    }
    total
}

/// Ratcliff/Obershelp similarity in `[0, 1]`: twice the characters in the
/// matching runs over the combined length of both strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Best `limit` candidates scoring at least `cutoff`, highest score first.
/// Equal scores are ordered by candidate name.
pub fn close_matches<'a, I>(word: &str, candidates: I, limit: usize, cutoff: f64) -> Vec<ScoredMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    if limit == 0 {
        return vec![];
    }
    let mut scored: Vec<ScoredMatch> = candidates
        .into_iter()
        .map(|c| ScoredMatch {
            candidate: c.to_string(),
            score: similarity(word, c),
        })
        .filter(|m| m.score >= cutoff)
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::{close_matches, similarity};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_one() {
        assert!(approx(similarity("tylenol", "tylenol"), 1.0));
        assert!(approx(similarity("", ""), 1.0));
        assert!(approx(similarity("tylenol", "qqq"), 0.0));
        assert!(approx(similarity("tylenol", "xyz"), 0.2));
    }

    #[test]
    fn one_extra_letter_scores_high() {
        let s = similarity("tylenoll", "tylenol");
        assert!(s > 0.9, "score was {}", s);
    }

    #[test]
    fn scores_follow_matching_runs_not_scattered_letters() {
        assert!(approx(similarity("sinthroid", "aspirin"), 0.375));
        assert!(approx(similarity("moterin", "tylenol"), 1.0 / 7.0));
        assert!(approx(similarity("crestr", "synthroid"), 2.0 / 15.0));

        let m = close_matches("sinthroid", ["synthroid", "aspirin"].iter().copied(), 10, 0.5);
        let names: Vec<_> = m.iter().map(|x| x.candidate.as_str()).collect();
        assert_eq!(names, vec!["synthroid"]);
    }

    #[test]
    fn score_equal_to_cutoff_is_kept() {
        assert!(approx(similarity("ab", "ac"), 0.5));
        let m = close_matches("ab", ["ac", "zz"].iter().copied(), 10, 0.5);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].candidate, "ac");
    }

    #[test]
    fn close_matches_respects_cutoff_limit_and_order() {
        let brands = ["advil", "tylenol", "tylenol pm", "motrin"];
        let m = close_matches("tylenoll", brands.iter().copied(), 10, 0.5);
        let names: Vec<_> = m.iter().map(|x| x.candidate.as_str()).collect();
        assert_eq!(names[0], "tylenol");
        assert!(names.contains(&"tylenol pm"));
        assert!(!names.contains(&"advil"));

        let one = close_matches("tylenoll", brands.iter().copied(), 1, 0.5);
        assert_eq!(one.len(), 1);
        assert!(close_matches("tylenoll", brands.iter().copied(), 0, 0.5).is_empty());
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let m = close_matches("ab", ["ax", "aa"].iter().copied(), 10, 0.0);
        assert_eq!(m[0].candidate, "aa");
        assert_eq!(m[1].candidate, "ax");
    }
}
