//! Reduction of overlapping candidate matches.

use crate::config::OverlapPolicy;
use crate::grammar::span::MatchSpan;

/// Reduce `candidates` according to `policy` and sort the result by position.
///
/// With [`OverlapPolicy::LongestWins`] candidates are visited in the order
/// given. A candidate that overlaps nothing accepted so far is accepted. One
/// that overlaps accepted spans replaces all of them if it is strictly longer
/// than each, and is dropped otherwise, so among equally long spans the one
/// seen first stays. The accepted spans never overlap each other.
///
/// [`OverlapPolicy::KeepAll`] only sorts. Sorting is stable: spans with the
/// same range keep their input order.
pub fn resolve_overlaps(candidates: Vec<MatchSpan>, policy: OverlapPolicy) -> Vec<MatchSpan> {
    let mut resolved = match policy {
        OverlapPolicy::KeepAll => candidates,
        OverlapPolicy::LongestWins => longest_wins(candidates),
    };
    resolved.sort_by_key(|span| (span.start, span.end));
    resolved
}

fn longest_wins(candidates: Vec<MatchSpan>) -> Vec<MatchSpan> {
    let mut accepted: Vec<MatchSpan> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let overlapping: Vec<usize> = accepted
            .iter()
            .enumerate()
            .filter(|(_, span)| span.overlaps(&candidate))
            .map(|(i, _)| i)
            .collect();

        if overlapping.is_empty() {
            accepted.push(candidate);
            continue;
        }
        if overlapping.iter().all(|&i| candidate.len() > accepted[i].len()) {
            for &i in overlapping.iter().rev() {
                accepted.remove(i);
            }
            accepted.push(candidate);
        }
    }

    accepted
}
