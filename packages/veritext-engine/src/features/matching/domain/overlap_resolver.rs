//! Overlap Resolution
//!
//! Matchers emit candidate regions freely; the resolver reduces any candidate
//! set to pairwise-disjoint suspect-side spans, preferring longer matches.
//! Runs per-algorithm inside each matcher and once more over the pooled set
//! in the pipelines.

use super::similarity_match::SimilarityMatch;

/// Longest-first greedy selection of non-overlapping matches
pub struct OverlapResolver;

impl OverlapResolver {
    /// Resolve overlaps, keeping the longest matches.
    ///
    /// Sort is stable, so equal-length candidates keep their input order.
    /// Touching spans (`end == start`) do not overlap. Idempotent: resolving
    /// an already-resolved set returns it unchanged.
    pub fn resolve(matches: Vec<SimilarityMatch>) -> Vec<SimilarityMatch> {
        let mut candidates = matches;
        candidates.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut kept: Vec<SimilarityMatch> = Vec::new();
        for candidate in candidates {
            if !kept.iter().any(|k| candidate.overlaps(k)) {
                kept.push(candidate);
            }
        }
        kept
    }

    /// Pool per-algorithm result sets, then resolve the union
    pub fn merge_sets(sets: Vec<Vec<SimilarityMatch>>) -> Vec<SimilarityMatch> {
        let total = sets.iter().map(Vec::len).sum();
        let mut pooled = Vec::with_capacity(total);
        for set in sets {
            pooled.extend(set);
        }
        Self::resolve(pooled)
    }
}
