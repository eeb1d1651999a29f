//! Deterministic top-K selection.
//!
//! Candidates are ordered by descending composite score; equal scores are
//! ordered by ascending provider address, then by the rest of the provider
//! descriptor. The order is total even for repeated addresses, so the result
//! never depends on input order or on how scoring work was scheduled.
//!
//! Selection keeps a bounded max-heap of the K best entries seen so far, with
//! the worst of them on top: O(N log K) instead of sorting the whole pool.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::scoring::ScoredProvider;

/// Ranking order: better entries compare as `Less`.
pub fn rank_order(a: &ScoredProvider<'_>, b: &ScoredProvider<'_>) -> Ordering {
    b.score
        .composite
        .partial_cmp(&a.score.composite)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.score.address.cmp(&b.score.address))
        .then_with(|| a.provider.cmp(b.provider))
}

/// Sort entries in place, best first.
pub fn sort_ranked(scored: &mut [ScoredProvider<'_>]) {
    scored.sort_by(rank_order);
}

/// Return the best `k` entries, best first.
///
/// Returns all entries (ranked) when fewer than `k` are supplied; the result
/// is never padded.
pub fn select_top_k<'a>(scored: Vec<ScoredProvider<'a>>, k: usize) -> Vec<ScoredProvider<'a>> {
    if k == 0 {
        return Vec::new();
    }
    if scored.len() <= k {
        let mut all = scored;
        sort_ranked(&mut all);
        return all;
    }

    let mut heap: BinaryHeap<HeapEntry<'a>> = BinaryHeap::with_capacity(k);
    for entry in scored {
        let entry = HeapEntry(entry);
        if heap.len() < k {
            heap.push(entry);
        } else if let Some(mut worst) = heap.peek_mut() {
            if entry < *worst {
                *worst = entry;
            }
        }
    }

    heap.into_sorted_vec().into_iter().map(|e| e.0).collect()
}

/// Heap wrapper ordering entries by [`rank_order`].
struct HeapEntry<'a>(ScoredProvider<'a>);

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_order(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairing_types::{PairingScore, Provider};

    fn entries<'a>(providers: &'a [Provider], composites: &[f64]) -> Vec<ScoredProvider<'a>> {
        providers
            .iter()
            .zip(composites)
            .map(|(p, &c)| ScoredProvider {
                provider: p,
                score: PairingScore::new(p.address.clone(), c, c, 0.0, 1.0),
            })
            .collect()
    }

    fn addresses(selected: &[ScoredProvider<'_>]) -> Vec<String> {
        selected.iter().map(|s| s.provider.address.clone()).collect()
    }

    #[test]
    fn test_rank_order_tiebreak() {
        let pool = vec![Provider::new("a", 1), Provider::new("b", 1), Provider::new("c", 1)];
        let scored = entries(&pool, &[0.5, 0.5, 0.9]);
        let (a, b, c) = (&scored[0], &scored[1], &scored[2]);
        assert_eq!(rank_order(a, b), Ordering::Less);
        assert_eq!(rank_order(c, a), Ordering::Less);
        assert_eq!(rank_order(a, a), Ordering::Equal);
    }

    #[test]
    fn test_rank_order_repeated_address() {
        let pool = vec![
            Provider::new("dup", 100)
                .with_location("US")
                .with_features(["eth", "x"]),
            Provider::new("dup", 100)
                .with_location("DE")
                .with_features(["eth", "y"]),
        ];
        let scored = entries(&pool, &[0.5, 0.5]);
        assert_eq!(rank_order(&scored[1], &scored[0]), Ordering::Less);
        assert_eq!(rank_order(&scored[0], &scored[1]), Ordering::Greater);

        let forward = select_top_k(entries(&pool, &[0.5, 0.5]), 5);
        let reversed: Vec<Provider> = pool.iter().rev().cloned().collect();
        let backward = select_top_k(entries(&reversed, &[0.5, 0.5]), 5);
        let locations = |s: &[ScoredProvider<'_>]| -> Vec<String> {
            s.iter().map(|e| e.provider.location.clone()).collect()
        };
        assert_eq!(locations(&forward), vec!["DE", "US"]);
        assert_eq!(locations(&backward), locations(&forward));
    }

    #[test]
    fn test_select_top_k_truncates() {
        let pool: Vec<Provider> = (0..10).map(|i| Provider::new(format!("p{i}"), i)).collect();
        let composites: Vec<f64> = (0..10).map(|i| f64::from(i) / 10.0).collect();
        let selected = select_top_k(entries(&pool, &composites), 5);
        assert_eq!(addresses(&selected), vec!["p9", "p8", "p7", "p6", "p5"]);
    }

    #[test]
    fn test_select_fewer_than_k() {
        let pool = vec![Provider::new("x", 1), Provider::new("y", 2), Provider::new("z", 3)];
        let selected = select_top_k(entries(&pool, &[0.2, 0.9, 0.5]), 5);
        assert_eq!(addresses(&selected), vec!["y", "z", "x"]);
    }

    #[test]
    fn test_select_ties_by_address() {
        let pool = vec![
            Provider::new("delta", 1),
            Provider::new("alpha", 1),
            Provider::new("charlie", 1),
            Provider::new("bravo", 1),
            Provider::new("echo", 1),
            Provider::new("foxtrot", 1),
            Provider::new("golf", 1),
        ];
        let composites = [0.5; 7];
        let selected = select_top_k(entries(&pool, &composites), 5);
        assert_eq!(
            addresses(&selected),
            vec!["alpha", "bravo", "charlie", "delta", "echo"]
        );
    }

    #[test]
    fn test_heap_matches_full_sort() {
        let pool: Vec<Provider> = (0..200u64)
            .map(|i| Provider::new(format!("p{:03}", (i * 37) % 200), i))
            .collect();
        let composites: Vec<f64> = (0..200u32).map(|i| f64::from((i * 13) % 17) / 16.0).collect();

        let mut full = entries(&pool, &composites);
        sort_ranked(&mut full);
        full.truncate(5);

        let selected = select_top_k(entries(&pool, &composites), 5);
        assert_eq!(addresses(&selected), addresses(&full));
    }

    #[test]
    fn test_select_zero() {
        let pool = vec![Provider::new("x", 1)];
        assert!(select_top_k(entries(&pool, &[0.4]), 0).is_empty());
    }
}
