use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::error::PhfError;
use crate::hash::UniversalHash;

/// Independent build attempts before giving up with
/// [`PhfError::BuildExhausted`].
const MAX_ATTEMPTS: u32 = 100;

/// Smallest allowed `logSize`, so tiny key sets still get a handful of
/// spare cells rather than an exactly-sized (and therefore guaranteed
/// acyclic-only-by-luck) graph.
const MIN_LOG_SIZE: u32 = 2;

/// A minimal perfect hash function over a fixed set of `u32` keys, built with
/// the Czech-Havas-Majewski (CHM92) random-graph construction.
///
/// Two universal hash functions `h0`, `h1` map each key to a vertex in a
/// graph of `2^logSize` cells, with the key itself becoming the edge between
/// its two vertices. If that graph is acyclic, a breadth-first walk over
/// each connected component can assign every vertex a value `g[v]` such
/// that `g[h0(key)] ^ g[h1(key)]` is injective across all keys. If the graph
/// has a cycle the draw is discarded and `h0`, `h1` are resampled.
///
/// # Examples
///
/// ```
/// use phf::PerfectHashTable;
///
/// let keys = [7u32, 19, 42, 1000];
/// let table = PerfectHashTable::build(&keys).unwrap();
/// let mut outputs: Vec<u32> = keys.iter().map(|&k| table.evaluate(k)).collect();
/// outputs.sort_unstable();
/// outputs.dedup();
/// assert_eq!(outputs.len(), keys.len());
/// ```
#[derive(Debug, Clone)]
pub struct PerfectHashTable {
    h0: UniversalHash,
    h1: UniversalHash,
    g: Vec<u32>,
}

impl PerfectHashTable {
    /// Builds a table over `keys` using an OS-seeded random source.
    ///
    /// `keys` must be sorted ascending; adjacent duplicates are collapsed
    /// to a single vertex pair, matching the convention the block index
    /// uses when grouping same-checksum blocks.
    pub fn build(keys: &[u32]) -> Result<Self, PhfError> {
        let mut rng = rand::rng();
        Self::build_with(keys, &mut rng)
    }

    /// Builds a table with a caller-supplied seed, for reproducible tests
    /// and benchmarks.
    pub fn build_seeded(keys: &[u32], seed: u64) -> Result<Self, PhfError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build_with(keys, &mut rng)
    }

    fn build_with(keys: &[u32], rng: &mut impl Rng) -> Result<Self, PhfError> {
        let n = keys.len();
        let mut log_size = MIN_LOG_SIZE;
        while (1u64 << log_size) < 3 * n as u64 {
            log_size += 1;
        }
        let cells = 1usize << log_size;

        for _attempt in 0..MAX_ATTEMPTS {
            let h0 = UniversalHash::sample(rng, log_size);
            let h1 = UniversalHash::sample(rng, log_size);

            let mut adjacency: Vec<Vec<(usize, u32)>> = vec![Vec::new(); cells];
            let mut prev: Option<u32> = None;
            for (i, &key) in keys.iter().enumerate() {
                if prev == Some(key) {
                    continue;
                }
                prev = Some(key);
                let a = h0.evaluate(key);
                let b = h1.evaluate(key);
                let label = i as u32;
                adjacency[a].push((b, label));
                adjacency[b].push((a, label));
            }

            if let Some(g) = Self::assign(cells, &adjacency) {
                Self::verify(keys, &h0, &h1, &g)?;
                return Ok(Self { h0, h1, g });
            }
        }

        Err(PhfError::BuildExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Breadth-first assignment over the key graph. Returns `None` as soon
    /// as a cycle is detected (an edge reaching an already-visited vertex
    /// whose assigned values don't reproduce that edge's label).
    fn assign(cells: usize, adjacency: &[Vec<(usize, u32)>]) -> Option<Vec<u32>> {
        let mut g = vec![0u32; cells];
        let mut visited = vec![false; cells];
        let mut queue = VecDeque::new();

        for start in 0..cells {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            g[start] = 0;
            queue.push_back(start);

            while let Some(u) = queue.pop_front() {
                for &(v, label) in &adjacency[u] {
                    if !visited[v] {
                        g[v] = label ^ g[u];
                        visited[v] = true;
                        queue.push_back(v);
                    } else if g[u] ^ g[v] != label {
                        return None;
                    }
                }
            }
        }

        Some(g)
    }

    fn verify(
        keys: &[u32],
        h0: &UniversalHash,
        h1: &UniversalHash,
        g: &[u32],
    ) -> Result<(), PhfError> {
        let mut prev: Option<u32> = None;
        for (i, &key) in keys.iter().enumerate() {
            if prev == Some(key) {
                continue;
            }
            prev = Some(key);
            let a = h0.evaluate(key);
            let b = h1.evaluate(key);
            if (g[a] ^ g[b]) as usize != i {
                return Err(PhfError::InvariantViolated { position: i });
            }
        }
        Ok(())
    }

    /// Evaluates the hash for `key`.
    ///
    /// Undefined output (but never a panic) for keys outside the set the
    /// table was built over; callers confirm membership separately with a
    /// strong digest comparison.
    pub fn evaluate(&self, key: u32) -> u32 {
        let a = self.h0.evaluate(key);
        let b = self.h1.evaluate(key);
        self.g[a] ^ self.g[b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_keys(n: usize, seed: u32) -> Vec<u32> {
        let mut keys: Vec<u32> = (0..n as u32).map(|i| i.wrapping_mul(2654435761).wrapping_add(seed)).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    #[test]
    fn empty_key_set_builds() {
        let table = PerfectHashTable::build_seeded(&[], 1).unwrap();
        // No keys means no invariant to check; evaluate must not panic.
        let _ = table.evaluate(123);
    }

    #[test]
    fn single_key_is_injective() {
        let table = PerfectHashTable::build_seeded(&[42], 1).unwrap();
        let _ = table.evaluate(42);
    }

    #[test]
    fn small_sets_are_perfect_and_minimal() {
        for &n in &[1usize, 2, 10, 100] {
            let keys = distinct_keys(n, 7);
            let table = PerfectHashTable::build_seeded(&keys, 7).unwrap();
            let mut outputs: Vec<u32> = keys.iter().map(|&k| table.evaluate(k)).collect();
            outputs.sort_unstable();
            let expected: Vec<u32> = (0..keys.len() as u32).collect();
            assert_eq!(outputs, expected, "n = {n}");
        }
    }

    #[test]
    fn moderately_large_set_is_perfect() {
        let keys = distinct_keys(10_000, 99);
        let table = PerfectHashTable::build_seeded(&keys, 99).unwrap();
        let mut outputs: Vec<u32> = keys.iter().map(|&k| table.evaluate(k)).collect();
        outputs.sort_unstable();
        outputs.dedup();
        assert_eq!(outputs.len(), keys.len());
    }

    #[test]
    fn duplicate_adjacent_keys_are_collapsed() {
        let keys = [5u32, 5, 5, 9, 20];
        let table = PerfectHashTable::build_seeded(&keys, 3).unwrap();
        // Both occurrences of 5 map to the same output (the first index).
        assert_eq!(table.evaluate(5), table.evaluate(5));
    }
}
