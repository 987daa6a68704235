//! Recency-weighted sampling of journal entries.
//!
//! Each eligible entry gets a weight that halves every `half_life_days`
//! of age. Entries are then drawn one at a time without replacement, each
//! remaining candidate being chosen with probability proportional to its
//! weight. Recent entries tend to come first, but every entry keeps a
//! strictly positive chance, so old entries are never starved.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::f64::consts::LN_2;

use crate::domain::foundation::{EntryId, Timestamp, ValidationError};
use crate::domain::journal::EntryMetadata;

/// Which timestamp counts as an entry's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyBasis {
    #[default]
    LastModified,
    Created,
}

/// Tunables for the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    pub half_life_days: f64,
    pub basis: RecencyBasis,
    pub include_answered: bool,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            half_life_days: 7.0,
            basis: RecencyBasis::LastModified,
            include_answered: false,
        }
    }
}

/// Weighted-random, recency-biased selector.
#[derive(Debug, Clone)]
pub struct RecencySelector {
    policy: SelectionPolicy,
}

impl RecencySelector {
    /// Creates a selector.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the half-life is not a positive finite number
    pub fn new(policy: SelectionPolicy) -> Result<Self, ValidationError> {
        if !policy.half_life_days.is_finite() || policy.half_life_days <= 0.0 {
            return Err(ValidationError::invalid_format(
                "recency_half_life_days",
                format!("must be a positive number, got {}", policy.half_life_days),
            ));
        }
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Selection weight for an entry of the given age.
    ///
    /// 1.0 at age zero, 0.5 at one half-life, floored at the smallest
    /// positive `f64`.
    pub fn weight(&self, age_days: f64) -> f64 {
        let age = age_days.max(0.0);
        (-LN_2 * age / self.policy.half_life_days)
            .exp()
            .max(f64::MIN_POSITIVE)
    }

    /// Draws up to `count` distinct ids from `entries`, skipping `exclude`.
    ///
    /// Fewer eligible entries than `count` is not an error: all of them
    /// are returned, in weighted-random order.
    pub fn select<R: Rng + ?Sized>(
        &self,
        entries: &[EntryMetadata],
        count: usize,
        exclude: &HashSet<EntryId>,
        now: &Timestamp,
        rng: &mut R,
    ) -> Vec<EntryId> {
        let mut candidates = self.candidates(entries, exclude, now);
        let mut drawn = Vec::with_capacity(count.min(candidates.len()));

        while drawn.len() < count && !candidates.is_empty() {
            let total: f64 = candidates.iter().map(|(_, w)| w).sum();
            let target = rng.gen_range(0.0..total);
            let idx = locate(&candidates, target);
            let (id, _) = candidates.swap_remove(idx);
            drawn.push(id);
        }

        tracing::debug!(
            eligible = drawn.len() + candidates.len(),
            requested = count,
            drawn = drawn.len(),
            "recency draw"
        );
        drawn
    }

    /// [`select`](Self::select) with a reproducible seed.
    pub fn select_seeded(
        &self,
        entries: &[EntryMetadata],
        count: usize,
        exclude: &HashSet<EntryId>,
        now: &Timestamp,
        seed: u64,
    ) -> Vec<EntryId> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.select(entries, count, exclude, now, &mut rng)
    }

    /// [`select`](Self::select) with fresh OS-seeded randomness.
    pub fn select_fresh(
        &self,
        entries: &[EntryMetadata],
        count: usize,
        exclude: &HashSet<EntryId>,
        now: &Timestamp,
    ) -> Vec<EntryId> {
        let mut rng = StdRng::from_entropy();
        self.select(entries, count, exclude, now, &mut rng)
    }

    fn candidates(
        &self,
        entries: &[EntryMetadata],
        exclude: &HashSet<EntryId>,
        now: &Timestamp,
    ) -> Vec<(EntryId, f64)> {
        let mut seen = HashSet::with_capacity(entries.len());
        entries
            .iter()
            .filter(|e| self.policy.include_answered || !e.answered)
            .filter(|e| !exclude.contains(&e.id))
            .filter(|e| seen.insert(e.id))
            .map(|e| {
                let stamp = match self.policy.basis {
                    RecencyBasis::LastModified => e.last_modified,
                    RecencyBasis::Created => e.created_at,
                };
                (e.id, self.weight(stamp.age_in_days(now)))
            })
            .collect()
    }
}

/// Index of the candidate whose cumulative weight range contains `target`.
fn locate(candidates: &[(EntryId, f64)], target: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, (_, weight)) in candidates.iter().enumerate() {
        cumulative += weight;
        if target < cumulative {
            return i;
        }
    }
    // Rounding can leave target == total.
    candidates.len() - 1
}
