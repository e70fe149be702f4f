//! Deterministic ordering of assembled results.
//!
//! The comparator is a tie-break chain; each key decides only when every
//! prior key compares equal:
//!
//! 1. distance ascending, with differences under the deadband treated as
//!    equal so float noise never reorders results
//! 2. results carrying a distance before results without one
//! 3. verified before unverified
//! 4. fewer reports before more
//! 5. more recently verified first
//! 6. case-insensitive item name
//!
//! The sort is stable, so inputs that tie on the whole chain keep snapshot
//! order and identical inputs always produce identical output.

use std::cmp::Ordering;

use shelfsearch_core::{SearchConfig, SearchResult};

/// Sort results in place and truncate to the configured cap.
pub fn rank(results: &mut Vec<SearchResult>, config: &SearchConfig) {
    let deadband_km = config.distance_deadband_km;
    results.sort_by(|a, b| compare(a, b, deadband_km));
    results.truncate(config.result_cap);
}

fn compare(a: &SearchResult, b: &SearchResult, deadband_km: f64) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(dist_a), Some(dist_b)) => {
            if (dist_a - dist_b).abs() >= deadband_km {
                if dist_a < dist_b {
                    return Ordering::Less;
                }
                return Ordering::Greater;
            }
            // Within the deadband: fall through to the remaining keys.
        }
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => {}
    }

    b.item
        .verified
        .cmp(&a.item.verified)
        .then_with(|| a.item.report_count.cmp(&b.item.report_count))
        .then_with(|| b.item.verified_at.cmp(&a.item.verified_at))
        .then_with(|| {
            a.item
                .name
                .to_lowercase()
                .cmp(&b.item.name.to_lowercase())
        })
}
