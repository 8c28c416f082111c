use crate::domain::analytics::RegionStats;
use crate::telemetry::stats::{mean, percentile_linear, round_to};
use crate::telemetry::store::{DatasetStore, RegionBucket};
use indexmap::IndexMap;

pub const P95: f64 = 0.95;

/// Per-region statistics keyed in request order. Unknown regions get a
/// zero-filled entry; a repeated region keeps its first position and its last
/// computed entry.
pub fn analyze(store: &DatasetStore, regions: &[String], threshold_ms: i64) -> IndexMap<String, RegionStats> {
    let mut results = IndexMap::new();
    for region in regions {
        let stats = match store.bucket_for(region) {
            Some(bucket) => compute(bucket, threshold_ms),
            None => RegionStats::default(),
        };
        results.insert(region.clone(), stats);
    }
    results
}

pub fn compute(bucket: &RegionBucket, threshold_ms: i64) -> RegionStats {
    if bucket.is_empty() {
        return RegionStats::default();
    }

    let mut sorted = bucket.latencies.clone();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let threshold = threshold_ms as f64;
    let breaches = bucket.latencies.iter().filter(|l| **l > threshold).count() as u64;

    RegionStats {
        avg_latency: round_to(mean(&bucket.latencies), 2),
        p95_latency: round_to(percentile_linear(&sorted, P95), 2),
        avg_uptime: round_to(mean(&bucket.uptimes), 4),
        breaches,
    }
}
