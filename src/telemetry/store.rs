use crate::domain::sample::Sample;
use crate::telemetry::dataset::builtin_samples;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionBucket {
    pub latencies: Vec<f64>,
    pub uptimes: Vec<f64>,
}

impl RegionBucket {
    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }
}

/// Samples grouped by region. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    buckets: HashMap<String, RegionBucket>,
    sample_count: usize,
}

impl DatasetStore {
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        let mut buckets: HashMap<String, RegionBucket> = HashMap::new();
        let mut sample_count = 0;
        for sample in samples {
            let bucket = buckets.entry(sample.region).or_default();
            bucket.latencies.push(sample.latency_ms);
            bucket.uptimes.push(sample.uptime_pct);
            sample_count += 1;
        }
        Self {
            buckets,
            sample_count,
        }
    }

    pub fn builtin() -> Self {
        Self::from_samples(builtin_samples())
    }

    pub fn bucket_for(&self, region: &str) -> Option<&RegionBucket> {
        self.buckets.get(region)
    }

    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.buckets.keys().cloned().collect();
        regions.sort();
        regions
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}
