#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub region: String,
    /// Informational only; not used in aggregation.
    pub service: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
    /// Calendar day encoded as `YYYYMMDD`.
    pub timestamp: u32,
}

impl Sample {
    pub fn new(region: &str, service: &str, latency_ms: f64, uptime_pct: f64, timestamp: u32) -> Self {
        Self {
            region: region.to_string(),
            service: service.to_string(),
            latency_ms,
            uptime_pct,
            timestamp,
        }
    }
}
