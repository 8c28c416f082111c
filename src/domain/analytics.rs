use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsRequest {
    pub regions: Vec<String>,
    #[serde(deserialize_with = "integral_threshold")]
    pub threshold_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionStats {
    #[serde(serialize_with = "zero_as_integer")]
    pub avg_latency: f64,
    #[serde(serialize_with = "zero_as_integer")]
    pub p95_latency: f64,
    #[serde(serialize_with = "zero_as_integer")]
    pub avg_uptime: f64,
    pub breaches: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: &str, details: Option<String>) -> Self {
        Self {
            error: ErrorPayload {
                code: code.to_string(),
                message: message.to_string(),
                details,
            },
        }
    }
}

// The no-data entry is written as `0`, not `0.0`.
fn zero_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *value == 0.0 {
        serializer.serialize_u64(0)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawThreshold {
    Int(i64),
    Float(f64),
}

// Whole-valued floats such as `150.0` are accepted; anything with a fraction is not.
fn integral_threshold<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawThreshold::deserialize(deserializer)? {
        RawThreshold::Int(v) => Ok(v),
        RawThreshold::Float(v)
            if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
        {
            Ok(v as i64)
        }
        RawThreshold::Float(v) => Err(serde::de::Error::custom(format!(
            "threshold_ms must be an integer, got {v}"
        ))),
    }
}
