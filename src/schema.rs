use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::args::BenchArgs;

/// One benchmark result, emitted as a single JSON line on stdout.
///
/// Field order is the wire order. Float fields are written with exactly
/// three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub alg: String,
    pub n: i64,
    pub seed: u64,

    #[serde(serialize_with = "fixed3")]
    pub wall_ms: f64,
    #[serde(serialize_with = "fixed3")]
    pub cpu_user_ms: f64,
    #[serde(serialize_with = "fixed3")]
    pub cpu_sys_ms: f64,
    #[serde(serialize_with = "fixed3")]
    pub rss_peak_mib: f64,

    pub threads: i32,
}

impl BenchRecord {
    /// Record with identity fields set and every measurement zeroed.
    pub fn new(alg: impl Into<String>, n: i64, seed: u64) -> Self {
        Self {
            alg: alg.into(),
            n,
            seed,
            wall_ms: 0.0,
            cpu_user_ms: 0.0,
            cpu_sys_ms: 0.0,
            rss_peak_mib: 0.0,
            threads: 0,
        }
    }

    /// The full output line, trailing newline included.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

impl From<&BenchArgs> for BenchRecord {
    fn from(args: &BenchArgs) -> Self {
        Self::new(args.alg.clone(), args.n, args.seed)
    }
}

fn fixed3<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Non-finite values have no JSON form.
    let value = if value.is_finite() { *value } else { 0.0 };
    let raw = RawValue::from_string(format!("{value:.3}")).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}
