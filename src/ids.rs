use chrono::{SecondsFormat, Utc};

/// Generate a prefixed identifier: `{prefix}_{time_hex}_{random_hex}`.
///
/// Not cryptographic; uniqueness within a single catalog is all that is
/// needed.
pub fn uid(prefix: &str) -> String {
    let t = Utc::now().timestamp_millis();
    let rnd: u64 = rand::random();
    format!("{}_{:x}_{:x}", prefix, t, rnd)
}

/// Current time as an RFC 3339 string, for `updatedAt`/`exportedAt` stamps.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
