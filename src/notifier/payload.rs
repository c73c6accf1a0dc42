//! Wire payload for the provisioning request.
//!
//! The receiving endpoint expects exactly three string fields: the raw
//! username, the standard base64 encoding of the password, and an RFC 3339
//! timestamp pinned to UTC+05:30 regardless of the host time zone.

use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use jiff::Timestamp;
use jiff::tz::{Offset, TimeZone};
use serde::{Deserialize, Serialize};

/// Fixed payload timestamp offset: UTC+05:30
const PAYLOAD_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

static PAYLOAD_TZ: LazyLock<TimeZone> = LazyLock::new(|| {
    let offset =
        Offset::from_seconds(PAYLOAD_OFFSET_SECONDS).expect("+05:30 is a valid UTC offset");
    TimeZone::fixed(offset)
});

/// The JSON body posted to the configured endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionPayload {
    /// Account name, sent verbatim
    pub username: String,
    /// Standard (padded) base64 of the raw password
    pub password: String,
    /// RFC 3339 timestamp at +05:30, e.g. `2024-01-15T14:30:00+05:30`
    pub timestamp: String,
}

impl ProvisionPayload {
    /// Build a payload for the current wall-clock time
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: BASE64_STANDARD.encode(password.as_bytes()),
            timestamp: format_timestamp(Timestamp::now()),
        }
    }
}

/// Format `at` as RFC 3339 at the fixed +05:30 offset, second precision
fn format_timestamp(at: Timestamp) -> String {
    at.to_zoned(PAYLOAD_TZ.clone())
        .strftime("%Y-%m-%dT%H:%M:%S%:z")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_password_is_standard_padded_base64() {
        let payload = ProvisionPayload::new("deploy-bot", "hunter2");
        assert_eq!(payload.password, "aHVudGVyMg==");
    }

    #[test]
    fn test_password_round_trip() {
        let payload = ProvisionPayload::new("deploy-bot", "s3cr3t!/+=");
        let decoded = BASE64_STANDARD.decode(&payload.password).unwrap();
        assert_eq!(decoded, b"s3cr3t!/+=");
    }

    #[test]
    fn test_username_is_raw() {
        let payload = ProvisionPayload::new("deploy-bot", "x");
        assert_eq!(payload.username, "deploy-bot");
    }

    #[test]
    fn test_timestamp_offset_is_fixed() {
        // The offset must not depend on the host time zone
        let payload = ProvisionPayload::new("u", "p");
        assert!(
            payload.timestamp.ends_with("+05:30"),
            "timestamp '{}' does not carry the fixed offset",
            payload.timestamp
        );
        // and the whole string must be parseable RFC 3339
        payload.timestamp.parse::<Timestamp>().unwrap();
    }

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(
            format_timestamp(Timestamp::UNIX_EPOCH),
            "1970-01-01T05:30:00+05:30"
        );
    }

    #[test]
    fn test_format_timestamp_known_instant() {
        let at: Timestamp = "2024-01-15T09:00:00Z".parse().unwrap();
        assert_eq!(format_timestamp(at), "2024-01-15T14:30:00+05:30");
    }

    #[test]
    fn test_json_field_names() {
        let payload = ProvisionPayload::new("u", "p");
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("username"));
        assert!(object.contains_key("password"));
        assert!(object.contains_key("timestamp"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_any_password_round_trips(password in "[ -~]{0,128}") {
            let payload = ProvisionPayload::new("user", &password);
            let decoded = BASE64_STANDARD.decode(&payload.password).unwrap();
            prop_assert_eq!(decoded, password.as_bytes());
        }
    }
}
