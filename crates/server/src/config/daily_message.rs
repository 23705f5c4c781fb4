use serde::Deserialize;

/// Daily message service settings.
#[derive(Debug, Deserialize)]
pub struct DailyMessageConfig {
    /// IANA time zone whose calendar day selects the message.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DailyMessageConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Tokyo".to_owned()
}
