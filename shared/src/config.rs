use serde::{Deserialize, Serialize};

/// Display and data-source settings for the dashboard.
///
/// Every field has a default, so a partial JSON object is enough to
/// override individual values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Location of the JSON dataset, relative to the page
    pub data_url: String,
    /// Text drawn on the chart surface before any row is selected
    pub placeholder_text: String,
    /// Chart legend name used when a selected id has no customer
    pub unknown_customer_label: String,
    pub currency_symbol: String,
    pub series_label_prefix: String,
    /// Bar fill and border colour, `#rrggbb`
    pub bar_color: String,
    pub chart_width: u32,
    pub chart_height: u32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: "js/data.json".to_string(),
            placeholder_text: "Select One To Get Data".to_string(),
            unknown_customer_label: "Undefined User".to_string(),
            currency_symbol: "$".to_string(),
            series_label_prefix: "Total Amount Of ".to_string(),
            bar_color: "#3182ce".to_string(),
            chart_width: 800,
            chart_height: 400,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn with_data_url(mut self, data_url: impl Into<String>) -> Self {
        self.data_url = data_url.into();
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    pub fn series_label(&self, customer_name: &str) -> String {
        format!("{}{}", self.series_label_prefix, customer_name)
    }

    /// Parsed log level, falling back to `Info` for unrecognised values
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_behaviour() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_url, "js/data.json");
        assert_eq!(config.placeholder_text, "Select One To Get Data");
        assert_eq!(config.unknown_customer_label, "Undefined User");
        assert_eq!(config.series_label("Bob"), "Total Amount Of Bob");
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"currency_symbol": "€", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.bar_color, "#3182ce");
    }

    #[test]
    fn test_builders_and_bad_level() {
        let config = DashboardConfig::default()
            .with_data_url("data/other.json")
            .with_log_level("loud");
        assert_eq!(config.data_url, "data/other.json");
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
