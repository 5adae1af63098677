//! Column names and fixed column groupings of the marketing-campaign table.
//!
//! Header names must match the source CSV exactly; the vocabulary of the
//! categorical columns is open (whatever values appear in the data).

/// Exact header names of the source CSV.
pub mod col {
    pub const CAMPAIGN_BUDGET: &str = "Campaign_Budget";
    pub const AD_CLICK_RATE: &str = "Ad_Click_Rate";
    pub const CONVERSION_RATE: &str = "Conversion_Rate";
    pub const SOCIAL_MEDIA_FOLLOWERS: &str = "Social_Media_Followers";
    pub const EMAIL_OPEN_RATE: &str = "Email_Open_Rate";
    pub const CUSTOMER_RETENTION_RATE: &str = "Customer_Retention_Rate";
    pub const PLATFORM: &str = "Platform";
    pub const CAMPAIGN_TYPE: &str = "Campaign_Type";
    pub const TARGET_AUDIENCE: &str = "Target_Audience";
    pub const REGION: &str = "Region";
}

/// Numeric columns, in report order.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    col::CAMPAIGN_BUDGET,
    col::AD_CLICK_RATE,
    col::CONVERSION_RATE,
    col::SOCIAL_MEDIA_FOLLOWERS,
    col::EMAIL_OPEN_RATE,
    col::CUSTOMER_RETENTION_RATE,
];

/// Percentage-style columns coerced to Float64 during cleaning.
pub const PERCENTAGE_COLUMNS: [&str; 4] = [
    col::AD_CLICK_RATE,
    col::CONVERSION_RATE,
    col::EMAIL_OPEN_RATE,
    col::CUSTOMER_RETENTION_RATE,
];

/// Categorical columns, in report order.
pub const CATEGORICAL_COLUMNS: [&str; 4] = [
    col::PLATFORM,
    col::CAMPAIGN_TYPE,
    col::TARGET_AUDIENCE,
    col::REGION,
];

/// Grouping keys for the performance-metric tables, in report order.
pub const GROUP_KEY_COLUMNS: [&str; 2] = [col::CAMPAIGN_TYPE, col::PLATFORM];

/// Metrics averaged per group key.
pub const GROUP_METRIC_COLUMNS: [&str; 5] = [
    col::CAMPAIGN_BUDGET,
    col::AD_CLICK_RATE,
    col::CONVERSION_RATE,
    col::EMAIL_OPEN_RATE,
    col::CUSTOMER_RETENTION_RATE,
];

/// Row labels of the numeric statistics table, in display order.
pub const STATISTIC_LABELS: [&str; 10] = [
    "Count",
    "Mean",
    "Median",
    "Std Dev",
    "Min",
    "Max",
    "25th Percentile",
    "75th Percentile",
    "Skewness",
    "Kurtosis",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_columns_are_numeric() {
        for name in PERCENTAGE_COLUMNS {
            assert!(NUMERIC_COLUMNS.contains(&name));
        }
    }

    #[test]
    fn group_metrics_exclude_followers() {
        assert!(!GROUP_METRIC_COLUMNS.contains(&col::SOCIAL_MEDIA_FOLLOWERS));
        for name in GROUP_METRIC_COLUMNS {
            assert!(NUMERIC_COLUMNS.contains(&name));
        }
    }

    #[test]
    fn group_keys_are_categorical() {
        for name in GROUP_KEY_COLUMNS {
            assert!(CATEGORICAL_COLUMNS.contains(&name));
        }
    }
}
