/// Measurement of coin identity and supply records
pub const COIN_MEASUREMENT: &str = "coin";

/// Measurement of USD quote records
pub const QUOTE_MEASUREMENT: &str = "quote";

/// Measurement of investment lot records
pub const INVESTMENT_MEASUREMENT: &str = "investment";

/// InfluxDB Cloud endpoint used when the configuration names none
pub const DEFAULT_INFLUX_URL: &str = "https://eu-central-1-1.aws.cloud2.influxdata.com";

/// Calendar date format of investment lots in the configuration file
pub const INVESTMENT_DATE_FORMAT: &str = "%Y-%m-%d";
