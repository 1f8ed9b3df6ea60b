/// Default price per million actions (USD)
pub const DEFAULT_ACTION_PRICE: f64 = 50.0;

/// Default price per GB-hour of active storage (USD)
pub const DEFAULT_ACTIVE_STORAGE_PRICE: f64 = 0.042;

/// Default price per GB-hour of retained storage (USD)
pub const DEFAULT_RETAINED_STORAGE_PRICE: f64 = 0.00105;

pub const ACTIONS_PER_MILLION: f64 = 1_000_000.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const NANOS_PER_DAY: f64 = 86_400.0 * 1_000_000_000.0;

/// Length of the month the workflow projection scales to
pub const PROJECTION_DAYS: f64 = 30.0;

/// Usage endpoint of the cloud billing API
pub const USAGE_API_URL: &str = "https://saas-api.tmprl.cloud/cloud/usage";
pub const USAGE_API_VERSION: &str = "2024-10-01-00";
pub const USAGE_PAGE_SIZE: u32 = 1000;

/// Upper bound on executions requested per listing page
pub const LIST_PAGE_SIZE: usize = 100;
pub const DEFAULT_WORKFLOW_LIMIT: usize = 100;

pub const API_KEY_ENV: &str = "TEMPORAL_API_KEY";
