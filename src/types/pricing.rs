use crate::constants::{
    ACTIONS_PER_MILLION, DEFAULT_ACTION_PRICE, DEFAULT_ACTIVE_STORAGE_PRICE,
    DEFAULT_RETAINED_STORAGE_PRICE,
};
use serde::Serialize;

/// Configurable prices used to turn usage into cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pricing {
    #[serde(rename = "actionPricePerMillion")]
    pub action_price_per_million: f64,
    #[serde(rename = "activeStoragePricePerGBh")]
    pub active_storage_price_per_gbh: f64,
    #[serde(rename = "retainedStoragePricePerGBh")]
    pub retained_storage_price_per_gbh: f64,
}

impl Pricing {
    #[inline]
    pub fn action_cost(&self, actions: f64) -> f64 {
        action_cost(actions, self.action_price_per_million)
    }

    #[inline]
    pub fn active_storage_cost(&self, gbh: f64) -> f64 {
        gbh * self.active_storage_price_per_gbh
    }

    #[inline]
    pub fn retained_storage_cost(&self, gbh: f64) -> f64 {
        gbh * self.retained_storage_price_per_gbh
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            action_price_per_million: DEFAULT_ACTION_PRICE,
            active_storage_price_per_gbh: DEFAULT_ACTIVE_STORAGE_PRICE,
            retained_storage_price_per_gbh: DEFAULT_RETAINED_STORAGE_PRICE,
        }
    }
}

/// Cost of a number of actions at a per-million price
#[inline]
pub fn action_cost(actions: f64, price_per_million: f64) -> f64 {
    (actions / ACTIONS_PER_MILLION) * price_per_million
}
