//! Shared application state

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::types::DashboardStats;
use crate::utils::{Cached, TimeToLive};

/// State shared by all request handlers
pub struct AppState {
    /// The product catalog
    pub catalog: Arc<Catalog>,

    /// Server settings (thresholds, cache lifetime)
    pub config: ServerConfig,

    /// Dashboard figures, recomputed when the TTL runs out
    analytics: Mutex<Cached<DashboardStats>>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: ServerConfig) -> Self {
        let analytics = Mutex::new(Cached::new(TimeToLive(config.analytics_ttl)));
        Self {
            catalog: Arc::new(catalog),
            config,
            analytics,
        }
    }

    /// Dashboard analytics at the configured threshold, served from cache
    pub fn analytics(&self) -> DashboardStats {
        let mut cache = self.analytics.lock();
        cache
            .get_or_insert_with(|| {
                debug!("recomputing dashboard analytics");
                self.compute_analytics(self.config.low_stock_threshold)
            })
            .clone()
    }

    /// Dashboard analytics at an explicit threshold, bypassing the cache
    pub fn compute_analytics(&self, low_stock_threshold: f64) -> DashboardStats {
        self.catalog
            .analytics(low_stock_threshold, Utc::now(), self.config.recent_window)
    }

    /// Drop cached analytics so the next request recomputes them
    pub fn invalidate_analytics(&self) {
        self.analytics.lock().invalidate();
    }
}
