//! Mock cache server and client subscription config stubs.

use std::sync::{
    atomic::{AtomicU16, Ordering},
    Arc,
};

use grid_api::{
    CacheServer, ClientSubscriptionConfig, DEFAULT_CACHE_SERVER_PORT,
    DEFAULT_CLIENT_SUBSCRIPTION_CAPACITY, DEFAULT_CLIENT_SUBSCRIPTION_EVICTION_POLICY,
};
use parking_lot::Mutex;

/// Mock cache server with a settable port and one subscription config.
#[derive(Debug)]
pub struct MockCacheServer {
    port: AtomicU16,
    client_subscription_config: Arc<MockClientSubscriptionConfig>,
}

impl Default for MockCacheServer {
    fn default() -> Self {
        Self {
            port: AtomicU16::new(DEFAULT_CACHE_SERVER_PORT),
            client_subscription_config: Arc::new(MockClientSubscriptionConfig::default()),
        }
    }
}

impl CacheServer for MockCacheServer {
    fn port(&self) -> u16 {
        self.port.load(Ordering::SeqCst)
    }

    fn set_port(&self, port: u16) {
        self.port.store(port, Ordering::SeqCst);
    }

    fn client_subscription_config(&self) -> Arc<dyn ClientSubscriptionConfig> {
        Arc::clone(&self.client_subscription_config) as _
    }
}

/// Mock client subscription config.
///
/// Eviction policy values are lower-cased on write, so reads always return
/// the normalized form.
#[derive(Debug)]
pub struct MockClientSubscriptionConfig {
    state: Mutex<ConfigState>,
}

#[derive(Debug)]
struct ConfigState {
    capacity: u32,
    disk_store_name: Option<String>,
    eviction_policy: String,
}

impl Default for MockClientSubscriptionConfig {
    fn default() -> Self {
        Self {
            state: Mutex::new(ConfigState {
                capacity: DEFAULT_CLIENT_SUBSCRIPTION_CAPACITY,
                disk_store_name: None,
                eviction_policy: DEFAULT_CLIENT_SUBSCRIPTION_EVICTION_POLICY.to_owned(),
            }),
        }
    }
}

impl ClientSubscriptionConfig for MockClientSubscriptionConfig {
    fn capacity(&self) -> u32 {
        self.state.lock().capacity
    }

    fn set_capacity(&self, capacity: u32) {
        self.state.lock().capacity = capacity;
    }

    fn disk_store_name(&self) -> Option<String> {
        self.state.lock().disk_store_name.clone()
    }

    fn set_disk_store_name(&self, name: &str) {
        self.state.lock().disk_store_name = Some(name.to_owned());
    }

    fn eviction_policy(&self) -> String {
        self.state.lock().eviction_policy.clone()
    }

    fn set_eviction_policy(&self, policy: &str) {
        self.state.lock().eviction_policy = policy.to_lowercase();
    }
}
