//! Client API surface of the in-memory data grid.
//!
//! # Design
//!
//! Application code talks to the grid through a small set of narrow traits,
//! one per cache API type: a [`Cache`] owns named, hierarchical [`Region`]s
//! (key-value namespaces), regions carry a [`RegionAttributes`] snapshot that
//! can be replaced through an [`AttributesMutator`], and change events flow to
//! [`AsyncEventListener`]s through [`AsyncEventQueue`]s. Server-side concerns
//! surface as [`CacheServer`] and its [`ClientSubscriptionConfig`].
//!
//! Keys are strings and values are opaque [`Bytes`] payloads, with no support
//! for structured payloads.
//!
//! This avoids:
//!
//! * Forward compatibility challenges where newer data can't roundtrip through
//!   older peers
//! * Coupling the API surface to any one serialization framework
//!
//! While providing the following benefits:
//!
//! * Simple to introspect, debug and reason about
//! * Trivial to fake in tests
//!
//! The traits are object-safe on purpose: test doubles (see the `grid_mocks`
//! crate) implement them as explicit stub objects and are handed around as
//! `Arc<dyn ...>` trait objects, so identity of related objects (a mutator's
//! owning region, a server's subscription config) is observable through
//! pointer equality.

#![warn(missing_docs)]

// Workaround for "unused crate" lint false positives.
use workspace_hack as _;

use std::sync::Arc;

use bytes::Bytes;

mod error;
pub mod path;
mod types;

pub use error::{Error, Result};
pub use types::{AsyncEvent, DataPolicy, Operation, RegionAttributes};

/// Default port a [`CacheServer`] listens on.
pub const DEFAULT_CACHE_SERVER_PORT: u16 = 40404;

/// Default client subscription queue capacity.
pub const DEFAULT_CLIENT_SUBSCRIPTION_CAPACITY: u32 = 1;

/// Default client subscription eviction policy.
pub const DEFAULT_CLIENT_SUBSCRIPTION_EVICTION_POLICY: &str = "none";

/// Entry point for resolving regions.
pub trait RegionService: std::fmt::Debug + Send + Sync {
    /// Look up a region by its full path.
    fn region(&self, path: &str) -> Option<Arc<dyn Region>>;

    /// Close this service. Data operations through regions owned by a closed
    /// service fail with [`Error::CacheClosed`].
    fn close(&self);

    /// Whether [`close`](Self::close) has been called.
    fn is_closed(&self) -> bool;
}

/// A peer cache: a [`RegionService`] that additionally hosts cache servers
/// and async event queues.
pub trait Cache: RegionService {
    /// Create a factory for building async event queues on this cache.
    fn create_async_event_queue_factory(&self) -> Box<dyn AsyncEventQueueFactory>;

    /// Add a cache server with default configuration.
    fn add_cache_server(&self) -> Arc<dyn CacheServer>;

    /// All cache servers added so far, in creation order.
    fn cache_servers(&self) -> Vec<Arc<dyn CacheServer>>;

    /// Look up an async event queue by id.
    fn async_event_queue(&self, id: &str) -> Option<Arc<dyn AsyncEventQueue>>;
}

/// A named, hierarchical key-value namespace within the grid.
pub trait Region: std::fmt::Debug + Send + Sync {
    /// The region's simple name.
    fn name(&self) -> &str;

    /// The region's full path; see [`path`] for the derivation rules.
    fn full_path(&self) -> &str;

    /// The parent region, if this is a sub-region.
    fn parent_region(&self) -> Option<Arc<dyn Region>>;

    /// The service this region was created through.
    fn region_service(&self) -> Arc<dyn RegionService>;

    /// The region's current attributes snapshot.
    fn attributes(&self) -> RegionAttributes;

    /// The mutator bound to this region. Every call returns a handle to the
    /// same mutator, and the mutator's [`AttributesMutator::region`] is this
    /// region.
    fn attributes_mutator(&self) -> Arc<dyn AttributesMutator>;

    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Store `value` under `key`, returning the previous value.
    fn put(&self, key: &str, value: Bytes) -> Result<Option<Bytes>>;

    /// Remove the entry under `key`, returning its value.
    fn remove(&self, key: &str) -> Result<Option<Bytes>>;

    /// Whether an entry exists under `key`.
    fn contains_key(&self, key: &str) -> bool;

    /// Number of entries in this region.
    fn len(&self) -> usize;

    /// Whether this region has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run an OQL-style query against this region's entries.
    fn query(&self, predicate: &str) -> Result<Vec<Bytes>>;
}

/// Handle for mutating a region's attributes after creation.
pub trait AttributesMutator: std::fmt::Debug + Send + Sync {
    /// The region this mutator is bound to.
    fn region(&self) -> Arc<dyn Region>;

    /// Replace the owning region's attributes snapshot with one whose
    /// cloning-enabled flag equals `cloning_enabled`.
    fn set_cloning_enabled(&self, cloning_enabled: bool);
}

/// Builds [`AsyncEventQueue`]s.
pub trait AsyncEventQueueFactory: std::fmt::Debug + Send {
    /// Make queues subsequently created by this factory start with event
    /// dispatching paused.
    fn pause_event_dispatching(&mut self);

    /// Create a queue delivering events to `listener`.
    fn create(&self, id: &str, listener: Arc<dyn AsyncEventListener>) -> Arc<dyn AsyncEventQueue>;
}

/// An ordered delivery channel for cache change events.
pub trait AsyncEventQueue: std::fmt::Debug + Send + Sync {
    /// The queue's id.
    fn id(&self) -> &str;

    /// Whether event dispatching is currently paused.
    fn is_dispatching_paused(&self) -> bool;

    /// Resume event dispatching. A no-op if dispatching was not paused.
    fn resume_event_dispatching(&self);

    /// The listener events are delivered to.
    fn async_event_listener(&self) -> Arc<dyn AsyncEventListener>;
}

/// Receives batches of cache change events from an [`AsyncEventQueue`].
pub trait AsyncEventListener: std::fmt::Debug + Send + Sync {
    /// Process a batch of events. Returning `false` asks the queue to
    /// redeliver the batch.
    fn process_events(&self, events: &[AsyncEvent]) -> bool;
}

/// A server endpoint clients connect to.
pub trait CacheServer: std::fmt::Debug + Send + Sync {
    /// The port this server listens on.
    fn port(&self) -> u16;

    /// Set the port this server listens on.
    fn set_port(&self, port: u16);

    /// This server's client subscription configuration. Every call returns a
    /// handle to the same configuration object.
    fn client_subscription_config(&self) -> Arc<dyn ClientSubscriptionConfig>;
}

/// Configuration for client-side event subscription behavior.
///
/// Eviction policy values are normalized to lower case on write; reads always
/// return the lower-cased form.
pub trait ClientSubscriptionConfig: std::fmt::Debug + Send + Sync {
    /// Subscription queue capacity.
    fn capacity(&self) -> u32;

    /// Set the subscription queue capacity.
    fn set_capacity(&self, capacity: u32);

    /// Name of the disk store overflowed events spill to, if configured.
    fn disk_store_name(&self) -> Option<String>;

    /// Set the overflow disk store name.
    fn set_disk_store_name(&self, name: &str);

    /// The eviction policy, lower-cased.
    fn eviction_policy(&self) -> String;

    /// Set the eviction policy. The value is lower-cased before storage.
    fn set_eviction_policy(&self, policy: &str);
}
