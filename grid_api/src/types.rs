//! Value types of the grid API.

use bytes::Bytes;

/// Immutable configuration snapshot describing a region's behavior.
///
/// Snapshots have value semantics: a region's attributes are a private copy,
/// never an alias of a caller-supplied snapshot, so mutation through an
/// [`AttributesMutator`](crate::AttributesMutator) replaces the region's
/// snapshot without touching any value the caller still holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionAttributes {
    cloning_enabled: bool,
    statistics_enabled: bool,
    data_policy: DataPolicy,
}

impl RegionAttributes {
    /// Create a snapshot with default settings: cloning disabled, statistics
    /// disabled, [`DataPolicy::Normal`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cloning-enabled flag.
    pub fn with_cloning_enabled(self, cloning_enabled: bool) -> Self {
        Self {
            cloning_enabled,
            ..self
        }
    }

    /// Sets the statistics-enabled flag.
    pub fn with_statistics_enabled(self, statistics_enabled: bool) -> Self {
        Self {
            statistics_enabled,
            ..self
        }
    }

    /// Sets the data policy.
    pub fn with_data_policy(self, data_policy: DataPolicy) -> Self {
        Self {
            data_policy,
            ..self
        }
    }

    /// Whether values are cloned on read.
    #[inline]
    pub fn cloning_enabled(&self) -> bool {
        self.cloning_enabled
    }

    /// Whether statistics collection is enabled.
    #[inline]
    pub fn statistics_enabled(&self) -> bool {
        self.statistics_enabled
    }

    /// How the region distributes and stores its data.
    #[inline]
    pub fn data_policy(&self) -> DataPolicy {
        self.data_policy
    }
}

/// How a region distributes and stores its data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataPolicy {
    /// No local storage.
    Empty,
    /// Local storage, no distribution guarantees.
    #[default]
    Normal,
    /// Data partitioned across peers.
    Partition,
    /// Data replicated to every peer.
    Replicate,
}

impl DataPolicy {
    /// Variant as string.
    ///
    /// This can be used for logging.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Normal => "normal",
            Self::Partition => "partition",
            Self::Replicate => "replicate",
        }
    }
}

/// A cache change event delivered to an
/// [`AsyncEventListener`](crate::AsyncEventListener).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncEvent {
    region_path: String,
    key: String,
    value: Option<Bytes>,
    operation: Operation,
}

impl AsyncEvent {
    /// Create an event for `operation` on `key` in the region at
    /// `region_path`, with no value payload.
    pub fn new(region_path: impl Into<String>, key: impl Into<String>, operation: Operation) -> Self {
        Self {
            region_path: region_path.into(),
            key: key.into(),
            value: None,
            operation,
        }
    }

    /// Sets the value payload.
    pub fn with_value(self, value: Bytes) -> Self {
        Self {
            value: Some(value),
            ..self
        }
    }

    /// Full path of the region the event originated in.
    #[inline]
    pub fn region_path(&self) -> &str {
        &self.region_path
    }

    /// The affected key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The new value, if the operation carries one.
    #[inline]
    pub fn value(&self) -> Option<&Bytes> {
        self.value.as_ref()
    }

    /// The kind of change.
    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

/// The kind of change an [`AsyncEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// An entry was created.
    Create,
    /// An existing entry was updated.
    Update,
    /// An entry was destroyed.
    Destroy,
}
