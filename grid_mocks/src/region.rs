//! Mock regions and their attributes mutators.

use std::{
    collections::HashMap,
    sync::{Arc, Weak},
};

use bytes::Bytes;
use grid_api::{
    path, AttributesMutator, Error, Region, RegionAttributes, RegionService, Result,
};
use observability_deps::tracing::debug;
use parking_lot::Mutex;

/// Mock region.
///
/// Entries live in a plain in-memory map. Data operations fail with
/// [`Error::CacheClosed`] once the owning region service has been closed;
/// `query` always fails with [`Error::Unsupported`] since querying needs the
/// real engine.
#[derive(Debug)]
pub struct MockRegion {
    name: String,
    full_path: String,
    parent: Option<Arc<MockRegion>>,
    region_service: Arc<dyn RegionService>,
    state: Mutex<RegionState>,
    mutator: Arc<MockAttributesMutator>,
}

#[derive(Debug, Default)]
struct RegionState {
    attributes: RegionAttributes,
    entries: HashMap<String, Bytes>,
}

impl MockRegion {
    pub(crate) fn new_top_level(
        region_service: Arc<dyn RegionService>,
        name: &str,
        attributes: RegionAttributes,
    ) -> Arc<Self> {
        Self::new(
            region_service,
            None,
            path::top_level_region_path(name),
            name,
            attributes,
        )
    }

    pub(crate) fn new_sub_region(
        parent: &Arc<MockRegion>,
        name: &str,
        attributes: RegionAttributes,
    ) -> Arc<Self> {
        Self::new(
            parent.region_service(),
            Some(Arc::clone(parent)),
            path::sub_region_path(parent.full_path(), name),
            name,
            attributes,
        )
    }

    fn new(
        region_service: Arc<dyn RegionService>,
        parent: Option<Arc<MockRegion>>,
        full_path: String,
        name: &str,
        attributes: RegionAttributes,
    ) -> Arc<Self> {
        // The mutator is bound 1:1 to its region at creation. The back
        // reference is weak so the pair does not keep itself alive.
        Arc::new_cyclic(|me| Self {
            name: name.to_owned(),
            full_path,
            parent,
            region_service,
            state: Mutex::new(RegionState {
                attributes,
                entries: HashMap::new(),
            }),
            mutator: Arc::new(MockAttributesMutator::new(Weak::clone(me))),
        })
    }

    fn check_open(&self) -> Result<()> {
        if self.region_service.is_closed() {
            return Err(Error::CacheClosed);
        }
        Ok(())
    }

    fn replace_attributes(&self, f: impl FnOnce(RegionAttributes) -> RegionAttributes) {
        let mut state = self.state.lock();
        state.attributes = f(state.attributes);
    }
}

impl Region for MockRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    fn parent_region(&self) -> Option<Arc<dyn Region>> {
        self.parent.as_ref().map(|parent| Arc::clone(parent) as _)
    }

    fn region_service(&self) -> Arc<dyn RegionService> {
        Arc::clone(&self.region_service)
    }

    fn attributes(&self) -> RegionAttributes {
        self.state.lock().attributes
    }

    fn attributes_mutator(&self) -> Arc<dyn AttributesMutator> {
        Arc::clone(&self.mutator) as _
    }

    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        self.check_open()?;
        Ok(self.state.lock().entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Bytes) -> Result<Option<Bytes>> {
        self.check_open()?;
        Ok(self.state.lock().entries.insert(key.to_owned(), value))
    }

    fn remove(&self, key: &str) -> Result<Option<Bytes>> {
        self.check_open()?;
        Ok(self.state.lock().entries.remove(key))
    }

    fn contains_key(&self, key: &str) -> bool {
        self.state.lock().entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    fn query(&self, _predicate: &str) -> Result<Vec<Bytes>> {
        Err(Error::Unsupported {
            operation: "query".to_owned(),
        })
    }
}

/// Mock attributes mutator, bound to exactly one [`MockRegion`].
#[derive(Debug)]
pub struct MockAttributesMutator {
    region: Weak<MockRegion>,
    calls: Mutex<Vec<MutatorCall>>,
}

/// A recorded call on a [`MockAttributesMutator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutatorCall {
    /// `set_cloning_enabled` with the given argument.
    SetCloningEnabled(bool),
}

impl MockAttributesMutator {
    fn new(region: Weak<MockRegion>) -> Self {
        Self {
            region,
            calls: Default::default(),
        }
    }

    /// All calls recorded on this mutator, in order.
    pub fn calls(&self) -> Vec<MutatorCall> {
        self.calls.lock().clone()
    }

    fn owning_region(&self) -> Arc<MockRegion> {
        self.region
            .upgrade()
            .expect("mutator outlived its owning region")
    }
}

impl AttributesMutator for MockAttributesMutator {
    fn region(&self) -> Arc<dyn Region> {
        self.owning_region() as _
    }

    fn set_cloning_enabled(&self, cloning_enabled: bool) {
        let region = self.owning_region();
        region.replace_attributes(|attributes| attributes.with_cloning_enabled(cloning_enabled));
        self.calls
            .lock()
            .push(MutatorCall::SetCloningEnabled(cloning_enabled));

        debug!(
            full_path = region.full_path(),
            cloning_enabled, "replaced region attributes"
        );
    }
}
