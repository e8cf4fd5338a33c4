//! In-memory database of linked NEOs and close approaches.

use std::collections::HashMap;

use neo_model::{ApproachId, CloseApproach, LinkedApproach, NearEarthObject, NeoId};
use tracing::{debug, info};

use crate::filters::Filters;

/// An indexed arena of near-Earth objects and their close approaches.
///
/// Construction performs the one-time link pass: every approach is resolved
/// against the designation index by exact string match; on a hit it receives
/// its owning NEO's arena key and is recorded in that NEO's approach list,
/// preserving source order within each list. An approach whose designation
/// matches no NEO stays unlinked; it remains reachable through
/// [`NeoDatabase::approaches`] but is excluded from query results, since the
/// NEO predicates and the output writers are undefined without an owner.
///
/// After construction both collections are immutable.
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoDatabase {
    /// Build the database from the two unlinked collections.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (index, neo) in neos.iter().enumerate() {
            let id = NeoId::new(index);
            by_designation.insert(neo.designation().to_string(), id);
            if let Some(name) = neo.name() {
                by_name.insert(name.to_string(), id);
            }
        }

        let mut unlinked = 0usize;
        for (index, approach) in approaches.iter_mut().enumerate() {
            match by_designation.get(approach.designation()) {
                Some(&id) => {
                    approach.set_neo(id);
                    neos[id.index()].record_approach(ApproachId::new(index));
                }
                None => unlinked += 1,
            }
        }
        if unlinked > 0 {
            debug!(unlinked, "approaches with no matching NEO left unlinked");
        }
        info!(
            neos = neos.len(),
            approaches = approaches.len(),
            "database linked"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    pub fn neo(&self, id: NeoId) -> &NearEarthObject {
        &self.neos[id.index()]
    }

    pub fn approach(&self, id: ApproachId) -> &CloseApproach {
        &self.approaches[id.index()]
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Look up an NEO by its primary designation (exact match).
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&id| self.neo(id))
    }

    /// Look up an NEO by its IAU name (exact match).
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&id| self.neo(id))
    }

    /// Resolve an approach's owning NEO, if it was linked.
    pub fn linked<'a>(&'a self, approach: &'a CloseApproach) -> Option<LinkedApproach<'a>> {
        approach.neo().map(|id| LinkedApproach {
            approach,
            neo: self.neo(id),
        })
    }

    /// The close approaches recorded for `neo`, in link order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> {
        neo.approaches().iter().map(|&id| self.approach(id))
    }

    /// Linked close approaches matching `filters`, in source order.
    pub fn query<'a>(&'a self, filters: &'a Filters) -> impl Iterator<Item = LinkedApproach<'a>> {
        self.approaches
            .iter()
            .filter_map(|approach| self.linked(approach))
            .filter(|linked| filters.matches(linked.approach, linked.neo))
    }
}
