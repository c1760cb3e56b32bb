// File: src/listeners.rs
// Purpose: Listener bookkeeping between a form and the rendering layer

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::spec::{FieldSpec, Trigger};

/// Opaque handle for an input element owned by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An input element currently mounted for a form, and the field it edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedElement {
    pub id: ElementId,
    pub field: String,
}

impl MountedElement {
    pub fn new(id: ElementId, field: impl Into<String>) -> Self {
        Self {
            id,
            field: field.into(),
        }
    }
}

/// The rendering layer as seen by a form.
///
/// Attached listeners are expected to forward their events to
/// [`FormEngine::dispatch`](crate::FormEngine::dispatch).
pub trait EventSource {
    /// Elements mounted right now
    fn mounted(&self) -> Vec<MountedElement>;

    /// Start forwarding `trigger` events from `element`
    fn attach(&mut self, element: ElementId, trigger: Trigger);

    /// Stop forwarding `trigger` events from `element`
    fn detach(&mut self, element: ElementId, trigger: Trigger);
}

/// Outcome of a listener synchronisation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub attached: usize,
    pub detached: usize,
}

/// At most one listener per (element, trigger) pair, each bound to a field
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    bound: BTreeMap<(ElementId, Trigger), String>,
}

const TRIGGERS: [Trigger; 2] = [Trigger::OnChangeCharacter, Trigger::OnFocusLost];

impl ListenerRegistry {
    pub(crate) fn sync<S: EventSource + ?Sized>(
        &mut self,
        specs: &[&FieldSpec],
        source: &mut S,
    ) -> SyncReport {
        let by_name: HashMap<&str, &FieldSpec> =
            specs.iter().map(|spec| (spec.name.as_str(), *spec)).collect();

        let mut desired: BTreeMap<(ElementId, Trigger), String> = BTreeMap::new();
        for element in source.mounted() {
            let Some(spec) = by_name.get(element.field.as_str()) else {
                tracing::warn!(
                    "Element {} is bound to unknown field `{}`; not listening",
                    element.id,
                    element.field
                );
                continue;
            };
            for trigger in TRIGGERS {
                if !spec.listens_to(trigger) {
                    continue;
                }
                if let Some(previous) = desired.insert((element.id, trigger), spec.name.clone()) {
                    if previous != spec.name {
                        tracing::warn!(
                            "Element {} is mounted for both `{}` and `{}`; `{}` wins",
                            element.id,
                            previous,
                            spec.name,
                            spec.name
                        );
                    }
                }
            }
        }

        let mut report = SyncReport::default();

        // Detach first so a re-bound element never holds two handlers
        let stale: Vec<(ElementId, Trigger)> = self
            .bound
            .iter()
            .filter(|(key, field)| desired.get(*key) != Some(*field))
            .map(|(key, _)| *key)
            .collect();
        for (element, trigger) in stale {
            source.detach(element, trigger);
            self.bound.remove(&(element, trigger));
            report.detached += 1;
        }

        for (key, field) in desired {
            if self.bound.contains_key(&key) {
                continue;
            }
            let (element, trigger) = key;
            tracing::debug!("Listening to {:?} on {} for field `{}`", trigger, element, field);
            source.attach(element, trigger);
            self.bound.insert(key, field);
            report.attached += 1;
        }

        report
    }

    pub(crate) fn clear<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let count = self.bound.len();
        for (element, trigger) in std::mem::take(&mut self.bound).into_keys() {
            source.detach(element, trigger);
        }
        count
    }

    /// Field that receives `trigger` events from `element`
    pub fn field_for(&self, element: ElementId, trigger: Trigger) -> Option<&str> {
        self.bound.get(&(element, trigger)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
