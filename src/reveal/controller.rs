use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

/// Position of a revealable section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub usize);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("Visibility observer unavailable: {0}")]
    ObserverUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Revealed,
    Unchanged,
}

/// Revealed flags keyed by target. Flags only ever go from hidden to revealed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealMap {
    targets: BTreeMap<TargetId, bool>,
}

impl RevealMap {
    pub fn register(&mut self, id: TargetId) {
        self.targets.entry(id).or_insert(false);
    }

    /// Upgrade-only merge of a visibility signal. Unregistered ids are ignored.
    pub fn merge(&mut self, id: TargetId, visible: bool) -> Transition {
        match self.targets.get_mut(&id) {
            Some(revealed) if !*revealed && visible => {
                *revealed = true;
                Transition::Revealed
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.targets.get(&id).copied().unwrap_or(false)
    }

    pub fn revealed(&self) -> Vec<TargetId> {
        self.targets
            .iter()
            .filter(|(_, revealed)| **revealed)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[cfg(test)]
    pub fn all_revealed(&self) -> bool {
        self.targets.values().all(|revealed| *revealed)
    }
}

pub enum RevealAction {
    RevealAll(Vec<TargetId>),
}

// The view keeps its own copy, fed only with transitions the controller reported.
impl Reducible for RevealMap {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let RevealAction::RevealAll(ids) = action;
        if ids.iter().all(|id| self.is_revealed(*id)) {
            return self;
        }

        let mut next = (*self).clone();
        for id in ids {
            next.register(id);
            next.merge(id, true);
        }
        Rc::new(next)
    }
}

/// Host capability for detecting when targets enter the viewport.
pub trait VisibilityObserver {
    type Target;

    fn observe(&mut self, id: TargetId, target: &Self::Target);

    /// Stops all observation. No callbacks may fire afterwards.
    fn disconnect(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Observing,
    /// The host could not observe visibility, so everything was revealed up front.
    FailedOpen,
    TornDown,
}

/// Owns the observation subscription and the authoritative reveal state.
///
/// The subscription is released exactly once, by [`RevealController::teardown`] or on drop,
/// whichever comes first.
pub struct RevealController<O: VisibilityObserver> {
    map: RevealMap,
    observer: Option<O>,
    phase: Phase,
}

impl<O: VisibilityObserver> RevealController<O> {
    /// Registers every rendered target with the observer. Targets that are not rendered yet
    /// are skipped and never observed. If the observer could not be created, every target is
    /// revealed immediately.
    pub fn start<I>(observer: Result<O, RevealError>, targets: I) -> Self
    where
        I: IntoIterator<Item = (TargetId, Option<O::Target>)>,
    {
        let mut map = RevealMap::default();

        match observer {
            Ok(mut observer) => {
                for (id, target) in targets {
                    match target {
                        Some(target) => {
                            observer.observe(id, &target);
                            map.register(id);
                        }
                        None => debug!("Reveal target {} not rendered, skipping", id),
                    }
                }
                debug!("Observing {} reveal targets", map.len());
                Self {
                    map,
                    observer: Some(observer),
                    phase: Phase::Observing,
                }
            }
            Err(e) => {
                warn!("{}; revealing all sections", e);
                for (id, _) in targets {
                    map.register(id);
                    map.merge(id, true);
                }
                Self {
                    map,
                    observer: None,
                    phase: Phase::FailedOpen,
                }
            }
        }
    }

    pub fn on_intersect(&mut self, id: TargetId, visible: bool) -> Transition {
        if self.phase != Phase::Observing {
            return Transition::Unchanged;
        }
        let transition = self.map.merge(id, visible);
        if transition == Transition::Revealed {
            debug!("Revealed section {}", id);
        }
        transition
    }

    /// Applies a batch of visibility events in arrival order and returns the targets the
    /// batch newly revealed.
    pub fn on_batch<I>(&mut self, events: I) -> Vec<TargetId>
    where
        I: IntoIterator<Item = (TargetId, bool)>,
    {
        events
            .into_iter()
            .filter(|(id, visible)| self.on_intersect(*id, *visible) == Transition::Revealed)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn teardown(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
            debug!("Reveal observer disconnected");
        }
        self.phase = Phase::TornDown;
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.map.is_revealed(id)
    }

    pub fn revealed(&self) -> Vec<TargetId> {
        self.map.revealed()
    }
}

impl<O: VisibilityObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.teardown();
    }
}
