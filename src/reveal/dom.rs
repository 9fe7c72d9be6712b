use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::UseReducerDispatcher;
use yew::NodeRef;

use crate::config::REVEAL_ID_ATTR;
use crate::reveal::controller::{RevealAction, RevealController, RevealError, RevealMap, TargetId, VisibilityObserver};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// The browser reports the crossing ratio with float noise, e.g. 0.1999 for a 0.2 threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Converts one observer entry into a visibility event. Entries without a readable
/// `data-reveal-id` are skipped. A target counts as visible only once `threshold` of it is
/// on screen, not on the first pixel of overlap.
pub fn visibility(raw_id: Option<String>, intersecting: bool, ratio: f64, threshold: f64) -> Option<(TargetId, bool)> {
    let id = raw_id.and_then(|raw| raw.trim().parse::<usize>().ok())?;
    let visible = intersecting && ratio + RATIO_TOLERANCE >= threshold;
    Some((TargetId(id), visible))
}

/// Browser `IntersectionObserver` reporting entries as `(TargetId, visible)`.
pub struct DomObserver {
    observer: IntersectionObserver,
    // Must outlive the observer, the JS side holds a pointer into it.
    _callback: EntriesCallback,
}

impl DomObserver {
    pub fn new<F>(threshold: f64, mut on_entries: F) -> Result<Self, RevealError>
    where
        F: FnMut(Vec<(TargetId, bool)>) + 'static,
    {
        let callback: EntriesCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
            let events = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    visibility(
                        entry.target().get_attribute(REVEAL_ID_ATTR),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    )
                })
                .collect();
            on_entries(events);
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| RevealError::ObserverUnavailable(format!("{:?}", e)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityObserver for DomObserver {
    type Target = Element;

    fn observe(&mut self, _id: TargetId, target: &Element) {
        self.observer.observe(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Starts observing the sections behind `sections` and forwards reveals to the view.
/// Returns the destructor to run on unmount.
pub fn mount_reveal(
    sections: &[NodeRef],
    threshold: f64,
    dispatcher: UseReducerDispatcher<RevealMap>,
) -> Box<dyn FnOnce()> {
    let slot: Rc<RefCell<Option<RevealController<DomObserver>>>> = Rc::new(RefCell::new(None));

    let observer = {
        let slot = Rc::downgrade(&slot);
        let dispatcher = dispatcher.clone();
        DomObserver::new(threshold, move |events| {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let newly = match slot.try_borrow_mut() {
                Ok(mut controller) => match controller.as_mut() {
                    Some(controller) => controller.on_batch(events),
                    None => return,
                },
                Err(_) => {
                    warn!("Reveal controller busy, dropping {} visibility events", events.len());
                    return;
                }
            };
            if !newly.is_empty() {
                dispatcher.dispatch(RevealAction::RevealAll(newly));
            }
        })
    };

    let targets = sections
        .iter()
        .enumerate()
        .map(|(i, node)| (TargetId(i), node.cast::<Element>()));
    let controller = RevealController::start(observer, targets);

    let revealed = controller.revealed();
    if !revealed.is_empty() {
        dispatcher.dispatch(RevealAction::RevealAll(revealed));
    }
    *slot.borrow_mut() = Some(controller);

    Box::new(move || {
        if let Some(mut controller) = slot.borrow_mut().take() {
            controller.teardown();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.2;

    #[test]
    fn barely_on_screen_is_not_visible() {
        assert_eq!(
            visibility(Some("3".into()), true, 0.05, THRESHOLD),
            Some((TargetId(3), false))
        );
    }

    #[test]
    fn threshold_ratio_is_visible() {
        assert_eq!(
            visibility(Some("3".into()), true, 0.2, THRESHOLD),
            Some((TargetId(3), true))
        );
        assert_eq!(
            visibility(Some("0".into()), true, 0.1999, THRESHOLD),
            Some((TargetId(0), true))
        );
        assert_eq!(
            visibility(Some("5".into()), true, 1.0, THRESHOLD),
            Some((TargetId(5), true))
        );
    }

    #[test]
    fn leaving_viewport_is_not_visible() {
        assert_eq!(
            visibility(Some("1".into()), false, 0.0, THRESHOLD),
            Some((TargetId(1), false))
        );
        // a stale ratio without intersection does not count
        assert_eq!(
            visibility(Some("1".into()), false, 0.5, THRESHOLD),
            Some((TargetId(1), false))
        );
    }

    #[test]
    fn unreadable_reveal_id_is_skipped() {
        assert_eq!(visibility(None, true, 1.0, THRESHOLD), None);
        assert_eq!(visibility(Some("header".into()), true, 1.0, THRESHOLD), None);
        assert_eq!(visibility(Some("-1".into()), true, 1.0, THRESHOLD), None);
        assert_eq!(visibility(Some(String::new()), true, 1.0, THRESHOLD), None);
    }

    #[test]
    fn zero_threshold_reveals_on_any_overlap() {
        assert_eq!(
            visibility(Some("2".into()), true, 0.0, 0.0),
            Some((TargetId(2), true))
        );
    }
}
