use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::{Callback, NodeRef};

use crate::models::common::EntryKey;
use crate::reveal::visibility::{RegionRegistry, RevealSession, REVEAL_THRESHOLD};

/// Owns the browser IntersectionObserver for one rendered entry set.
///
/// Dropping it disconnects the observer and releases the session, so a callback
/// that is already queued finds nothing to resolve against.
pub struct ScrollRevealObserver {
    observer: IntersectionObserver,
    session: Rc<RefCell<RevealSession<Element>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollRevealObserver {
    /// Start observing the rendered regions of a list, given in list order. Refs that
    /// are not attached to a node yet are skipped.
    pub fn observe(
        regions: &[(EntryKey, NodeRef)],
        on_reveal: Callback<EntryKey>,
    ) -> Result<Self, JsValue> {
        let elements = regions
            .iter()
            .filter_map(|(key, node)| match node.cast::<Element>() {
                Some(element) => Some((key.clone(), element)),
                None => {
                    warn!("Timeline entry {} has no rendered region", key);
                    None
                }
            })
            .collect();
        Self::observe_elements(elements, on_reveal)
    }

    pub fn observe_elements(
        regions: Vec<(EntryKey, Element)>,
        on_reveal: Callback<EntryKey>,
    ) -> Result<Self, JsValue> {
        let mut registry = RegionRegistry::new();
        for (index, (key, element)) in regions.into_iter().enumerate() {
            registry.register(index, key, element);
        }
        let session = Rc::new(RefCell::new(RevealSession::new(registry)));

        let callback = {
            let session = session.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    let revealed: Vec<EntryKey> = {
                        let session = session.borrow();
                        entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .filter_map(|entry| {
                                session.observe(
                                    &entry.target(),
                                    entry.is_intersecting(),
                                    entry.intersection_ratio(),
                                )
                            })
                            .collect()
                    };
                    for key in revealed {
                        on_reveal.emit(key);
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in session.borrow().registry().handles() {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            session,
            _callback: callback,
        })
    }

    pub fn observed(&self) -> usize {
        self.session.borrow().registry().len()
    }
}

impl Drop for ScrollRevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.session.borrow_mut().release();
    }
}
