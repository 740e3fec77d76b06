//! Count-up animation for the home page stats.
use std::cell::Cell;
use std::rc::Rc;

use portfolio_core::numbers::millis_to_timeout;
use portfolio_core::{StatCounter, StatTick, StatsCfg};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit};

use crate::controller::SharedController;
use crate::dom;
use crate::surface::ACTIVE_CLASS;

pub const HOME_ID: &str = "home";
pub const STAT_SELECTOR: &str = ".stat-value";

/// Schedule the animation whenever `#home` becomes active.
///
/// Covers both the markup's initial state and later class changes. The
/// controller's gate keeps it to a single run.
pub fn wire_stats(doc: &Document, controller: &SharedController) {
    let Some(home) = doc.get_element_by_id(HOME_ID) else {
        return;
    };

    let shared = controller.clone();
    let observed = home.clone();
    let on_mutation = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            for _ in records.iter() {
                maybe_schedule(&observed, &shared);
            }
        },
    );
    match MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
        Ok(observer) => {
            let init = MutationObserverInit::new();
            init.set_attributes(true);
            init.set_attribute_filter(&js_sys::Array::of1(&"class".into()));
            if let Err(err) = observer.observe_with_options(&home, &init) {
                log::warn!("stats observer not attached: {}", dom::js_error_message(&err));
            }
            on_mutation.forget();
        }
        Err(err) => log::warn!("stats observer unavailable: {}", dom::js_error_message(&err)),
    }

    maybe_schedule(&home, controller);
}

fn maybe_schedule(home: &Element, controller: &SharedController) {
    let (animated, delay) = {
        let ctl = controller.borrow();
        (ctl.stats_animated(), ctl.config().stats.start_delay_ms)
    };
    if animated || !home.class_list().contains(ACTIVE_CLASS) {
        return;
    }
    let shared = controller.clone();
    dom::after_ms(millis_to_timeout(delay), move || animate_stats(&shared));
}

/// Run the count-up on every `.stat-value`, once per page life.
pub fn animate_stats(controller: &SharedController) {
    let cfg = {
        let mut ctl = controller.borrow_mut();
        if !ctl.claim_stats_animation() {
            return;
        }
        ctl.config().stats
    };
    let Some(doc) = dom::document() else {
        return;
    };
    for stat in dom::query_all(&doc, STAT_SELECTOR) {
        animate_stat(stat, cfg);
    }
}

fn animate_stat(stat: Element, cfg: StatsCfg) {
    let text = stat.text_content().unwrap_or_default();
    let mut counter = match StatCounter::new(&text, cfg.steps) {
        Ok(counter) => counter,
        Err(err) => {
            log::debug!("skipping stat animation: {err}");
            return;
        }
    };
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let timer = handle.clone();
    let started = dom::every_ms(millis_to_timeout(cfg.tick_ms), move || {
        match counter.tick() {
            StatTick::Counting(shown) => stat.set_text_content(Some(&shown)),
            StatTick::Finished(original) => {
                stat.set_text_content(Some(&original));
                if let Some(id) = timer.take() {
                    dom::clear_every(id);
                }
            }
        }
    });
    handle.set(started);
}
