//! The greeting card view: mounting, pointer handling and the confetti loop.
//!
//! State lives in a thread-local so the DOM closures (created once per mount
//! and leaked for the lifetime of the page) can reach it. Event handling is
//! delegated to the card container and dispatched on the `data-action`
//! attribute of the element under the pointer, so re-rendering the card body
//! never needs new listeners.

pub mod celebration;
pub mod evasion;
pub mod markup;
pub mod phrases;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::config::CardConfig;
use crate::effects::ParticleEffects;
use crate::performance_now;
use crate::rng::{BrowserRng, RandomSource};
use celebration::Celebration;
use evasion::{ContainerSize, EvasionBox};
use markup::{
    ACTION_ACCEPT, ACTION_ATTR, ACTION_EVADE, ACTION_REPLAY, CARD_ID, NO_BUTTON_ID, STYLE_ID,
};
use state::CardState;

struct Card {
    state: CardState,
    config: CardConfig,
    card_el: Element,
    effects: Rc<dyn ParticleEffects>,
    rng: Box<dyn RandomSource>,
}

impl Card {
    fn render(&self) {
        self.card_el
            .set_inner_html(&markup::card_body(&self.state, &self.config.phrases));
    }

    /// Zero-sized until the card has been laid out.
    fn measure(&self) -> Option<ContainerSize> {
        let rect = self.card_el.get_bounding_client_rect();
        ContainerSize::measured(rect.width(), rect.height())
    }

    fn no_button(&self) -> Option<Element> {
        self.card_el
            .query_selector(&format!("#{NO_BUTTON_ID}"))
            .ok()
            .flatten()
    }

    /// Configured box, grown to the button's rendered size.
    fn button_box(&self, btn: &Element) -> EvasionBox {
        let rect = btn.get_bounding_client_rect();
        self.config
            .evasion_box()
            .fitting(rect.width(), rect.height())
    }

    /// Relabel the button with the next phrase, measure it with that label and
    /// move it. The container is checked first so an unmeasured card changes
    /// nothing.
    fn evade(&mut self) {
        let Some(container) = self.measure() else {
            log::debug!("card not measured yet; evasion ignored");
            return;
        };
        let btn = self.no_button();
        let next_count = self.state.evasion_count().saturating_add(1);
        let geom = match &btn {
            Some(btn) => {
                let label = phrases::phrase_for(&self.config.phrases, next_count);
                btn.set_text_content(Some(label));
                self.button_box(btn)
            }
            None => self.config.evasion_box(),
        };
        let Some(placement) = self.state.evade(Some(container), geom, self.rng.as_mut()) else {
            return;
        };
        log::debug!(
            "evasion #{} -> {:?} (button {}x{})",
            self.state.evasion_count(),
            placement,
            geom.button_width,
            geom.button_height
        );
        if let Some(btn) = btn {
            if let Err(e) = btn.set_attribute("style", &placement.to_css()) {
                log::debug!("could not restyle the evading button: {e:?}");
            }
        }
    }
}

thread_local! {
    static CARD: RefCell<Option<Card>> = const { RefCell::new(None) };
}

/// Mount the card into the element with id `root_id`, replacing its content.
/// Mounting again replaces the previous card and resets its state.
pub fn mount(
    root_id: &str,
    effects: Rc<dyn ParticleEffects>,
    config: CardConfig,
) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = doc
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{root_id}'")))?;

    install_stylesheet(&doc, config.breakpoint_px)?;

    let mut rng: Box<dyn RandomSource> = Box::new(BrowserRng);
    let hearts = markup::scatter_hearts(config.heart_count, rng.as_mut());
    root.set_inner_html(&markup::shell_markup(&hearts));
    let card_el = doc
        .get_element_by_id(CARD_ID)
        .ok_or_else(|| JsValue::from_str("card container missing after mount"))?;

    // Clicks: "Yes" and "Play again"
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            match action_of(&evt).as_deref() {
                Some(ACTION_ACCEPT) => on_accept(),
                Some(ACTION_REPLAY) => on_replay(),
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        card_el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Pointer approaching "No". mouseenter does not bubble, so listen for mouseover.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            if action_of(&evt).as_deref() == Some(ACTION_EVADE) {
                on_evade();
            }
        }) as Box<dyn FnMut(_)>);
        card_el.add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let card = Card {
        state: CardState::new(),
        config,
        card_el,
        effects,
        rng,
    };
    card.render();
    CARD.with(|cell| *cell.borrow_mut() = Some(card));
    log::info!("valentine card mounted into #{root_id}");
    Ok(())
}

/// Copy of the current view state, `None` before the first mount.
pub fn snapshot() -> Option<CardState> {
    CARD.with(|cell| cell.borrow().as_ref().map(|c| c.state.clone()))
}

fn install_stylesheet(doc: &Document, breakpoint_px: u32) -> Result<(), JsValue> {
    let css = markup::stylesheet(breakpoint_px);
    if let Some(existing) = doc.get_element_by_id(STYLE_ID) {
        existing.set_text_content(Some(&css));
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(&css));
    let head = doc.head().ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&style)?;
    Ok(())
}

/// `data-action` of the nearest tagged ancestor of the event target.
fn action_of(evt: &web_sys::MouseEvent) -> Option<String> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let tagged = target.closest(&format!("[{ACTION_ATTR}]")).ok()??;
    tagged.get_attribute(ACTION_ATTR)
}

pub(crate) fn on_evade() {
    CARD.with(|cell| {
        let mut guard = cell.borrow_mut();
        let Some(card) = guard.as_mut() else { return };
        if !card.state.is_accepted() {
            card.evade();
        }
    });
}

pub(crate) fn on_accept() {
    let started = CARD.with(|cell| {
        let mut guard = cell.borrow_mut();
        let card = guard.as_mut()?;
        if !card.state.accept() {
            return None;
        }
        log::info!("accepted after {} evasions", card.state.evasion_count());
        card.render();
        Some((card.effects.clone(), card.config.celebration_ms))
    });
    // Outside the borrow: the first burst runs synchronously.
    if let Some((effects, duration_ms)) = started {
        start_celebration(effects, duration_ms);
    }
}

pub(crate) fn on_replay() {
    CARD.with(|cell| {
        if let Some(card) = cell.borrow_mut().as_mut() {
            card.state.replay();
            card.render();
            log::info!("card reset for another round");
        }
    });
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Fire the first frame now, then keep re-arming requestAnimationFrame until
/// the deadline passes. The closure drops itself on the last frame.
fn start_celebration(effects: Rc<dyn ParticleEffects>, duration_ms: f64) {
    let start = performance_now();
    let celebration = Celebration::starting_at(start, duration_ms);
    if !celebration.tick(effects.as_ref(), start) {
        return;
    }
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !(celebration.tick(effects.as_ref(), ts) && schedule_frame(&f)) {
            log::info!("celebration finished");
            let _ = f.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    if !schedule_frame(&g) {
        let _ = g.borrow_mut().take();
    }
}

fn schedule_frame(f: &FrameCallback) -> bool {
    let Some(w) = window() else { return false };
    let borrowed = f.borrow();
    let Some(cb) = borrowed.as_ref() else { return false };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {e:?}");
            false
        }
    }
}
