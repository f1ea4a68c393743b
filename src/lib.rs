//! Valentine Card core crate.
//!
//! A single-screen "Will you be my Valentine?" card rendered from WebAssembly.
//! The "No" button runs away from the pointer, "Yes" fires confetti through an
//! injected particle-effects function. `start_card()` is the only entry point
//! JS needs; everything below `card` is plain Rust and testable on the host.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod card;
pub mod config;
pub mod effects;
pub mod rng;

use config::CardConfig;
use effects::{BurstConfig, JsConfetti, ParticleEffects};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. in tests) only means a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Mount the card into `#root_id`.
///
/// `confetti` is the particle function to call for each burst (typically
/// canvas-confetti's `confetti`); without it the card still works, just with no
/// particles. `config_json` optionally overrides the defaults in [`CardConfig`].
#[wasm_bindgen]
pub fn start_card(
    root_id: &str,
    confetti: Option<js_sys::Function>,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => CardConfig::from_json(json)?,
        None => CardConfig::default(),
    };
    let effects: Rc<dyn ParticleEffects> = match confetti {
        Some(func) => Rc::new(JsConfetti::new(func)),
        None => {
            log::warn!("no particle function supplied; celebration will be silent");
            Rc::new(NoParticles)
        }
    };
    card::mount(root_id, effects, config)
}

/// Current phase as `"question"` or `"accepted"`, `undefined` before mount.
#[wasm_bindgen]
pub fn card_phase() -> Option<String> {
    card::snapshot().map(|s| match s.phase() {
        card::state::Phase::Question => "question".to_string(),
        card::state::Phase::Accepted => "accepted".to_string(),
    })
}

/// Times the "No" button has run away since the last reset.
#[wasm_bindgen]
pub fn card_evasion_count() -> u32 {
    card::snapshot().map(|s| s.evasion_count()).unwrap_or(0)
}

struct NoParticles;

impl ParticleEffects for NoParticles {
    fn burst(&self, _config: &BurstConfig) {}
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
