//! Particle-effects collaborator. The card never draws particles itself; it
//! hands a burst description to whatever implements [`ParticleEffects`].

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Normalized launch point. `y` is left to the collaborator's default when unset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Origin {
    pub x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// One burst, serialized with the option names canvas-confetti understands.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstConfig {
    pub particle_count: u32,
    /// Launch angle in degrees, 90 is straight up.
    pub angle: f64,
    /// Angular spread in degrees.
    pub spread: f64,
    pub origin: Origin,
    pub colors: Vec<String>,
}

pub trait ParticleEffects {
    fn burst(&self, config: &BurstConfig);
}

/// Wraps a JS function such as `window.confetti`.
pub struct JsConfetti {
    func: js_sys::Function,
}

impl JsConfetti {
    pub fn new(func: js_sys::Function) -> Self {
        Self { func }
    }
}

impl ParticleEffects for JsConfetti {
    fn burst(&self, config: &BurstConfig) {
        let json = match serde_json::to_string(config) {
            Ok(j) => j,
            Err(e) => {
                log::warn!("burst config not serializable: {e}");
                return;
            }
        };
        let arg = match js_sys::JSON::parse(&json) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("burst config rejected by JSON.parse: {e:?}");
                return;
            }
        };
        if let Err(e) = self.func.call1(&JsValue::NULL, &arg) {
            log::warn!("particle effect threw: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_js_option_names() {
        let cfg = BurstConfig {
            particle_count: 5,
            angle: 60.0,
            spread: 55.0,
            origin: Origin { x: 0.0, y: None },
            colors: vec!["#ff6b6b".into()],
        };
        let v: serde_json::Value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["particleCount"], 5);
        assert_eq!(v["angle"], 60.0);
        assert_eq!(v["spread"], 55.0);
        assert_eq!(v["origin"], serde_json::json!({ "x": 0.0 }));
        assert_eq!(v["colors"][0], "#ff6b6b");
    }

    #[test]
    fn origin_y_emitted_when_set() {
        let o = Origin { x: 1.0, y: Some(0.6) };
        assert_eq!(serde_json::to_value(o).unwrap(), serde_json::json!({ "x": 1.0, "y": 0.6 }));
    }
}
