//! Static metadata blobs served to host-side editors.
//!
//! Both blobs are rendered once and returned verbatim through the get
//! surface: `ui_hierarchy` names the knob layout for the hardware shadow
//! UI, `chain_params` catalogs every parameter with its type, bounds,
//! default, step, and unit. The engine never reads either.

use once_cell::sync::Lazy;
use serde_json::json;

/// Scalar parameter keys in wire order.
pub const PARAM_KEYS: [&str; 8] = [
    "bands",
    "freq_low",
    "freq_high",
    "attack",
    "release",
    "mod_gain",
    "mix",
    "carrier_mix",
];

/// Knob/parameter hierarchy for the shadow UI: a single root level exposing
/// every key.
pub static UI_HIERARCHY: Lazy<String> = Lazy::new(|| {
    json!({
        "modes": null,
        "levels": {
            "root": {
                "children": null,
                "knobs": PARAM_KEYS,
                "params": PARAM_KEYS,
            }
        }
    })
    .to_string()
});

/// Parameter catalog for the shadow parameter editor.
pub static CHAIN_PARAMS: Lazy<String> = Lazy::new(|| {
    json!([
        {
            "key": "bands",
            "name": "Bands",
            "type": "enum",
            "options": ["8", "16", "24", "32"],
            "default": "16",
        },
        {
            "key": "freq_low",
            "name": "Low Freq",
            "type": "float",
            "min": 80,
            "max": 500,
            "default": 100,
            "step": 10,
            "unit": "Hz",
        },
        {
            "key": "freq_high",
            "name": "High Freq",
            "type": "float",
            "min": 2000,
            "max": 12000,
            "default": 8000,
            "step": 100,
            "unit": "Hz",
        },
        {
            "key": "attack",
            "name": "Attack",
            "type": "float",
            "min": 0.1,
            "max": 50,
            "default": 5,
            "step": 0.5,
            "unit": "ms",
        },
        {
            "key": "release",
            "name": "Release",
            "type": "float",
            "min": 5,
            "max": 500,
            "default": 50,
            "step": 5,
            "unit": "ms",
        },
        {
            "key": "mod_gain",
            "name": "Mod Gain",
            "type": "float",
            "min": 0,
            "max": 3,
            "default": 1,
            "step": 0.05,
        },
        {
            "key": "mix",
            "name": "Mix",
            "type": "float",
            "min": 0,
            "max": 1,
            "default": 1,
            "step": 0.01,
        },
        {
            "key": "carrier_mix",
            "name": "Unvoiced",
            "type": "float",
            "min": 0,
            "max": 1,
            "default": 0.1,
            "step": 0.01,
        },
    ])
    .to_string()
});
