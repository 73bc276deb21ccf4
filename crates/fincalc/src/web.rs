//! Web entry point for fincalc.
//!
//! Exposes the calculators to JavaScript. Inputs and stored values use the same
//! JSON records the browser calculators keep in LocalStorage, so a page can
//! prefill its forms with [`Calculators::stored_input`] and submit them back.

use wasm_bindgen::prelude::*;

use fincalc_core::{CompoundInterestEngine, EmergencyFundEngine, FirstMillionEngine};

use crate::app::App;
use crate::data::CalculatorKind;
use crate::platform::WebStorage;

#[wasm_bindgen]
pub struct Calculators {
    app: App<WebStorage>,
}

#[wasm_bindgen]
impl Calculators {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            app: App::new(WebStorage::new(), None),
        }
    }

    /// Report for an `emergencyFundData` record
    #[wasm_bindgen(js_name = emergencyFund)]
    pub fn emergency_fund(&mut self, input_json: &str) -> Result<String, JsValue> {
        self.app
            .report_json::<EmergencyFundEngine>(input_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Report for a `millionData` record
    #[wasm_bindgen(js_name = firstMillion)]
    pub fn first_million(&mut self, input_json: &str) -> Result<String, JsValue> {
        self.app
            .report_json::<FirstMillionEngine>(input_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Report for a `compoundInterestData` record
    #[wasm_bindgen(js_name = compoundInterest)]
    pub fn compound_interest(&mut self, input_json: &str) -> Result<String, JsValue> {
        self.app
            .report_json::<CompoundInterestEngine>(input_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stored record under `key`, or the calculator's defaults
    #[wasm_bindgen(js_name = storedInput)]
    pub fn stored_input(&self, key: &str) -> Result<String, JsValue> {
        let stored = match CalculatorKind::from_storage_key(key) {
            Some(CalculatorKind::EmergencyFund) => self.app.stored_json::<EmergencyFundEngine>(),
            Some(CalculatorKind::FirstMillion) => self.app.stored_json::<FirstMillionEngine>(),
            Some(CalculatorKind::CompoundInterest) => {
                self.app.stored_json::<CompoundInterestEngine>()
            }
            None => return Err(JsValue::from_str(&format!("Unknown calculator: {key}"))),
        };
        stored.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Forget every stored record
    pub fn reset(&self) -> Result<(), JsValue> {
        self.app
            .reset(&CalculatorKind::ALL)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for Calculators {
    fn default() -> Self {
        Self::new()
    }
}
