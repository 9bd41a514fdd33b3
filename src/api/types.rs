//! Shared types for the WASM API

use wasm_bindgen::prelude::*;

use crate::errors::ChartError;

/// Exception thrown to JavaScript for any chart or key validation failure
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    kind: String,
    value: String,
    message: String,
}

#[wasm_bindgen]
impl ValidationError {
    /// Error kind name, e.g. `"BarLineShouldStartWithStripe"`
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.kind.clone()
    }

    /// Offending source fragment
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ChartError> for ValidationError {
    fn from(error: ChartError) -> Self {
        Self {
            kind: error.kind().as_str().to_string(),
            value: error.value().to_string(),
            message: error.to_string(),
        }
    }
}
