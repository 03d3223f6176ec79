use serde::{Deserialize, Serialize};

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_NUM_PREDICT: u32 = 200;

/// Sampling options forwarded to the inference backend with every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

impl GenerationOptions {
    pub fn new(temperature: f32, num_predict: u32) -> Self {
        Self {
            temperature,
            num_predict,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE, DEFAULT_NUM_PREDICT)
    }
}
