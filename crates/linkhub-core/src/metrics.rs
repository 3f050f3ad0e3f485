use std::fmt;

use serde::Serialize;

pub const ENTRY_LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
pub const ENTRY_FIRST_INPUT: &str = "first-input";
pub const OBSERVED_ENTRY_TYPES: [&str; 2] = [ENTRY_LARGEST_CONTENTFUL_PAINT, ENTRY_FIRST_INPUT];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum PerformanceMetric {
    LargestContentfulPaint { start_time: f64 },
    FirstInputDelay { delay: f64 },
}

impl PerformanceMetric {
    /// `processing_start` is only present on `first-input` entries.
    pub fn from_entry(entry_type: &str, start_time: f64, processing_start: Option<f64>) -> Option<Self> {
        match entry_type {
            ENTRY_LARGEST_CONTENTFUL_PAINT => Some(Self::LargestContentfulPaint { start_time }),
            ENTRY_FIRST_INPUT => {
                let processing_start = processing_start?;
                Some(Self::FirstInputDelay {
                    delay: processing_start - start_time,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for PerformanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LargestContentfulPaint { start_time } => write!(f, "LCP: {start_time}"),
            Self::FirstInputDelay { delay } => write!(f, "FID: {delay}"),
        }
    }
}
