//! Chart rendering configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chart backend. Exactly one can be active; none means no charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererChoice {
    /// PNG output through the plotters bitmap backend.
    Bitmap,
    /// SVG output through the plotters SVG backend.
    Svg,
}

impl RendererChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            RendererChoice::Bitmap => "bitmap",
            RendererChoice::Svg => "svg",
        }
    }
}

impl fmt::Display for RendererChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bitmap" | "png" => Ok(RendererChoice::Bitmap),
            "svg" => Ok(RendererChoice::Svg),
            other => Err(format!("unknown renderer '{other}' (expected bitmap or svg)")),
        }
    }
}

/// Configuration for chart generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Selected backend. Default: none (charts are not regenerated).
    pub renderer: Option<RendererChoice>,
}
