//! Aspect ratio options accepted by the generation service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Aspect ratios supported by the video generation model.
///
/// The remote service accepts a fixed set of `W:H` strings; anything else is
/// rejected before submission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
pub enum AspectRatio {
    /// Landscape 16:9, the service default
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// Portrait 9:16 for vertical-feed playback
    #[serde(rename = "9:16")]
    Portrait,
    /// Square 1:1
    #[serde(rename = "1:1")]
    Square,
    /// Classic 4:3
    #[serde(rename = "4:3")]
    Standard,
    /// Inverted classic 3:4
    #[serde(rename = "3:4")]
    Tall,
}

impl AspectRatio {
    /// All ratios the service accepts.
    pub const ALL: &'static [AspectRatio] = &[
        AspectRatio::Widescreen,
        AspectRatio::Portrait,
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::Tall,
    ];

    /// Returns the ratio in the `W:H` form the service API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "4:3",
            AspectRatio::Tall => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(AspectRatio::Widescreen),
            "9:16" => Ok(AspectRatio::Portrait),
            "1:1" => Ok(AspectRatio::Square),
            "4:3" => Ok(AspectRatio::Standard),
            "3:4" => Ok(AspectRatio::Tall),
            _ => Err(AspectRatioParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown aspect ratio: {0}, expected one of 16:9, 9:16, 1:1, 4:3, 3:4")]
pub struct AspectRatioParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_parse() {
        assert_eq!("16:9".parse::<AspectRatio>().unwrap(), AspectRatio::Widescreen);
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Portrait);
        assert_eq!(" 1:1 ".parse::<AspectRatio>().unwrap(), AspectRatio::Square);
        assert!("21:9".parse::<AspectRatio>().is_err());
        assert!("widescreen".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_aspect_display_roundtrip() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.to_string().parse::<AspectRatio>().unwrap(), *ratio);
        }
    }

    #[test]
    fn test_aspect_serde_as_string() {
        let json = serde_json::to_string(&AspectRatio::Portrait).unwrap();
        assert_eq!(json, "\"9:16\"");
        let back: AspectRatio = serde_json::from_str("\"4:3\"").unwrap();
        assert_eq!(back, AspectRatio::Standard);
    }

    #[test]
    fn test_aspect_default() {
        assert_eq!(AspectRatio::default(), AspectRatio::Widescreen);
    }
}
