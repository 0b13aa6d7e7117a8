//! Photo-based food recognition
//!
//! Photo pickers hand an image to a [`FoodRecognizer`]. The shipped
//! recognizer is a stub that maps each image source to a fixed catalog
//! entry until a real recognition backend is wired in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Where a photo came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    PhotoLibrary,
    Camera,
}

impl ImageSource {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "photo_library" | "library" | "photos" => Some(ImageSource::PhotoLibrary),
            "camera" => Some(ImageSource::Camera),
            _ => None,
        }
    }

    /// Notice shown when the platform denies access
    pub fn permission_message(&self) -> &'static str {
        match self {
            ImageSource::PhotoLibrary => "Allow Photos to pick an image.",
            ImageSource::Camera => "Allow Camera to capture.",
        }
    }
}

/// An image handed back by a platform picker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedImage {
    pub uri: Option<String>,
}

/// Result of a platform permission + picker flow
#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    PermissionDenied,
    Canceled,
    Selected(CapturedImage),
}

/// A food guessed from an image, ready to preselect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recognition {
    pub food_id: String,
    pub quantity: String,
    pub unit: String,
}

#[async_trait]
pub trait FoodRecognizer: Send + Sync {
    /// Identify the food in an image, or `None` if nothing was recognized
    async fn recognize(&self, source: ImageSource, image: &CapturedImage) -> Option<Recognition>;
}

/// Stand-in recognizer returning a fixed food per image source
#[derive(Debug, Clone, Copy, Default)]
pub struct StubRecognizer;

#[async_trait]
impl FoodRecognizer for StubRecognizer {
    async fn recognize(&self, source: ImageSource, _image: &CapturedImage) -> Option<Recognition> {
        let (food_id, quantity, unit) = match source {
            ImageSource::PhotoLibrary => ("roti", "1", "piece"),
            ImageSource::Camera => ("milk", "240", "ml"),
        };
        Some(Recognition {
            food_id: food_id.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        })
    }
}
