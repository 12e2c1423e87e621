// Slide module
// Carousel items shown in the event detail window

use serde::{Deserialize, Serialize};

/// A person credited on a slide, with an optional biography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePerson {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl SlidePerson {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: None,
        }
    }
}

/// One unit of displayable media for an event's carousel.
///
/// A slide can carry an image, a caption, structured attribution for one or
/// two people, or any combination of those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<SlidePerson>,
}

impl Slide {
    /// A slide showing a single image with no caption
    pub fn image_only(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }

    /// True when the slide credits `name`
    pub fn attributes(&self, name: &str) -> bool {
        self.people.iter().any(|p| p.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.caption.is_none() && self.people.is_empty()
    }
}
