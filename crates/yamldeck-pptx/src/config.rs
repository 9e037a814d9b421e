//! Deck description loaded from YAML.
//!
//! ```yaml
//! Slides:
//!   - Title: Hello
//!     Content: World
//!     ImagePath: ./images/logo.png
//!   - Title: Second
//!     Content: No picture here
//! ```
//!
//! Mapping keys are matched without regard to ASCII case, so `slides`,
//! `title` or `IMAGEPATH` are accepted too. Unknown and duplicate keys are
//! rejected.

use crate::error::{DeckError, Result};
use serde::de::{self, Deserializer, MapAccess, Unexpected, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const DECK_FIELDS: &[&str] = &["Slides"];
const SLIDE_FIELDS: &[&str] = &["Title", "Content", "ImagePath"];

/// An ordered list of slides to generate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckConfig {
    pub slides: Vec<SlideConfig>,
}

/// One slide of the deck
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideConfig {
    /// Title text; empty when absent
    pub title: String,

    /// Body text; empty when absent
    pub content: String,

    /// Path of a PNG to embed on the slide
    pub image_path: Option<String>,
}

impl DeckConfig {
    /// Load a deck from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| DeckError::config_read(path, source))?;
        Self::parse(&content)
    }

    /// Parse a deck from a YAML string
    pub fn parse(yaml: &str) -> Result<Self> {
        let deck: DeckConfig = serde_saphyr::from_str(yaml)?;
        Ok(deck)
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl SlideConfig {
    /// Create a slide without a picture
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image_path: None,
        }
    }

    /// Set the picture path
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Picture path, if set and non-empty
    pub fn image(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// Mapping key, kept as written so errors can quote it
struct Key(String);

impl Key {
    fn folded(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Key)
    }
}

impl<'de> Deserialize<'de> for DeckConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeckVisitor;

        impl<'de> Visitor<'de> for DeckVisitor {
            type Value = DeckConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping with a `Slides` sequence")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<DeckConfig, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Null `Slides` and null entries are read so they can be rejected
                let mut slides: Option<Option<Vec<Option<SlideConfig>>>> = None;

                while let Some(key) = map.next_key::<Key>()? {
                    match key.folded().as_str() {
                        "slides" => {
                            if slides.is_some() {
                                return Err(de::Error::duplicate_field("Slides"));
                            }
                            slides = Some(map.next_value()?);
                        }
                        _ => return Err(de::Error::unknown_field(&key.0, DECK_FIELDS)),
                    }
                }

                let slides = match slides {
                    Some(Some(slides)) => slides,
                    Some(None) => {
                        return Err(de::Error::invalid_type(
                            Unexpected::Unit,
                            &"a sequence of slides",
                        ))
                    }
                    None => return Err(de::Error::missing_field("Slides")),
                };

                let slides = slides
                    .into_iter()
                    .map(|slide| {
                        slide.ok_or_else(|| {
                            de::Error::invalid_type(Unexpected::Unit, &"a slide mapping")
                        })
                    })
                    .collect::<std::result::Result<Vec<_>, A::Error>>()?;

                Ok(DeckConfig { slides })
            }
        }

        deserializer.deserialize_map(DeckVisitor)
    }
}

impl<'de> Deserialize<'de> for SlideConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SlideVisitor;

        impl<'de> Visitor<'de> for SlideVisitor {
            type Value = SlideConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a slide mapping with `Title`, `Content` and `ImagePath`")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<SlideConfig, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut title: Option<Option<String>> = None;
                let mut content: Option<Option<String>> = None;
                let mut image_path: Option<Option<String>> = None;

                while let Some(key) = map.next_key::<Key>()? {
                    let (slot, name) = match key.folded().as_str() {
                        "title" => (&mut title, "Title"),
                        "content" => (&mut content, "Content"),
                        "imagepath" => (&mut image_path, "ImagePath"),
                        _ => return Err(de::Error::unknown_field(&key.0, SLIDE_FIELDS)),
                    };
                    if slot.is_some() {
                        return Err(de::Error::duplicate_field(name));
                    }
                    *slot = Some(map.next_value()?);
                }

                Ok(SlideConfig {
                    title: title.flatten().unwrap_or_default(),
                    content: content.flatten().unwrap_or_default(),
                    image_path: image_path.flatten(),
                })
            }
        }

        deserializer.deserialize_map(SlideVisitor)
    }
}
