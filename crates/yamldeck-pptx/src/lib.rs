//! # yamldeck-pptx
//!
//! PowerPoint (PPTX) generation from YAML slide deck descriptions.
//!
//! A deck is a list of slides, each with a title, body text and an optional
//! picture. The crate loads such a description and writes a minimal but
//! complete PresentationML package for it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use yamldeck_pptx::{DeckConfig, PptxWriter};
//!
//! let deck = DeckConfig::from_file("deck.yaml")?;
//! PptxWriter::default().generate_to_file(&deck, "deck.pptx")?;
//! ```

pub mod config;
pub mod error;
pub mod shape;
pub mod slide;
pub mod writer;

// Re-exports
pub use config::{DeckConfig, SlideConfig};
pub use error::{DeckError, ErrorKind, Result};
pub use shape::{Placeholder, Shape};
pub use slide::{ImagePart, SlideId, SlidePart};
pub use writer::PptxWriter;

/// PPTX-related constants
pub mod constants {
    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// Default slide width in EMU (standard 10" width)
    pub const DEFAULT_SLIDE_WIDTH_EMU: i64 = 10 * EMU_PER_INCH;

    /// Default slide height in EMU (standard 7.5" height for 4:3)
    pub const DEFAULT_SLIDE_HEIGHT_EMU: i64 = 15 * EMU_PER_INCH / 2;

    /// Id given to the first slide in `p:sldIdLst`; later slides count up by one
    pub const SLIDE_ID_BASE: u32 = 101;

    /// Language tag written on every text run
    pub const DEFAULT_LANG: &str = "en-US";

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace (for `r:` attributes inside parts)
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// Package relationships namespace (for `.rels` parts)
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// Image relationship type
    pub const REL_TYPE_IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

    /// Presentation properties relationship type
    pub const REL_TYPE_PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";

    /// View properties relationship type
    pub const REL_TYPE_VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";

    /// Table styles relationship type
    pub const REL_TYPE_TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

    /// Content type of an individual slide part
    pub const CONTENT_TYPE_SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
}
