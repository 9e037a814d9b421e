//! Shape subtrees placed in a slide's `p:spTree`.
//!
//! Each builder takes plain semantic input (a string, a relationship id) and
//! returns a complete [`Shape`]; [`Shape::to_xml`] renders it as DrawingML.

use crate::constants::DEFAULT_LANG;
use quick_xml::escape::escape;

/// Layout placeholder a text shape is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `<p:ph type="title"/>`
    Title,
    /// `<p:ph idx="1"/>`, the layout's body area
    Body,
}

/// A visual element on a slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Text box holding one paragraph with one run
    Text {
        id: u32,
        name: String,
        placeholder: Placeholder,
        text: String,
    },

    /// Picture filled from an image part of the slide
    Picture { id: u32, name: String, rel_id: String },
}

/// Whether XML 1.0 allows `c` in character data
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape run text; `\r` becomes a character reference so readers keep it
fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

/// Build the title text box
pub fn title_shape(id: u32, title: &str) -> Shape {
    Shape::Text {
        id,
        name: format!("Title {}", id.saturating_sub(1)),
        placeholder: Placeholder::Title,
        text: title.to_string(),
    }
}

/// Build the body text box
pub fn content_shape(id: u32, content: &str) -> Shape {
    Shape::Text {
        id,
        name: format!("Content {}", id.saturating_sub(1)),
        placeholder: Placeholder::Body,
        text: content.to_string(),
    }
}

/// Build a picture referencing an image relationship of the slide
pub fn picture_shape(id: u32, rel_id: &str) -> Shape {
    Shape::Picture {
        id,
        name: format!("Picture {}", id.saturating_sub(1)),
        rel_id: rel_id.to_string(),
    }
}

impl Shape {
    /// Drawing id (`cNvPr/@id`), unique within the slide
    pub fn id(&self) -> u32 {
        match self {
            Self::Text { id, .. } | Self::Picture { id, .. } => *id,
        }
    }

    /// Run text of a text shape
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Picture { .. } => None,
        }
    }

    /// Render the shape as a `p:sp` or `p:pic` element
    pub fn to_xml(&self) -> String {
        match self {
            Self::Text {
                id,
                name,
                placeholder,
                text,
            } => {
                let ph = match placeholder {
                    Placeholder::Title => r#"<p:ph type="title"/>"#,
                    Placeholder::Body => r#"<p:ph idx="1"/>"#,
                };

                format!(
                    r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{}" name="{}"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr>{}</p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p>
            <a:r>
              <a:rPr lang="{}"/>
              <a:t>{}</a:t>
            </a:r>
          </a:p>
        </p:txBody>
      </p:sp>
"#,
                    id,
                    escape(name.as_str()),
                    ph,
                    DEFAULT_LANG,
                    escape_text(text)
                )
            }
            Self::Picture { id, name, rel_id } => format!(
                r#"      <p:pic>
        <p:nvPicPr>
          <p:cNvPr id="{}" name="{}"/>
          <p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>
          <p:nvPr/>
        </p:nvPicPr>
        <p:blipFill>
          <a:blip r:embed="{}"/>
          <a:stretch><a:fillRect/></a:stretch>
        </p:blipFill>
        <p:spPr/>
      </p:pic>
"#,
                id,
                escape(name.as_str()),
                escape(rel_id.as_str())
            ),
        }
    }
}
