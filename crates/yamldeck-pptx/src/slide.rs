//! Slide parts and the presentation's slide id list.
//!
//! A [`SlidePart`] is everything written for one slide: its shape tree, the
//! image part it embeds (if any) and the relationships between them.

use crate::config::SlideConfig;
use crate::constants::*;
use crate::shape::{content_shape, is_xml_char, picture_shape, title_shape, Shape};
use quick_xml::escape::escape;
use std::path::PathBuf;

/// Relationship id of the slide layout inside every slide's rels part
pub const LAYOUT_REL_ID: &str = "rId1";

/// Relationship id of the embedded picture inside a slide's rels part
pub const IMAGE_REL_ID: &str = "rId2";

/// Drawing id of the shape tree's group properties; shapes count up from here
const GROUP_SHAPE_ID: u32 = 1;

/// One generated slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePart {
    /// Slide number (1-based, matches `slideN.xml`)
    pub number: usize,

    /// Shapes in `p:spTree` order
    pub shapes: Vec<Shape>,

    /// Embedded picture
    pub image: Option<ImagePart>,
}

/// Image file streamed into the package as `ppt/media/imageN.png`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    /// File the bytes are read from
    pub source: PathBuf,

    /// Relationship id used by the picture's `a:blip`
    pub rel_id: String,

    /// File name inside `ppt/media/`
    pub media_name: String,
}

/// Entry of `p:sldIdLst`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideId {
    pub id: u32,
    pub rel_id: String,
}

impl SlidePart {
    /// Build slide `number` from its description.
    ///
    /// The picture, when present, comes first in the shape tree so that the
    /// title and body are stacked above it.
    pub fn build(number: usize, config: &SlideConfig) -> Self {
        let mut next_id = GROUP_SHAPE_ID;
        let mut alloc = || {
            next_id += 1;
            next_id
        };

        let image = config.image().map(|path| ImagePart {
            source: PathBuf::from(path),
            rel_id: IMAGE_REL_ID.to_string(),
            media_name: format!("image{}.png", number),
        });

        let mut shapes = Vec::with_capacity(3);
        if let Some(image) = &image {
            shapes.push(picture_shape(alloc(), &image.rel_id));
        }
        shapes.push(title_shape(alloc(), &config.title));
        shapes.push(content_shape(alloc(), &config.content));

        Self {
            number,
            shapes,
            image,
        }
    }

    /// First run text holding a character XML 1.0 cannot represent
    pub fn invalid_text(&self) -> Option<&str> {
        self.shapes
            .iter()
            .filter_map(Shape::text)
            .find(|text| !text.chars().all(is_xml_char))
    }

    /// Part name inside the package
    pub fn part_name(&self) -> String {
        format!("ppt/slides/slide{}.xml", self.number)
    }

    /// Name of the slide's relationships part
    pub fn rels_part_name(&self) -> String {
        format!("ppt/slides/_rels/slide{}.xml.rels", self.number)
    }

    /// Render `ppt/slides/slideN.xml`
    pub fn to_xml(&self) -> String {
        let shapes: String = self.shapes.iter().map(Shape::to_xml).collect();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="{}" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, GROUP_SHAPE_ID, shapes
        )
    }

    /// Render `ppt/slides/_rels/slideN.xml.rels`
    pub fn rels_xml(&self) -> String {
        let mut rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="{}" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
"#,
            NS_PACKAGE_RELATIONSHIPS, LAYOUT_REL_ID, REL_TYPE_SLIDE_LAYOUT
        );

        if let Some(image) = &self.image {
            rels.push_str(&format!(
                "  <Relationship Id=\"{}\" Type=\"{}\" Target=\"../media/{}\"/>\n",
                escape(image.rel_id.as_str()),
                REL_TYPE_IMAGE,
                escape(image.media_name.as_str())
            ));
        }

        rels.push_str("</Relationships>");
        rels
    }
}

impl ImagePart {
    /// Part name inside the package
    pub fn part_name(&self) -> String {
        format!("ppt/media/{}", self.media_name)
    }
}

/// Pair each slide with its id, counting up from [`SLIDE_ID_BASE`] in order.
///
/// `first_rel` is the presentation relationship number of the first slide.
pub fn assign_slide_ids(slides: &[SlidePart], first_rel: usize) -> Vec<SlideId> {
    slides
        .iter()
        .enumerate()
        .map(|(i, _)| SlideId {
            id: SLIDE_ID_BASE + i as u32,
            rel_id: format!("rId{}", first_rel + i),
        })
        .collect()
}
