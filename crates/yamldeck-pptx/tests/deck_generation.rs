//! Deck generation tests
//!
//! These tests write real packages and read them back with `zip` and
//! `quick-xml`, checking the parts a presentation reader relies on.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::TempDir;
use yamldeck_pptx::{DeckConfig, ErrorKind, PptxWriter, SlideConfig};
use zip::ZipArchive;

// =============================================================================
// HELPERS
// =============================================================================

/// A shape found in a slide's shape tree
#[derive(Debug, PartialEq)]
enum Found {
    Text(String),
    Picture(String),
}

fn open(bytes: &[u8]) -> ZipArchive<Cursor<&[u8]>> {
    ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
}

fn read_text(bytes: &[u8], name: &str) -> String {
    let mut archive = open(bytes);
    let mut part = archive.by_name(name).expect(name);
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

fn read_bytes(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = open(bytes);
    let mut part = archive.by_name(name).expect(name);
    let mut content = Vec::new();
    part.read_to_end(&mut content).unwrap();
    content
}

fn slide_part_count(bytes: &[u8]) -> usize {
    open(bytes)
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .count()
}

/// Slide ids listed in `p:sldIdLst`, in document order
fn slide_ids(bytes: &[u8]) -> Vec<u32> {
    let xml = read_text(bytes, "ppt/presentation.xml");
    let mut reader = Reader::from_str(&xml);
    let mut ids = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) if e.name().as_ref() == b"p:sldId" => {
                let id = e.try_get_attribute("id").unwrap().expect("id attribute");
                let id = std::str::from_utf8(&id.value).unwrap().parse().unwrap();
                ids.push(id);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    ids
}

/// Shapes of a slide's `p:spTree`, in document order
fn shape_tree(bytes: &[u8], slide_number: usize) -> Vec<Found> {
    let xml = read_text(bytes, &format!("ppt/slides/slide{}.xml", slide_number));
    let mut reader = Reader::from_str(&xml);
    let mut shapes = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"p:sp" => shapes.push(Found::Text(String::new())),
                b"p:pic" => shapes.push(Found::Picture(String::new())),
                b"a:t" => in_text = true,
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"a:t" => in_text = false,
            Event::Text(t) if in_text => {
                if let Some(Found::Text(text)) = shapes.last_mut() {
                    text.push_str(&t.unescape().unwrap());
                }
            }
            Event::Empty(e) if e.name().as_ref() == b"a:blip" => {
                let embed = e.try_get_attribute("r:embed").unwrap().expect("r:embed");
                if let Some(Found::Picture(rel)) = shapes.last_mut() {
                    *rel = String::from_utf8(embed.value.into_owned()).unwrap();
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    shapes
}

fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path.display().to_string()
}

/// PNG signature followed by arbitrary bytes; nothing decodes it
const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\xff\x00binary\x00tail";

// =============================================================================
// SLIDE COUNT AND IDS
// =============================================================================

#[test]
fn test_hello_world_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("hello.pptx");

    let deck = DeckConfig::parse("Slides:\n  - Title: Hello\n    Content: World\n").unwrap();
    PptxWriter::default()
        .generate_to_file(&deck, &output)
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(slide_part_count(&bytes), 1);
    assert_eq!(slide_ids(&bytes), vec![101]);
    assert_eq!(
        shape_tree(&bytes, 1),
        vec![
            Found::Text("Hello".to_string()),
            Found::Text("World".to_string())
        ]
    );
}

#[test]
fn test_slide_ids_follow_input_order() {
    for count in [0usize, 1, 2, 7] {
        let deck = DeckConfig {
            slides: (0..count)
                .map(|i| SlideConfig::new(format!("Slide {}", i), "body"))
                .collect(),
        };

        let bytes = PptxWriter::default().generate(&deck).unwrap();

        assert_eq!(slide_part_count(&bytes), count);
        let expected: Vec<u32> = (0..count as u32).map(|i| 101 + i).collect();
        assert_eq!(slide_ids(&bytes), expected);

        for i in 0..count {
            let shapes = shape_tree(&bytes, i + 1);
            assert_eq!(shapes[0], Found::Text(format!("Slide {}", i)));
        }
    }
}

#[test]
fn test_empty_deck_is_still_a_presentation() {
    let bytes = PptxWriter::default().generate(&DeckConfig::default()).unwrap();

    let mut archive = open(&bytes);
    assert!(archive.by_name("[Content_Types].xml").is_ok());
    assert!(archive.by_name("ppt/slideMasters/slideMaster1.xml").is_ok());
    assert!(archive.by_name("ppt/slideLayouts/slideLayout1.xml").is_ok());
    assert!(slide_ids(&bytes).is_empty());
}

// =============================================================================
// TEXT SHAPES
// =============================================================================

#[test]
fn test_text_round_trips_verbatim() {
    let titles = [
        "",
        "  leading and trailing  ",
        "Profit & Loss <2024>",
        "\"quoted\" and 'single'",
        "Ünïcödé – 日本語 🎉",
    ];

    let deck = DeckConfig {
        slides: titles
            .iter()
            .map(|title| SlideConfig::new(*title, *title))
            .collect(),
    };

    let bytes = PptxWriter::default().generate(&deck).unwrap();

    for (i, title) in titles.iter().enumerate() {
        let shapes = shape_tree(&bytes, i + 1);
        assert_eq!(
            shapes,
            vec![
                Found::Text(title.to_string()),
                Found::Text(title.to_string())
            ],
            "slide {}",
            i + 1
        );
    }
}

#[test]
fn test_absent_fields_produce_empty_text_boxes() {
    let deck = DeckConfig::parse("Slides:\n  - ImagePath: \"\"\n").unwrap();
    let bytes = PptxWriter::default().generate(&deck).unwrap();

    assert_eq!(
        shape_tree(&bytes, 1),
        vec![Found::Text(String::new()), Found::Text(String::new())]
    );
}

#[test]
fn test_carriage_returns_survive_a_reader() {
    let deck = DeckConfig::parse("Slides:\n  - Title: \"a\\r\\nb\"\n    Content: \"tab\\there\"\n")
        .unwrap();
    assert_eq!(deck.slides[0].title, "a\r\nb");

    let bytes = PptxWriter::default().generate(&deck).unwrap();

    let xml = read_text(&bytes, "ppt/slides/slide1.xml");
    assert!(xml.contains("<a:t>a&#13;\nb</a:t>"));
    assert_eq!(
        shape_tree(&bytes, 1),
        vec![
            Found::Text("a\r\nb".to_string()),
            Found::Text("tab\there".to_string())
        ]
    );
}

#[test]
fn test_control_characters_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("deck.pptx");

    let deck = DeckConfig {
        slides: vec![
            SlideConfig::new("fine", "fine"),
            SlideConfig::new("a\u{1}b", "c"),
        ],
    };

    let err = PptxWriter::default().generate(&deck).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Packaging);
    assert_eq!(err.code(), "DECK007");
    assert!(err.to_string().contains("Slide 2"));

    let err = PptxWriter::default()
        .generate_to_file(&deck, &output)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Packaging);
}

// =============================================================================
// IMAGES
// =============================================================================

#[test]
fn test_image_is_embedded_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let image = write_image(temp_dir.path(), "logo.png", FAKE_PNG);

    let deck = DeckConfig {
        slides: vec![SlideConfig::new("Logo", "Our logo").with_image(image)],
    };

    let bytes = PptxWriter::default().generate(&deck).unwrap();

    assert_eq!(
        shape_tree(&bytes, 1),
        vec![
            Found::Picture("rId2".to_string()),
            Found::Text("Logo".to_string()),
            Found::Text("Our logo".to_string()),
        ]
    );

    let rels = read_text(&bytes, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels.contains(r#"Id="rId2""#));
    assert!(rels.contains(r#"Target="../media/image1.png""#));

    assert_eq!(read_bytes(&bytes, "ppt/media/image1.png"), FAKE_PNG);
}

#[test]
fn test_mixed_deck_media_names() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_image(temp_dir.path(), "a.png", b"first image");
    let third = write_image(temp_dir.path(), "c.png", b"third image");

    let deck = DeckConfig {
        slides: vec![
            SlideConfig::new("one", "1").with_image(first),
            SlideConfig::new("two", "2"),
            SlideConfig::new("three", "3").with_image(third),
        ],
    };

    let bytes = PptxWriter::default().generate(&deck).unwrap();

    assert_eq!(shape_tree(&bytes, 2).len(), 2);
    assert_eq!(read_bytes(&bytes, "ppt/media/image1.png"), b"first image");
    assert_eq!(read_bytes(&bytes, "ppt/media/image3.png"), b"third image");
    assert!(open(&bytes).by_name("ppt/media/image2.png").is_err());
}

#[test]
fn test_same_image_on_two_slides() {
    let temp_dir = TempDir::new().unwrap();
    let image = write_image(temp_dir.path(), "shared.png", FAKE_PNG);

    let deck = DeckConfig {
        slides: vec![
            SlideConfig::new("a", "a").with_image(image.clone()),
            SlideConfig::new("b", "b").with_image(image),
        ],
    };

    let bytes = PptxWriter::default().generate(&deck).unwrap();
    assert_eq!(read_bytes(&bytes, "ppt/media/image1.png"), FAKE_PNG);
    assert_eq!(read_bytes(&bytes, "ppt/media/image2.png"), FAKE_PNG);
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_missing_image_is_a_file_access_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("deck.pptx");
    let missing = temp_dir.path().join("missing.png");

    let deck = DeckConfig {
        slides: vec![
            SlideConfig::new("fine", "fine"),
            SlideConfig::new("broken", "broken").with_image(missing.display().to_string()),
        ],
    };

    let err = PptxWriter::default()
        .generate_to_file(&deck, &output)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileAccess);
    assert_eq!(err.code(), "DECK003");
}

#[test]
fn test_unwritable_output_location() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("no-such-dir").join("deck.pptx");

    let err = PptxWriter::default()
        .generate_to_file(&DeckConfig::default(), &output)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileAccess);
    assert_eq!(err.code(), "DECK004");
    assert!(!output.exists());
}

#[test]
fn test_output_is_truncated_on_rewrite() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("deck.pptx");
    fs::write(&output, vec![0u8; 1 << 20]).unwrap();

    PptxWriter::default()
        .generate_to_file(&DeckConfig::default(), &output)
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.len() < 1 << 20);
    assert!(slide_ids(&bytes).is_empty());
}
