//! SVG rasterization for remote vector images.

use std::io::Cursor;

use quick_xml::{Reader, Writer, events::Event};
use resvg::{tiny_skia, usvg};

use super::ImageError;

/// Removes every comment node from SVG markup.
pub fn strip_comments(reference: &str, svg: &[u8]) -> Result<Vec<u8>, ImageError> {
    let markup_error = |message: String| ImageError::SvgMarkup {
        reference: reference.to_string(),
        message,
    };

    let mut reader = Reader::from_reader(svg);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Comment(_)) => {}
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| markup_error(e.to_string()))?,
            Err(e) => return Err(markup_error(e.to_string())),
        }
        buf.clear();
    }

    Ok(writer.into_inner().into_inner())
}

/// Rasterizes SVG markup to PNG at the document's intrinsic size.
pub fn rasterize(reference: &str, svg: &[u8]) -> Result<Vec<u8>, ImageError> {
    let markup = strip_comments(reference, svg)?;

    let tree = usvg::Tree::from_data(&markup, &usvg::Options::default()).map_err(|source| {
        ImageError::SvgParse {
            reference: reference.to_string(),
            source,
        }
    })?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ImageError::EmptyCanvas {
            reference: reference.to_string(),
        }
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| ImageError::Encode {
        reference: reference.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<?xml version="1.0"?>
<!-- exported by a drawing tool -->
<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3">
  <!-- background -->
  <rect width="4" height="3" fill="#ff0000"/>
</svg>"##;

    #[test]
    fn comments_are_removed() {
        let stripped = String::from_utf8(strip_comments("sq.svg", SQUARE.as_bytes()).unwrap()).unwrap();
        assert!(!stripped.contains("<!--"));
        assert!(stripped.contains("<rect"));
    }

    #[test]
    fn rasterizes_to_png_of_intrinsic_size() {
        let png = rasterize("sq.svg", SQUARE.as_bytes()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let pixmap = tiny_skia::Pixmap::decode_png(&png).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (4, 3));
    }

    #[test]
    fn malformed_markup_is_an_error() {
        let err = rasterize("bad.svg", b"<svg><g></svg>").unwrap_err();
        assert!(matches!(
            err,
            ImageError::SvgMarkup { .. } | ImageError::SvgParse { .. }
        ));
    }
}
