// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slide assembler: bind an ordered list of images into one PDF using
// `printpdf` 0.8, one page per image.
//
// Each page takes the native size of its image: captures are authored at
// `SOURCE_DPI`, so a W x H pixel image becomes a W*72/96 x H*72/96 point page
// with the image drawn edge to edge from the origin.

use std::path::{Path, PathBuf};

use printpdf::{
    ImageCompression, ImageOptimizationOptions, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions,
    PdfWarnMsg, Pt, RawImage, RawImageData, RawImageFormat, XObjectTransform,
};
use serde::Serialize;
use slidebinder_core::error::{Result, SlideBinderError};
use slidebinder_core::{POINTS_PER_INCH, PageSize, SOURCE_DPI};
use tracing::{debug, info, instrument, warn};

/// Millimetres per inch, for printpdf's page-size unit.
const MM_PER_INCH: f32 = 25.4;

/// What an assembly run produced.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    /// Where the document was written.
    pub output: PathBuf,
    /// Size of each page in document order.
    pub pages: Vec<PageSize>,
    /// Size of the serialised PDF.
    pub bytes_written: usize,
}

impl AssemblyReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Builds page-per-image PDF documents.
pub struct SlideAssembler {
    /// Title metadata embedded in the PDF /Info dictionary.
    title: String,
}

impl SlideAssembler {
    /// Create an assembler that stamps `title` into the document metadata.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Build the PDF in memory.
    ///
    /// Returns the serialised bytes and the size of every page. Any image
    /// that cannot be read or decoded aborts the whole build.
    #[instrument(skip_all, fields(images = images.len()))]
    pub fn build(&self, images: &[PathBuf]) -> Result<(Vec<u8>, Vec<PageSize>)> {
        let mut doc = PdfDocument::new(&self.title);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(images.len());
        let mut sizes: Vec<PageSize> = Vec::with_capacity(images.len());

        for path in images {
            let raw = load_raw_image(path)?;
            let size = PageSize::from_pixels(raw.width as u32, raw.height as u32);
            let xobject_id = doc.add_image(&raw);

            // At SOURCE_DPI the image's natural size is the page size.
            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(0.0)),
                    scale_x: None,
                    scale_y: None,
                    dpi: Some(SOURCE_DPI),
                    rotate: None,
                },
            }];

            debug!(
                path = %path.display(),
                width_pt = size.width_pt,
                height_pt = size.height_pt,
                "Page laid out"
            );

            pages.push(PdfPage::new(
                points_to_mm(size.width_pt),
                points_to_mm(size.height_pt),
                ops,
            ));
            sizes.push(size);
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&save_options(), &mut warnings);
        for warning in &warnings {
            warn!(?warning, "PDF serialisation warning");
        }

        Ok((output, sizes))
    }

    /// Build the PDF and write it to `output`, replacing any existing file.
    ///
    /// The document is assembled completely before the file is touched, so a
    /// bad image leaves whatever was at `output` in place. An empty image list
    /// is rejected with [`SlideBinderError::EmptyDocument`].
    #[instrument(skip_all, fields(images = images.len(), output = %output.as_ref().display()))]
    pub fn write_to_file(
        &self,
        images: &[PathBuf],
        output: impl AsRef<Path>,
    ) -> Result<AssemblyReport> {
        let output = output.as_ref();
        if images.is_empty() {
            return Err(SlideBinderError::EmptyDocument {
                path: output.to_path_buf(),
            });
        }

        let (bytes, pages) = self.build(images)?;
        std::fs::write(output, &bytes).map_err(|source| SlideBinderError::OutputWrite {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            pages = pages.len(),
            bytes = bytes.len(),
            "Wrote slide PDF to {}",
            output.display()
        );

        Ok(AssemblyReport {
            output: output.to_path_buf(),
            pages,
            bytes_written: bytes.len(),
        })
    }
}

impl Default for SlideAssembler {
    fn default() -> Self {
        Self::new("Slides")
    }
}

/// Assemble `images` into a page-per-image PDF at `output`.
pub fn assemble(images: &[PathBuf], output: impl AsRef<Path>) -> Result<AssemblyReport> {
    SlideAssembler::default().write_to_file(images, output)
}

// -- Helpers ------------------------------------------------------------------

/// Decode an image file into printpdf's raw RGB form.
fn load_raw_image(path: &Path) -> Result<RawImage> {
    let dynamic_image = ::image::open(path).map_err(|err| SlideBinderError::ImageDecode {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })?;

    let width = dynamic_image.width() as usize;
    let height = dynamic_image.height() as usize;
    let rgb_image = dynamic_image.to_rgb8();

    Ok(RawImage {
        pixels: RawImageData::U8(rgb_image.into_raw()),
        width,
        height,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}

/// Save options that embed every image at its native resolution and colour
/// space, compressed losslessly.
fn save_options() -> PdfSaveOptions {
    PdfSaveOptions {
        image_optimization: Some(ImageOptimizationOptions {
            auto_optimize: Some(false),
            max_image_size: None,
            convert_to_greyscale: Some(false),
            format: Some(ImageCompression::Flate),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn points_to_mm(points: f32) -> Mm {
    Mm(points * MM_PER_INCH / POINTS_PER_INCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgb, RgbImage};
    use lopdf::Document;
    use lopdf::content::Content;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb([40, 90, 160]))
            .save(&path)
            .unwrap();
        path
    }

    /// (width, height) of every page's /MediaBox, in points.
    fn media_boxes(path: &Path) -> Vec<(f32, f32)> {
        let doc = Document::load(path).unwrap();
        doc.get_pages()
            .values()
            .map(|page_id| {
                let page = doc.get_dictionary(*page_id).unwrap();
                let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
                let coord = |i: usize| media_box[i].as_float().unwrap();
                (coord(2) - coord(0), coord(3) - coord(1))
            })
            .collect()
    }

    /// Noisy capture so no encoder can treat it as flat or grey.
    fn write_noisy_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_fn(width, height, |x, y| {
            let seed = x.wrapping_mul(7919) ^ y.wrapping_mul(104_729) ^ (x * y);
            Rgb([seed as u8, (seed >> 8) as u8, (seed >> 16) as u8 ^ x as u8])
        })
        .save(&path)
        .unwrap();
        path
    }

    /// Dictionaries of every image XObject in the document.
    fn image_xobjects(doc: &Document) -> Vec<lopdf::Dictionary> {
        doc.objects
            .values()
            .filter_map(|object| match object {
                lopdf::Object::Stream(stream)
                    if stream
                        .dict
                        .get(b"Subtype")
                        .and_then(|subtype| subtype.as_name())
                        .is_ok_and(|name| name == b"Image") =>
                {
                    Some(stream.dict.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 0.01 && (actual.1 - expected.1).abs() < 0.01,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn single_image_page_matches_native_size() {
        let dir = TempDir::new().unwrap();
        let image = write_png(dir.path(), "0.png", 960, 720);
        let output = dir.path().join("deck.pdf");

        let report = assemble(&[image], &output).unwrap();

        assert_eq!(report.page_count(), 1);
        assert_eq!(report.pages[0], PageSize::from_pixels(960, 720));
        assert_eq!(report.bytes_written as u64, std::fs::metadata(&output).unwrap().len());

        let boxes = media_boxes(&output);
        assert_eq!(boxes.len(), 1);
        assert_close(boxes[0], (720.0, 540.0));
    }

    #[test]
    fn pages_follow_input_order_and_sizes() {
        let dir = TempDir::new().unwrap();
        let images = vec![
            write_png(dir.path(), "0.png", 960, 720),
            write_png(dir.path(), "0-diagram.png", 400, 800),
            write_png(dir.path(), "2.png", 1366, 768),
        ];
        let output = dir.path().join("deck.pdf");

        let report = assemble(&images, &output).unwrap();
        assert_eq!(report.page_count(), 3);

        let boxes = media_boxes(&output);
        assert_eq!(boxes.len(), 3);
        assert_close(boxes[0], (720.0, 540.0));
        assert_close(boxes[1], (300.0, 600.0));
        assert_close(boxes[2], (1024.5, 576.0));
    }

    #[test]
    fn second_run_overwrites_first() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("deck.pdf");
        let first = vec![
            write_png(dir.path(), "a.png", 96, 96),
            write_png(dir.path(), "b.png", 96, 96),
            write_png(dir.path(), "c.png", 96, 96),
        ];
        let second = vec![write_png(dir.path(), "d.png", 192, 96)];

        assemble(&first, &output).unwrap();
        assert_eq!(media_boxes(&output).len(), 3);

        assemble(&second, &output).unwrap();
        let boxes = media_boxes(&output);
        assert_eq!(boxes.len(), 1);
        assert_close(boxes[0], (144.0, 72.0));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("deck.pdf");

        let err = assemble(&[], &output).unwrap_err();
        assert!(matches!(err, SlideBinderError::EmptyDocument { .. }), "got {err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn corrupt_image_aborts_before_writing() {
        let dir = TempDir::new().unwrap();
        let good = write_png(dir.path(), "0.png", 96, 96);
        let bad = dir.path().join("1.png");
        std::fs::write(&bad, b"definitely not a png").unwrap();
        let output = dir.path().join("deck.pdf");

        match assemble(&[good, bad.clone()], &output) {
            Err(SlideBinderError::ImageDecode { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected ImageDecode, got {other:?}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn missing_image_is_a_decode_failure() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("deck.pdf");
        let err = assemble(&[dir.path().join("gone.png")], &output).unwrap_err();
        assert!(matches!(err, SlideBinderError::ImageDecode { .. }), "got {err:?}");
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = TempDir::new().unwrap();
        let image = write_png(dir.path(), "0.png", 96, 96);
        let output = dir.path().join("no-such-dir").join("deck.pdf");

        match assemble(&[image], &output) {
            Err(SlideBinderError::OutputWrite { path, .. }) => assert_eq!(path, output),
            other => panic!("expected OutputWrite, got {other:?}"),
        }
    }

    #[test]
    fn large_capture_is_embedded_at_native_resolution() {
        let dir = TempDir::new().unwrap();
        let image = write_noisy_png(dir.path(), "0.png", 1920, 1080);

        let (bytes, sizes) = SlideAssembler::default().build(&[image]).unwrap();
        assert_eq!(sizes, vec![PageSize::from_pixels(1920, 1080)]);

        let doc = Document::load_mem(&bytes).unwrap();
        let images = image_xobjects(&doc);
        assert_eq!(images.len(), 1);
        let dict = &images[0];
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 1920);
        assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 1080);
        assert_eq!(dict.get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceRGB");
    }

    #[test]
    fn flat_colour_capture_keeps_rgb_colour_space() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("0.png");
        RgbImage::from_pixel(960, 720, Rgb([1, 2, 3])).save(&path).unwrap();

        let (bytes, _) = SlideAssembler::default().build(&[path]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let images = image_xobjects(&doc);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].get(b"Width").unwrap().as_i64().unwrap(), 960);
        assert_eq!(images[0].get(b"Height").unwrap().as_i64().unwrap(), 720);
        assert_eq!(images[0].get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceRGB");
    }

    #[test]
    fn image_fills_page_from_origin() {
        let dir = TempDir::new().unwrap();
        let image = write_png(dir.path(), "0.png", 960, 720);

        let (bytes, _) = SlideAssembler::default().build(&[image]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();

        let draw = content
            .operations
            .iter()
            .position(|op| op.operator == "Do")
            .expect("image is drawn");
        let matrix = content.operations[..draw]
            .iter()
            .rev()
            .find(|op| op.operator == "cm")
            .expect("image is placed with a cm transform");
        let values: Vec<f32> = matrix
            .operands
            .iter()
            .map(|operand| operand.as_float().unwrap())
            .collect();
        let expected = [720.0, 0.0, 0.0, 540.0, 0.0, 0.0];
        assert_eq!(values.len(), expected.len());
        for (actual, expected) in values.iter().zip(expected) {
            assert!((actual - expected).abs() < 0.01, "cm was {values:?}");
        }
    }

    #[test]
    fn build_stays_in_memory() {
        let dir = TempDir::new().unwrap();
        let image = write_png(dir.path(), "0.png", 480, 360);

        let (bytes, sizes) = SlideAssembler::new("Deck").build(&[image]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(sizes, vec![PageSize::from_pixels(480, 360)]);

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
