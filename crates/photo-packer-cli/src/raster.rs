//! PNG compositing of laid-out pages.
//!
//! Sources are decoded once, then each placement is resized to its effective
//! box, rotated by its cardinal rotation, and overlaid on a white canvas.
//! Unreadable sources render as outlined gray boxes so one bad file does not
//! sink the sheet.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{imageops, ImageReader, Rgba, RgbaImage};
use indicatif::{ProgressBar, ProgressStyle};
use photo_packer_core::prelude::*;
use tracing::error;

const PLACEHOLDER_FILL: Rgba<u8> = Rgba([224, 224, 224, 255]);
const PLACEHOLDER_EDGE: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Decodes each distinct source once. Failures are logged and skipped; their
/// placements fall back to placeholder boxes.
pub fn load_sources(paths: &[&PathBuf], progress: bool) -> HashMap<PathBuf, RgbaImage> {
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )
            .unwrap(),
        );
        Some(b)
    } else {
        None
    };
    let mut images = HashMap::new();
    for path in paths {
        if images.contains_key(*path) {
            if let Some(b) = &bar {
                b.inc(1);
            }
            continue;
        }
        if let Some(b) = &bar {
            let msg = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            b.set_message(msg.to_string());
        }
        match load_image(path) {
            Ok(img) => {
                images.insert((*path).clone(), img);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "skip image");
            }
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    images
}

fn load_image(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img.to_rgba8())
}

/// Composites one page of placements at `dpi` pixels per page unit.
pub fn render_page_png(
    page: &[&Placement<String, PathBuf>],
    config: &PageConfig,
    dpi: u32,
    images: &HashMap<PathBuf, RgbaImage>,
) -> RgbaImage {
    let scale = dpi as f64;
    let page_w = (config.page_width * scale).round().max(1.0) as u32;
    let page_h = (config.page_height * scale).round().max(1.0) as u32;
    let mut canvas = RgbaImage::from_pixel(page_w, page_h, Rgba([255, 255, 255, 255]));

    for p in page {
        let x = (p.x * scale).round() as i64;
        let y = (p.y * scale).round() as i64;
        let w = (p.effective_width * scale).round().max(1.0) as u32;
        let h = (p.effective_height * scale).round().max(1.0) as u32;
        match images.get(&p.payload) {
            Some(src) => {
                let oriented = orient(src, p.rotation);
                let resized = imageops::resize(&oriented, w, h, imageops::FilterType::Triangle);
                imageops::overlay(&mut canvas, &resized, x, y);
            }
            None => draw_placeholder(&mut canvas, x, y, w, h),
        }
    }
    canvas
}

fn orient(src: &RgbaImage, rotation: Rotation) -> RgbaImage {
    match rotation {
        Rotation::R0 => src.clone(),
        Rotation::R90 => imageops::rotate90(src),
        Rotation::R180 => imageops::rotate180(src),
        Rotation::R270 => imageops::rotate270(src),
    }
}

fn draw_placeholder(canvas: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32) {
    let (cw, ch) = canvas.dimensions();
    for dy in 0..h {
        for dx in 0..w {
            let px = x + dx as i64;
            let py = y + dy as i64;
            if px < 0 || py < 0 || px >= cw as i64 || py >= ch as i64 {
                continue;
            }
            let edge = dx == 0 || dy == 0 || dx == w - 1 || dy == h - 1;
            let color = if edge {
                PLACEHOLDER_EDGE
            } else {
                PLACEHOLDER_FILL
            };
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}
