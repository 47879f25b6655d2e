// File: crates/topster-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use topster_core::{generate, Background, Chart, ChartItem, ChartSize};
use topster_render_skia::{SkiaImage, SkiaSurface};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

/// Diagonal gradient so scaling and placement show up in the pixels.
fn gradient(w: u32, h: u32) -> SkiaImage {
    let img = image::RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 128, 255])
    });
    SkiaImage::from_rgba(&img).expect("wrap cover")
}

fn render_to_bytes<F: FnOnce(&mut Chart<SkiaImage>)>(build: F) -> Vec<u8> {
    let mut chart = Chart::new("", ChartSize::new(3, 2));
    chart.gap = 12;
    build(&mut chart);
    let mut surface = SkiaSurface::default();
    generate(&mut surface, &chart).expect("generate");
    surface.to_png_bytes().expect("png bytes")
}

#[test]
fn golden_mixed_aspect_grid() {
    let bytes = render_to_bytes(|c| {
        c.background = Background::color("#202024");
        c.add_item(ChartItem::new("square", gradient(300, 300)));
        c.add_item(ChartItem::new("wide", gradient(520, 390)));
        c.add_item(ChartItem::new("tall", gradient(100, 520)));
        c.items.push(None);
        c.add_item(ChartItem::new("small", gradient(64, 48)));
        c.add_item(ChartItem::new("exact", gradient(260, 120)));
        c.add_item(ChartItem::new("hidden", gradient(10, 10)));
    });
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/mixed_aspect_grid.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_photo_background() {
    let bytes = render_to_bytes(|c| {
        c.shadows = Some(false);
        c.background = Background::image("photo", gradient(90, 160));
        for i in 0..6 {
            c.add_item(ChartItem::new(format!("cover {i}"), gradient(200 + i * 20, 200)));
        }
    });
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/photo_background.png");
    write_or_compare(&path, &bytes);
}
