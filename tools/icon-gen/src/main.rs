use anyhow::Context;
use clap::Parser;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

const BACKGROUND: Rgba<u8> = Rgba([10, 14, 39, 255]);
const GOLD: Rgba<u8> = Rgba([255, 193, 7, 255]);
// Written as-is, so it keeps alpha 200 over the background.
const ROSE: Rgba<u8> = Rgba([220, 38, 38, 200]);

const OUT_DIR: &str = "public";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Standard,
    Maskable,
}

const TARGETS: [(u32, &str, Kind); 3] = [
    (192, "icon-192x192.png", Kind::Standard),
    (512, "icon-512x512.png", Kind::Standard),
    (192, "icon-maskable.png", Kind::Maskable),
];

/// Regenerate the PWA icons under public/
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

/// `size * k` truncated to whole pixels, toward zero.
fn frac(size: u32, k: f64) -> i32 {
    (size as f64 * k) as i32
}

// Integer coordinates name pixels. Everything clips to the canvas and
// replaces the pixel, alpha included.
fn put(img: &mut RgbaImage, x: i32, y: i32, c: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, c);
    }
}

/// Outline of the inclusive square `(lo, lo)..=(hi, hi)`, growing inward.
fn stroke_square(img: &mut RgbaImage, lo: i32, hi: i32, width: i32, c: Rgba<u8>) {
    for y in lo..=hi {
        for x in lo..=hi {
            let d = (x - lo).min(hi - x).min(y - lo).min(hi - y);
            if d < width.max(1) {
                put(img, x, y, c);
            }
        }
    }
}

/// Scanline fill sampled at integer rows, even-odd rule, then the edges are
/// traced so thin tips survive.
fn fill_polygon(img: &mut RgbaImage, pts: &[(f32, f32)], c: Rgba<u8>) {
    let edges = || pts.iter().copied().zip(pts.iter().copied().cycle().skip(1));
    let lo = pts.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).ceil() as i32;
    let hi = pts.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).floor() as i32;
    for y in lo..=hi {
        let yf = y as f32;
        let mut xs: Vec<f32> = edges()
            // half-open so a shared vertex counts once
            .filter(|(a, b)| (a.1 <= yf && yf < b.1) || (b.1 <= yf && yf < a.1))
            .map(|(a, b)| a.0 + (yf - a.1) * (b.0 - a.0) / (b.1 - a.1))
            .collect();
        xs.sort_by(f32::total_cmp);
        for span in xs.chunks_exact(2) {
            for x in span[0].ceil() as i32..=span[1].floor() as i32 {
                put(img, x, y, c);
            }
        }
    }
    for (a, b) in edges() {
        let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as i32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = a.0 + (b.0 - a.0) * t;
            let y = a.1 + (b.1 - a.1) * t;
            put(img, x.round() as i32, y.round() as i32, c);
        }
    }
}

/// Ellipse inscribed in the inclusive box `(x0, y0)..=(x1, y1)`.
fn fill_ellipse(img: &mut RgbaImage, (x0, y0, x1, y1): (i32, i32, i32, i32), c: Rgba<u8>) {
    let (cx, cy) = ((x0 + x1) as f32 / 2.0, (y0 + y1) as f32 / 2.0);
    let (rx, ry) = ((x1 - x0 + 1) as f32 / 2.0, (y1 - y0 + 1) as f32 / 2.0);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (nx, ny) = ((x as f32 - cx) / rx, (y as f32 - cy) / ry);
            if nx * nx + ny * ny <= 1.0 {
                put(img, x, y, c);
            }
        }
    }
}

/// Bow tie of half-size `bow` around the center, then three stacked buttons.
fn draw_bow_and_buttons(img: &mut RgbaImage, bow: i32, radius: i32, spacing: f64) {
    let size = img.width();
    let c = (size / 2) as i32;
    let (cf, b) = (c as f32, bow as f32);
    let tip = b * 0.3;
    fill_polygon(img, &[(cf - b, cf - b), (cf - tip, cf), (cf - b, cf + b)], GOLD);
    fill_polygon(img, &[(cf + b, cf - b), (cf + tip, cf), (cf + b, cf + b)], GOLD);
    for i in -1..=1 {
        let y = c + (size as f64 * spacing * i as f64) as i32;
        fill_ellipse(img, (c - radius, y - radius, c + radius, y + radius), GOLD);
    }
}

fn render_standard(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);
    let margin = frac(size, 0.1);
    stroke_square(&mut img, margin, size as i32 - margin, frac(size, 0.04), GOLD);

    let bow = frac(size, 0.15);
    draw_bow_and_buttons(&mut img, bow, frac(size, 0.03), 0.08);

    let c = (size / 2) as i32;
    let r = frac(size, 0.04);
    let left = c + bow + frac(size, 0.05);
    let mid = c - frac(size, 0.1);
    fill_ellipse(&mut img, (left, mid - r, left + 2 * r, mid + r), ROSE);
    img
}

/// No border or rose; the motif is scaled up to stay inside the mask safe zone.
fn render_maskable(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    draw_bow_and_buttons(&mut img, frac(size, 0.2), frac(size, 0.035), 0.1);
    img
}

/// Render one icon into `out_dir`, which must already exist.
fn create(out_dir: &Path, size: u32, filename: &str, kind: Kind) -> anyhow::Result<PathBuf> {
    let img = match kind {
        Kind::Standard => render_standard(size),
        Kind::Maskable => render_maskable(size),
    };
    let path = out_dir.join(filename);
    img.save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({size}x{size}, {kind:?})", path.display());
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("🎨 Generating PWA icons...");
    for (size, filename, kind) in TARGETS {
        create(Path::new(OUT_DIR), size, filename, kind)?;
        println!("✅ Created {filename}");
    }
    println!("✨ All icons created successfully!");
    Ok(())
}
