//! Build script for StaffScope.
//!
//! Generates the application icon programmatically and embeds it along with
//! the Windows application manifest into the final executable.

use std::path::Path;

fn main() {
    // The icon is embedded via include_bytes! on every platform, so it is
    // generated unconditionally.
    generate_icon();

    // Only run resource embedding on Windows MSVC targets.
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let mut res = winresource::WindowsResource::new();
    res.set_icon("assets/icon.ico");
    res.set_manifest_file("assets/app.manifest");
    res.set("ProductName", "StaffScope");
    res.set("FileDescription", "HR Records Workspace");

    if let Err(e) = res.compile() {
        eprintln!("cargo:warning=Failed to compile Windows resources: {e}");
    }
}

/// Generates a simple ID-badge icon programmatically.
/// Produces a multi-resolution .ico file at `assets/icon.ico`.
fn generate_icon() {
    let icon_path = Path::new("assets/icon.ico");
    if icon_path.exists() {
        return; // Don't regenerate if it already exists.
    }

    // Generate 256x256, 48x48, 32x32, 16x16 sizes.
    let sizes: &[u32] = &[256, 48, 32, 16];
    let mut ico_data: Vec<u8> = Vec::new();

    // ICO header: reserved(2) + type(2) + count(2)
    ico_data.extend_from_slice(&[0, 0]); // reserved
    ico_data.extend_from_slice(&1u16.to_le_bytes()); // type = 1 (icon)
    ico_data.extend_from_slice(&(sizes.len() as u16).to_le_bytes()); // image count

    // We'll build each PNG image, then write directory entries + data.
    let mut png_blobs: Vec<Vec<u8>> = Vec::new();
    for &size in sizes {
        let img = render_icon(size);
        let mut png_data = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
        image::ImageEncoder::write_image(encoder, &img, size, size, image::ColorType::Rgba8.into())
            .expect("PNG encoding failed");
        png_blobs.push(png_data);
    }

    // Calculate offsets: header(6) + directory_entries(16 each) + data
    let dir_size = 6 + sizes.len() * 16;
    let mut offset = dir_size;

    // Write directory entries
    for (i, &size) in sizes.iter().enumerate() {
        let w = if size >= 256 { 0u8 } else { size as u8 };
        let h = w;
        ico_data.push(w); // width
        ico_data.push(h); // height
        ico_data.push(0); // colour palette
        ico_data.push(0); // reserved
        ico_data.extend_from_slice(&1u16.to_le_bytes()); // colour planes
        ico_data.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
        ico_data.extend_from_slice(&(png_blobs[i].len() as u32).to_le_bytes()); // data size
        ico_data.extend_from_slice(&(offset as u32).to_le_bytes()); // data offset
        offset += png_blobs[i].len();
    }

    // Write image data
    for blob in &png_blobs {
        ico_data.extend_from_slice(blob);
    }

    std::fs::create_dir_all("assets").ok();
    std::fs::write(icon_path, &ico_data).expect("Failed to write icon.ico");
}

/// Render the StaffScope icon at the given size: an ID badge with a
/// person silhouette, using the brand indigo palette.
fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f64;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // Background: rounded rectangle with gradient feel (dark blue-grey)
    let bg_r = 24u8;
    let bg_g = 26u8;
    let bg_b = 34u8;
    let corner_radius = s * 0.18;

    for y in 0..size {
        for x in 0..size {
            let fx = x as f64;
            let fy = y as f64;

            // Rounded rect check
            let inside = is_in_rounded_rect(fx, fy, s, s, corner_radius);
            if !inside {
                continue;
            }

            // Slight vertical gradient
            let t = fy / s;
            let r = lerp_u8(bg_r, bg_r.saturating_add(16), t);
            let g = lerp_u8(bg_g, bg_g.saturating_add(14), t);
            let b = lerp_u8(bg_b, bg_b.saturating_add(24), t);

            set_pixel(&mut pixels, size, x, y, r, g, b, 255);
        }
    }

    // Badge card (lighter panel rectangle)
    let card_x = s * 0.20;
    let card_y = s * 0.18;
    let card_w = s * 0.60;
    let card_h = s * 0.66;
    draw_rounded_rect(
        &mut pixels,
        size,
        card_x,
        card_y,
        card_w,
        card_h,
        s * 0.08,
        52,
        56,
        74,
        255,
    );

    // Lanyard slot at the top of the card
    draw_rounded_rect(
        &mut pixels,
        size,
        s * 0.42,
        s * 0.10,
        s * 0.16,
        s * 0.05,
        s * 0.02,
        122,
        132,
        255,
        255,
    );

    // Person: head circle + shoulder half-disc (brand indigo)
    draw_filled_circle(&mut pixels, size, s * 0.50, s * 0.40, s * 0.090, 122, 132, 255, 255);
    draw_half_disc(&mut pixels, size, s * 0.50, s * 0.645, s * 0.145, 122, 132, 255, 255);

    // Badge text lines below the silhouette
    let line_positions = [0.71, 0.77];
    for &ypos in &line_positions {
        draw_rounded_rect(
            &mut pixels,
            size,
            s * 0.30,
            s * ypos,
            s * 0.40,
            (s * 0.028).max(1.0),
            s * 0.01,
            180,
            190,
            212,
            200,
        );
    }

    pixels
}

fn is_in_rounded_rect(x: f64, y: f64, w: f64, h: f64, r: f64) -> bool {
    if x < 0.0 || x >= w || y < 0.0 || y >= h {
        return false;
    }
    // Check corners
    let corners = [(r, r), (w - r, r), (r, h - r), (w - r, h - r)];
    for &(cx, cy) in &corners {
        if (x < r || x > w - r) && (y < r || y > h - r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy > r * r {
                return false;
            }
        }
    }
    true
}

fn set_pixel(pixels: &mut [u8], stride: u32, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
    let idx = ((y * stride + x) * 4) as usize;
    if idx + 3 < pixels.len() {
        // Alpha blend
        let src_a = a as f64 / 255.0;
        let dst_a = pixels[idx + 3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a > 0.0 {
            pixels[idx] =
                ((r as f64 * src_a + pixels[idx] as f64 * dst_a * (1.0 - src_a)) / out_a) as u8;
            pixels[idx + 1] =
                ((g as f64 * src_a + pixels[idx + 1] as f64 * dst_a * (1.0 - src_a)) / out_a) as u8;
            pixels[idx + 2] =
                ((b as f64 * src_a + pixels[idx + 2] as f64 * dst_a * (1.0 - src_a)) / out_a) as u8;
            pixels[idx + 3] = (out_a * 255.0) as u8;
        }
    }
}

/// Fill a rounded rectangle with its top-left corner at `(x, y)`.
fn draw_rounded_rect(
    pixels: &mut [u8],
    stride: u32,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
    cr: u8,
    cg: u8,
    cb: u8,
    ca: u8,
) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + w).ceil()).min(stride as f64) as u32;
    let y1 = ((y + h).ceil()).min(stride as f64) as u32;
    for py in y0..y1 {
        for px in x0..x1 {
            if is_in_rounded_rect(px as f64 - x, py as f64 - y, w, h, r) {
                set_pixel(pixels, stride, px, py, cr, cg, cb, ca);
            }
        }
    }
}

fn draw_filled_circle(
    pixels: &mut [u8],
    stride: u32,
    cx: f64,
    cy: f64,
    r: f64,
    cr: u8,
    cg: u8,
    cb: u8,
    ca: u8,
) {
    let x0 = (cx - r - 1.0).max(0.0) as u32;
    let y0 = (cy - r - 1.0).max(0.0) as u32;
    let x1 = (cx + r + 1.0).min(stride as f64 - 1.0) as u32;
    let y1 = (cy + r + 1.0).min(stride as f64 - 1.0) as u32;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f64 - cx;
            let dy = py as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= r {
                let edge_alpha = ((r - dist).min(1.0) * ca as f64) as u8;
                set_pixel(pixels, stride, px, py, cr, cg, cb, edge_alpha);
            }
        }
    }
}

/// Upper half of a disc with a flat bottom at `cy`: the shoulder shape.
fn draw_half_disc(
    pixels: &mut [u8],
    stride: u32,
    cx: f64,
    cy: f64,
    r: f64,
    cr: u8,
    cg: u8,
    cb: u8,
    ca: u8,
) {
    let x0 = (cx - r - 1.0).max(0.0) as u32;
    let y0 = (cy - r - 1.0).max(0.0) as u32;
    let x1 = (cx + r + 1.0).min(stride as f64 - 1.0) as u32;
    let y1 = cy.min(stride as f64 - 1.0) as u32;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f64 - cx;
            let dy = py as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= r {
                let edge_alpha = ((r - dist).min(1.0) * ca as f64) as u8;
                set_pixel(pixels, stride, px, py, cr, cg, cb, edge_alpha);
            }
        }
    }
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t.clamp(0.0, 1.0)) as u8
}
