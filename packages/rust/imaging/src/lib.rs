//! Item photo handling: importing pictures into the images directory and
//! converting camera formats to web formats.
//!
//! HEIC (the iPhone camera default) has no pure-Rust decoder, so it sits
//! behind the `heic` cargo feature (`libheif-rs`). Default builds report
//! HEIC files as unsupported instead of linking a native library.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info};

use craftstall_shared::{CraftstallError, ItemId, Result};

/// JPEG quality used when a HEIC import is re-encoded.
const JPEG_QUALITY: u8 = 85;

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Result of importing a photo into the images directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedImage {
    /// Filename inside the images directory (what the item record stores).
    pub filename: String,
    /// Whether the source was transcoded rather than copied.
    pub converted: bool,
}

/// Whether `path` names a HEIC/HEIF file, by extension.
pub fn is_heic(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("heic") || ext.eq_ignore_ascii_case("heif"))
        .unwrap_or(false)
}

/// Bring a photo into `images_dir` under a fresh-id filename.
///
/// Ordinary files are copied with their extension preserved; HEIC files are
/// decoded and saved as JPEG instead.
pub fn import_image(source: &Path, images_dir: &Path) -> Result<ImportedImage> {
    if !source.is_file() {
        return Err(CraftstallError::Imaging(format!(
            "source file not found: {}",
            source.display()
        )));
    }
    fs::create_dir_all(images_dir).map_err(|e| CraftstallError::io(images_dir, e))?;

    if is_heic(source) {
        let filename = format!("{}.jpg", ItemId::generate());
        let img = decode_heic(source)?;
        save_jpeg(&img, &images_dir.join(&filename))?;
        info!(?source, filename, "HEIC photo converted and imported");
        return Ok(ImportedImage {
            filename,
            converted: true,
        });
    }

    let ext = source
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            CraftstallError::Imaging(format!(
                "source file has no extension: {}",
                source.display()
            ))
        })?
        .to_ascii_lowercase();

    let filename = format!("{}.{ext}", ItemId::generate());
    fs::copy(source, images_dir.join(&filename)).map_err(|e| CraftstallError::io(source, e))?;
    info!(?source, filename, "photo imported");
    Ok(ImportedImage {
        filename,
        converted: false,
    })
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Convert any decodable image to a PNG named after its stem in `dest_dir`.
pub fn convert_to_png(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            CraftstallError::Imaging(format!("bad source filename: {}", source.display()))
        })?;

    fs::create_dir_all(dest_dir).map_err(|e| CraftstallError::io(dest_dir, e))?;
    let dest = dest_dir.join(format!("{stem}.png"));

    let img = decode(source)?;
    img.save(&dest)
        .map_err(|e| CraftstallError::Imaging(format!("saving {}: {e}", dest.display())))?;

    debug!(?source, ?dest, "converted to PNG");
    Ok(dest)
}

/// Decode an image of any supported format.
fn decode(path: &Path) -> Result<DynamicImage> {
    if is_heic(path) {
        return decode_heic(path);
    }
    image::open(path)
        .map_err(|e| CraftstallError::Imaging(format!("decoding {}: {e}", path.display())))
}

fn save_jpeg(img: &DynamicImage, path: &Path) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| CraftstallError::io(path, e))?;
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(std::io::BufWriter::new(file), JPEG_QUALITY);
    // JPEG carries no alpha channel.
    encoder
        .encode_image(&img.to_rgb8())
        .map_err(|e| CraftstallError::Imaging(format!("encoding {}: {e}", path.display())))
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// All HEIC files directly inside the given directories, sorted by path.
/// Missing directories are skipped.
pub fn discover_heic(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for dir in dirs {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                debug!(?dir, "directory not readable, skipping");
                continue;
            }
        };
        for entry in entries {
            let path = entry.map_err(|e| CraftstallError::io(dir, e))?.path();
            if path.is_file() && is_heic(&path) {
                found.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}

/// PNG files in `dir` with their sizes in bytes, sorted by name.
pub fn list_pngs(dir: &Path) -> Result<Vec<(String, u64)>> {
    let mut pngs = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(pngs),
    };
    for entry in entries {
        let entry = entry.map_err(|e| CraftstallError::io(dir, e))?;
        let path = entry.path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if path.is_file() && is_png {
            let meta = entry.metadata().map_err(|e| CraftstallError::io(&path, e))?;
            pngs.push((
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                meta.len(),
            ));
        }
    }
    pngs.sort();
    Ok(pngs)
}

// ---------------------------------------------------------------------------
// HEIC decoding
// ---------------------------------------------------------------------------

#[cfg(feature = "heic")]
fn decode_heic(path: &Path) -> Result<DynamicImage> {
    use libheif_rs::{ColorSpace, HeifContext, RgbChroma};

    let heic_err =
        |e: libheif_rs::HeifError| CraftstallError::Imaging(format!("{}: {e}", path.display()));

    let ctx = HeifContext::read_from_file(
        path.to_str()
            .ok_or_else(|| CraftstallError::Imaging(format!("non-UTF8 path: {}", path.display())))?,
    )
    .map_err(heic_err)?;
    let handle = ctx.primary_image_handle().map_err(heic_err)?;
    let decoded = handle
        .decode(ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(heic_err)?;

    let planes = decoded.planes();
    let interleaved = planes.interleaved.ok_or_else(|| {
        CraftstallError::Imaging(format!("no interleaved plane in {}", path.display()))
    })?;

    let width = interleaved.width;
    let height = interleaved.height;
    let stride = interleaved.stride;
    let mut rgb = image::RgbImage::new(width, height);
    for y in 0..height {
        let row = &interleaved.data[y as usize * stride..];
        for x in 0..width {
            let i = x as usize * 3;
            rgb.put_pixel(x, y, image::Rgb([row[i], row[i + 1], row[i + 2]]));
        }
    }
    Ok(DynamicImage::ImageRgb8(rgb))
}

#[cfg(not(feature = "heic"))]
fn decode_heic(path: &Path) -> Result<DynamicImage> {
    Err(CraftstallError::Imaging(format!(
        "{}: HEIC support not built in; rebuild with `--features heic`",
        path.display()
    )))
}
