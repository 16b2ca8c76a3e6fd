//! PNG export of the quote collection.
//!
//! The surface is serialised to SVG, rendered with resvg at a fixed upscale
//! over an opaque background, encoded to PNG and handed to a download sink.
//! Only one export runs at a time; a second trigger while one is in flight
//! is rejected instead of queued. The in-progress state is held by the
//! rendering job itself, so dropping the awaiting task does not release it.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use image::{DynamicImage, ImageFormat, RgbaImage};
use tokio::sync::watch;

use crate::collection::{CollectionSurface, BACKGROUND_RGB};
use crate::error::ExportError;
use crate::PRODUCT_TAG;

/// Upscale factor applied to the surface's natural size.
pub const EXPORT_SCALE: f32 = 4.0;

/// Largest canvas side a webview will rasterize.
pub const MAX_CANVAS_SIDE: u32 = 32_767;

/// Largest canvas area (16384²).
pub const MAX_CANVAS_AREA: u64 = 268_435_456;

static FONT_DB: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

fn font_db() -> Arc<fontdb::Database> {
    FONT_DB
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "Loaded system fonts for export");
            Arc::new(db)
        })
        .clone()
}

/// How the surface is captured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureOptions {
    pub scale: f32,
    /// Opaque RGB background, independent of any theme
    pub background: [u8; 3],
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: EXPORT_SCALE,
            background: BACKGROUND_RGB,
        }
    }
}

/// Turns a collection surface into PNG bytes.
pub trait Rasterizer: Send + Sync {
    fn rasterize(
        &self,
        surface: &CollectionSurface,
        options: &CaptureOptions,
    ) -> Result<Vec<u8>, ExportError>;
}

/// Receives the finished PNG, the desktop stand-in for a browser download.
pub trait DownloadSink: Send + Sync {
    /// Deliver `bytes` under `file_name`, returning where it ended up.
    fn offer(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Rasterizer backed by resvg and the system font database.
///
/// No resources directory is configured, so the scene can never pull in
/// external images.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRasterizer;

impl Rasterizer for SvgRasterizer {
    fn rasterize(
        &self,
        surface: &CollectionSurface,
        options: &CaptureOptions,
    ) -> Result<Vec<u8>, ExportError> {
        let layout = surface.layout();
        let (width, height) = scaled_size(layout.width, layout.height, options.scale)?;

        let usvg_options = usvg::Options {
            fontdb: font_db(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&surface.to_svg(), &usvg_options)
            .map_err(|e| ExportError::Scene(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Canvas)?;
        let [r, g, b] = options.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(options.scale, options.scale),
            &mut pixmap.as_mut(),
        );

        // Every pixel is opaque, so premultiplied and straight alpha agree.
        encode_png(width, height, pixmap.take())
    }
}

/// Scaled canvas size, rejecting anything a canvas could not hold.
pub fn scaled_size(width: u32, height: u32, scale: f32) -> Result<(u32, u32), ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::Scene(format!("invalid scale {scale}")));
    }
    let scaled_w = (width as f64 * scale as f64).ceil();
    let scaled_h = (height as f64 * scale as f64).ceil();
    let too_large = scaled_w > MAX_CANVAS_SIDE as f64
        || scaled_h > MAX_CANVAS_SIDE as f64
        || scaled_w * scaled_h > MAX_CANVAS_AREA as f64;

    if too_large || scaled_w < 1.0 || scaled_h < 1.0 {
        return Err(ExportError::SurfaceTooLarge {
            width: scaled_w.min(u32::MAX as f64) as u32,
            height: scaled_h.min(u32::MAX as f64) as u32,
        });
    }
    Ok((scaled_w as u32, scaled_h as u32))
}

fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Result<Vec<u8>, ExportError> {
    let image = RgbaImage::from_raw(width, height, rgba).ok_or(ExportError::Canvas)?;
    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// `<product-tag>-<unix-epoch-ms>.png`
pub fn download_file_name(epoch_ms: i64) -> String {
    format!("{PRODUCT_TAG}-{epoch_ms}.png")
}

/// Writes downloads into a directory, creating it when missing.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn offer(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Result of an export trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Image written and offered to the user
    Saved { path: PathBuf, bytes: usize },
    /// Another export was still running; nothing was started
    AlreadyRunning,
}

/// Clears the in-progress state when dropped, on success and failure alike.
struct InProgressGuard(Arc<watch::Sender<bool>>);

impl InProgressGuard {
    fn acquire(state: &Arc<watch::Sender<bool>>) -> Option<Self> {
        let acquired = state.send_if_modified(|busy| {
            if *busy {
                false
            } else {
                *busy = true;
                true
            }
        });
        acquired.then(|| Self(state.clone()))
    }
}

impl Drop for InProgressGuard {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

/// Runs exports one at a time.
#[derive(Clone)]
pub struct Exporter {
    rasterizer: Arc<dyn Rasterizer>,
    sink: Arc<dyn DownloadSink>,
    options: CaptureOptions,
    in_progress: Arc<watch::Sender<bool>>,
}

impl Exporter {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, sink: Arc<dyn DownloadSink>) -> Self {
        let (in_progress, _) = watch::channel(false);
        Self {
            rasterizer,
            sink,
            options: CaptureOptions::default(),
            in_progress: Arc::new(in_progress),
        }
    }

    /// resvg rasterizer writing into `dir`.
    pub fn to_directory(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(SvgRasterizer), Arc::new(DirectorySink::new(dir)))
    }

    /// True while an export is between trigger and completion.
    pub fn is_in_progress(&self) -> bool {
        *self.in_progress.borrow()
    }

    /// Watch the in-progress state.
    ///
    /// Every clone of this exporter shares the same state, so a receiver
    /// taken after an export started still sees it finish.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.in_progress.subscribe()
    }

    /// Rasterize `surface` and offer it as a download.
    ///
    /// Rasterization runs on the blocking pool so the caller's UI stays
    /// responsive. Nothing is offered when rasterization fails.
    pub async fn export(&self, surface: CollectionSurface) -> Result<ExportOutcome, ExportError> {
        let Some(guard) = InProgressGuard::acquire(&self.in_progress) else {
            tracing::debug!("Export already in progress, ignoring trigger");
            return Ok(ExportOutcome::AlreadyRunning);
        };

        let file_name = download_file_name(chrono::Utc::now().timestamp_millis());
        tracing::info!(quotes = surface.entries.len(), file = %file_name, "Exporting quote collection");

        let rasterizer = self.rasterizer.clone();
        let sink = self.sink.clone();
        let options = self.options;
        let job = tokio::task::spawn_blocking(move || {
            // Released when rendering ends, even if nobody awaits the job.
            let _guard = guard;
            let png = rasterizer.rasterize(&surface, &options)?;
            let path = sink.offer(&file_name, &png)?;
            Ok::<_, ExportError>((path, png.len()))
        });

        let result = match job.await {
            Ok(result) => result,
            Err(e) => Err(ExportError::Interrupted(e.to_string())),
        };

        match result {
            Ok((path, bytes)) => {
                tracing::info!(path = %path.display(), bytes, "Quote collection saved");
                Ok(ExportOutcome::Saved { path, bytes })
            }
            Err(e) => {
                tracing::error!(error = %e, "Quote collection export failed");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("options", &self.options)
            .field("in_progress", &self.is_in_progress())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::render_collection;

    #[test]
    fn scales_natural_size() {
        assert_eq!(scaled_size(672, 500, 4.0).unwrap(), (2688, 2000));
    }

    #[test]
    fn rejects_oversized_canvas() {
        let err = scaled_size(672, 9000, 4.0).unwrap_err();
        assert!(matches!(err, ExportError::SurfaceTooLarge { width: 2688, height: 36000 }));

        // Each side fits, the area does not.
        assert!(scaled_size(20_000, 20_000, 1.0).is_err());
        assert!(scaled_size(10, 10, 0.0).is_err());
        assert!(scaled_size(10, 10, f32::NAN).is_err());
    }

    #[test]
    fn file_name_carries_tag_and_timestamp() {
        assert_eq!(
            download_file_name(1_700_000_000_123),
            "prism-ink-collection-1700000000123.png"
        );
    }

    #[test]
    fn guard_is_exclusive_and_resets() {
        let (state, _) = watch::channel(false);
        let state = Arc::new(state);
        let mut rx = state.subscribe();

        let guard = InProgressGuard::acquire(&state).unwrap();
        assert!(*rx.borrow_and_update());
        assert!(InProgressGuard::acquire(&state).is_none());

        drop(guard);
        assert!(rx.has_changed().unwrap());
        assert!(!*rx.borrow_and_update());
        assert!(InProgressGuard::acquire(&state).is_some());
    }

    #[test]
    fn rasterizes_empty_collection_on_opaque_background() {
        let surface = render_collection(&[]);
        let natural = surface.layout();
        let png = SvgRasterizer
            .rasterize(&surface, &CaptureOptions::default())
            .unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.width(), natural.width * 4);
        assert_eq!(decoded.height(), natural.height * 4);

        let corner = decoded.get_pixel(0, 0).0;
        assert_eq!(corner, [0xFD, 0xFB, 0xF7, 0xFF]);
        assert!(decoded.pixels().all(|p| p.0[3] == 0xFF));
    }

    #[test]
    fn scale_option_controls_output_size() {
        let surface = render_collection(&["一句".to_string()]);
        let natural = surface.layout();
        let options = CaptureOptions {
            scale: 1.0,
            ..CaptureOptions::default()
        };
        let png = SvgRasterizer.rasterize(&surface, &options).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), natural.width);
        assert_eq!(decoded.height(), natural.height);
    }
}
