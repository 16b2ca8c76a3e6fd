//! Export pipeline tests
//!
//! Covers the real resvg rasterizer writing into a temp directory, the
//! single-flight guard (including cancelled callers and late watchers),
//! and the failure path.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use prism_core::collection::{render_collection, CollectionSurface};
use prism_core::export::{CaptureOptions, DownloadSink, Rasterizer};
use prism_core::{ExportError, ExportOutcome, Exporter};
use tempfile::TempDir;

/// Sink that records offers instead of writing files
#[derive(Default)]
struct RecordingSink {
    offers: AtomicUsize,
}

impl DownloadSink for RecordingSink {
    fn offer(&self, file_name: &str, _bytes: &[u8]) -> Result<PathBuf, ExportError> {
        self.offers.fetch_add(1, Ordering::SeqCst);
        Ok(PathBuf::from(file_name))
    }
}

/// Rasterizer that always fails, like a canvas that cannot be allocated
struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _: &CollectionSurface, _: &CaptureOptions) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Canvas)
    }
}

/// Rasterizer that parks until the test releases it
struct GatedRasterizer {
    calls: AtomicUsize,
    entered: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl Rasterizer for GatedRasterizer {
    fn rasterize(&self, _: &CollectionSurface, _: &CaptureOptions) -> Result<Vec<u8>, ExportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(tx) = self.entered.lock() {
            let _ = tx.send(());
        }
        if let Ok(rx) = self.release.lock() {
            let _ = rx.recv();
        }
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

/// Gated rasterizer plus the channels that drive it
fn gated() -> (Arc<GatedRasterizer>, mpsc::Receiver<()>, mpsc::Sender<()>) {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let rasterizer = Arc::new(GatedRasterizer {
        calls: AtomicUsize::new(0),
        entered: Mutex::new(entered_tx),
        release: Mutex::new(release_rx),
    });
    (rasterizer, entered_rx, release_tx)
}

/// Block until the gated rasterizer has started
async fn wait_until_entered(entered_rx: mpsc::Receiver<()>) {
    tokio::task::spawn_blocking(move || entered_rx.recv())
        .await
        .unwrap()
        .unwrap();
}

async fn wait_until_idle(exporter: &Exporter) {
    let mut rx = exporter.subscribe();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|busy| !*busy))
        .await
        .expect("export never finished")
        .unwrap();
}

#[tokio::test]
async fn export_writes_timestamped_png() {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::to_directory(dir.path());
    let surface = render_collection(&["愿你被温柔以待".to_string(), "second".to_string()]);

    let outcome = exporter.export(surface).await.unwrap();
    let ExportOutcome::Saved { path, bytes } = outcome else {
        panic!("expected a saved export");
    };

    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("prism-ink-collection-"));
    assert!(name.ends_with(".png"));
    let stamp = &name["prism-ink-collection-".len()..name.len() - ".png".len()];
    assert!(stamp.parse::<i64>().unwrap() > 0);

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), bytes);
    let decoded = image::load_from_memory(&written).unwrap();
    assert_eq!(decoded.width() % 4, 0);
    assert!(!exporter.is_in_progress());
}

#[tokio::test]
async fn empty_collection_still_exports() {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::to_directory(dir.path().join("nested"));

    let outcome = exporter.export(render_collection(&[])).await.unwrap();
    assert!(matches!(outcome, ExportOutcome::Saved { .. }));
    assert_eq!(std::fs::read_dir(dir.path().join("nested")).unwrap().count(), 1);
}

#[tokio::test]
async fn failed_rasterization_resets_state_and_skips_download() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(Arc::new(FailingRasterizer), sink.clone());

    let content = prism_core::ContentModel::embedded().unwrap();

    let err = exporter
        .export(render_collection(content.quotes()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Canvas));
    assert!(!exporter.is_in_progress());
    assert_eq!(sink.offers.load(Ordering::SeqCst), 0);

    // A retry after the failure starts a fresh attempt.
    let retry = exporter.export(render_collection(&[])).await.unwrap_err();
    assert!(matches!(retry, ExportError::Canvas));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn second_trigger_while_running_is_rejected() {
    let (rasterizer, entered_rx, release_tx) = gated();
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(rasterizer.clone(), sink.clone());

    let first = tokio::spawn({
        let exporter = exporter.clone();
        async move { exporter.export(render_collection(&[])).await }
    });

    wait_until_entered(entered_rx).await;
    assert!(exporter.is_in_progress());

    let second = exporter.export(render_collection(&[])).await.unwrap();
    assert_eq!(second, ExportOutcome::AlreadyRunning);

    release_tx.send(()).unwrap();
    let first = first.await.unwrap().unwrap();
    assert!(matches!(first, ExportOutcome::Saved { .. }));

    assert_eq!(rasterizer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.offers.load(Ordering::SeqCst), 1);
    assert!(!exporter.is_in_progress());
}

#[tokio::test]
async fn oversized_surface_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::to_directory(dir.path());
    let quotes: Vec<String> = (0..400).map(|i| format!("quote number {i}")).collect();

    let err = exporter.export(render_collection(&quotes)).await.unwrap_err();
    assert!(matches!(err, ExportError::SurfaceTooLarge { .. }));
    assert!(!exporter.is_in_progress());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancelled_caller_keeps_export_exclusive() {
    let (rasterizer, entered_rx, release_tx) = gated();
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(rasterizer.clone(), sink.clone());

    let first = tokio::spawn({
        let exporter = exporter.clone();
        async move { exporter.export(render_collection(&[])).await }
    });
    wait_until_entered(entered_rx).await;

    // Closing the modal drops the awaiting task; rendering carries on.
    first.abort();
    assert!(first.await.unwrap_err().is_cancelled());
    assert!(exporter.is_in_progress());

    let second = exporter.export(render_collection(&[])).await.unwrap();
    assert_eq!(second, ExportOutcome::AlreadyRunning);
    assert_eq!(rasterizer.calls.load(Ordering::SeqCst), 1);

    release_tx.send(()).unwrap();
    wait_until_idle(&exporter).await;
    assert_eq!(rasterizer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.offers.load(Ordering::SeqCst), 1);

    // Once the orphaned render is done a new export may start.
    release_tx.send(()).unwrap();
    let third = exporter.export(render_collection(&[])).await.unwrap();
    assert!(matches!(third, ExportOutcome::Saved { .. }));
    assert_eq!(rasterizer.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn late_watcher_sees_running_export_finish() {
    let (rasterizer, entered_rx, release_tx) = gated();
    let exporter = Exporter::new(rasterizer, Arc::new(RecordingSink::default()));

    let first = tokio::spawn({
        let exporter = exporter.clone();
        async move { exporter.export(render_collection(&[])).await }
    });
    wait_until_entered(entered_rx).await;

    // A freshly mounted view subscribes after the export started.
    let mut rx = exporter.subscribe();
    assert!(*rx.borrow_and_update());

    release_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), rx.changed())
        .await
        .expect("no busy-state update")
        .unwrap();
    assert!(!*rx.borrow_and_update());

    assert!(matches!(first.await.unwrap().unwrap(), ExportOutcome::Saved { .. }));
}
