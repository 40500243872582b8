//! Owning-page behaviour that needs control over when fetches complete.

use std::sync::{Arc, Mutex};

use registrar_business::records::{Student, seed_students};
use registrar_business::{
    FetchError, InMemorySource, JsonExporter, ListQuery, ListingStatus, OnFetched, RecordSource,
    TableIntent,
};
use registrar_ui::pages::{RecordPage, students};

type Pending = (ListQuery, OnFetched<Student>);

/// Holds every fetch until the test completes it explicitly.
#[derive(Default)]
struct ManualSource {
    pending: Mutex<Vec<Pending>>,
}

impl std::fmt::Debug for ManualSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualSource").finish_non_exhaustive()
    }
}

impl RecordSource<Student> for ManualSource {
    fn fetch(&self, query: ListQuery, on_done: OnFetched<Student>) {
        self.pending
            .lock()
            .expect("pending lock")
            .push((query, on_done));
    }
}

impl ManualSource {
    fn take(&self, index: usize) -> Pending {
        self.pending.lock().expect("pending lock").remove(index)
    }

    fn len(&self) -> usize {
        self.pending.lock().expect("pending lock").len()
    }
}

fn page_with(source: Arc<ManualSource>, exports: &tempfile::TempDir) -> RecordPage<Student> {
    RecordPage::new(
        students::page_spec(),
        source,
        JsonExporter::new(exports.path()),
        10,
        5,
    )
    .expect("valid page")
}

#[test]
fn test_mount_issues_one_fetch() {
    let source = Arc::new(ManualSource::default());
    let exports = tempfile::tempdir().expect("temp dir");
    let mut page = page_with(Arc::clone(&source), &exports);
    let ctx = egui::Context::default();

    page.mount(&ctx);
    page.mount(&ctx);

    assert_eq!(source.len(), 1);
    assert!(page.listing().is_loading());
}

#[test]
fn test_late_response_for_older_request_is_dropped() {
    let directory = InMemorySource::new(seed_students(40));
    let source = Arc::new(ManualSource::default());
    let exports = tempfile::tempdir().expect("temp dir");
    let mut page = page_with(Arc::clone(&source), &exports);
    let ctx = egui::Context::default();

    page.handle(&TableIntent::PageChanged(2), &ctx);
    page.handle(&TableIntent::PageChanged(3), &ctx);
    assert_eq!(source.len(), 2);

    // Page 3 answers first, then the slower page 2 request.
    let (query, on_done) = source.take(1);
    on_done(directory.query(&query));
    let (query, on_done) = source.take(0);
    on_done(directory.query(&query));
    page.poll(&ctx);

    let listing = page.listing();
    assert_eq!(listing.pagination().current_page(), 3);
    assert_eq!(
        listing.rows().first().map(|s| s.matric_no.as_str()),
        Some("STU-0021")
    );
    assert_eq!(listing.status(), &ListingStatus::Loaded);
}

#[test]
fn test_late_page_click_after_narrowing_search_lands_on_last_page() {
    let directory = InMemorySource::new(seed_students(137));
    let source = Arc::new(ManualSource::default());
    let exports = tempfile::tempdir().expect("temp dir");
    let mut page = page_with(Arc::clone(&source), &exports);
    let ctx = egui::Context::default();
    page.mount(&ctx);
    let (query, on_done) = source.take(0);
    on_done(directory.query(&query));
    page.poll(&ctx);

    // The click was made against the unfiltered window.
    page.handle(&TableIntent::SearchCommitted("hopper".to_owned()), &ctx);
    page.handle(&TableIntent::PageChanged(10), &ctx);
    let (query, on_done) = source.take(1);
    on_done(directory.query(&query));
    let (query, on_done) = source.take(0);
    on_done(directory.query(&query));
    page.poll(&ctx);

    assert_eq!(source.len(), 1, "the last page is fetched again");
    let (query, on_done) = source.take(0);
    on_done(directory.query(&query));
    page.poll(&ctx);

    let listing = page.listing();
    let pagination = listing.pagination();
    assert!(pagination.current_page() <= pagination.total_pages());
    assert!(!listing.rows().is_empty());
    assert_eq!(listing.status(), &ListingStatus::Loaded);
    assert_ne!(pagination.display_range().start, 0);
}

#[test]
fn test_source_failure_becomes_failed_state() {
    let source = Arc::new(ManualSource::default());
    let exports = tempfile::tempdir().expect("temp dir");
    let mut page = page_with(Arc::clone(&source), &exports);
    let ctx = egui::Context::default();
    page.mount(&ctx);

    let (_, on_done) = source.take(0);
    on_done(Err(FetchError::Unavailable("registry offline".to_owned())));
    page.poll(&ctx);

    assert_eq!(
        page.listing().failure(),
        Some("record source unavailable: registry offline")
    );
}

#[test]
fn test_export_failure_is_reported() {
    let blocker = tempfile::NamedTempFile::new().expect("temp file");
    let source = Arc::new(ManualSource::default());
    let mut page = RecordPage::new(
        students::page_spec(),
        source,
        JsonExporter::new(blocker.path()),
        10,
        5,
    )
    .expect("valid page");

    page.handle(&TableIntent::ExportRequested, &egui::Context::default());

    assert!(
        matches!(
            page.export_status(),
            Some(registrar_ui::pages::ExportStatus::Failed(_))
        ),
        "got {:?}",
        page.export_status()
    );
}
