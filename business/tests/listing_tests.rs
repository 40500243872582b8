//! Listing state driven end to end against the in-memory student directory.

use registrar_business::records::{EnrollmentStatus, Student, seed_students, status_filter};
use registrar_business::{
    Completion, DisplayState, FetchError, FilterController, InMemorySource, ListRequest, Listing,
    ListingStatus, Page, RecordSource, SearchController, TableIntent,
};

fn directory(count: usize) -> InMemorySource<Student> {
    let _ = env_logger::builder().is_test(true).try_init();
    InMemorySource::new(seed_students(count))
}

/// Runs one request through the source and applies its completion,
/// following up when the listing asks for another page.
fn run(source: &InMemorySource<Student>, listing: &mut Listing<Student>, request: ListRequest) {
    let (tx, rx) = flume::bounded(1);
    source.fetch(
        request.query,
        Box::new(move |result| {
            tx.send(result).expect("receiver alive");
        }),
    );
    let result = rx.recv().expect("in-memory source answers immediately");
    match listing.complete(request.token, result) {
        Completion::Applied => {}
        Completion::Refetch(follow_up) => run(source, listing, follow_up),
        Completion::Stale => panic!("completion should be current"),
    }
}

mod paging_tests {
    use super::*;

    #[test]
    fn test_last_partial_page_range() {
        let source = directory(23);
        let mut listing = Listing::new(10).expect("valid listing");

        let initial = listing.refresh();
        run(&source, &mut listing, initial);
        let request = listing
            .apply(&TableIntent::PageChanged(3))
            .expect("page change fetches");
        run(&source, &mut listing, request);

        assert_eq!(listing.rows().len(), 3);
        assert_eq!(
            listing.pagination().display_range().to_string(),
            "Showing 21–23 of 23"
        );
        assert!(!listing.pagination().has_next());
    }

    #[test]
    fn test_clamped_request_from_pagination() {
        let source = directory(23);
        let mut listing = Listing::new(10).expect("valid listing");
        let initial = listing.refresh();
        run(&source, &mut listing, initial);

        let page = listing.pagination().request_page_change(99);
        assert_eq!(page, 3);
    }
}

mod search_and_filter_tests {
    use super::*;

    #[test]
    fn test_committed_search_narrows_rows() {
        let source = directory(60);
        let mut listing = Listing::new(10).expect("valid listing");
        let initial = listing.refresh();
        run(&source, &mut listing, initial);

        let mut search = SearchController::new();
        search.set_draft("hopper");
        let intent = search.submit();
        let request = listing.apply(&intent).expect("search fetches");
        run(&source, &mut listing, request);

        assert!(!listing.rows().is_empty(), "seed contains a Hopper");
        assert!(
            listing
                .rows()
                .iter()
                .all(|student| student.full_name.contains("Hopper")),
            "every row matches the search"
        );
    }

    #[test]
    fn test_status_filter_then_all() {
        let source = directory(40);
        let mut listing = Listing::new(10).expect("valid listing");
        let initial = listing.refresh();
        run(&source, &mut listing, initial);
        let everyone = listing.total_items();

        let filter = status_filter();
        let options = filter.display_options();
        let graduated = options
            .iter()
            .find(|option| option.label == "Graduated")
            .expect("graduated option");
        let request = listing
            .apply(&FilterController::select(graduated))
            .expect("filter fetches");
        run(&source, &mut listing, request);

        assert!(listing.total_items() < everyone, "filter narrows the total");
        assert!(
            listing
                .rows()
                .iter()
                .all(|student| student.status == EnrollmentStatus::Graduated),
            "every row is graduated"
        );

        let request = listing
            .apply(&FilterController::select(&options[0]))
            .expect("all fetches");
        assert!(request.query.filter.is_all(), "All maps to the empty sentinel");
        run(&source, &mut listing, request);
        assert_eq!(listing.total_items(), everyone);
    }

    #[test]
    fn test_no_matches_is_empty_state() {
        let source = directory(15);
        let mut listing = Listing::new(10).expect("valid listing");
        let request = listing
            .apply(&TableIntent::SearchCommitted("nobody by this name".into()))
            .expect("search fetches");
        run(&source, &mut listing, request);

        let state = DisplayState::resolve(listing.is_loading(), listing.failure(), listing.rows());
        assert_eq!(state, DisplayState::Empty);
        assert_eq!(
            listing.pagination().display_range().to_string(),
            "Showing 0–0 of 0"
        );
    }
}

mod race_tests {
    use super::*;

    #[test]
    fn test_slow_response_does_not_overwrite_newer_one() {
        let source = directory(30);
        let mut listing = Listing::new(10).expect("valid listing");

        let slow = listing.apply(&TableIntent::PageChanged(2)).expect("page 2");
        let fast = listing.apply(&TableIntent::PageChanged(3)).expect("page 3");

        let fast_result = source.query(&fast.query);
        let slow_result = source.query(&slow.query);
        assert_eq!(listing.complete(fast.token, fast_result), Completion::Applied);
        assert_eq!(listing.complete(slow.token, slow_result), Completion::Stale);

        assert_eq!(listing.pagination().current_page(), 3);
        assert_eq!(
            listing.rows().first().map(|s| s.matric_no.as_str()),
            Some("STU-0021")
        );
    }

    #[test]
    fn test_page_click_from_wider_result_set_lands_on_last_page() {
        let source = directory(137);
        let mut listing = Listing::new(10).expect("valid listing");
        let initial = listing.refresh();
        run(&source, &mut listing, initial);

        let search = listing
            .apply(&TableIntent::SearchCommitted("hopper".into()))
            .expect("search fetches");
        let late_click = listing
            .apply(&TableIntent::PageChanged(10))
            .expect("page change fetches");
        let search_result = source.query(&search.query);
        run(&source, &mut listing, late_click);
        assert_eq!(
            listing.complete(search.token, search_result),
            Completion::Stale
        );

        let pagination = listing.pagination();
        assert!(pagination.current_page() <= pagination.total_pages());
        assert_eq!(pagination.current_page(), pagination.total_pages());
        assert!(!listing.rows().is_empty());
        let state = DisplayState::resolve(listing.is_loading(), listing.failure(), listing.rows());
        assert!(matches!(state, DisplayState::Populated(_)), "got {state:?}");
        assert_ne!(pagination.display_range().start, 0);
    }

    #[test]
    fn test_failure_then_recovery() {
        let source = directory(12);
        let mut listing = Listing::<Student>::new(10).expect("valid listing");

        let failed = listing.refresh();
        listing.complete(
            failed.token,
            Err(FetchError::Unavailable("registry offline".into())),
        );
        let state = DisplayState::resolve(listing.is_loading(), listing.failure(), listing.rows());
        assert!(matches!(state, DisplayState::Failed(_)), "got {state:?}");

        let retry = listing.refresh();
        assert!(listing.is_loading());
        run(&source, &mut listing, retry);
        assert_eq!(listing.status(), &ListingStatus::Loaded);
        assert_eq!(listing.rows().len(), 10);
    }

    #[test]
    fn test_empty_page_completion() {
        let mut listing = Listing::<Student>::new(10).expect("valid listing");
        let request = listing.refresh();
        listing.complete(
            request.token,
            Ok(Page {
                rows: Vec::new(),
                total_items: 0,
            }),
        );
        assert_eq!(listing.pagination().total_pages(), 1);
    }
}
