use std::sync::Arc;

use registrar_business::records::{Lecturer, Student, seed_lecturers, seed_students};
use registrar_business::{
    ConfiguredSession, ConsoleConfig, InMemorySource, JsonExporter, RecordSource, Route,
    TableError,
};

use crate::pages::{RecordPage, lecturers, students};

/// Size of the seeded student directory.
pub const SEED_STUDENTS: usize = 137;

/// Size of the seeded lecturer directory.
pub const SEED_LECTURERS: usize = 26;

/// Where each record page gets its rows from.
pub struct Sources {
    pub students: Arc<dyn RecordSource<Student>>,
    pub lecturers: Arc<dyn RecordSource<Lecturer>>,
}

impl Sources {
    /// Synchronous sources over the seeded directories.
    pub fn in_memory() -> Self {
        Self {
            students: Arc::new(InMemorySource::new(seed_students(SEED_STUDENTS))),
            lecturers: Arc::new(InMemorySource::new(seed_lecturers(SEED_LECTURERS))),
        }
    }

    /// Seeded directories answering after `config.latency()` on `runtime`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn delayed(config: &ConsoleConfig, runtime: &tokio::runtime::Handle) -> Self {
        use crate::sources::DelayedSource;

        if config.latency().is_zero() {
            return Self::in_memory();
        }
        Self {
            students: Arc::new(DelayedSource::new(
                InMemorySource::new(seed_students(SEED_STUDENTS)),
                config.latency(),
                runtime.clone(),
            )),
            lecturers: Arc::new(DelayedSource::new(
                InMemorySource::new(seed_lecturers(SEED_LECTURERS)),
                config.latency(),
                runtime.clone(),
            )),
        }
    }
}

/// The main application state.
pub struct State {
    pub config: ConsoleConfig,
    pub session: ConfiguredSession,
    pub route: Route,
    pub students: RecordPage<Student>,
    pub lecturers: RecordPage<Lecturer>,
}

impl State {
    pub fn new(config: ConsoleConfig, sources: Sources) -> Result<Self, TableError> {
        let exporter = JsonExporter::new(config.export_dir());
        let students = RecordPage::new(
            students::page_spec(),
            sources.students,
            exporter.clone(),
            config.page_size(),
            config.window_size(),
        )?;
        let lecturers = RecordPage::new(
            lecturers::page_spec(),
            sources.lecturers,
            exporter,
            config.page_size(),
            config.window_size(),
        )?;

        Ok(Self {
            session: ConfiguredSession::new(config.session().clone()),
            config,
            route: Route::default(),
            students,
            lecturers,
        })
    }

    /// Default configuration over synchronous in-memory sources.
    pub fn test() -> Result<Self, TableError> {
        Self::new(ConsoleConfig::default(), Sources::in_memory())
    }
}
