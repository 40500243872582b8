//! A listing page that owns its rows and drives a [`DataTable`].
//!
//! The page is the data table's owning collaborator: it keeps the
//! authoritative [`Listing`], turns table intents into fetches against its
//! [`RecordSource`], and applies only the latest completion. Completions come
//! back over a `flume` channel so sources may answer from any thread.

use std::path::PathBuf;
use std::sync::Arc;

use egui::{Color32, Ui};
use flume::{Receiver, Sender};
use registrar_business::{
    ColumnDescriptor, Completion, FetchError, FilterSpec, JsonExporter, ListRequest, Listing,
    ListingStatus, Page, Record, RecordSource, RequestToken, TableError, TableIntent,
};
use serde::Serialize;

use crate::widgets::{DataTable, TableProps};

type Arrival<T> = (RequestToken, Result<Page<T>, FetchError>);

/// Static description of a record page.
pub struct PageSpec<T: Record> {
    /// Stable id of the page's table.
    pub id: &'static str,
    pub heading: &'static str,
    /// File name stem for exports.
    pub export_stem: &'static str,
    pub columns: Vec<ColumnDescriptor<T>>,
    pub filter: FilterSpec,
}

/// Outcome of the last export, shown under the heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Written(PathBuf),
    Failed(String),
}

pub struct RecordPage<T: Record> {
    spec: PageSpec<T>,
    table: DataTable,
    listing: Listing<T>,
    source: Arc<dyn RecordSource<T>>,
    exporter: JsonExporter,
    window_size: u32,
    send: Sender<Arrival<T>>,
    recv: Receiver<Arrival<T>>,
    export_status: Option<ExportStatus>,
    mounted: bool,
}

impl<T: Record + Serialize> RecordPage<T> {
    pub fn new(
        spec: PageSpec<T>,
        source: Arc<dyn RecordSource<T>>,
        exporter: JsonExporter,
        page_size: u32,
        window_size: u32,
    ) -> Result<Self, TableError> {
        let (send, recv) = flume::unbounded();
        Ok(Self {
            table: DataTable::new(spec.id),
            spec,
            listing: Listing::new(page_size)?,
            source,
            exporter,
            window_size,
            send,
            recv,
            export_status: None,
            mounted: false,
        })
    }

    pub fn listing(&self) -> &Listing<T> {
        &self.listing
    }

    pub fn table(&self) -> DataTable {
        self.table
    }

    pub fn export_status(&self) -> Option<&ExportStatus> {
        self.export_status.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Loads the first page the first time the page is shown.
    pub fn mount(&mut self, ctx: &egui::Context) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        log::debug!("mounting {}", self.spec.id);

        if *self.listing.status() == ListingStatus::Idle {
            let request = self.listing.refresh();
            self.dispatch(request, ctx);
        }
    }

    /// Forgets per-mount widget state such as the search draft.
    pub fn unmount(&mut self, ctx: &egui::Context) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.table.forget(ctx);
        log::debug!("unmounted {}", self.spec.id);
    }

    /// Re-issues the current query.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        let request = self.listing.refresh();
        self.dispatch(request, ctx);
    }

    /// Applies every completion that has arrived. Stale ones are dropped.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let arrived: Vec<_> = self.recv.try_iter().collect();
        for (token, result) in arrived {
            if let Completion::Refetch(request) = self.listing.complete(token, result) {
                self.dispatch(request, ctx);
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.mount(ui.ctx());
        self.poll(ui.ctx());

        let mut refresh = false;
        ui.horizontal(|ui| {
            ui.heading(self.spec.heading);
            if ui.button("🔄 Refresh").clicked() {
                refresh = true;
            }
            if self.listing.is_loading() {
                ui.spinner();
            }
        });

        match &self.export_status {
            Some(ExportStatus::Written(path)) => {
                ui.label(format!("Exported to {}", path.display()));
            }
            Some(ExportStatus::Failed(error)) => {
                ui.colored_label(Color32::RED, format!("Export failed: {error}"));
            }
            None => {}
        }
        ui.add_space(8.0);

        self.spec.filter.selected = self.listing.filter();
        let props = TableProps::new(
            self.listing.rows(),
            &self.spec.columns,
            self.listing.pagination(),
        )
        .with_window_size(self.window_size)
        .with_filter(&self.spec.filter)
        .with_export()
        .loading(self.listing.is_loading())
        .failure(self.listing.failure());
        let response = self.table.show(ui, &props);

        if refresh {
            self.refresh(ui.ctx());
        }
        for intent in response.intents {
            self.handle(&intent, ui.ctx());
        }
    }

    /// Interprets one intent from the table.
    pub fn handle(&mut self, intent: &TableIntent, ctx: &egui::Context) {
        if *intent == TableIntent::ExportRequested {
            self.export();
            return;
        }
        if let Some(request) = self.listing.apply(intent) {
            self.dispatch(request, ctx);
        }
    }

    fn export(&mut self) {
        let status = match self.exporter.export(self.spec.export_stem, self.listing.rows()) {
            Ok(path) => ExportStatus::Written(path),
            Err(err) => {
                log::error!("export of {} failed: {err}", self.spec.id);
                ExportStatus::Failed(err.to_string())
            }
        };
        self.export_status = Some(status);
    }

    fn dispatch(&mut self, request: ListRequest, ctx: &egui::Context) {
        let ListRequest { token, query } = request;
        let send = self.send.clone();
        let repaint_ctx = ctx.clone();

        self.source.fetch(
            query,
            Box::new(move |result| {
                if send.send((token, result)).is_err() {
                    log::warn!("record page dropped before fetch {} completed", token.generation());
                }
                repaint_ctx.request_repaint();
            }),
        );
        // Synchronous sources have already answered.
        self.poll(ctx);
    }
}
