//! Generic tabular data browser.
//!
//! [`DataTable`] is a controlled component: it renders whatever
//! [`TableProps`] it is handed and reports user actions as [`TableIntent`]s
//! in the returned [`DataTableResponse`]. It never fetches or mutates rows,
//! page numbers or totals itself.
//!
//! The only state it keeps is the search draft, stored in egui's temporary
//! memory under the table id until the owning page calls [`DataTable::forget`].
//!
//! Layout, top to bottom:
//! - `toolbar`: search box, filter options, export button
//! - `grid`: the body, one of loading / failed / empty / populated
//! - `pagination`: previous, page window, next, and the item range

mod grid;
mod pagination;
mod toolbar;

pub use grid::EMPTY_MESSAGE;

use std::hash::Hash;

use egui::{Id, Ui};
use registrar_business::{
    ColumnDescriptor, DEFAULT_WINDOW_SIZE, DisplayState, FilterSpec, PaginationState, Row,
    SearchController, TableIntent,
};

/// Everything the owning page passes down for one frame.
pub struct TableProps<'a, T: Row> {
    pub data: &'a [T],
    pub columns: &'a [ColumnDescriptor<T>],
    pub pagination: PaginationState,
    pub window_size: u32,
    pub searchable: bool,
    pub filter: Option<&'a FilterSpec>,
    pub exportable: bool,
    /// Whether the owning page handles [`TableIntent::ExportRequested`].
    pub export_handler: bool,
    pub loading: bool,
    pub failure: Option<&'a str>,
}

impl<'a, T: Row> TableProps<'a, T> {
    pub fn new(
        data: &'a [T],
        columns: &'a [ColumnDescriptor<T>],
        pagination: PaginationState,
    ) -> Self {
        Self {
            data,
            columns,
            pagination,
            window_size: DEFAULT_WINDOW_SIZE,
            searchable: true,
            filter: None,
            exportable: true,
            export_handler: false,
            loading: false,
            failure: None,
        }
    }

    pub fn with_window_size(mut self, window_size: u32) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn with_filter(mut self, filter: &'a FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }

    /// Declares that the owning page handles export requests.
    pub fn with_export(mut self) -> Self {
        self.export_handler = true;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn failure(mut self, failure: Option<&'a str>) -> Self {
        self.failure = failure;
        self
    }

    fn shows_export(&self) -> bool {
        self.exportable && self.export_handler
    }
}

/// What happened during one frame of the table.
#[derive(Debug, Default)]
pub struct DataTableResponse {
    pub intents: Vec<TableIntent>,
}

impl DataTableResponse {
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// A data table instance, identified by a stable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTable {
    id: Id,
}

impl DataTable {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: Id::new("data_table").with(id_salt),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn show<T: Row>(&self, ui: &mut Ui, props: &TableProps<'_, T>) -> DataTableResponse {
        let mut intents = Vec::new();

        ui.push_id(self.id, |ui| {
            ui.vertical(|ui| {
                if props.searchable || props.filter.is_some() || props.shows_export() {
                    let mut search: SearchController =
                        ui.data_mut(|d| d.get_temp(self.id).unwrap_or_default());

                    intents.extend(toolbar::show(ui, props, &mut search));

                    ui.data_mut(|d| d.insert_temp(self.id, search));
                    ui.add_space(8.0);
                }

                let state = DisplayState::resolve(props.loading, props.failure, props.data);
                grid::show(ui, props.columns, &state);

                ui.add_space(8.0);
                intents.extend(pagination::show(ui, &props.pagination, props.window_size));
            });
        });

        for intent in &intents {
            log::debug!("data table {:?} emitted {intent:?}", self.id);
        }
        DataTableResponse { intents }
    }

    /// Current search draft, or an empty string if nothing was typed.
    pub fn search_draft(&self, ctx: &egui::Context) -> String {
        ctx.data(|d| {
            d.get_temp::<SearchController>(self.id)
                .map(|search| search.draft().to_owned())
                .unwrap_or_default()
        })
    }

    /// Drops the search draft. Call when the owning page unmounts the table.
    pub fn forget(&self, ctx: &egui::Context) {
        ctx.data_mut(|d| d.remove::<SearchController>(self.id));
    }
}
