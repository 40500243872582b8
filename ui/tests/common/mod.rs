#![allow(dead_code)]

use egui::accesskit::Role;
use egui_kittest::Harness;
use kittest::Queryable as _;
use registrar_business::{
    Cell, CellValue, ColumnDescriptor, Field, FilterOption, FilterSpec, PaginationState, Row,
    TableIntent,
};
use registrar_ui::RegistrarApp;
use registrar_ui::state::{Sources, State};
use registrar_ui::widgets::{DataTable, TableProps};

/// Frames to run after an interaction so input and repaints settle.
pub const UI_PROPAGATION_FRAMES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Code,
    Title,
    Credits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: &'static str,
    pub title: &'static str,
    pub credits: i64,
}

impl Field for CourseField {
    type Row = Course;
}

impl Row for Course {
    type Key = CourseField;

    fn value(&self, key: CourseField) -> CellValue {
        match key {
            CourseField::Code => self.code.into(),
            CourseField::Title => self.title.into(),
            CourseField::Credits => self.credits.into(),
        }
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            code: "CSC-101",
            title: "Algorithms",
            credits: 15,
        },
        Course {
            code: "MTH-204",
            title: "Linear Algebra",
            credits: 20,
        },
        Course {
            code: "PHY-110",
            title: "Mechanics",
            credits: 12,
        },
    ]
}

pub fn course_columns() -> Vec<ColumnDescriptor<Course>> {
    vec![
        ColumnDescriptor::new("Code", CourseField::Code)
            .with_cell(|course| Cell::Monospace(format!("#{}", course.code))),
        ColumnDescriptor::new("Title", CourseField::Title),
        ColumnDescriptor::new("Credits", CourseField::Credits),
    ]
}

pub fn course_filter() -> FilterSpec {
    FilterSpec::new(
        "kind",
        vec![
            FilterOption::new("Core", "core"),
            FilterOption::new("Elective", "elective"),
        ],
    )
}

/// Props for one table, owned so the harness can mutate them between frames.
pub struct TableState {
    pub rows: Vec<Course>,
    pub columns: Vec<ColumnDescriptor<Course>>,
    pub pagination: PaginationState,
    pub searchable: bool,
    pub filter: Option<FilterSpec>,
    pub exportable: bool,
    pub export_handler: bool,
    pub loading: bool,
    pub failure: Option<String>,
    pub intents: Vec<TableIntent>,
}

impl TableState {
    pub fn new(current_page: u32, total_items: u64) -> Self {
        Self {
            rows: courses(),
            columns: course_columns(),
            pagination: PaginationState::new(current_page, 10, total_items)
                .expect("valid pagination"),
            searchable: true,
            filter: Some(course_filter()),
            exportable: true,
            export_handler: true,
            loading: false,
            failure: None,
            intents: Vec::new(),
        }
    }
}

pub fn course_table() -> DataTable {
    DataTable::new("courses")
}

pub fn render_table(ui: &mut egui::Ui, state: &mut TableState) {
    let mut props = TableProps::new(&state.rows, &state.columns, state.pagination)
        .searchable(state.searchable)
        .exportable(state.exportable)
        .loading(state.loading)
        .failure(state.failure.as_deref());
    if let Some(filter) = &state.filter {
        props = props.with_filter(filter);
    }
    if state.export_handler {
        props = props.with_export();
    }

    let response = course_table().show(ui, &props);
    state.intents.extend(response.intents);
}

pub fn table_harness(state: TableState) -> Harness<'static, TableState> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::builder()
        .with_size(egui::vec2(1000.0, 600.0))
        .build_ui_state(render_table, state)
}

pub fn app_harness(state: State) -> Harness<'static, RegistrarApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::builder()
        .with_size(egui::vec2(1280.0, 900.0))
        .build_ui_state(|ui, app: &mut RegistrarApp| app.ui(ui), RegistrarApp::new(state))
}

pub fn default_app_harness() -> Harness<'static, RegistrarApp> {
    app_harness(State::new(Default::default(), Sources::in_memory()).expect("valid state"))
}

pub fn settle<S>(harness: &mut Harness<'_, S>) {
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
}

/// Focuses the search box and types `text` without submitting.
pub fn type_search<S>(harness: &mut Harness<'_, S>, text: &str) {
    harness.get_by_role(Role::TextInput).focus();
    settle(harness);
    harness.get_by_role(Role::TextInput).type_text(text);
    settle(harness);
}

/// Clicks the first node labelled `label`, in layout order.
pub fn click_first<S>(harness: &mut Harness<'_, S>, label: &str) {
    harness
        .query_all_by_label(label)
        .next()
        .unwrap_or_else(|| panic!("no node labelled {label:?}"))
        .click();
    settle(harness);
}

pub fn click<S>(harness: &mut Harness<'_, S>, label: &str) {
    harness.get_by_label(label).click();
    settle(harness);
}
