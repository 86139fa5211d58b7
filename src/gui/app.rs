// src/gui/app.rs
use std::{
    collections::{HashMap, HashSet},
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        options::{ApiKey, AppOptions},
        state::AppState,
    },
    data::{Applied, Session},
    datasets::{DatasetKind, DatasetSpec},
    normalize::Normalized,
    refresh::RefreshError,
    store,
};

use super::{actions, router, table_model::TableData};

/// What a refresh worker sends back to the UI thread.
pub type RefreshOutcome = (DatasetKind, Result<Normalized, RefreshError>);

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = match AppOptions::from_env() {
        Ok(o) => o,
        Err(e) => {
            loge!("Config: {}, using defaults", e);
            AppOptions::default()
        }
    };
    let state = AppState { options: app_options, ..AppState::default() };
    let api_key = ApiKey::from_env().map(|k| s!(k.expose())).unwrap_or_default();

    eframe::run_native(
        "GitHub Insights",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, api_key)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,

    // display rows per dataset, rebuilt whenever a snapshot changes
    pub tables: HashMap<DatasetKind, TableData>,

    // text fields
    pub api_key_text: String,
    pub out_dir_text: String,

    // status line (workers write here too)
    pub status: Arc<Mutex<String>>,

    // refresh results from worker threads
    pub tx: Sender<RefreshOutcome>,
    rx: Receiver<RefreshOutcome>,

    // tabs already shown once (auto refresh fires at most once per tab)
    visited: HashSet<DatasetKind>,
}

impl App {
    pub fn new(state: AppState, api_key_text: String) -> Self {
        let mut session = Session::new();
        let mut tables = HashMap::new();
        let mut status = s!("Idle");

        // Load cache for all datasets
        for spec in router::all_pages() {
            match store::load_dataset(spec) {
                Ok(set) if !set.is_empty() => {
                    logf!("Cache: Loaded {:?} (rows={})", spec.kind, set.len());
                    tables.insert(spec.kind, TableData::from_records(&set));
                    session.seed(spec.kind, set);
                    status = s!("Loaded local data");
                }
                Ok(_) => logd!("Cache: {:?} is empty, skipping", spec.kind),
                Err(e) => logd!("Cache: Missing {:?} ({})", spec.kind, e),
            }
        }

        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();
        let (tx, rx) = mpsc::channel();

        logf!("Init: datasets={}, key_present={}", router::all_pages().len(), !api_key_text.is_empty());

        Self {
            state,
            session,
            tables,
            api_key_text,
            out_dir_text,
            status: Arc::new(Mutex::new(status)),
            tx,
            rx,
            visited: HashSet::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static DatasetSpec { router::page_at(self.current_index()) }

    #[inline]
    pub fn current_kind(&self) -> DatasetKind { self.current_page().kind }

    #[inline]
    pub fn has_api_key(&self) -> bool { !self.api_key_text.trim().is_empty() }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Drain finished refreshes into the session.
    fn collect_results(&mut self) {
        while let Ok((kind, result)) = self.rx.try_recv() {
            let spec = kind.spec();
            let applied = self.session.apply(kind, result);

            if let Some(set) = self.session.records(kind) {
                self.tables.insert(kind, TableData::from_records(set));
            }

            match applied {
                Applied::Replaced { rows, .. } => {
                    if let Some(set) = self.session.records(kind) {
                        match store::save_dataset(spec, set) {
                            Ok(p) => logf!("Cache: Saved {:?} → {}", kind, p.display()),
                            Err(e) => loge!("Cache: Save failed {:?}: {}", kind, e),
                        }
                    }
                    self.status(format!("{}: {} row(s)", spec.title, rows));
                }
                Applied::Cleared { .. } => {
                    self.status(format!("{}: no usable data", spec.title));
                }
                Applied::KeptPrevious { .. } => {
                    self.status(format!("{}: refresh failed", spec.title));
                }
            }
        }
    }

    /// First visit to a tab with nothing to show triggers one refresh.
    fn maybe_auto_refresh(&mut self, ctx: &egui::Context) {
        let kind = self.current_kind();
        if !self.state.gui.auto_refresh || !self.has_api_key() {
            return;
        }
        if !self.visited.insert(kind) || self.session.get(kind).is_some() {
            return;
        }
        logd!("UI: Auto refresh {:?}", kind);
        actions::refresh(self, ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_results();
        self.maybe_auto_refresh(ctx);

        egui::SidePanel::left("settings")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::key_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });

        if router::all_pages().iter().any(|p| self.session.is_in_flight(p.kind)) {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
