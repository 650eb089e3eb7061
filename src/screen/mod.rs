//! State container for the maintenance records screen.
//!
//! One [`MaintenanceScreen`] owns the cached records, the form and dialog
//! state and the queue of user notifications. Every mutation goes to the
//! store first and is followed by a full reload of the record list.

use chrono::Utc;
use std::time::Duration;

use crate::{
    models::{Billboard, MaintenanceRecord},
    report::render_report,
    store::MaintenanceStore,
};

pub mod filter;
pub mod form;
pub mod messages;
pub mod notification;
pub mod print;

pub use filter::Summary;
pub use form::{FormData, FormError};
pub use notification::{Notification, NotificationLevel};
pub use print::{CapturePrintTarget, Confirm, PrintTarget, PrintWindow, PrintedDocument};

pub const DEFAULT_PRINT_DELAY: Duration = Duration::from_millis(500);

pub struct MaintenanceScreen<S> {
    store: S,
    records: Vec<MaintenanceRecord>,
    billboards: Vec<Billboard>,
    loading: bool,
    search_query: String,
    form_data: FormData,
    add_open: bool,
    edit_open: bool,
    editing_record: Option<MaintenanceRecord>,
    notifications: Vec<Notification>,
    print_delay: Duration,
}

impl<S: MaintenanceStore> MaintenanceScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            billboards: Vec::new(),
            loading: true,
            search_query: String::new(),
            form_data: FormData::default(),
            add_open: false,
            edit_open: false,
            editing_record: None,
            notifications: Vec::new(),
            print_delay: DEFAULT_PRINT_DELAY,
        }
    }

    /// Delay between writing the report and triggering print
    pub fn with_print_delay(mut self, delay: Duration) -> Self {
        self.print_delay = delay;
        self
    }

    /// Initial data load
    pub async fn mount(&mut self) {
        self.load_maintenance_records().await;
        self.load_billboards().await;
    }

    pub async fn load_maintenance_records(&mut self) {
        self.loading = true;

        match self.store.list_maintenance().await {
            Ok(rows) => {
                self.records = rows
                    .into_iter()
                    .map(|row| MaintenanceRecord::from_row(row, messages::UNKNOWN_BILLBOARD))
                    .collect();
                tracing::debug!("Loaded {} maintenance records", self.records.len());
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading maintenance records");
                self.notify(Notification::error(messages::LOAD_FAILED));
            }
        }

        self.loading = false;
    }

    /// Billboards only feed the selector, so failures stay in the log
    pub async fn load_billboards(&mut self) {
        match self.store.list_billboards().await {
            Ok(billboards) => self.billboards = billboards,
            Err(e) => tracing::error!(error = %e, "Error loading billboards"),
        }
    }

    pub async fn add_maintenance_record(&mut self) {
        let payload = match self.form_data.to_new_maintenance(Utc::now()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(?e, "Maintenance form rejected");
                self.notify(Notification::error(e.to_string()));
                return;
            }
        };

        match self.store.insert_maintenance(payload).await {
            Ok(id) => {
                tracing::info!(id, "Maintenance record added");
                self.notify(Notification::success(messages::ADD_SUCCESS));
                self.add_open = false;
                self.form_data = FormData::default();
                self.load_maintenance_records().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error adding maintenance record");
                self.notify(Notification::error(messages::ADD_FAILED));
            }
        }
    }

    pub async fn update_maintenance_record(&mut self) {
        let Some(original) = self.editing_record.as_ref() else {
            return;
        };
        let id = original.id;

        let payload = match self.form_data.to_update(original, Utc::now()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(?e, "Maintenance form rejected");
                self.notify(Notification::error(e.to_string()));
                return;
            }
        };

        match self.store.update_maintenance(id, payload).await {
            Ok(()) => {
                tracing::info!(id, "Maintenance record updated");
                self.notify(Notification::success(messages::UPDATE_SUCCESS));
                self.edit_open = false;
                self.editing_record = None;
                self.load_maintenance_records().await;
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Error updating maintenance record");
                self.notify(Notification::error(messages::UPDATE_FAILED));
            }
        }
    }

    /// Delete `id` once `confirm` affirms the prompt
    pub async fn delete_maintenance_record(&mut self, id: i64, confirm: &impl Confirm) {
        if !confirm.confirm(messages::DELETE_CONFIRM) {
            return;
        }

        match self.store.delete_maintenance(id).await {
            Ok(()) => {
                tracing::info!(id, "Maintenance record deleted");
                self.notify(Notification::success(messages::DELETE_SUCCESS));
                self.load_maintenance_records().await;
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Error deleting maintenance record");
                self.notify(Notification::error(messages::DELETE_FAILED));
            }
        }
    }

    pub fn open_edit(&mut self, record: &MaintenanceRecord) {
        self.editing_record = Some(record.clone());
        self.form_data = FormData::from_record(record);
        self.edit_open = true;
    }

    /// Print the in-progress subset of the filtered records
    pub async fn print_maintenance<T: PrintTarget>(&mut self, target: &T) {
        let printable: Vec<&MaintenanceRecord> = self
            .filtered_records()
            .into_iter()
            .filter(|record| record.is_in_progress())
            .collect();

        if printable.is_empty() {
            self.notify(Notification::warning(messages::PRINT_EMPTY));
            return;
        }

        let count = printable.len();
        let html = render_report(&printable, Utc::now());

        let Some(mut window) = target.open() else {
            tracing::error!("Print window could not be opened");
            self.notify(Notification::error(messages::PRINT_WINDOW_FAILED));
            return;
        };

        window.write(&html);
        window.close();
        window.focus();

        // Let the new document lay out before the print dialog appears
        if !self.print_delay.is_zero() {
            tokio::time::sleep(self.print_delay).await;
        }
        window.print();

        tracing::info!(count, "Maintenance report sent to print");
        self.notify(Notification::success(messages::print_ready(count)));
    }

    pub fn filtered_records(&self) -> Vec<&MaintenanceRecord> {
        filter::filter_records(&self.records, &self.search_query)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }

    pub fn open_add(&mut self) {
        self.add_open = true;
    }

    pub fn close_add(&mut self) {
        self.add_open = false;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.editing_record = None;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn form_data_mut(&mut self) -> &mut FormData {
        &mut self.form_data
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    pub fn billboards(&self) -> &[Billboard] {
        &self.billboards
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_add_open(&self) -> bool {
        self.add_open
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    pub fn editing_record(&self) -> Option<&MaintenanceRecord> {
        self.editing_record.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
