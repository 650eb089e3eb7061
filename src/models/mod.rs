pub mod billboard;
pub mod maintenance;

pub use billboard::Billboard;
pub use maintenance::{
    CreatedResponse, MaintenanceRecord, MaintenanceRow, MaintenanceStatus, MaintenanceUpdate,
    NewMaintenance,
};
