//! Patient record command and query handlers.

mod dashboard;
mod get_patient;
mod list_patients;
mod update_patient;

pub use dashboard::{
    ListFlaggedHandler, ListFlaggedQuery, PatientStats, PatientStatsHandler, PatientStatsQuery,
};
pub use get_patient::{GetPatientHandler, GetPatientQuery};
pub use list_patients::{ListPatientsHandler, ListPatientsQuery, PatientFilter};
pub use update_patient::{UpdatePatientCommand, UpdatePatientHandler};
