//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod care_plan;
pub mod intake;
pub mod patient;
pub mod session;

pub use care_plan::{
    ExportCarePlanHandler, ExportCarePlanQuery, GenerateCarePlanCommand, GenerateCarePlanHandler,
    GeneratedCarePlan, SaveCarePlanCommand, SaveCarePlanHandler,
};
pub use intake::{SubmitLifeContextCommand, SubmitLifeContextHandler};
pub use patient::{
    GetPatientHandler, GetPatientQuery, ListFlaggedHandler, ListFlaggedQuery,
    ListPatientsHandler, ListPatientsQuery, PatientFilter, PatientStats, PatientStatsHandler,
    PatientStatsQuery, UpdatePatientCommand, UpdatePatientHandler,
};
pub use session::{
    GetCurrentSessionHandler, GetCurrentSessionQuery, LoginCommand, LoginHandler, LogoutCommand,
    LogoutHandler,
};
