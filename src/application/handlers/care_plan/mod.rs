//! Care-plan handlers: draft, save & send, export.

mod export_care_plan;
mod generate_care_plan;
mod save_care_plan;

pub use export_care_plan::{ExportCarePlanHandler, ExportCarePlanQuery};
pub use generate_care_plan::{GenerateCarePlanCommand, GenerateCarePlanHandler, GeneratedCarePlan};
pub use save_care_plan::{SaveCarePlanCommand, SaveCarePlanHandler};
