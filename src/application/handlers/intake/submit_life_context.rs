//! SubmitLifeContextHandler - Command handler for the intake questionnaire.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::PatientStore;
use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::domain::patient::{IntakeAnswers, Patient, PatientError};
use crate::ports::SessionStore;

/// Command to submit the six intake answers.
#[derive(Debug, Clone)]
pub struct SubmitLifeContextCommand {
    pub user: AuthenticatedUser,
    pub token: String,
    pub answers: IntakeAnswers,
    pub today: NaiveDate,
}

/// Handler for intake submission.
///
/// Writes the life context onto the signed-in patient's record (flags are
/// recomputed by the store) and keeps a copy on the session.
pub struct SubmitLifeContextHandler {
    store: PatientStore,
    sessions: Arc<dyn SessionStore>,
}

impl SubmitLifeContextHandler {
    pub fn new(store: PatientStore, sessions: Arc<dyn SessionStore>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, cmd: SubmitLifeContextCommand) -> Result<Patient, PatientError> {
        cmd.user.require_role(Role::Patient)?;

        let life_context = cmd.answers.into_life_context()?;

        let patient = self
            .store
            .add_patient(&cmd.user, life_context, cmd.today)
            .await?;
        self.sessions
            .record_life_context(&cmd.token, life_context)
            .await?;

        Ok(patient)
    }
}
