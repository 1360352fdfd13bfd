//! HTTP handlers for the intake questionnaire.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::adapters::http::error::handle_patient_error;
use crate::adapters::http::middleware::{RequireAuth, SessionToken};
use crate::adapters::http::patient::PatientResponse;
use crate::application::handlers::intake::{SubmitLifeContextCommand, SubmitLifeContextHandler};
use crate::domain::patient::{questionnaire, IntakeAnswers, Question};

#[derive(Clone)]
pub struct IntakeHandlers {
    submit_handler: Arc<SubmitLifeContextHandler>,
}

impl IntakeHandlers {
    pub fn new(submit_handler: Arc<SubmitLifeContextHandler>) -> Self {
        Self { submit_handler }
    }
}

/// GET /api/intake/questions - The six questions with their answer options
pub async fn list_questions() -> Json<Vec<Question>> {
    Json(questionnaire())
}

/// POST /api/intake - Submit answers for the signed-in patient
pub async fn submit_intake(
    State(handlers): State<IntakeHandlers>,
    RequireAuth(user): RequireAuth,
    SessionToken(token): SessionToken,
    Json(answers): Json<IntakeAnswers>,
) -> Response {
    let cmd = SubmitLifeContextCommand {
        user,
        token,
        answers,
        today: Utc::now().date_naive(),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(patient) => (StatusCode::OK, Json(PatientResponse::from(&patient))).into_response(),
        Err(e) => handle_patient_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn questions_are_served_in_order() {
        let Json(questions) = list_questions().await;
        let keys: Vec<&str> = questions.iter().map(|q| q.key).collect();
        assert_eq!(
            keys,
            vec![
                "work_schedule",
                "commute_time",
                "food_access",
                "sleep_hours",
                "stress_level",
                "living_situation"
            ]
        );
    }
}
