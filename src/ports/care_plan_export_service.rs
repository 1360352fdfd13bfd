//! Care-plan downloads: the document model and the rendering port.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::patient::{Patient, PatientStatus};

/// Turns a [`CarePlanDocument`] into a downloadable file.
///
/// Every format carries the adapted plan text unchanged, alongside the
/// patient's identity, clinical fields, life context and conflict flags.
/// Markdown needs no renderer and is produced by [`CarePlanDocument::to_markdown`].
#[async_trait]
pub trait CarePlanExportService: Send + Sync {
    /// Render the document as PDF bytes.
    async fn to_pdf(&self, document: &CarePlanDocument) -> Result<Vec<u8>, ExportError>;

    /// Render the document as a complete HTML page.
    async fn to_html(&self, document: &CarePlanDocument) -> Result<String, ExportError>;

    /// Renders in `format` and names the file `care-plan-<id>.<ext>`.
    async fn export(
        &self,
        document: &CarePlanDocument,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError> {
        let bytes = match format {
            ExportFormat::Markdown => document.to_markdown().into_bytes(),
            ExportFormat::Html => self.to_html(document).await?.into_bytes(),
            ExportFormat::Pdf => self.to_pdf(document).await?,
        };
        Ok(ExportedDocument::new(format, &document.base_filename(), bytes))
    }
}

/// Everything an exported care plan shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarePlanDocument {
    pub patient_id: String,
    pub name: String,
    pub email: String,
    pub condition: String,
    pub age: Option<u32>,
    pub medications: String,
    pub standard_care: String,
    /// `(heading, answer)` pairs.
    pub life_context: Vec<(String, String)>,
    pub conflict_flags: Vec<String>,
    pub care_plan: String,
    pub status: PatientStatus,
    pub created_at: NaiveDate,
}

impl CarePlanDocument {
    /// Builds the document for a patient.
    ///
    /// # Errors
    ///
    /// `EmptyCarePlan` if the patient has no plan yet.
    pub fn from_patient(patient: &Patient) -> Result<Self, ExportError> {
        if !patient.has_care_plan() {
            return Err(ExportError::EmptyCarePlan);
        }
        Ok(Self {
            patient_id: patient.id().to_string(),
            name: patient.name().to_string(),
            email: patient.email().to_string(),
            condition: patient.condition().to_string(),
            age: patient.age(),
            medications: patient.medications().to_string(),
            standard_care: patient.standard_care().to_string(),
            life_context: patient
                .life_context()
                .entries()
                .iter()
                .map(|(heading, answer)| (heading.to_string(), answer.to_string()))
                .collect(),
            conflict_flags: patient.conflict_flags().to_vec(),
            care_plan: patient.adapted_care_plan().to_string(),
            status: patient.status(),
            created_at: patient.created_at(),
        })
    }

    /// `care-plan-<patient id>`, without extension.
    pub fn base_filename(&self) -> String {
        format!("care-plan-{}", self.patient_id)
    }

    pub fn title(&self) -> String {
        format!("Care Plan for {}", self.name)
    }

    /// `(label, value)` rows of the identity and clinical block.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let age = self
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| "Not recorded".to_string());
        vec![
            ("Patient ID", self.patient_id.clone()),
            ("Email", self.email.clone()),
            ("Condition", or_not_recorded(&self.condition)),
            ("Age", age),
            ("Medications", or_not_recorded(&self.medications)),
            ("Standard Care", or_not_recorded(&self.standard_care)),
            ("Status", self.status.label().to_string()),
            ("Admitted", self.created_at.to_string()),
        ]
    }

    /// Markdown rendering. Free-text fields are escaped so they render as
    /// entered; the plan sits in a fenced block so it survives unchanged.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# Care Plan for {}\n\n", escape_markdown(&self.name));

        for (label, value) in self.details() {
            out.push_str(&format!("- **{}:** {}\n", label, escape_markdown(&value)));
        }

        out.push_str("\n## Life Context\n\n");
        for (heading, answer) in &self.life_context {
            out.push_str(&format!(
                "- **{}:** {}\n",
                escape_markdown(heading),
                escape_markdown(answer)
            ));
        }

        if !self.conflict_flags.is_empty() {
            out.push_str("\n## Conflict Flags\n\n");
            for flag in &self.conflict_flags {
                out.push_str(&format!("- {}\n", escape_markdown(flag)));
            }
        }

        let fence = code_fence_for(&self.care_plan);
        out.push_str("\n## Adapted Care Plan\n\n");
        out.push_str(&format!("{}text\n{}\n{}\n", fence, self.care_plan, fence));
        out
    }
}

/// Backslash-escapes inline markup and raw HTML, and block markers at the
/// start of each line. Line breaks become hard breaks inside the list item.
fn escape_markdown(text: &str) -> String {
    text.lines()
        .map(|line| escape_markdown_line(line.trim_start()))
        .collect::<Vec<_>>()
        .join("\\\n  ")
}

fn escape_markdown_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    if line.starts_with(&['-', '+', '#', '='][..]) {
        out.push('\\');
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    for (i, c) in line.chars().enumerate() {
        let ordered_marker = i == digits && digits > 0 && matches!(c, '.' | ')');
        if ordered_marker || "\\`*_[]<>&!~|".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn or_not_recorded(value: &str) -> String {
    if value.trim().is_empty() {
        "Not recorded".to_string()
    } else {
        value.to_string()
    }
}

/// A backtick fence longer than any backtick run inside `text`.
fn code_fence_for(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Html,
    Pdf,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

/// Accepts the names and extensions, any case: `markdown`/`md`, `html`/`htm`, `pdf`.
impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            _ => Err(ExportError::UnsupportedFormat(raw.to_string())),
        }
    }
}

/// A rendered file ready to send as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    pub fn new(format: ExportFormat, base_filename: &str, bytes: Vec<u8>) -> Self {
        Self {
            format,
            filename: format!("{}.{}", base_filename, format.file_extension()),
            bytes,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("patient has no care plan to export")]
    EmptyCarePlan,

    #[error("unsupported export format `{0}` (use markdown, html or pdf)")]
    UnsupportedFormat(String),

    #[error("{format} rendering failed: {reason}")]
    Render {
        format: ExportFormat,
        reason: String,
    },
}

impl ExportError {
    pub fn render(format: ExportFormat, reason: impl Into<String>) -> Self {
        Self::Render {
            format,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::{seed_patients, PatientUpdate};

    fn patient_with_plan(plan: &str) -> Patient {
        let mut patient = seed_patients().unwrap().remove(0);
        patient.apply_update(PatientUpdate {
            adapted_care_plan: Some(plan.to_string()),
            ..Default::default()
        });
        patient
    }

    #[test]
    fn format_names_and_extensions_parse() {
        for (raw, expected) in [
            ("md", ExportFormat::Markdown),
            (" Markdown ", ExportFormat::Markdown),
            ("PDF", ExportFormat::Pdf),
            ("htm", ExportFormat::Html),
        ] {
            assert_eq!(raw.parse::<ExportFormat>(), Ok(expected));
        }
        assert_eq!(
            "docx".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat("docx".to_string()))
        );
    }

    #[test]
    fn exported_pdf_is_named_after_patient() {
        let doc = ExportedDocument::new(ExportFormat::Pdf, "care-plan-p1", b"%PDF".to_vec());
        assert_eq!(doc.filename, "care-plan-p1.pdf");
        assert_eq!(doc.content_type(), "application/pdf");
    }

    #[test]
    fn document_refuses_patient_without_plan() {
        let patient = seed_patients().unwrap().remove(0);
        assert_eq!(
            CarePlanDocument::from_patient(&patient),
            Err(ExportError::EmptyCarePlan)
        );
    }

    #[test]
    fn markdown_embeds_plan_verbatim() {
        let plan = "🕐 MORNING ROUTINE\n• Line one\n\n📅 FOLLOW-UP\n• Line two";
        let doc = CarePlanDocument::from_patient(&patient_with_plan(plan)).unwrap();
        let markdown = doc.to_markdown();

        assert!(markdown.starts_with("# Care Plan for Arjun Mehta\n"));
        assert!(markdown.contains(plan));
        assert!(markdown.contains("- **Condition:** Type 2 Diabetes"));
        assert!(markdown.contains("- **Work Schedule:** Night Shift (10pm–6am)"));
        assert!(markdown.contains("## Conflict Flags"));
        assert_eq!(doc.base_filename(), "care-plan-p1");
    }

    #[test]
    fn free_text_fields_are_escaped_in_markdown() {
        let mut patient = patient_with_plan("• Line one");
        patient.apply_update(PatientUpdate {
            condition: Some("<script>alert(1)</script>".to_string()),
            medications: Some("*Metformin* 500mg\n- second line".to_string()),
            ..Default::default()
        });
        let markdown = CarePlanDocument::from_patient(&patient).unwrap().to_markdown();

        assert!(markdown.contains("- **Condition:** \\<script\\>alert(1)\\</script\\>\n"));
        assert!(markdown.contains("- **Medications:** \\*Metformin\\* 500mg\\\n  \\- second line\n"));
    }

    #[test]
    fn ordered_list_markers_are_escaped_at_line_start() {
        assert_eq!(escape_markdown_line("1. Take daily"), "1\\. Take daily");
        assert_eq!(escape_markdown_line("Take 1. daily"), "Take 1. daily");
        assert_eq!(escape_markdown_line("# heading"), "\\# heading");
        assert_eq!(escape_markdown("a & b"), "a \\& b");
    }

    #[test]
    fn fence_outgrows_backticks_in_plan() {
        assert_eq!(code_fence_for("plain"), "```");
        assert_eq!(code_fence_for("has ```` inside"), "`````");
    }
}
