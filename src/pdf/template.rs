use askama::Template;

use crate::error::AppError;
use crate::models::SubmissionBundle;

#[derive(Template)]
#[template(path = "indemnity.html")]
struct IndemnityTemplate<'a> {
    bundle: &'a SubmissionBundle,
}

/// Render the indemnity-form HTML handed to the PDF subprocess.
pub fn render_html(bundle: &SubmissionBundle) -> Result<String, AppError> {
    IndemnityTemplate { bundle }
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render indemnity template: {e}")))
}
