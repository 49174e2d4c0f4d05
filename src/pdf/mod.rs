mod template;

use std::path::PathBuf;

use tokio::process::Command;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::SubmissionBundle;

pub use template::render_html;

/// Render the indemnity form for one submission as PDF bytes by handing the
/// HTML to a headless-browser subprocess.
pub async fn render_pdf(renderer: &str, bundle: &SubmissionBundle) -> Result<Vec<u8>, AppError> {
    let html = render_html(bundle)?;

    let token = Uuid::now_v7();
    let html_path = temp_path(&format!("parkform_{token}.html"));
    let pdf_path = temp_path(&format!("parkform_{token}.pdf"));

    tokio::fs::write(&html_path, &html)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to stage PDF input: {e}")))?;

    let result = run_renderer(renderer, &html_path, &pdf_path).await;

    let _ = tokio::fs::remove_file(&html_path).await;
    let pdf = match result {
        Ok(()) => tokio::fs::read(&pdf_path)
            .await
            .map_err(|e| AppError::Internal(format!("Renderer produced no output: {e}"))),
        Err(e) => Err(e),
    };
    let _ = tokio::fs::remove_file(&pdf_path).await;

    pdf
}

async fn run_renderer(
    renderer: &str,
    html_path: &PathBuf,
    pdf_path: &PathBuf,
) -> Result<(), AppError> {
    let output = Command::new(renderer)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg(format!("--print-to-pdf={}", pdf_path.display()))
        .arg(format!("file://{}", html_path.display()))
        .output()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to launch PDF renderer: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::Internal(format!(
            "PDF renderer exited with {}: {stderr}",
            output.status
        )));
    }

    Ok(())
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}
