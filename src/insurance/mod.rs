pub mod phone;
pub mod sign;

use chrono::Utc;
use serde::Serialize;

use crate::config::InsuranceConfig;
use crate::error::AppError;
use crate::webhook::mapper::InsuranceIntake;

/// Policy-creation request body for the partner API. Serialized once; the
/// same string is signed and sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequest {
    pub mobile_country_code: Option<String>,
    pub mobile_no: String,
    pub promo_code: String,
    pub effective_start_dates: Vec<String>,
    pub product_plan_type: String,
    pub email: String,
    pub item_id: String,
    pub dealer: String,
    pub partner: String,
    pub event_name: String,
    pub theme_code: String,
    pub applicant: Applicant,
    pub declaration: Declaration,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub document_type: String,
    pub document_no: String,
    pub full_name: String,
    pub nationality: String,
    /// Domestic applicants' IC number already encodes the birth date, so
    /// `dob` goes out only for foreign nationality codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub allow_privacy_promote3_p: bool,
    pub allow_privacy_promote: bool,
}

/// Build the request body from the routed intake fields. Unknown branch is a
/// hard error; nothing gets sent.
pub fn build_policy_request(
    config: &InsuranceConfig,
    intake: &InsuranceIntake,
) -> Result<PolicyRequest, AppError> {
    let branch = intake
        .branch
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Submission has no branch".to_string()))?;

    let branch_config = config.branch(branch).ok_or_else(|| {
        AppError::Internal(format!("No insurance config found for branch: {branch}"))
    })?;

    let phone = phone::split(intake.phone.as_deref().unwrap_or_default());

    let dob = if intake.nationality_code != "MY" {
        intake.dob.clone()
    } else {
        None
    };

    Ok(PolicyRequest {
        mobile_country_code: phone.country_code,
        mobile_no: phone.number,
        promo_code: branch_config.promo_code.clone(),
        effective_start_dates: vec![intake.coverage_start.clone().unwrap_or_default()],
        product_plan_type: "ACTIVITIES_1".to_string(),
        email: intake.email.clone().unwrap_or_default(),
        item_id: String::new(),
        dealer: String::new(),
        partner: branch_config.partner.clone(),
        event_name: branch_config.event_name.clone(),
        theme_code: String::new(),
        applicant: Applicant {
            document_type: "ICPP".to_string(),
            document_no: intake.nric.clone().unwrap_or_default(),
            full_name: intake.fullname.clone().unwrap_or_default(),
            nationality: intake.nationality_code.clone(),
            dob,
        },
        declaration: Declaration {
            allow_privacy_promote3_p: true,
            allow_privacy_promote: true,
        },
    })
}

/// Signed HTTP client for the partner insurance API.
#[derive(Clone)]
pub struct InsuranceClient {
    client: reqwest::Client,
    config: InsuranceConfig,
}

impl InsuranceClient {
    pub fn new(config: InsuranceConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            config,
        }
    }

    /// POST a policy-creation request. Returns the partner's parsed JSON
    /// response; non-2xx embeds the response body in the error.
    pub async fn create_policy(
        &self,
        intake: &InsuranceIntake,
    ) -> Result<serde_json::Value, AppError> {
        let body = build_policy_request(&self.config, intake)?;

        let path = format!("/partner/{}/policy/create", self.config.partner_id);
        let timestamp = Utc::now().timestamp_millis().to_string();

        let body_string = serde_json::to_string(&body)
            .map_err(|e| AppError::Internal(format!("Failed to serialize policy request: {e}")))?;

        let signature = sign::request_signature(
            &self.config.secret_key,
            &path,
            "post",
            &timestamp,
            Some(&body_string),
        );

        tracing::debug!(path, timestamp, "Submitting insurance policy request");

        let resp = self
            .client
            .post(format!("{}{}", self.config.base_url, path))
            .header("Content-Type", "application/json")
            .header("X-Partner-Id", &self.config.partner_id)
            .header("X-Timestamp", &timestamp)
            .header("X-Request-Signature", &signature)
            .body(body_string)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Insurance request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Insurance API error {status}: {text}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid insurance API response: {e}")))
    }
}
