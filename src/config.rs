use std::collections::HashMap;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_password: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub insurance: InsuranceConfig,
    pub guide_sheet_url: Option<String>,
    pub pdf_renderer: String,
}

/// Partner insurance API credentials plus the branch → promo/event/partner
/// table. Every branch that can appear on a submission must have an entry
/// here; the table is validated at startup so an unconfigured branch fails
/// the boot, not a live webhook.
#[derive(Debug, Clone)]
pub struct InsuranceConfig {
    pub base_url: String,
    pub partner_id: String,
    pub secret_key: String,
    pub branches: HashMap<String, BranchConfig>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct BranchConfig {
    pub promo_code: String,
    pub event_name: String,
    pub partner: String,
}

impl InsuranceConfig {
    pub fn branch(&self, name: &str) -> Option<&BranchConfig> {
        self.branches.get(name)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.branches.is_empty() {
            return Err("Insurance branch table is empty".to_string());
        }
        for (branch, cfg) in &self.branches {
            if cfg.promo_code.is_empty() || cfg.event_name.is_empty() || cfg.partner.is_empty() {
                return Err(format!("Incomplete insurance config for branch '{branch}'"));
            }
        }
        Ok(())
    }
}

fn default_branches() -> HashMap<String, BranchConfig> {
    let entries = [
        ("GOPENG GLAMPING PARK", "GP01", "GopengGP", "GGP"),
        ("PUTRAJAYA LAKE RECREATION CENTER", "LRC01", "PutrajayaLRC", "PLRC"),
        ("BOTANI", "LRC01", "PutrajayaLRC", "PLRC"),
        ("GLAMPING @ WETLAND PUTRAJAYA", "GWP01", "GlowGWP", "GGWP"),
        ("PUTRAJAYA WETLAND ADVENTURE PARK", "WAP01", "PutrajayaWAP", "PWAP"),
    ];
    entries
        .into_iter()
        .map(|(branch, promo_code, event_name, partner)| {
            (
                branch.to_string(),
                BranchConfig {
                    promo_code: promo_code.to_string(),
                    event_name: event_name.to_string(),
                    partner: partner.to_string(),
                },
            )
        })
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let admin_password = env_required("ADMIN_PASSWORD")?;

        let host: IpAddr = env_or("PARKFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PARKFORM_HOST: {e}"))?;

        let port: u16 = env_or("PARKFORM_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PARKFORM_PORT: {e}"))?;

        let max_body_size: usize = env_or("PARKFORM_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid PARKFORM_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("PARKFORM_LOG_LEVEL", "info");

        // Branch table ships with the five known parks; an operator can
        // replace it wholesale with a JSON map via YAS_BRANCH_CONFIG.
        let branches = match std::env::var("YAS_BRANCH_CONFIG").ok() {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| format!("Invalid YAS_BRANCH_CONFIG: {e}"))?,
            None => default_branches(),
        };

        let insurance = InsuranceConfig {
            base_url: env_required("YAS_BASE_URL")?,
            partner_id: env_required("YAS_PARTNER_ID")?,
            secret_key: env_required("YAS_SECRET_KEY")?,
            branches,
        };
        insurance.validate()?;

        let guide_sheet_url = std::env::var("GUIDE_SHEET_URL").ok();

        let pdf_renderer = env_or("PARKFORM_PDF_RENDERER", "chromium");

        Ok(Config {
            database_url,
            admin_password,
            host,
            port,
            max_body_size,
            log_level,
            insurance,
            guide_sheet_url,
            pdf_renderer,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
