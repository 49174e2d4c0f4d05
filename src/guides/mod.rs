use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// IC numbers sit in column D of the guide sheet.
const IC_COLUMN: usize = 3;

/// Flattened certification record for one guide: identity columns plus seven
/// activity categories, four columns each (level, validity, certificate,
/// card).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuideRecord {
    pub reg_no: String,
    pub name: String,
    pub nickname: String,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub category: String,
    pub level: String,
    pub validity: String,
    pub certificate: String,
    pub card: String,
}

// (category, offset of its first column in the sheet row)
const CATEGORIES: [(&str, usize); 7] = [
    ("WHITE WATER RAFTING", 6),
    ("WATERFALL ABSEILING", 10),
    ("ALL-TERRAIN VEHICLE", 14),
    ("PAINTBALL", 18),
    ("SUNSET HIKING / JUNGLE TREKKING / CAVE EXPLORATION", 22),
    ("TELEMATCH / TEAM BUILDING", 26),
    ("DRIVER", 30),
];

/// Strip spaces and dashes so "900101-10-1234" and "900101 10 1234" compare
/// equal.
pub fn normalize_ic(ic: &str) -> String {
    ic.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Linear-scan the sheet rows for the IC and map the fixed column offsets
/// into a record. Missing trailing columns read as empty.
pub fn lookup(rows: &[Vec<String>], ic: &str) -> Option<GuideRecord> {
    let ic = normalize_ic(ic);
    let row = rows
        .iter()
        .find(|row| row.get(IC_COLUMN).map(|c| normalize_ic(c)) == Some(ic.clone()))?;

    let col = |i: usize| row.get(i).cloned().unwrap_or_default();

    Some(GuideRecord {
        reg_no: col(0),
        name: col(1),
        nickname: col(2),
        certifications: CATEGORIES
            .iter()
            .map(|(category, offset)| Certification {
                category: category.to_string(),
                level: col(*offset),
                validity: col(offset + 1),
                certificate: col(offset + 2),
                card: col(offset + 3),
            })
            .collect(),
    })
}

/// Source of the guide certification sheet. The production implementation
/// talks to the sheet provider's values endpoint; tests stub it.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, AppError>;
}

/// Fetches the certification range from a configured URL returning the
/// sheet-values shape `{"values": [[...]]}`.
#[derive(Clone)]
pub struct SheetClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Deserialize)]
struct SheetValues {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetClient {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            url,
        }
    }
}

#[async_trait]
impl SheetSource for SheetClient {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, AppError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Guide sheet request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("Guide sheet error {status}")));
        }

        let values: SheetValues = resp
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid guide sheet response: {e}")))?;

        Ok(values.values)
    }
}
