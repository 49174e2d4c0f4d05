use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::guides::SheetClient;
use crate::insurance::InsuranceClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub insurance: InsuranceClient,
    pub guide_sheet: Option<SheetClient>,
}
