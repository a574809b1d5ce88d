use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use donorhub_core::{
    campaigns::{CampaignService, CampaignServiceTrait},
    donations::{DonationService, DonationServiceTrait},
    donors::{DonorService, DonorServiceTrait},
    insights::{InsightsProviderTrait, InsightsService, InsightsServiceTrait},
    metrics::{DonorMetricsService, DonorMetricsServiceTrait},
    reports::{ReportsService, ReportsServiceTrait},
    segments::{SegmentService, SegmentServiceTrait},
    workflows::{WorkflowService, WorkflowServiceTrait},
};
use donorhub_storage_sqlite::{
    campaigns::CampaignRepository, db, donations::DonationRepository, donors::DonorRepository,
    segments::SegmentRepository, workflows::WorkflowRepository,
};

use crate::auth::AuthManager;
use crate::config::Config;
use crate::insights_http::{HttpInsightsProvider, UnconfiguredInsightsProvider};

pub struct AppState {
    pub donor_service: Arc<dyn DonorServiceTrait>,
    pub donation_service: Arc<dyn DonationServiceTrait>,
    pub metrics_service: Arc<dyn DonorMetricsServiceTrait>,
    pub campaign_service: Arc<dyn CampaignServiceTrait>,
    pub segment_service: Arc<dyn SegmentServiceTrait>,
    pub workflow_service: Arc<dyn WorkflowServiceTrait>,
    pub reports_service: Arc<dyn ReportsServiceTrait>,
    pub insights_service: Arc<dyn InsightsServiceTrait>,
    pub auth: AuthManager,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("DH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let donor_repo = Arc::new(DonorRepository::new(pool.clone(), writer.clone()));
    let donation_repo = Arc::new(DonationRepository::new(pool.clone(), writer.clone()));
    let campaign_repo = Arc::new(CampaignRepository::new(pool.clone(), writer.clone()));
    let segment_repo = Arc::new(SegmentRepository::new(pool.clone(), writer.clone()));
    let workflow_repo = Arc::new(WorkflowRepository::new(pool.clone(), writer.clone()));

    let workflow_service = Arc::new(WorkflowService::new(
        workflow_repo.clone(),
        donor_repo.clone(),
    ));

    let donor_service = Arc::new(
        DonorService::new(donor_repo.clone()).with_workflow_engine(workflow_service.clone()),
    );

    let metrics_service = Arc::new(DonorMetricsService::new(
        donor_repo.clone(),
        donation_repo.clone(),
    ));

    let donation_service = Arc::new(
        DonationService::new(
            donation_repo.clone(),
            donor_repo.clone(),
            metrics_service.clone(),
        )
        .with_workflow_engine(workflow_service.clone()),
    );

    let campaign_service = Arc::new(CampaignService::new(
        campaign_repo.clone(),
        donation_repo.clone(),
    ));

    let segment_service = Arc::new(SegmentService::new(segment_repo.clone(), donor_repo.clone()));

    let reports_service = Arc::new(ReportsService::new(
        donor_repo.clone(),
        donation_repo.clone(),
    ));

    let insights_provider: Arc<dyn InsightsProviderTrait> = match &config.insights_url {
        Some(url) => Arc::new(HttpInsightsProvider::new(
            url.clone(),
            config.insights_api_key.clone(),
        )),
        None => Arc::new(UnconfiguredInsightsProvider),
    };
    let insights_service = Arc::new(InsightsService::new(
        insights_provider,
        reports_service.clone(),
    ));

    let auth = AuthManager::new(&config.auth.token_secret);

    Ok(Arc::new(AppState {
        donor_service,
        donation_service,
        metrics_service,
        campaign_service,
        segment_service,
        workflow_service,
        reports_service,
        insights_service,
        auth,
        db_path,
    }))
}
