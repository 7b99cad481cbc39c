#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use referral_tracker::application::services::TrackingService;
use referral_tracker::domain::entities::{NewReferralClick, ReferralClick, ReferralCode};
use referral_tracker::domain::repositories::{ClickRepository, ReferralCodeRepository};
use referral_tracker::error::AppError;
use referral_tracker::state::AppState;

/// In-memory referral code store seeded per test.
pub struct InMemoryCodeRepository {
    codes: Vec<String>,
    healthy: bool,
}

impl InMemoryCodeRepository {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            healthy: true,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            codes: Vec::new(),
            healthy: false,
        }
    }
}

#[async_trait]
impl ReferralCodeRepository for InMemoryCodeRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ReferralCode>, AppError> {
        Ok(self
            .codes
            .iter()
            .find(|c| c.as_str() == code)
            .map(|c| ReferralCode { code: c.clone() }))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

/// In-memory click sink recording inserts for assertions.
#[derive(Default)]
pub struct InMemoryClickRepository {
    clicks: Mutex<Vec<ReferralClick>>,
}

impl InMemoryClickRepository {
    pub fn recorded(&self) -> Vec<ReferralClick> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn insert(&self, new_click: NewReferralClick) -> Result<ReferralClick, AppError> {
        let mut clicks = self.clicks.lock().unwrap();
        let click = ReferralClick {
            id: clicks.len() as i64 + 1,
            referral_code: new_click.referral_code,
            app_id: new_click.app_id,
            ip_hash: new_click.ip_hash,
            user_agent: new_click.user_agent,
            clicked_at: Utc::now(),
        };
        clicks.push(click.clone());
        Ok(click)
    }
}

/// Click repository whose inserts always fail, for store-error paths.
pub struct FailingClickRepository;

#[async_trait]
impl ClickRepository for FailingClickRepository {
    async fn insert(&self, _new_click: NewReferralClick) -> Result<ReferralClick, AppError> {
        Err(AppError::StoreWrite)
    }
}

/// Builds an [`AppState`] over in-memory repositories seeded with `codes`.
///
/// Returns the click sink alongside so tests can assert what was written.
pub fn create_test_state(codes: &[&str]) -> (AppState, Arc<InMemoryClickRepository>) {
    let code_repository = Arc::new(InMemoryCodeRepository::new(codes));
    let click_repository = Arc::new(InMemoryClickRepository::default());

    let tracking_service = Arc::new(TrackingService::new(
        code_repository,
        click_repository.clone(),
    ));

    (AppState { tracking_service }, click_repository)
}

/// Builds an [`AppState`] whose click inserts always fail.
pub fn create_failing_state(codes: &[&str]) -> AppState {
    let code_repository = Arc::new(InMemoryCodeRepository::new(codes));
    let click_repository = Arc::new(FailingClickRepository);

    let tracking_service = Arc::new(TrackingService::new(code_repository, click_repository));

    AppState { tracking_service }
}

/// Builds an [`AppState`] whose store probe reports unhealthy.
pub fn create_unhealthy_state() -> AppState {
    let code_repository = Arc::new(InMemoryCodeRepository::unhealthy());
    let click_repository = Arc::new(InMemoryClickRepository::default());

    let tracking_service = Arc::new(TrackingService::new(code_repository, click_repository));

    AppState { tracking_service }
}
