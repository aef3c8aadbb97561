//! Remote API seams
//!
//! Controllers talk to the backend through these traits rather than the
//! concrete HTTP client, so they can be exercised against fakes.

use async_trait::async_trait;
use portal_client::{ClientResult, HttpClient, Paginated};
use shared::client::UserProfile;
use shared::models::{CommissionRule, CommissionRulePayload, Notification, Service};

/// Notification resource operations
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn list(&self, page: u32) -> ClientResult<Paginated<Notification>>;
    async fn mark_read(&self, id: &str) -> ClientResult<()>;
    async fn mark_all_read(&self) -> ClientResult<()>;
}

/// Commission resource operations
#[async_trait]
pub trait CommissionApi: Send + Sync {
    async fn list(&self, page: u32) -> ClientResult<Paginated<CommissionRule>>;
    async fn create(&self, payload: &CommissionRulePayload) -> ClientResult<CommissionRule>;
    async fn update(
        &self,
        id: &str,
        payload: &CommissionRulePayload,
    ) -> ClientResult<CommissionRule>;
    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// Read-only reference data: services for selection, the header profile
#[async_trait]
pub trait ReferenceApi: Send + Sync {
    async fn list_services(&self) -> ClientResult<Vec<Service>>;
    async fn current_profile(&self) -> ClientResult<UserProfile>;
}

#[async_trait]
impl NotificationApi for HttpClient {
    async fn list(&self, page: u32) -> ClientResult<Paginated<Notification>> {
        self.list_notifications(page).await
    }

    async fn mark_read(&self, id: &str) -> ClientResult<()> {
        self.mark_notification_read(id).await
    }

    async fn mark_all_read(&self) -> ClientResult<()> {
        self.mark_all_notifications_read().await
    }
}

#[async_trait]
impl CommissionApi for HttpClient {
    async fn list(&self, page: u32) -> ClientResult<Paginated<CommissionRule>> {
        self.list_commission_rules(page).await
    }

    async fn create(&self, payload: &CommissionRulePayload) -> ClientResult<CommissionRule> {
        self.create_commission_rule(payload).await
    }

    async fn update(
        &self,
        id: &str,
        payload: &CommissionRulePayload,
    ) -> ClientResult<CommissionRule> {
        self.update_commission_rule(id, payload).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.delete_commission_rule(id).await
    }
}

#[async_trait]
impl ReferenceApi for HttpClient {
    async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.list_services().await
    }

    async fn current_profile(&self) -> ClientResult<UserProfile> {
        self.current_profile().await
    }
}
