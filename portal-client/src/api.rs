//! Typed endpoint methods over [`HttpClient`]
//!
//! One method per backend operation. Every response travels in the
//! canonical `ApiResponse` envelope; paginated lists nest a `pagination`
//! object under `data`.

use crate::{ClientResult, HttpClient};
use shared::client::UserProfile;
use shared::models::{CommissionRule, CommissionRulePayload, Notification, Service};
use shared::response::{ApiResponse, Paginated};

impl HttpClient {
    // ========== Notifications API ==========

    /// List notifications for one 1-based page
    pub async fn list_notifications(&self, page: u32) -> ClientResult<Paginated<Notification>> {
        self.get::<ApiResponse<Paginated<Notification>>>(&format!(
            "/api/notifications?page={}",
            page
        ))
        .await
        .and_then(Self::unwrap_envelope)
    }

    /// Mark a single notification as read
    pub async fn mark_notification_read(&self, id: &str) -> ClientResult<()> {
        self.post_empty::<ApiResponse<serde_json::Value>>(&format!(
            "/api/notifications/{}/read",
            id
        ))
        .await
        .and_then(Self::expect_success)
    }

    /// Mark every notification as read
    pub async fn mark_all_notifications_read(&self) -> ClientResult<()> {
        self.post_empty::<ApiResponse<serde_json::Value>>("/api/notifications/read-all")
            .await
            .and_then(Self::expect_success)
    }

    // ========== Commissions API ==========

    /// List commission rules for one 1-based page
    pub async fn list_commission_rules(&self, page: u32) -> ClientResult<Paginated<CommissionRule>> {
        self.get::<ApiResponse<Paginated<CommissionRule>>>(&format!(
            "/api/commissions?page={}",
            page
        ))
        .await
        .and_then(Self::unwrap_envelope)
    }

    /// Create a commission rule
    pub async fn create_commission_rule(
        &self,
        payload: &CommissionRulePayload,
    ) -> ClientResult<CommissionRule> {
        self.post::<ApiResponse<CommissionRule>, _>("/api/commissions", payload)
            .await
            .and_then(Self::unwrap_envelope)
    }

    /// Update an existing commission rule
    pub async fn update_commission_rule(
        &self,
        id: &str,
        payload: &CommissionRulePayload,
    ) -> ClientResult<CommissionRule> {
        self.put::<ApiResponse<CommissionRule>, _>(&format!("/api/commissions/{}", id), payload)
            .await
            .and_then(Self::unwrap_envelope)
    }

    /// Delete a commission rule
    pub async fn delete_commission_rule(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<serde_json::Value>>(&format!("/api/commissions/{}", id))
            .await
            .and_then(Self::expect_success)
    }

    // ========== Services API ==========

    /// List services available for rule selection
    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.get::<ApiResponse<Vec<Service>>>("/api/services")
            .await
            .and_then(Self::unwrap_envelope)
    }

    // ========== Profile API ==========

    /// Get the current user profile
    pub async fn current_profile(&self) -> ClientResult<UserProfile> {
        self.get::<ApiResponse<UserProfile>>("/api/profile/me")
            .await
            .and_then(Self::unwrap_envelope)
    }
}
