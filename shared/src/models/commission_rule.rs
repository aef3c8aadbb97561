//! Commission Rule Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Rule status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleStatus {
    Active,
    Inactive,
    Expired,
}

/// Commission rule entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionRule {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Commission value (percentage: 10=10%, fixed: 5.0=€5)
    pub commission: f64,
    pub discount_type: DiscountType,
    /// Validity window start, calendar-date granularity
    pub valid_from: NaiveDate,
    /// Validity window end; open-ended when absent
    pub valid_until: Option<NaiveDate>,
    pub status: RuleStatus,
    /// Services this rule applies to; non-empty at submission time
    pub applicable_services: Vec<String>,
}

/// Commission rule submission payload
///
/// Used for both create and full-replace update. A blank end date is
/// omitted from the serialized body rather than sent as null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionRulePayload {
    pub title: String,
    pub description: Option<String>,
    pub commission: f64,
    pub discount_type: DiscountType,
    pub valid_from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    pub status: RuleStatus,
    pub applicable_services: Vec<String>,
}
