//! Commission rule form controller
//!
//! Populates the create/edit modal from an existing rule or defaults,
//! validates locally before any remote call, and submits create or
//! update. Per form instance the state machine is
//! `closed -> open -> [invalid -> open | submit -> closed]`; re-opening
//! always repopulates, discarding unsaved edits.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use shared::models::{CommissionRule, CommissionRulePayload, DiscountType, RuleStatus};

use crate::api::CommissionApi;
use crate::commissions::CommissionPage;
use crate::error::{ConsoleError, ConsoleResult};
use crate::query_cache::QueryCache;

/// Editable form fields
///
/// The commission value stays raw text until submission; it arrives from
/// a text input and conversion is part of validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub commission: String,
    pub discount_type: DiscountType,
    pub valid_from: NaiveDate,
    /// Blank end date means open-ended; omitted from the submission body
    pub valid_until: Option<NaiveDate>,
    pub status: RuleStatus,
    pub applicable_services: BTreeSet<String>,
}

impl FormFields {
    fn defaults() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            commission: String::new(),
            discount_type: DiscountType::Percentage,
            valid_from: Local::now().date_naive(),
            valid_until: None,
            status: RuleStatus::Active,
            applicable_services: BTreeSet::new(),
        }
    }

    fn from_rule(rule: &CommissionRule) -> Self {
        Self {
            title: rule.title.clone(),
            description: rule.description.clone().unwrap_or_default(),
            commission: format!("{}", rule.commission),
            discount_type: rule.discount_type,
            valid_from: rule.valid_from,
            valid_until: rule.valid_until,
            status: rule.status,
            applicable_services: rule.applicable_services.iter().cloned().collect(),
        }
    }
}

/// Commission rule form controller
pub struct CommissionRuleForm {
    api: Arc<dyn CommissionApi>,
    cache: Arc<QueryCache<u32, CommissionPage>>,
    fields: Option<FormFields>,
    /// Set when editing an existing rule; drives create vs update
    editing_id: Option<String>,
}

impl CommissionRuleForm {
    pub fn new(api: Arc<dyn CommissionApi>, cache: Arc<QueryCache<u32, CommissionPage>>) -> Self {
        Self {
            api,
            cache,
            fields: None,
            editing_id: None,
        }
    }

    /// Whether the form is open
    pub fn is_open(&self) -> bool {
        self.fields.is_some()
    }

    /// The current fields, while open
    pub fn fields(&self) -> Option<&FormFields> {
        self.fields.as_ref()
    }

    /// Mutable access for the presentation layer's field bindings
    pub fn fields_mut(&mut self) -> Option<&mut FormFields> {
        self.fields.as_mut()
    }

    /// Open the form, populated from `rule` or reset to defaults
    pub fn open(&mut self, rule: Option<&CommissionRule>) {
        match rule {
            Some(rule) => {
                self.fields = Some(FormFields::from_rule(rule));
                self.editing_id = Some(rule.id.clone());
            }
            None => {
                self.fields = Some(FormFields::defaults());
                self.editing_id = None;
            }
        }
    }

    /// Close the form, discarding any edits
    pub fn close(&mut self) {
        self.fields = None;
        self.editing_id = None;
    }

    /// Symmetric set-membership toggle on the applicable-services field
    pub fn toggle_service(&mut self, service_id: &str) {
        if let Some(fields) = self.fields.as_mut() {
            if !fields.applicable_services.remove(service_id) {
                fields.applicable_services.insert(service_id.to_string());
            }
        }
    }

    /// Validate and submit the form
    ///
    /// Validation failures are local; no remote call is made. On remote
    /// success the form closes and the commission list cache is
    /// invalidated; on remote failure the form stays open with its edits.
    pub async fn submit(&mut self) -> ConsoleResult<CommissionRule> {
        let fields = self
            .fields
            .as_ref()
            .ok_or_else(|| ConsoleError::Validation("Form is not open".to_string()))?;

        let payload = Self::validate(fields)?;

        let result = match &self.editing_id {
            Some(id) => self.api.update(id, &payload).await,
            None => self.api.create(&payload).await,
        };

        match result {
            Ok(rule) => {
                self.close();
                self.cache.invalidate_all().await;
                tracing::debug!(id = %rule.id, "commission rule saved, list invalidated");
                Ok(rule)
            }
            Err(e) => {
                tracing::warn!(error = %e, "commission rule submission failed");
                Err(ConsoleError::Remote(e))
            }
        }
    }

    fn validate(fields: &FormFields) -> ConsoleResult<CommissionRulePayload> {
        if fields.title.trim().is_empty() || fields.commission.trim().is_empty() {
            return Err(ConsoleError::Validation(
                "Title and Commission value are required".to_string(),
            ));
        }

        let commission: f64 = fields
            .commission
            .trim()
            .parse()
            .map_err(|_| ConsoleError::Validation("Commission value must be a number".to_string()))?;

        if fields.applicable_services.is_empty() {
            return Err(ConsoleError::Validation(
                "Select at least one service".to_string(),
            ));
        }

        let description = fields.description.trim();
        Ok(CommissionRulePayload {
            title: fields.title.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            commission,
            discount_type: fields.discount_type,
            valid_from: fields.valid_from,
            valid_until: fields.valid_until,
            status: fields.status,
            applicable_services: fields.applicable_services.iter().cloned().collect(),
        })
    }
}
