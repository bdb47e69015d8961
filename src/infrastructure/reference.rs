//! Read-only reference data: the mock customer master, beneficiary lists,
//! sanctions results, routing paths, exception catalog and tracking records.
//! Loaded once at startup from an embedded JSON document.

use crate::domain::beneficiary::{Beneficiary, CustomerProfile, SessionBeneficiary};
use crate::domain::draft::{ComplianceStatus, GpiTransferType, OrmType};
use crate::domain::tracking::{ExceptionItem, TrackingInfo, TransactionRecord};
use crate::error::{HubError, Result};
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;

const REFERENCE_JSON: &str = include_str!("data/reference.json");

/// Hours assumed for corridors with no ETA entry.
const DEFAULT_ETA_HOURS: u32 = 24;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SanctionsResult {
    pub beneficiary: String,
    pub sanctions_status: ComplianceStatus,
    pub screening_ref: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoutingPath {
    pub intermediary_bic: String,
    pub routing_bic: String,
    pub transfer_type: GpiTransferType,
    pub nostro_path: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NewCustomerRecord {
    customer_name: String,
    account_number: String,
    address: String,
    contact: String,
    email: String,
    pan: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationTemplates {
    pub push: String,
    pub sms: String,
    pub whatsapp: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdviceTemplate {
    pub title: String,
    pub note: String,
    pub reference: String,
    pub value_date: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScreeningCompletion {
    pub status: String,
    pub duration: String,
    pub checks_passed: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct ReferenceStore {
    credentials: Credentials,
    customers: Vec<CustomerProfile>,
    orm_beneficiaries: Vec<Beneficiary>,
    session_seed_beneficiaries: Vec<SessionBeneficiary>,
    transactions: Vec<TransactionRecord>,
    tracking: Vec<TrackingInfo>,
    sanctions: Vec<SanctionsResult>,
    routing_paths: Vec<RoutingPath>,
    exceptions: Vec<ExceptionItem>,
    time_estimates: HashMap<String, HashMap<String, String>>,
    counterparty_eta_hours: HashMap<String, u32>,
    new_customer_lookup: HashMap<String, NewCustomerRecord>,
    notification_templates: NotificationTemplates,
    advice_template: AdviceTemplate,
    screening_completion: ScreeningCompletion,
}

impl ReferenceStore {
    pub fn load() -> Result<Self> {
        Ok(serde_json::from_str(REFERENCE_JSON)?)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn customers(&self) -> &[CustomerProfile] {
        &self.customers
    }

    pub fn customer_by_cif(&self, cif_id: &str) -> Option<&CustomerProfile> {
        self.customers.iter().find(|c| c.cif_id == cif_id)
    }

    pub fn first_customer(&self) -> Option<&CustomerProfile> {
        self.customers.first()
    }

    pub fn beneficiary_by_id(&self, beneficiary_id: &str) -> Option<&Beneficiary> {
        self.orm_beneficiaries
            .iter()
            .find(|b| b.beneficiary_id == beneficiary_id)
    }

    /// Most recent ORM-eligible beneficiary for a CIF: first match in the
    /// reference table.
    pub fn beneficiary_by_cif(&self, cif_id: &str) -> Option<&Beneficiary> {
        self.orm_beneficiaries
            .iter()
            .find(|b| b.cif_id.as_deref() == Some(cif_id))
    }

    pub fn first_beneficiary(&self) -> Option<&Beneficiary> {
        self.orm_beneficiaries.first()
    }

    pub fn session_seed_beneficiaries(&self) -> Vec<SessionBeneficiary> {
        self.session_seed_beneficiaries.clone()
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn transaction(&self, txn_id: &str) -> Option<&TransactionRecord> {
        self.transactions.iter().find(|t| t.txn_id == txn_id)
    }

    pub fn trackers(&self) -> &[TrackingInfo] {
        &self.tracking
    }

    pub fn tracker(&self, txn_id: &str) -> Option<&TrackingInfo> {
        self.tracking.iter().find(|t| t.txn_id == txn_id)
    }

    /// Sanctions result by beneficiary name, falling back to the first
    /// catalog entry when no exact match exists.
    pub fn sanctions_for(&self, beneficiary_name: &str) -> Option<&SanctionsResult> {
        self.sanctions
            .iter()
            .find(|s| s.beneficiary == beneficiary_name)
            .or_else(|| self.sanctions.first())
    }

    pub fn default_routing(&self) -> Option<&RoutingPath> {
        self.routing_paths.first()
    }

    pub fn exception_for_field(&self, field: &str) -> Option<&ExceptionItem> {
        self.exceptions.iter().find(|e| e.field == field)
    }

    pub fn time_estimate(&self, orm_type: OrmType, stage: &str) -> Option<&str> {
        self.time_estimates
            .get(orm_type.key())
            .and_then(|m| m.get(stage))
            .map(String::as_str)
    }

    /// Counterparty ETA in hours, keyed `{ORM_TYPE}_{CCY}_{COUNTRY}`.
    pub fn counterparty_eta(&self, orm_type: OrmType, currency: &str, country: &str) -> u32 {
        let key = format!("{}_{}_{}", orm_type.key(), currency, country);
        self.counterparty_eta_hours
            .get(&key)
            .copied()
            .unwrap_or(DEFAULT_ETA_HOURS)
    }

    /// Resolves a CIF entered in the "Add Entity" dialog into a full profile.
    /// The lookup table only carries the basics; the rest is synthesized the
    /// same way for every new entity.
    pub fn new_customer(&self, cif_id: &str) -> Result<CustomerProfile> {
        let record = self.new_customer_lookup.get(cif_id).ok_or_else(|| {
            HubError::Lookup("Customer not found. Please re-check the ID.".to_string())
        })?;
        let suffix = &cif_id[cif_id.len().saturating_sub(4)..];
        Ok(CustomerProfile {
            cif_id: cif_id.to_string(),
            customer_name: record.customer_name.clone(),
            primary_account_number: record.account_number.clone(),
            available_balance: dec!(5000000),
            debit_account_number: record.account_number.clone(),
            debit_account_balance: dec!(5000000),
            remitter_name: record.customer_name.clone(),
            contact_number: record.contact.clone(),
            email: record.email.clone(),
            contact_person: "Authorized Signatory".to_string(),
            priority_processing: "Standard".to_string(),
            address: record.address.clone(),
            pan_no: record.pan.clone(),
            ie_ref_no: format!("IEC-{suffix}"),
            deferral_status: "None".to_string(),
            deferral_reason: String::new(),
            deferral_due_date: String::new(),
        })
    }

    pub fn notification_templates(&self) -> &NotificationTemplates {
        &self.notification_templates
    }

    pub fn advice_template(&self) -> &AdviceTemplate {
        &self.advice_template
    }

    pub fn screening_completion(&self) -> &ScreeningCompletion {
        &self.screening_completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tracking::Severity;

    #[test]
    fn test_load_embedded_tables() {
        let store = ReferenceStore::load().unwrap();
        assert_eq!(store.customers().len(), 2);
        assert_eq!(store.transactions().len(), 3);
        assert_eq!(store.trackers().len(), 5);
    }

    #[test]
    fn test_beneficiary_lookups() {
        let store = ReferenceStore::load().unwrap();
        let ben = store.beneficiary_by_cif("CIF1001").unwrap();
        assert_eq!(ben.beneficiary_id, "ORMB001");
        assert!(store.beneficiary_by_id("NOPE").is_none());
        assert_eq!(store.first_beneficiary().unwrap().name, "Nova Trading LLC");
    }

    #[test]
    fn test_sanctions_falls_back_to_first_entry() {
        let store = ReferenceStore::load().unwrap();
        let hit = store.sanctions_for("Euro Machines AG").unwrap();
        assert_eq!(hit.screening_ref, "SCR-88112-B");

        let fallback = store.sanctions_for("Unknown Counterparty").unwrap();
        assert_eq!(fallback.screening_ref, "SCR-99221-A");
    }

    #[test]
    fn test_new_customer_synthesis() {
        let store = ReferenceStore::load().unwrap();
        let profile = store.new_customer("CIF90801").unwrap();
        assert_eq!(profile.customer_name, "Aarav International Pvt Ltd");
        assert_eq!(profile.contact_person, "Authorized Signatory");
        assert_eq!(profile.ie_ref_no, "IEC-0801");

        let miss = store.new_customer("CIF00000");
        assert!(matches!(miss, Err(HubError::Lookup(_))));
    }

    #[test]
    fn test_counterparty_eta_defaults() {
        let store = ReferenceStore::load().unwrap();
        assert_eq!(store.counterparty_eta(OrmType::Lrs, "USD", "US"), 18);
        assert_eq!(store.counterparty_eta(OrmType::Lrs, "EUR", "DE"), 24);
    }

    #[test]
    fn test_exception_catalog_alias_fields() {
        let store = ReferenceStore::load().unwrap();
        let pan = store.exception_for_field("PAN No.").unwrap();
        assert_eq!(pan.severity, Severity::Medium);
        assert!(store.exception_for_field("HS Code").is_some());
        assert!(store.exception_for_field("IBAN").is_none());
    }

    #[test]
    fn test_time_estimates_cover_all_stages() {
        use crate::domain::milestones::stages_for;
        let store = ReferenceStore::load().unwrap();
        for orm in [OrmType::Lrs, OrmType::TradeAdvance, OrmType::TradeDirect] {
            for stage in stages_for(orm) {
                assert!(
                    store.time_estimate(orm, stage).is_some(),
                    "missing estimate for {:?} / {}",
                    orm,
                    stage
                );
            }
        }
    }
}
