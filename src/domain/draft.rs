use crate::domain::beneficiary::{Beneficiary, CustomerProfile};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outward-remittance product sub-type. Determines the milestone map and the
/// advanced form-field set that apply to a draft.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrmType {
    Lrs,
    TradeAdvance,
    TradeDirect,
}

impl OrmType {
    /// Wire/reference-data key, e.g. `TRADE_ADVANCE`.
    pub fn key(&self) -> &'static str {
        match self {
            OrmType::Lrs => "LRS",
            OrmType::TradeAdvance => "TRADE_ADVANCE",
            OrmType::TradeDirect => "TRADE_DIRECT",
        }
    }

    /// Human-readable label, e.g. `Trade Advance`.
    pub fn label(&self) -> &'static str {
        match self {
            OrmType::Lrs => "LRS",
            OrmType::TradeAdvance => "Trade Advance",
            OrmType::TradeDirect => "Trade Direct",
        }
    }
}

/// Payment rail of a draft in progress. ORM is the only rail with further
/// structure: the product sub-type travels inside the variant, so a draft can
/// never carry an ORM type without being on the ORM rail.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rail {
    Rtgs,
    Neft,
    Orm(OrmType),
}

impl Rail {
    pub fn kind(&self) -> RailKind {
        match self {
            Rail::Rtgs => RailKind::Rtgs,
            Rail::Neft => RailKind::Neft,
            Rail::Orm(_) => RailKind::Orm,
        }
    }
}

/// Rail discriminant as it appears in reference data (no sub-type attached).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum RailKind {
    Rtgs,
    Neft,
    Orm,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChargeType {
    #[default]
    Sha,
    Our,
    Ben,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceLevel {
    Standard,
    Urgent,
    Instant,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstructionPriority {
    Normal,
    High,
    Critical,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceStatus {
    Pass,
    Review,
    Fail,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum GpiTransferType {
    #[serde(rename = "MT103")]
    Mt103,
    #[serde(rename = "MT202/202COV")]
    Mt202Cov,
}

/// Result of the simulated GPI pre-authorization compliance step. Attached to
/// a draft at most once, and only after a beneficiary has been selected.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GpiDetails {
    pub uetr: String,
    pub gpi_service_level: ServiceLevel,
    pub instruction_priority: InstructionPriority,
    pub compliance_status: ComplianceStatus,
    pub sanctions_screening_ref: String,
    pub screening_timestamp: DateTime<Utc>,
    pub intermediary_bic: String,
    pub routing_bic: String,
    pub gpi_transfer_type: GpiTransferType,
    pub remitter_legal_address: String,
    pub beneficiary_legal_address: String,
    pub compliance_reason_code: Option<String>,
    pub nostro_path: Vec<String>,
}

/// LRS-specific advanced form fields.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct LrsAdvanced {
    pub unique_ref_no: String,
    pub product_category: String,
    pub purpose_desc: String,
    pub source_of_funds: String,
    pub remittance_ccy: String,
    pub pan_no: Option<String>,
    pub lrs_utilized: Option<String>,
    pub last_txn_ref: Option<String>,
    pub portal_ref: Option<String>,
    /// Populated by the simulated OCR extraction; drives a distinct visual
    /// treatment downstream.
    pub ocr_filled: bool,
    pub manual_entry: bool,
}

/// Trade Advance advanced form fields.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TradeAdvanceAdvanced {
    pub unique_ref_no: String,
    pub product_category: String,
    pub purpose_desc: String,
    pub source_of_funds: String,
    pub remittance_ccy: String,
    pub last_txn_ref: Option<String>,
    pub manual_entry: bool,
}

/// Trade Direct advanced form fields.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TradeDirectAdvanced {
    pub unique_ref_no: String,
    pub product_category: String,
    pub purpose_desc: String,
    pub source_of_funds: String,
    pub remittance_ccy: String,
    pub hs_code: Option<String>,
    pub invoice_no: Option<String>,
    pub last_txn_ref: Option<String>,
    pub manual_entry: bool,
}

/// Per-product advanced field set. Tagged by the ORM sub-type so each flow
/// only ever sees the fields that exist for it; absent values stay `Option`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AdvancedDetails {
    Lrs(LrsAdvanced),
    TradeAdvance(TradeAdvanceAdvanced),
    TradeDirect(TradeDirectAdvanced),
}

impl AdvancedDetails {
    pub fn orm_type(&self) -> OrmType {
        match self {
            AdvancedDetails::Lrs(_) => OrmType::Lrs,
            AdvancedDetails::TradeAdvance(_) => OrmType::TradeAdvance,
            AdvancedDetails::TradeDirect(_) => OrmType::TradeDirect,
        }
    }

    pub fn unique_ref_no(&self) -> &str {
        match self {
            AdvancedDetails::Lrs(a) => &a.unique_ref_no,
            AdvancedDetails::TradeAdvance(a) => &a.unique_ref_no,
            AdvancedDetails::TradeDirect(a) => &a.unique_ref_no,
        }
    }

    pub fn product_category(&self) -> &str {
        match self {
            AdvancedDetails::Lrs(a) => &a.product_category,
            AdvancedDetails::TradeAdvance(a) => &a.product_category,
            AdvancedDetails::TradeDirect(a) => &a.product_category,
        }
    }

    pub fn purpose_desc(&self) -> &str {
        match self {
            AdvancedDetails::Lrs(a) => &a.purpose_desc,
            AdvancedDetails::TradeAdvance(a) => &a.purpose_desc,
            AdvancedDetails::TradeDirect(a) => &a.purpose_desc,
        }
    }

    pub fn source_of_funds(&self) -> &str {
        match self {
            AdvancedDetails::Lrs(a) => &a.source_of_funds,
            AdvancedDetails::TradeAdvance(a) => &a.source_of_funds,
            AdvancedDetails::TradeDirect(a) => &a.source_of_funds,
        }
    }

    pub fn remittance_ccy(&self) -> &str {
        match self {
            AdvancedDetails::Lrs(a) => &a.remittance_ccy,
            AdvancedDetails::TradeAdvance(a) => &a.remittance_ccy,
            AdvancedDetails::TradeDirect(a) => &a.remittance_ccy,
        }
    }

    pub fn ocr_filled(&self) -> bool {
        match self {
            AdvancedDetails::Lrs(a) => a.ocr_filled,
            _ => false,
        }
    }
}

/// The single mutable remittance record flowing through the screen sequence.
///
/// Created empty on app start / reset, progressively enriched by customer
/// selection, OCR extraction or pay-again replay, and discarded on successful
/// submission or logout.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PaymentDraft {
    pub beneficiary: Option<Beneficiary>,
    pub amount: Decimal,
    pub rail: Option<Rail>,
    pub purpose: String,
    pub charge_type: ChargeType,
    pub advanced: Option<AdvancedDetails>,
    pub cif_id: Option<String>,
    pub customer_profile: Option<CustomerProfile>,
    pub gpi_details: Option<GpiDetails>,
}

impl PaymentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orm_type(&self) -> Option<OrmType> {
        match self.rail {
            Some(Rail::Orm(t)) => Some(t),
            _ => None,
        }
    }

    pub fn is_orm(&self) -> bool {
        matches!(self.rail, Some(Rail::Orm(_)))
    }

    /// Attaches GPI details if none exist yet and a beneficiary is present.
    /// Returns whether the details were attached; an existing value is never
    /// overwritten.
    pub fn attach_gpi(&mut self, details: GpiDetails) -> bool {
        if self.gpi_details.is_some() || self.beneficiary.is_none() {
            return false;
        }
        self.gpi_details = Some(details);
        true
    }

    /// Whether the draft may advance past the payment form. The form performs
    /// no validation beyond the amount being a non-negative number.
    pub fn amount_valid(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}
