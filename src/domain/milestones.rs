//! Static GPI milestone maps: the ordered stage names each ORM product moves
//! through, and the screening-stage detection rule the projection relies on.

use crate::domain::draft::OrmType;

pub const LRS_STAGES: [&str; 5] = [
    "Payment Initiated",
    "Bank Processing",
    "Screening (Conditional)",
    "Sent to Correspondent Bank",
    "Payment Credited",
];

pub const TRADE_ADVANCE_STAGES: [&str; 8] = [
    "Payment Initiated",
    "Trade Compliance Verification",
    "Contract / Proforma Invoice Validation",
    "Screening (Mandatory)",
    "Intermediary Bank Routing",
    "Correspondent Bank Processing",
    "Final Bank Processing",
    "Payment Credited",
];

pub const TRADE_DIRECT_STAGES: [&str; 7] = [
    "Payment Initiated",
    "Shipment Document Check",
    "Invoice Validation",
    "Screening (Conditional)",
    "Intermediary Bank Routing",
    "Correspondent Bank",
    "Payment Credited",
];

pub fn stages_for(orm_type: OrmType) -> &'static [&'static str] {
    match orm_type {
        OrmType::Lrs => &LRS_STAGES,
        OrmType::TradeAdvance => &TRADE_ADVANCE_STAGES,
        OrmType::TradeDirect => &TRADE_DIRECT_STAGES,
    }
}

pub fn is_screening_stage(label: &str) -> bool {
    label.contains("Screening")
}

/// Index of the screening stage within the product's milestone map.
pub fn screening_index(orm_type: OrmType) -> Option<usize> {
    stages_for(orm_type)
        .iter()
        .position(|s| is_screening_stage(s))
}
