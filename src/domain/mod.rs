pub mod beneficiary;
pub mod draft;
pub mod milestones;
pub mod ports;
pub mod tracking;
