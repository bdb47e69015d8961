pub mod reference;
pub mod simulated;
