pub mod client;
pub mod ens;
pub mod units;
