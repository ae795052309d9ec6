pub mod types;

pub use types::ProbeConfig;
