pub mod client;
pub mod models;
pub mod session;

pub use client::{AwsSession, AwsSessionProvider};
pub use models::{DbInstanceSummary, InstancePage, InstanceRecord, ScanFailure};
pub use session::{InventorySession, SessionProvider};
