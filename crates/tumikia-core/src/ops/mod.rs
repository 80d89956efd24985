pub mod caregiver_ops;
pub mod registration_ops;
pub mod store;

pub use registration_ops::SubmitOutcome;
pub use store::Store;
