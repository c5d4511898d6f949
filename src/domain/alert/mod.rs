//! Modal alerts

mod dialog;

pub use dialog::{Alert, AlertResponse};
