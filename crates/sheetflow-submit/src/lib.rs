pub mod assemble;
pub mod error;
pub mod session;

pub use assemble::assemble;
pub use error::SubmitError;
pub use session::{ImportSession, SubmitPolicy};
