pub mod auto;
pub mod score;
pub mod state;

pub use auto::propose;
pub use score::{MATCH_THRESHOLD, header_matches_key, normalize, score};
pub use state::{MappingState, MappingSummary};
