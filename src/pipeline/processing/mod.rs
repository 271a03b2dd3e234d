// Pipeline processing: row normalization and dashboard aggregation

pub mod aggregate;
pub mod normalize;

// Re-export key types and functions
pub use aggregate::DashboardViews;
pub use normalize::{ChannelNormalizer, NormalizeReport};
