// The matching core: corpus snapshot, vector-space scoring, preference
// filtering, ranked aggregation. One synchronous pass per search.

pub mod corpus;
pub mod filter;
pub mod ranking;
pub mod similarity;
