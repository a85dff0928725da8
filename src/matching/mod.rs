pub mod experience;
pub mod explain;
pub mod interests;
pub mod location;
pub mod ranker;
pub mod scoring;
pub mod skills;
pub mod weights;
