mod client;
pub mod params;
pub mod project;
pub mod types;

pub use client::{CircleClient, PUBLIC_HOST};
pub use params::parse_params;
pub use project::{ProjectId, VcsKind};
pub use types::*;
