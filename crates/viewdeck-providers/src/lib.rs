pub mod fixture;
pub mod traits;

pub use fixture::FixtureHost;
pub use traits::{ItemQuery, ListHandle, ListService};
