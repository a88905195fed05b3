pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("placement exceeds the top of the playfield")]
pub struct TopOutError;
