pub mod catalog;
pub mod driver;
pub mod registry;
pub mod runner;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{Project, Range, SequenceInfo, SequenceRequest, SequenceSyntax};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
