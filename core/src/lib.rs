#![warn(clippy::panic)]
#![warn(clippy::expect_used)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod colormap;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod render;
pub mod report;
pub mod types;

#[cfg(test)]
pub(crate) mod example_graphs;

pub use crate::graph::InteractionGraph;
pub use crate::render::RenderSettings;
