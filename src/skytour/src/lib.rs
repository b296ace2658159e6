pub mod env;
pub mod error;
pub mod utils;

pub mod kmer;
pub mod parse;

pub mod edge;
pub mod vertex;
pub mod graph;
pub mod dbg;
pub mod dense;

pub mod euler;
pub mod path;
pub mod circuit;
pub mod render;

pub mod universal;
pub mod bubble;
pub mod optimal;

pub use error::{Error, Result};
