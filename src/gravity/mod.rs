mod quadtree;
mod barnes_hut;
pub mod direct;

pub use quadtree::*;
pub use barnes_hut::*;

#[cfg(test)]
mod quadtree_tests;
