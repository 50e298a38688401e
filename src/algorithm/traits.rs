use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Edge;
use crate::Result;

/// Trait for single-pair cost-based path searches.
///
/// A search instance is constructed over one `(graph, source, target)`
/// triple, run once, and discarded after the path is extracted; instances
/// are not reusable across pairs.
pub trait PathSearch<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Performs the search. Errors are stored on the search object and
    /// surfaced by [`path_to_target`](Self::path_to_target).
    fn run(&mut self);

    /// Returns the found path as an ordered edge sequence from source to
    /// target. Surfaces the stored search error if `run` recorded one, and
    /// `Error::PathNotFound` when the target was never reached.
    fn path_to_target(&self) -> Result<Vec<Edge<W>>>;
}
