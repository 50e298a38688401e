use log::{debug, warn};
use num_traits::{Float, Zero};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Coordination state shared by the two search workers
struct JoinState {
    /// Single-fire cancellation signal, observed by the backward worker
    /// between queue pops
    stop: AtomicBool,
    /// The first node index found in both directions' records
    meet: Mutex<Option<usize>>,
    /// The backward worker's visited/predecessor record; written by the
    /// backward worker and read by the forward worker's join check
    backward_record: Mutex<HashMap<usize, usize>>,
}

impl JoinState {
    fn new() -> Self {
        JoinState {
            stop: AtomicBool::new(false),
            meet: Mutex::new(None),
            backward_record: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true when `idx` is already claimed by the backward worker.
    /// The stop flag guards the latch, so the meeting index is recorded
    /// exactly once no matter how many joins are detected.
    fn check_join(&self, idx: usize) -> bool {
        if !self.backward_record.lock().contains_key(&idx) {
            return false;
        }
        if !self.stop.swap(true, Ordering::AcqRel) {
            *self.meet.lock() = Some(idx);
        }
        true
    }

    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    fn record_backward(&self, to: usize, from: usize) {
        self.backward_record.lock().insert(to, from);
    }

    fn backward_has(&self, idx: usize) -> bool {
        self.backward_record.lock().contains_key(&idx)
    }
}

/// Bidirectional breadth-first search: two workers expand simultaneously,
/// forward from the source and backward from the target, and stop as soon as
/// their explored sets intersect.
///
/// The expansion is unweighted, so the returned path is *a* path, not
/// necessarily the cheapest. The backward worker follows outgoing edges from
/// the target, so the graph should be undirected-equivalent (every link
/// present in both directions) for the two frontiers to meet; on a one-way
/// graph either worker can still reach the far endpoint on its own.
pub struct BidirectionalBfs<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'a G,
    source: usize,
    target: usize,
    _weight: PhantomData<W>,
}

impl<'a, W, G> BidirectionalBfs<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<W> + Sync,
{
    /// Creates a search between source and target over a read-only graph
    pub fn new(graph: &'a G, source: usize, target: usize) -> Self {
        BidirectionalBfs {
            graph,
            source,
            target,
            _weight: PhantomData,
        }
    }

    /// Runs both workers to completion and reconciles their results.
    ///
    /// Path edges are rebuilt from the predecessor records and carry the
    /// conventional unweighted cost of 1.0.
    pub fn search(&self) -> Result<Vec<Edge<W>>> {
        if self.source == self.target {
            return Ok(Vec::new());
        }

        let shared = JoinState::new();
        let (forward, backward) = rayon::join(
            || forward_run::<W, G>(self.graph, self.source, self.target, &shared),
            || backward_run::<W, G>(self.graph, self.source, self.target, &shared),
        );

        let JoinState {
            meet,
            backward_record,
            ..
        } = shared;
        let meet = meet.into_inner();
        let backward_record = backward_record.into_inner();

        match meet {
            // No meeting point: the forward worker may still have walked all
            // the way to the target on its own; failing that, the backward
            // worker may have reached the source.
            None => match forward {
                Ok(record) => forward_path(&record, self.target, self.source),
                Err(forward_err) => {
                    warn!("forward search failed: {}", forward_err);
                    match backward {
                        Ok(()) => backward_path(&backward_record, self.source, self.target),
                        Err(backward_err) => {
                            warn!("backward search failed: {}", backward_err);
                            Err(forward_err)
                        }
                    }
                }
            },
            Some(meet) => {
                debug!("frontiers met at node {}", meet);
                if let Err(backward_err) = backward {
                    // The backward queue can drain before the forward worker
                    // detects the join; the record still holds the full
                    // chain from the meeting node to the target.
                    debug!("backward search ended with {} before the join", backward_err);
                }
                let record = forward?;
                let mut path = forward_path(&record, meet, self.source)?;
                path.extend(backward_path(&backward_record, meet, self.target)?);
                Ok(path)
            }
        }
    }
}

/// Forward worker: breadth-first from the source, owning its record map.
/// Terminates on a join with the backward frontier or on reaching the
/// target directly.
fn forward_run<W, G>(
    graph: &G,
    source: usize,
    target: usize,
    shared: &JoinState,
) -> Result<HashMap<usize, usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !graph.has_node(source) {
        return Err(Error::InvalidNodeIndex(source));
    }
    if !graph.has_node(target) {
        return Err(Error::InvalidNodeIndex(target));
    }

    let mut queue: VecDeque<Edge<W>> = graph.outgoing_edges(source).collect();
    let mut record = HashMap::new();
    record.insert(source, source);

    while let Some(edge) = queue.pop_front() {
        // A node claimed by the backward worker or the target itself ends
        // the walk; check_join latches the meeting index.
        if shared.check_join(edge.to) || edge.to == target {
            record.insert(edge.to, edge.from);
            return Ok(record);
        }

        if record.contains_key(&edge.to) {
            continue;
        }
        queue.extend(graph.outgoing_edges(edge.to));
        record.insert(edge.to, edge.from);
    }

    Err(Error::PathNotFound)
}

/// Backward worker: breadth-first from the target, recording through the
/// shared mutex. Polls the stop flag between pops and terminates quietly
/// once a join is signalled; a worker may still finish its current expansion
/// step after the signal becomes visible.
fn backward_run<W, G>(graph: &G, source: usize, target: usize, shared: &JoinState) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !graph.has_node(target) {
        return Err(Error::InvalidNodeIndex(target));
    }
    if !graph.has_node(source) {
        return Err(Error::InvalidNodeIndex(source));
    }

    let mut queue: VecDeque<Edge<W>> = graph.outgoing_edges(target).collect();
    shared.record_backward(target, target);

    loop {
        if shared.should_stop() {
            debug!("backward search stopped after join");
            return Ok(());
        }

        let edge = match queue.pop_front() {
            Some(edge) => edge,
            None => break,
        };

        if edge.to == source {
            shared.record_backward(edge.to, edge.from);
            return Ok(());
        }

        if shared.backward_has(edge.to) {
            continue;
        }
        queue.extend(graph.outgoing_edges(edge.to));
        shared.record_backward(edge.to, edge.from);
    }

    Err(Error::PathNotFound)
}

/// Rebuilds the forward record chain ending at `head` into a
/// source-to-head edge sequence
fn forward_path<W>(
    record: &HashMap<usize, usize>,
    head: usize,
    source: usize,
) -> Result<Vec<Edge<W>>>
where
    W: Float + Zero + Debug + Copy,
{
    // Meeting exactly at the source contributes nothing to this side
    if head == source {
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut to = head;

    loop {
        let from = match record.get(&to) {
            Some(&from) => from,
            None => return Err(Error::PathNotFound),
        };
        path.push(Edge::unweighted(from, to));
        if from == source {
            path.reverse();
            return Ok(path);
        }
        to = from;
    }
}

/// Rebuilds the backward record chain starting at `head` into a
/// head-to-target edge sequence; already oriented source-to-target
fn backward_path<W>(
    record: &HashMap<usize, usize>,
    head: usize,
    target: usize,
) -> Result<Vec<Edge<W>>>
where
    W: Float + Zero + Debug + Copy,
{
    // Meeting exactly at the target contributes nothing to this side
    if head == target {
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut from = head;

    loop {
        let to = match record.get(&from) {
            Some(&to) => to,
            None => return Err(Error::PathNotFound),
        };
        path.push(Edge::unweighted(from, to));
        if to == target {
            return Ok(path);
        }
        from = to;
    }
}
