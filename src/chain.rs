//! Longest mix-chain search over the song graph.
//!
//! Finds the longest *simple* (no repeated song) chain of transitions
//! starting from a chosen song. True longest-path search is NP-hard on
//! cyclic graphs, so cycles are pruned rather than solved: the search
//! returns a long acyclic chain, not a guaranteed global optimum. For a
//! personal transition catalog this is the right trade.
//!
//! The traversal is an explicit-stack post-order DFS — no recursion, so
//! chain depth is bounded by memory, not the call stack. Each top-level
//! call is stateless: it owns a fresh memo and active-path set.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::graph::SongGraph;

/// One in-flight song on the exploration stack.
struct Frame<'a> {
    song: &'a str,
    /// Index of the next successor to try.
    next: usize,
    /// Longest continuation found among the successors tried so far.
    best: Vec<String>,
    /// Shallowest stack depth any pruned edge in this subtree pointed at.
    /// Results are only memoizable when no pruned edge reached a strict
    /// ancestor (`low >= own depth`).
    low: usize,
}

impl<'a> Frame<'a> {
    fn new(song: &'a str) -> Self {
        Self {
            song,
            next: 0,
            best: Vec::new(),
            low: usize::MAX,
        }
    }
}

/// Longest simple chain of transitions starting at `start`.
///
/// Successors are tried in transition insertion order and the strictly
/// longest continuation wins; on ties the first seen is kept. A song with
/// no outgoing transitions — including one absent from the graph entirely —
/// yields just `[start]`. Membership checks are the caller's business.
///
/// An edge back into the active path is treated as a dead end. The memo is
/// guarded two ways so that reuse can never smuggle a repeated song into a
/// chain: only context-free results (no pruning against a strict ancestor)
/// are cached, and a cached chain is only spliced in when it shares no song
/// with the current path.
#[must_use]
pub fn find_longest_chain<'a>(graph: &'a SongGraph, start: &'a str) -> Vec<String> {
    let mut memo: HashMap<&'a str, Vec<String>> = HashMap::new();
    let mut on_path: HashMap<&'a str, usize> = HashMap::new();
    let mut stack: Vec<Frame<'a>> = Vec::new();

    on_path.insert(start, 0);
    stack.push(Frame::new(start));

    loop {
        let depth = stack.len() - 1;
        let frame = stack.last_mut().expect("loop only runs with a live frame");
        let successors = graph.successors(frame.song);

        if let Some(next) = successors.get(frame.next) {
            frame.next += 1;
            let next = next.as_str();

            if let Some(&seen_at) = on_path.get(next) {
                // Back edge into the active path: prune, but remember how
                // high it reached so ancestors know their result is
                // context-dependent.
                frame.low = frame.low.min(seen_at);
                continue;
            }

            if let Some(cached) = memo.get(next) {
                if cached.iter().all(|s| !on_path.contains_key(s.as_str())) {
                    if cached.len() > frame.best.len() {
                        frame.best = cached.clone();
                    }
                    continue;
                }
                // The cached chain collides with the active path; fall
                // through and re-explore `next` in this context.
                log::trace!("Memoized chain for `{next}' overlaps the active path, re-exploring.");
            }

            on_path.insert(next, depth + 1);
            stack.push(Frame::new(next));
        } else {
            // All successors tried: finalize this song.
            let done = stack.pop().expect("loop only runs with a live frame");
            on_path.remove(done.song);

            let mut chain = Vec::with_capacity(1 + done.best.len());
            chain.push(done.song.to_string());
            chain.extend(done.best);

            // A back edge to the song itself (low == depth) is harmless: a
            // chain headed by it can never revisit it anyway. Only pruning
            // against a strict ancestor taints the result.
            if done.low >= depth {
                memo.insert(done.song, chain.clone());
            }

            match stack.last_mut() {
                Some(parent) => {
                    parent.low = parent.low.min(done.low);
                    if chain.len() > parent.best.len() {
                        parent.best = chain;
                    }
                }
                None => return chain,
            }
        }
    }
}

/// Longest chain over every possible starting song.
///
/// Each start is an independent search, so the scan fans out across cores.
/// The longest chain wins; among equally long chains the lexically first
/// start song wins, keeping the result deterministic.
#[must_use]
pub fn find_longest_chain_overall(graph: &SongGraph) -> Vec<String> {
    let songs = graph.songs();
    let chains: Vec<Vec<String>> = songs
        .par_iter()
        .map(|&song| find_longest_chain(graph, song))
        .collect();

    // `songs` is sorted, and collect keeps the input order.
    let mut best: Vec<String> = Vec::new();
    for chain in chains {
        if chain.len() > best.len() {
            best = chain;
        }
    }
    best
}
