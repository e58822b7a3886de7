use std::{
    collections::{HashMap, HashSet},
    iter, mem,
};

use log::trace;

use crate::Error;

pub type VertexId = usize;

/// Open ends of the path fragments built so far.
///
/// `(a, b)` with `a != b` is a fragment ending at `a` and `b`, `(v, v)` is an
/// active vertex that no fragment touches yet. Pairs are kept normalised and
/// sorted, so equal sets of pairs compare and hash equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Boundary {
    pairs: Vec<(VertexId, VertexId)>,
}

impl Boundary {
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn single(a: VertexId, b: VertexId) -> Self {
        let mut boundary = Self::empty();
        boundary.insert_pair(a, b);
        boundary
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut boundary = Self::empty();
        for (a, b) in pairs {
            if let Some(v) = [a, b].into_iter().find(|v| boundary.contains(*v)) {
                return Err(Error::SharedEndpoint(v));
            }

            boundary.insert_pair(a, b);
        }

        Ok(boundary)
    }

    pub fn pairs(&self) -> &[(VertexId, VertexId)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pair_of(&self, v: VertexId) -> Option<(VertexId, VertexId)> {
        self.pairs
            .iter()
            .copied()
            .find(|&(a, b)| a == v || b == v)
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.pair_of(v).is_some()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.pairs
            .iter()
            .flat_map(|&(a, b)| iter::once(a).chain((a != b).then_some(b)))
    }

    fn insert_pair(&mut self, a: VertexId, b: VertexId) {
        let pair = (a.min(b), a.max(b));
        let ind = self.pairs.binary_search(&pair).unwrap_or_else(|ind| ind);
        self.pairs.insert(ind, pair);
    }

    fn remove_pair(&mut self, pair: (VertexId, VertexId)) {
        if let Ok(ind) = self.pairs.binary_search(&pair) {
            self.pairs.remove(ind);
        }
    }

    fn with_pair(&self, a: VertexId, b: VertexId) -> Self {
        let mut boundary = self.clone();
        boundary.insert_pair(a, b);
        boundary
    }

    fn without_pair(&self, pair: (VertexId, VertexId)) -> Self {
        let mut boundary = self.clone();
        boundary.remove_pair(pair);
        boundary
    }
}

fn other_end(pair: (VertexId, VertexId), v: VertexId) -> VertexId {
    if pair.0 == v {
        pair.1
    } else {
        pair.0
    }
}

fn offer_into(table: &mut HashMap<Boundary, usize>, boundary: Boundary, weight: usize) -> bool {
    match table.get_mut(&boundary) {
        Some(best) if *best >= weight => false,
        Some(best) => {
            *best = weight;
            true
        }
        None => {
            table.insert(boundary, weight);
            true
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoundaryDp {
    table: HashMap<Boundary, usize>,
    start: VertexId,
    end: VertexId,
}

impl BoundaryDp {
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            table: HashMap::from([(Boundary::empty(), 0)]),
            start,
            end,
        }
    }

    pub fn is_terminal(&self, v: VertexId) -> bool {
        v == self.start || v == self.end
    }

    pub fn activate(&mut self, v: VertexId) {
        debug_assert!(!self.is_active(v), "vertex {} activated twice", v);
        self.table = mem::take(&mut self.table)
            .into_iter()
            .map(|(boundary, weight)| (boundary.with_pair(v, v), weight))
            .collect();
        trace!("Activated vertex {}, {} boundaries live.", v, self.table.len());
    }

    pub fn contract(&mut self, u: VertexId, v: VertexId, weight: usize) {
        let snapshot: Vec<(Boundary, usize)> = self
            .table
            .iter()
            .map(|(boundary, total)| (boundary.clone(), *total))
            .collect();
        for (boundary, total) in snapshot {
            let (Some(u_pair), Some(v_pair)) = (boundary.pair_of(u), boundary.pair_of(v)) else {
                continue;
            };
            // Same fragment: the edge would close a cycle.
            if u_pair == v_pair {
                continue;
            }

            let mut joined = boundary.without_pair(u_pair);
            joined.remove_pair(v_pair);
            joined.insert_pair(other_end(u_pair, u), other_end(v_pair, v));
            offer_into(&mut self.table, joined, total + weight);
        }
        trace!(
            "Contracted edge ({}, {}) of weight {}, {} boundaries live.",
            u,
            v,
            weight,
            self.table.len()
        );
    }

    pub fn retire(&mut self, v: VertexId) {
        if self.is_terminal(v) {
            return;
        }

        let mut retired = HashMap::with_capacity(self.table.len());
        for (boundary, weight) in mem::take(&mut self.table) {
            match boundary.pair_of(v) {
                None => {
                    offer_into(&mut retired, boundary, weight);
                }
                Some(pair) if pair == (v, v) => {
                    offer_into(&mut retired, boundary.without_pair(pair), weight);
                }
                // A fragment still ending at `v` can't be finished any more.
                Some(_) => {}
            }
        }
        self.table = retired;
        trace!("Retired vertex {}, {} boundaries live.", v, self.table.len());
    }

    pub fn offer(&mut self, boundary: Boundary, weight: usize) -> bool {
        offer_into(&mut self.table, boundary, weight)
    }

    pub fn weight_of(&self, boundary: &Boundary) -> Option<usize> {
        self.table.get(boundary).copied()
    }

    pub fn longest(&self) -> Option<usize> {
        self.weight_of(&Boundary::single(self.start, self.end))
    }

    pub fn boundaries(&self) -> impl Iterator<Item = (&Boundary, usize)> {
        self.table.iter().map(|(boundary, weight)| (boundary, *weight))
    }

    pub fn boundary_n(&self) -> usize {
        self.table.len()
    }

    pub fn is_active(&self, v: VertexId) -> bool {
        self.table.keys().any(|boundary| boundary.contains(v))
    }

    pub fn active_n(&self) -> usize {
        self.table
            .keys()
            .flat_map(|boundary| boundary.vertices())
            .collect::<HashSet<_>>()
            .len()
    }
}
