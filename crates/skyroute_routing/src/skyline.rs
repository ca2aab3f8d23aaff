use tracing::debug;

use crate::{
    edge_cost::{Dominance, EdgeCost},
    error::{Result, RoutingError},
    routing::path::Path,
};

/// Anything that can be ranked by a cost vector.
pub trait Evaluated {
    fn cost(&self) -> EdgeCost;
}

impl Evaluated for Path {
    fn cost(&self) -> EdgeCost {
        self.evaluate()
    }
}

impl Evaluated for EdgeCost {
    fn cost(&self) -> EdgeCost {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Unresolved,
    Dominated,
    Dominator,
}

struct SkylineEntry<T> {
    item: T,
    cost: EdgeCost,
    state: EntryState,
}

/// Nested loop skyline: keeps the entries no other entry dominates.
pub struct SkylineFilter<T> {
    entries: Vec<SkylineEntry<T>>,
}

impl<T: Evaluated> SkylineFilter<T> {
    pub fn new(items: Vec<T>) -> Self {
        let entries = items
            .into_iter()
            .map(|item| SkylineEntry {
                cost: item.cost(),
                item,
                state: EntryState::Unresolved,
            })
            .collect();

        SkylineFilter { entries }
    }

    /// The non-dominated items, in input order.
    pub fn filter(mut self) -> Result<Vec<T>> {
        if self.entries.is_empty() {
            return Err(RoutingError::EmptyCandidateSet);
        }

        let total = self.entries.len();

        while let Some(current) = self
            .entries
            .iter()
            .position(|entry| entry.state == EntryState::Unresolved)
        {
            let current_cost = self.entries[current].cost;
            let mut dominated = false;

            for index in 0..self.entries.len() {
                let entry = &mut self.entries[index];
                if index == current || entry.state == EntryState::Dominated {
                    continue;
                }

                match EdgeCost::dominator(&current_cost, &entry.cost) {
                    Some(Dominance::First) => entry.state = EntryState::Dominated,
                    Some(Dominance::Second) => {
                        dominated = true;
                        break;
                    }
                    None => {}
                }
            }

            self.entries[current].state = if dominated {
                EntryState::Dominated
            } else {
                EntryState::Dominator
            };
        }

        let skyline: Vec<T> = self
            .entries
            .into_iter()
            .filter(|entry| entry.state == EntryState::Dominator)
            .map(|entry| entry.item)
            .collect();

        debug!("Skyline kept {} of {} candidates", skyline.len(), total);

        Ok(skyline)
    }
}

pub fn skyline<T: Evaluated>(items: Vec<T>) -> Result<Vec<T>> {
    SkylineFilter::new(items).filter()
}
