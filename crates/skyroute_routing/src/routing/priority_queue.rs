use fxhash::FxHashMap;
use thiserror::Error;

use crate::types::VertexId;

const FIRST_ELEMENT_INDEX: usize = 1;

/// Binary min-heap of vertices that knows where each vertex is stored, so
/// that the priority of a queued vertex can be lowered in place.
///
/// The heap is 1-indexed, index 0 holds a sentinel.
pub struct PriorityQueue<P>
where
    P: PartialOrd + Copy + Default,
{
    heap: Vec<(VertexId, P)>,
    positions: FxHashMap<VertexId, usize>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityQueueError {
    #[error("Element {0} already exists in the priority queue")]
    ElementAlreadyExists(VertexId),
}

impl<P> PriorityQueue<P>
where
    P: PartialOrd + Copy + Default,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push((VertexId::MIN, P::default()));
        Self {
            heap,
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn priority(&self, id: VertexId) -> Option<P> {
        self.positions.get(&id).map(|&position| self.heap[position].1)
    }

    pub fn push(&mut self, id: VertexId, priority: P) -> Result<(), PriorityQueueError> {
        if self.contains(id) {
            return Err(PriorityQueueError::ElementAlreadyExists(id));
        }

        self.heap.push((id, priority));
        let position = self.len();
        self.positions.insert(id, position);
        self.sift_up(position);

        Ok(())
    }

    /// Inserts `id`, or lowers its priority if it is queued with a higher one.
    /// Returns whether the queue changed.
    pub fn push_or_decrease(&mut self, id: VertexId, priority: P) -> bool {
        match self.priority(id) {
            Some(current) if priority < current => self.update_priority(id, priority),
            Some(_) => false,
            None => self.push(id, priority).is_ok(),
        }
    }

    pub fn peek(&self) -> Option<&(VertexId, P)> {
        self.heap.get(FIRST_ELEMENT_INDEX)
    }

    pub fn pop(&mut self) -> Option<(VertexId, P)> {
        if self.is_empty() {
            return None;
        }

        let (id, priority) = self.heap.swap_remove(FIRST_ELEMENT_INDEX);
        self.positions.remove(&id);

        if !self.is_empty() {
            // The last element becomes the first one
            self.positions
                .insert(self.heap[FIRST_ELEMENT_INDEX].0, FIRST_ELEMENT_INDEX);
            self.sift_down(FIRST_ELEMENT_INDEX);
        }

        Some((id, priority))
    }

    /// Changes the priority of a queued element. Returns `false` when the
    /// element is not queued.
    pub fn update_priority(&mut self, id: VertexId, priority: P) -> bool {
        let Some(&position) = self.positions.get(&id) else {
            return false;
        };

        let current_priority = self.heap[position].1;
        self.heap[position] = (id, priority);

        if priority < current_priority {
            self.sift_up(position);
        } else if priority > current_priority {
            self.sift_down(position);
        }

        true
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.heap.truncate(FIRST_ELEMENT_INDEX);
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;
        let priority = self.heap[index].1;

        while index >> 1 > 0 && priority < self.heap[index >> 1].1 {
            let parent_index = index >> 1;
            self.heap.swap(index, parent_index);

            // The previous parent moved down
            self.positions.insert(self.heap[index].0, index);

            index = parent_index;
        }

        self.positions.insert(self.heap[index].0, index);
    }

    fn sift_down(&mut self, element_index: usize) {
        let size = self.len();
        let mut index = element_index;
        let priority = self.heap[index].1;

        while index << 1 <= size {
            let left_child_index = index << 1;
            let right_child_index = left_child_index + 1;

            let mut child_index = left_child_index;
            if right_child_index <= size
                && self.heap[right_child_index].1 < self.heap[left_child_index].1
            {
                child_index = right_child_index;
            }

            if priority <= self.heap[child_index].1 {
                break;
            }

            self.heap.swap(index, child_index);

            // The previous child moved up
            self.positions.insert(self.heap[index].0, index);

            index = child_index;
        }

        self.positions.insert(self.heap[index].0, index);
    }
}

impl<P> Default for PriorityQueue<P>
where
    P: PartialOrd + Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pop() {
        let mut queue = PriorityQueue::<f64>::new();
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_size() {
        let mut queue = PriorityQueue::new();
        assert!(queue.push(1, 5.0).is_ok());
        assert_eq!(queue.len(), 1);
        assert!(queue.push(2, 5.0).is_ok());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn error_duplicate_id() {
        let mut queue = PriorityQueue::new();
        assert!(queue.push(1, 5.0).is_ok());
        assert_eq!(
            queue.push(1, 5.0),
            Err(PriorityQueueError::ElementAlreadyExists(1))
        );
    }

    #[test]
    fn test_contains() {
        let mut queue = PriorityQueue::new();
        let _ = queue.push(1, 5.0);
        assert!(queue.contains(1));
        assert!(!queue.contains(2));
    }

    #[test]
    fn test_push_and_peek() {
        let mut queue = PriorityQueue::new();
        let _ = queue.push(1, 5.0);
        assert_eq!(queue.peek(), Some(&(1, 5.0)));
        let _ = queue.push(2, 3.0);
        assert_eq!(queue.peek(), Some(&(2, 3.0)));
        let _ = queue.push(3, 4.0);
        assert_eq!(queue.peek(), Some(&(2, 3.0)));
    }

    #[test]
    fn test_pop() {
        let mut queue = PriorityQueue::new();
        let _ = queue.push(1, 5.0);
        let _ = queue.push(2, 3.0);
        let _ = queue.push(3, 4.0);

        assert_eq!(queue.pop(), Some((2, 3.0)));
        assert_eq!(queue.pop(), Some((3, 4.0)));
        assert_eq!(queue.pop(), Some((1, 5.0)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_negative_ids() {
        let mut queue = PriorityQueue::new();
        let _ = queue.push(-7, 2.0);
        let _ = queue.push(-1, 1.0);

        assert_eq!(queue.pop(), Some((-1, 1.0)));
        assert_eq!(queue.pop(), Some((-7, 2.0)));
    }

    #[test]
    fn test_update_priority() {
        let mut queue = PriorityQueue::new();
        let _ = queue.push(1, 5.0);
        let _ = queue.push(2, 3.0);
        let _ = queue.push(3, 4.0);

        assert!(queue.update_priority(1, 2.0));
        assert!(queue.update_priority(2, 6.0));
        assert!(!queue.update_priority(4, 1.0));

        assert_eq!(queue.pop(), Some((1, 2.0)));
        assert_eq!(queue.pop(), Some((3, 4.0)));
        assert_eq!(queue.pop(), Some((2, 6.0)));
    }

    #[test]
    fn test_push_or_decrease() {
        let mut queue = PriorityQueue::new();
        assert!(queue.push_or_decrease(1, 5.0));
        assert!(!queue.push_or_decrease(1, 7.0));
        assert!(queue.push_or_decrease(1, 2.0));
        assert_eq!(queue.priority(1), Some(2.0));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut queue = PriorityQueue::new();
        let _ = queue.push(1, 5.0);
        let _ = queue.push(2, 3.0);
        let _ = queue.push(3, 4.0);

        queue.clear();
        assert_eq!(queue.len(), 0);
        assert!(!queue.contains(1));
        assert!(!queue.contains(2));
        assert!(!queue.contains(3));

        let _ = queue.push(1, 5.0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn pops_in_priority_order() {
        let priorities = [9.0, 2.5, 7.0, 0.5, 3.0, 8.0, 1.0, 6.0, 4.5, 5.0];
        let mut queue = PriorityQueue::new();
        for (id, priority) in priorities.iter().enumerate() {
            queue.push(id as VertexId, *priority).unwrap();
        }
        queue.update_priority(0, 0.0);

        let mut popped = Vec::new();
        while let Some((_, priority)) = queue.pop() {
            popped.push(priority);
        }

        let mut expected = priorities.to_vec();
        expected[0] = 0.0;
        expected.sort_by(f64::total_cmp);
        assert_eq!(popped, expected);
    }
}
