//! Simple queue wrapper for indexed work items.

use crossbeam::queue::SegQueue;
use std::sync::Arc;

pub(crate) struct TaskQueue<T> {
    inner: Arc<SegQueue<T>>,
}

impl<T> TaskQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(SegQueue::new()),
        }
    }

    pub(crate) fn push(&self, t: T) {
        self.inner.push(t);
    }

    pub(crate) fn clone_inner(&self) -> Arc<SegQueue<T>> {
        Arc::clone(&self.inner)
    }
}
