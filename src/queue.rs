use crossbeam_channel as chan;

const MAX_QUEUE_SIZE: usize = 1024;

/// Send half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Sender<T> = chan::Sender<T>;

/// Receive half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Receiver<T> = chan::Receiver<T>;

/// A thread-safe queue.
#[derive(Clone)]
pub struct Queue<T> {
    /// Send half of the queue.
    tx: Sender<T>,

    /// Receive half of the queue.
    rx: Receiver<T>,
}

impl<T> Queue<T> {
    /// Constructor.
    pub fn new() -> Self {
        let (tx, rx) = chan::bounded(MAX_QUEUE_SIZE);
        Self { tx, rx }
    }

    /// Clone the send half of the queue.
    pub fn tx(&self) -> Sender<T> {
        self.tx.clone()
    }

    /// Remove the item from the front of the queue.
    pub fn next(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands a dropped object ID back to its queue without blocking.
///
/// A full queue leaks the object rather than stalling the destructor.
pub(crate) fn release<T: ::std::fmt::Debug>(tx: &Sender<T>, item: T) {
    if let Err(err) = tx.try_send(item) {
        warn!("Destruction queue rejected {:?}; GL object leaked", err.into_inner());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_items_come_back_in_order() {
        let queue = Queue::new();
        let tx = queue.tx();
        release(&tx, 1u32);
        release(&tx, 2u32);
        assert_eq!(queue.next(), Some(1));
        assert_eq!(queue.next(), Some(2));
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn full_queue_does_not_block() {
        let queue = Queue::new();
        let tx = queue.tx();
        for id in 0 .. MAX_QUEUE_SIZE as u32 + 8 {
            release(&tx, id);
        }
        let mut drained = 0;
        while queue.next().is_some() {
            drained += 1;
        }
        assert_eq!(drained, MAX_QUEUE_SIZE);
    }
}
