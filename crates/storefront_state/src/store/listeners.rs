use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by `subscribe`, used to unsubscribe.
pub struct SubscriptionId(u64);

pub(crate) type Listener<T> = Rc<dyn Fn(&T)>;

pub(crate) struct Listeners<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    pub(crate) fn insert(&mut self, listener: Listener<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Clones the current listener list so callers can invoke it without holding a borrow.
    pub(crate) fn snapshot(&self) -> Vec<Listener<T>> {
        self.entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
