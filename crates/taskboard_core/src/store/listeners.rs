//! Generic snapshot listener registry.

/// Callback invoked with an owned snapshot after every store mutation.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Ordered list of listeners sharing one item type.
///
/// Listeners cannot be removed; they live as long as the registry.
pub struct ListenerRegistry<T: Clone> {
    listeners: Vec<Listener<T>>,
}

impl<T: Clone> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T: Clone> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one listener. It is not called until the next `notify`.
    pub fn add(&mut self, listener: impl FnMut(Vec<T>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Calls every listener in registration order, each with its own copy.
    pub fn notify(&mut self, items: &[T]) {
        for listener in self.listeners.iter_mut() {
            listener(items.to_vec());
        }
    }
}
