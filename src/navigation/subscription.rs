/// Something that can deliver scroll notifications to a handler.
pub trait ScrollSource {
    type Listener;

    fn attach(&self, handler: Box<dyn FnMut()>) -> Option<Self::Listener>;
    fn detach(&self, listener: &Self::Listener);
}

/// Keeps a scroll handler registered for as long as it lives.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn new(source: S, handler: impl FnMut() + 'static) -> Self {
        let listener = source.attach(Box::new(handler));
        Self { source, listener }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.detach(&listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeSource {
        handlers: Rc<RefCell<Vec<(usize, Box<dyn FnMut()>)>>>,
        next_id: Rc<Cell<usize>>,
        detached: Rc<Cell<usize>>,
        refuse: bool,
    }

    impl FakeSource {
        fn fire(&self) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler();
            }
        }
    }

    impl ScrollSource for FakeSource {
        type Listener = usize;

        fn attach(&self, handler: Box<dyn FnMut()>) -> Option<usize> {
            if self.refuse {
                return None;
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            Some(id)
        }

        fn detach(&self, listener: &usize) {
            self.detached.set(self.detached.get() + 1);
            self.handlers.borrow_mut().retain(|(id, _)| id != listener);
        }
    }

    #[test]
    fn handler_runs_on_every_event_until_dropped() {
        let source = FakeSource::default();
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let hits = hits.clone();
            ScrollSubscription::new(source.clone(), move || hits.set(hits.get() + 1))
        };
        assert_eq!(source.handlers.borrow().len(), 1);

        source.fire();
        source.fire();
        assert_eq!(hits.get(), 2);

        drop(subscription);
        source.fire();
        assert_eq!(hits.get(), 2);
        assert!(source.handlers.borrow().is_empty());
        assert_eq!(source.detached.get(), 1);
    }

    #[test]
    fn dropping_one_subscription_keeps_others() {
        let source = FakeSource::default();
        let first = ScrollSubscription::new(source.clone(), || {});
        let second = ScrollSubscription::new(source.clone(), || {});
        drop(first);
        assert_eq!(source.handlers.borrow().len(), 1);
        drop(second);
        assert!(source.handlers.borrow().is_empty());
    }

    #[test]
    fn refused_attach_never_detaches() {
        let source = FakeSource {
            refuse: true,
            ..FakeSource::default()
        };
        let subscription = ScrollSubscription::new(source.clone(), || {});
        assert!(source.handlers.borrow().is_empty());
        drop(subscription);
        assert_eq!(source.detached.get(), 0);
    }
}
