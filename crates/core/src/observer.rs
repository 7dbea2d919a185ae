/// Receives solver events and decides how the search should proceed.
///
/// Observers let callers monitor or steer a search without changing its API:
/// logging progress, collecting traces, or stopping a long sweep early.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pins the event and action types so each test reads as plain calls.
    fn feed<O: Observer<f64, &'static str>>(observer: &mut O, event: f64) -> Option<&'static str> {
        observer.observe(&event)
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(feed(&mut (), 1.0).is_none());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &f64| {
            seen.push(*event);
            (*event > 1.0).then_some("stop")
        };

        assert_eq!(feed(&mut observer, 0.5), None);
        assert_eq!(feed(&mut observer, 2.0), Some("stop"));
        assert_eq!(seen, vec![0.5, 2.0]);
    }
}
