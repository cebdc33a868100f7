//! Tap event routing between the host input layer and the session.
//!
//! Registration is scoped: [`TapDispatcher::subscribe`] hands back a guard
//! and dropping the guard detaches the listener, so every enabled listener
//! has a matching disable path even under early exit.
//!
//! Everything here is single-threaded, like the frame loop it feeds. A host
//! with multi-threaded input delivery must serialize taps onto the frame
//! thread before they reach the dispatcher.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use log::debug;

use crate::placement::ScreenPoint;

type TapQueue = Rc<RefCell<VecDeque<ScreenPoint>>>;

/// Fan-out point for raw tap events.
///
/// The host input layer owns one dispatcher and feeds every tap into it;
/// subscribers drain their own buffered copies between frame ticks.
#[derive(Default)]
pub struct TapDispatcher {
    subscribers: RefCell<Vec<Weak<RefCell<VecDeque<ScreenPoint>>>>>,
}

impl TapDispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Registers a new tap listener. The subscription detaches when
    /// dropped.
    pub fn subscribe(&self) -> TapSubscription {
        let queue: TapQueue = Rc::new(RefCell::new(VecDeque::new()));
        self.subscribers.borrow_mut().push(Rc::downgrade(&queue));
        TapSubscription { queue }
    }

    /// Delivers one tap to every live subscription, pruning detached ones.
    pub fn dispatch(&self, tap: ScreenPoint) {
        debug!("tap at ({:.1}, {:.1})", tap.x, tap.y);
        self.subscribers
            .borrow_mut()
            .retain(|slot| match slot.upgrade() {
                Some(queue) => {
                    queue.borrow_mut().push_back(tap);
                    true
                }
                None => false,
            });
    }

    /// Number of currently attached subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|slot| slot.strong_count() > 0)
            .count()
    }
}

/// Scoped handle to a tap listener.
///
/// Buffered taps are taken with [`drain`](Self::drain); dropping the
/// subscription detaches it from the dispatcher.
pub struct TapSubscription {
    queue: TapQueue,
}

impl TapSubscription {
    /// Takes all taps received since the last drain, in arrival order.
    pub fn drain(&self) -> Vec<ScreenPoint> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_are_buffered_in_arrival_order() {
        let dispatcher = TapDispatcher::new();
        let subscription = dispatcher.subscribe();

        dispatcher.dispatch(ScreenPoint::new(1.0, 1.0));
        dispatcher.dispatch(ScreenPoint::new(2.0, 2.0));

        let taps = subscription.drain();
        assert_eq!(taps, vec![ScreenPoint::new(1.0, 1.0), ScreenPoint::new(2.0, 2.0)]);
        assert!(subscription.is_empty());
    }

    #[test]
    fn every_subscription_sees_every_tap() {
        let dispatcher = TapDispatcher::new();
        let first = dispatcher.subscribe();
        let second = dispatcher.subscribe();

        dispatcher.dispatch(ScreenPoint::new(5.0, 5.0));

        assert_eq!(first.drain().len(), 1);
        assert_eq!(second.drain().len(), 1);
    }

    #[test]
    fn dropping_the_subscription_detaches_it() {
        let dispatcher = TapDispatcher::new();
        let subscription = dispatcher.subscribe();
        assert_eq!(dispatcher.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(dispatcher.subscriber_count(), 0);

        // Dispatch after detach must not panic or leak.
        dispatcher.dispatch(ScreenPoint::new(0.0, 0.0));
    }
}
