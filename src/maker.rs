use std::sync::Arc;

use crate::beverage::Beverage;
use crate::error::OrderError;
use crate::logger::Logger;

/// A listener registered with a [`Maker`]. Receives the completed beverage
/// on each trigger; must not mutate it.
pub trait Observer {
    fn notify(&self, beverage: &dyn Beverage) -> Result<(), OrderError>;
}

/// The subject. Holds an insertion-ordered registry of observers and
/// broadcasts completed beverages to them.
pub struct Maker {
    observers: Vec<Arc<dyn Observer>>,
    logger: Logger,
}

impl Maker {
    pub fn new(logger: Logger) -> Self {
        Self {
            observers: Vec::new(),
            logger,
        }
    }

    /// Appends an observer to the registry. Duplicates are allowed; an
    /// observer registered twice is notified twice per trigger.
    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Logs the completed beverage, then synchronously notifies every
    /// registered observer in registration order, passing each the same
    /// beverage. Fail-fast: the first observer error aborts the remaining
    /// notifications and is returned to the caller.
    pub fn beverage_is_ready(&self, beverage: &dyn Beverage) -> Result<(), OrderError> {
        self.logger
            .log_message(&format!("Beverage {} has been made.", beverage.description()));
        for observer in &self.observers {
            observer.notify(beverage)?;
        }
        Ok(())
    }
}
