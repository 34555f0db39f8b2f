use std::sync::Arc;

use crate::beverage::Beverage;
use crate::error::OrderError;
use crate::logger::{Logger, OutputSink};
use crate::maker::Observer;

/// A named observer. On notification it announces the delivery on its own
/// output and records it through the injected logger.
pub struct Customer {
    name: String,
    logger: Logger,
    out: Arc<dyn OutputSink>,
}

impl Customer {
    pub fn new(name: impl Into<String>, logger: Logger, out: Arc<dyn OutputSink>) -> Self {
        Self {
            name: name.into(),
            logger,
            out,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for Customer {
    fn notify(&self, beverage: &dyn Beverage) -> Result<(), OrderError> {
        self.out.write_line(&format!(
            "{} received the {}",
            self.name,
            beverage.description()
        ));
        self.logger
            .log_message(&format!("{} has received the beverage.", self.name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beverage::{Americano, Topping};
    use crate::logger::MemorySink;
    use crate::maker::Maker;

    #[test]
    fn reaction_precedes_delivery_log() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(sink.clone());
        let customer = Customer::new("John", logger, sink.clone());

        customer.notify(&Americano).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "John received the Americano",
                "[LOG]: John has received the beverage.",
            ]
        );
    }

    #[test]
    fn end_to_end_order_sequence() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(sink.clone());

        let mut maker = Maker::new(logger.clone());
        maker.add_observer(Arc::new(Customer::new("John", logger.clone(), sink.clone())));
        maker.add_observer(Arc::new(Customer::new(
            "Alice",
            logger.clone(),
            sink.clone(),
        )));

        let beverage = Topping::whip(Americano).unwrap();
        maker.beverage_is_ready(&beverage).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "[LOG]: Beverage Americano with Whip has been made.",
                "John received the Americano with Whip",
                "[LOG]: John has received the beverage.",
                "Alice received the Americano with Whip",
                "[LOG]: Alice has received the beverage.",
            ]
        );
    }
}
