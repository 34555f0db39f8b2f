use std::sync::Arc;

use barista::{
    Americano, Beverage, Customer, Logger, Maker, OrderError, OutputSink, StdoutSink, Topping,
};
use colored::Colorize;

fn main() -> Result<(), OrderError> {
    println!("{}", "=== Barista: order notification demo ===".bold());

    // Composition root: one sink, one logger, shared by every component.
    let out: Arc<dyn OutputSink> = Arc::new(StdoutSink);
    let logger = Logger::new(Arc::clone(&out));

    let mut maker = Maker::new(logger.clone());
    maker.add_observer(Arc::new(Customer::new(
        "John",
        logger.clone(),
        Arc::clone(&out),
    )));
    maker.add_observer(Arc::new(Customer::new(
        "Alice",
        logger.clone(),
        Arc::clone(&out),
    )));

    let beverage = Topping::whip(Americano)?;
    println!(
        "{} {} (${:.2})",
        "Prepared:".green(),
        beverage.description(),
        beverage.cost()
    );

    maker.beverage_is_ready(&beverage)?;
    Ok(())
}
