use crate::error::OrderError;

/// Upper bound on decorator wraps. Cost and description resolve recursively
/// through the chain, so the bound is enforced at construction time.
pub const MAX_CHAIN_DEPTH: usize = 64;

/// A priced, described item: a base beverage or a decorated chain over one.
///
/// Implementations are immutable once constructed; `cost` and `description`
/// are pure and return the same values on every call.
pub trait Beverage {
    /// Price of the item, never negative.
    fn cost(&self) -> f64;

    /// Human-readable description, never empty.
    fn description(&self) -> String;

    /// Number of decorator wraps between this value and its base item.
    fn chain_depth(&self) -> usize {
        0
    }
}

/// The house base beverage: fixed cost, fixed description.
#[derive(Debug, Clone, Copy)]
pub struct Americano;

impl Beverage for Americano {
    fn cost(&self) -> f64 {
        2.0
    }

    fn description(&self) -> String {
        "Americano".to_string()
    }
}

/// A custom base beverage holding literal values supplied at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Brew {
    description: String,
    cost: f64,
}

impl Brew {
    pub fn new(description: impl Into<String>, cost: f64) -> Result<Self, OrderError> {
        let description = description.into();
        if description.is_empty() {
            return Err(OrderError::BlankDescription);
        }
        if cost < 0.0 {
            return Err(OrderError::NegativeCost { value: cost });
        }
        Ok(Self { description, cost })
    }
}

impl Beverage for Brew {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// A decorator over exactly one owned inner beverage, adding a fixed cost
/// delta and appending " with {label}" to the description.
pub struct Topping {
    inner: Box<dyn Beverage>,
    label: String,
    delta: f64,
    depth: usize,
}

impl Topping {
    pub fn new(
        inner: Box<dyn Beverage>,
        label: impl Into<String>,
        delta: f64,
    ) -> Result<Self, OrderError> {
        let label = label.into();
        if label.is_empty() {
            return Err(OrderError::BlankDescription);
        }
        if delta < 0.0 {
            return Err(OrderError::NegativeCost { value: delta });
        }
        let depth = inner.chain_depth() + 1;
        if depth > MAX_CHAIN_DEPTH {
            return Err(OrderError::ChainTooDeep {
                depth,
                limit: MAX_CHAIN_DEPTH,
            });
        }
        Ok(Self {
            inner,
            label,
            delta,
            depth,
        })
    }

    pub fn whip(inner: impl Beverage + 'static) -> Result<Self, OrderError> {
        Self::new(Box::new(inner), "Whip", 0.5)
    }

    pub fn milk(inner: impl Beverage + 'static) -> Result<Self, OrderError> {
        Self::new(Box::new(inner), "Milk", 0.3)
    }

    pub fn chocolate(inner: impl Beverage + 'static) -> Result<Self, OrderError> {
        Self::new(Box::new(inner), "Chocolate", 0.6)
    }
}

impl Beverage for Topping {
    fn cost(&self) -> f64 {
        self.inner.cost() + self.delta
    }

    fn description(&self) -> String {
        format!("{} with {}", self.inner.description(), self.label)
    }

    fn chain_depth(&self) -> usize {
        self.depth
    }
}
