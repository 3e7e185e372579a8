use crate::domain::ports::PaymentMethodBox;
use crate::error::{CheckoutError, Result};

/// Payment methods offered by one checkout, in registration order.
#[derive(Default)]
pub struct PaymentMethodRegistry {
    methods: Vec<PaymentMethodBox>,
}

impl PaymentMethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a method. Ids must be unique within the registry.
    pub fn register(&mut self, method: PaymentMethodBox) -> Result<()> {
        if self.get(method.id()).is_some() {
            return Err(CheckoutError::DuplicateMethod(method.id().to_string()));
        }
        self.methods.push(method);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PaymentMethodBox> {
        self.methods.iter().find(|method| method.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|method| method.id())
    }
}
