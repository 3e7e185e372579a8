use crate::domain::form_status::FormStatus;
use crate::domain::line_item::{LineItem, Money};
use crate::domain::ports::CheckoutContext;
use rust_decimal::Decimal;
use tokio::sync::watch;

/// An in-memory checkout: a fixed cart and a form status the orchestrator
/// pushes updates into.
///
/// Ideal for tests and for replaying sessions where no real checkout exists.
pub struct InMemoryCheckout {
    items: Vec<LineItem>,
    total: LineItem,
    status: watch::Sender<FormStatus>,
}

impl InMemoryCheckout {
    /// Creates a checkout for `items`, totalled in `currency`. Starts loading.
    pub fn new(items: Vec<LineItem>, currency: &str) -> Self {
        let sum = items.iter().map(|item| item.amount.value).sum::<Decimal>();
        let total = LineItem::new("total", "Total", Money::new(currency, sum));
        let (status, _) = watch::channel(FormStatus::default());
        Self {
            items,
            total,
            status,
        }
    }

    pub fn set_form_status(&self, status: FormStatus) {
        self.status.send_replace(status);
    }

    pub fn watch_form_status(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }
}

impl CheckoutContext for InMemoryCheckout {
    fn line_items(&self) -> (Vec<LineItem>, LineItem) {
        (self.items.clone(), self.total.clone())
    }

    fn form_status(&self) -> FormStatus {
        *self.status.borrow()
    }
}
