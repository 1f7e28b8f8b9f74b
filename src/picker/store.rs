use crate::api::{CustomerId, PaymentOption};
use log::{debug, info, warn};

/// Handle for one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub customer_id: CustomerId,
}

/// Fetched options plus the loading flag
///
/// Every fetch gets a new generation; only the latest generation may land,
/// so a slow response for a previous customer cannot overwrite the list.
#[derive(Debug, Clone)]
pub struct OptionStore {
    options: Vec<PaymentOption>,
    is_loading: bool,
    generation: u64,
}

impl Default for OptionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionStore {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            is_loading: true,
            generation: 0,
        }
    }

    pub fn options(&self) -> &[PaymentOption] {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn begin_fetch(&mut self, customer_id: CustomerId) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        self.options = Vec::new();
        debug!("Fetch #{} started for customer {}", self.generation, customer_id);
        FetchTicket {
            generation: self.generation,
            customer_id,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the list with a fetch result. Returns false for stale tickets.
    pub fn complete(&mut self, ticket: &FetchTicket, options: Vec<PaymentOption>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale fetch #{} for customer {} (current #{})",
                ticket.generation, ticket.customer_id, self.generation
            );
            return false;
        }

        info!("Loaded {} payment methods for customer {}", options.len(), ticket.customer_id);
        self.options = options;
        self.is_loading = false;
        true
    }

    /// Record a failed fetch; the store keeps loading
    pub fn fail(&mut self, ticket: &FetchTicket, error: &anyhow::Error) {
        if self.is_current(ticket) {
            warn!("Fetching payment methods for customer {} failed: {:#}", ticket.customer_id, error);
        } else {
            debug!("Ignoring failure of stale fetch #{}: {:#}", ticket.generation, error);
        }
    }
}
