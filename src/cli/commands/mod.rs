pub mod list;
pub mod pick;

use anyhow::Result;
use clap::Args;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{CustomerId, FileSource, PaymentClient, PaymentMethodSource};
use crate::config::Config;

pub use list::list_command;
pub use pick::pick_command;

/// Where payment methods come from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Customer whose payment methods are listed
    #[arg(short, long)]
    pub customer: String,

    /// Read payment methods from a JSON file instead of the API
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,
}

impl SourceArgs {
    pub fn customer_id(&self) -> CustomerId {
        CustomerId::new(self.customer.clone())
    }

    pub fn build(&self, config: &Config) -> Result<Arc<dyn PaymentMethodSource>> {
        match &self.from_file {
            Some(path) => {
                debug!("Using payment methods file {:?}", path);
                Ok(Arc::new(FileSource::new(path.clone())))
            }
            None => {
                debug!("Using payment methods API at {}", config.api.base_url);
                Ok(Arc::new(PaymentClient::new(&config.api)?))
            }
        }
    }
}
