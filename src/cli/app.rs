use super::commands::list::ListArgs;
use super::commands::pick::PickArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "payment-picker")]
#[command(about = "Pick a customer's payment method from the terminal")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a customer's payment methods and the default selection
    List(ListArgs),
    /// Open the interactive payment method picker
    Pick(PickArgs),
}
