use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::info;

use super::SourceArgs;
use crate::config::Config;
use crate::picker::{AddPaymentContext, ListenerRegistry, PaymentContext, PaymentMethodsWidget, SubView};

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn list_command(args: ListArgs, config: &Config) -> Result<()> {
    let source = args.source.build(config)?;
    let context = AddPaymentContext::new(args.source.customer_id());
    let mut widget = PaymentMethodsWidget::new(context.clone(), config.addons.flags(), ListenerRegistry::new());

    widget
        .load(source.as_ref())
        .await
        .with_context(|| format!("Failed to load payment methods for customer {}", args.source.customer))?;

    let selected = context.payment_selected();
    info!("Listing {} payment methods", widget.options().len());

    let header = format!("Payment methods for customer {}", args.source.customer);
    println!("{}", header.as_str().bold());
    if widget.options().is_empty() {
        println!("  {}", "No payment methods returned".yellow());
    }

    for option in widget.options() {
        let is_selected = selected.as_ref().is_some_and(|s| s.id == option.id);
        let marker = if is_selected { "*".green().bold() } else { " ".normal() };
        let mut flags = Vec::new();
        if option.is_default {
            flags.push("default");
        }
        if option.is_default_merchant {
            flags.push("merchant default");
        }
        if option.id.is_credit() {
            flags.push("not listed");
        }

        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!("({})", flags.join(", "))
        };
        println!("{} {:>4}  {} {}", marker, option.id, option.name, flags.as_str().dimmed());
    }

    if let Some(selected) = &selected {
        println!();
        println!("Selected: {}", selected.name.as_str().cyan());
        let sub_view = match widget.sub_view() {
            Some(SubView::ValueEntry { placeholder }) => {
                format!("value entry ({})", config.translate(placeholder.translation_key()))
            }
            Some(SubView::CardEntry) => "card entry".to_string(),
            Some(SubView::Hidden) | None => "none".to_string(),
        };
        println!("Entry view: {}", sub_view);
    }

    Ok(())
}
