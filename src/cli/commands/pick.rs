use anyhow::{Context, Result};
use clap::Args;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::SourceArgs;
use crate::api::{PaymentMethodSource, PaymentOption};
use crate::config::Config;
use crate::picker::{
    AddPaymentContext, FetchTicket, HitTarget, KeyPress, ListenerRegistry, PaymentContext,
    PaymentMethodsWidget, PointerEvent, Propagation,
};
use crate::tui::{render_picker, PickerLayout};

#[derive(Args, Debug)]
pub struct PickArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

type FetchResult = (FetchTicket, Result<Vec<PaymentOption>>);

pub async fn pick_command(args: PickArgs, config: &Config) -> Result<()> {
    let source = args.source.build(config)?;
    let context = AddPaymentContext::new(args.source.customer_id());
    let widget = PaymentMethodsWidget::new(context.clone(), config.addons.flags(), ListenerRegistry::new());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout)?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(error) => {
            leave_screen(&mut io::stdout())?;
            return Err(error.into());
        }
    };

    let result = run_picker(&mut terminal, widget, source, config).await;

    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result?;

    match context.payment_selected() {
        Some(selected) => println!("Selected payment method: {} ({})", selected.name, selected.id),
        None => println!("No payment method selected"),
    }
    Ok(())
}

/// Switch to the alternate screen, dropping raw mode again if that fails
fn enter_screen<W: Write>(out: &mut W) -> Result<()> {
    if let Err(error) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(error).context("Failed to set up the terminal");
    }
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn spawn_fetch(
    source: &Arc<dyn PaymentMethodSource>,
    ticket: FetchTicket,
    results: &mpsc::UnboundedSender<FetchResult>,
) {
    let source = Arc::clone(source);
    let results = results.clone();
    tokio::spawn(async move {
        let result = source.fetch_payment_methods(&ticket.customer_id).await;
        // Receiver is gone once the picker exits
        let _ = results.send((ticket, result));
    });
}

async fn run_picker<B: Backend>(
    terminal: &mut Terminal<B>,
    mut widget: PaymentMethodsWidget<AddPaymentContext>,
    source: Arc<dyn PaymentMethodSource>,
    config: &Config,
) -> Result<()> {
    let (results_tx, mut results_rx) = mpsc::unbounded_channel::<FetchResult>();
    if let Some(ticket) = widget.mount() {
        spawn_fetch(&source, ticket, &results_tx);
    }

    let mut layout = PickerLayout::default();
    // Keyboard focus stays on the trigger, so Enter/Space open the list
    let focus = HitTarget::Trigger;

    loop {
        while let Ok((ticket, result)) = results_rx.try_recv() {
            match result {
                Ok(options) => {
                    widget.complete_fetch(&ticket, options);
                }
                Err(error) => widget.fail_fetch(&ticket, &error),
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();
            layout = render_picker(frame, area, &widget, config);
        })?;

        if !event::poll(std::time::Duration::from_millis(16))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }

                let press = KeyPress::from(key).with_target(focus);
                let was_open = widget.is_open();
                let propagation = widget.dispatch_key(&press);
                if propagation == Propagation::Continue && !was_open && press.is_escape() {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let target = layout.hit_test(mouse.column, mouse.row);
                    debug!("Pointer down at ({}, {}) on {:?}", mouse.column, mouse.row, target);
                    widget.dispatch_pointer(PointerEvent::new(target));
                }
            }
            _ => {}
        }

        if let Some(ticket) = widget.sync_customer() {
            spawn_fetch(&source, ticket, &results_tx);
        }
    }

    info!("Picker closed with {:?}", widget.context().payment_selected().map(|s| s.name));
    widget.unmount();
    Ok(())
}
