use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::api::MethodId;
use crate::config::Config;
use crate::picker::{HitTarget, PaymentContext, PaymentMethodsWidget, SubView};

const TRIGGER_WIDTH: u16 = 36;

/// Screen areas from the last render, used for pointer hit-testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerLayout {
    pub trigger: Rect,
    pub popup: Option<Rect>,
    pub rows: Vec<(Rect, MethodId)>,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

impl PickerLayout {
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        if contains(self.trigger, column, row) {
            return HitTarget::Trigger;
        }
        if let Some((_, id)) = self.rows.iter().find(|(area, _)| contains(*area, column, row)) {
            return HitTarget::Option(*id);
        }
        match self.popup {
            Some(popup) if contains(popup, column, row) => HitTarget::Popup,
            _ => HitTarget::Outside,
        }
    }
}

/// Render the picker into `area` and return its hit-test layout
pub fn render_picker<C: PaymentContext>(
    frame: &mut Frame,
    area: Rect,
    widget: &PaymentMethodsWidget<C>,
    config: &Config,
) -> PickerLayout {
    let width = TRIGGER_WIDTH.min(area.width);
    let label = Rect::new(area.x, area.y, width, 1u16.min(area.height));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            config.translate("common:method"),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        label,
    );

    let trigger = Rect::new(area.x, area.y.saturating_add(1), width, 3u16.min(area.height.saturating_sub(1)));
    let border_style = if widget.is_open() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let arrow = if widget.is_open() { "▲" } else { "▼" };
    let trigger_text = Line::from(vec![
        Span::raw(widget.selected_name()),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(trigger_text).block(Block::default().borders(Borders::ALL).border_style(border_style)),
        trigger,
    );

    let below = trigger.y.saturating_add(trigger.height);
    let mut layout = PickerLayout {
        trigger,
        popup: None,
        rows: Vec::new(),
    };

    render_sub_view(frame, Rect::new(area.x, below, width, 1), widget, config);

    if widget.is_open() {
        let rows = widget.visible_options();
        let inner_height = if widget.is_loading() { 1 } else { rows.len().max(1) as u16 };
        let max_height = area.y.saturating_add(area.height).saturating_sub(below);
        let popup = Rect::new(area.x, below, width, inner_height.saturating_add(2).min(max_height));

        frame.render_widget(Clear, popup);
        frame.render_widget(Block::default().borders(Borders::ALL), popup);

        if widget.is_loading() {
            frame.render_widget(Paragraph::new("Loading..."), inner_row(popup, 0));
        } else {
            for (index, row) in rows.iter().enumerate() {
                let row_area = inner_row(popup, index as u16);
                if row_area.height == 0 {
                    break;
                }
                let style = if row.is_active {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                frame.render_widget(Paragraph::new(row.option.name.as_str()).style(style), row_area);
                layout.rows.push((row_area, row.option.id));
            }
        }
        layout.popup = Some(popup);
    }

    layout
}

fn inner_row(popup: Rect, index: u16) -> Rect {
    let y = popup.y.saturating_add(1).saturating_add(index);
    let bottom = popup.y.saturating_add(popup.height).saturating_sub(1);
    let height = if y < bottom { 1 } else { 0 };
    Rect::new(popup.x.saturating_add(1), y, popup.width.saturating_sub(2), height)
}

fn render_sub_view<C: PaymentContext>(
    frame: &mut Frame,
    area: Rect,
    widget: &PaymentMethodsWidget<C>,
    config: &Config,
) {
    let text = match widget.sub_view() {
        Some(SubView::ValueEntry { placeholder }) => {
            format!("[ {} ]", config.translate(placeholder.translation_key()))
        }
        Some(SubView::CardEntry) => {
            let customer = widget.context().customer_id().map(|id| id.to_string()).unwrap_or_default();
            format!("[ Card on file for customer {} ]", customer)
        }
        Some(SubView::Hidden) | None => return,
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
