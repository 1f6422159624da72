//! Checkout Widget
//!
//! Modal form for the contact fields, the order total and the payment status.

use crate::checkout::ContactField;
use crate::tui::app::{App, PaymentStatus};
use crate::tui::theme::{Icons, Theme};
use crate::tui::ui::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the checkout modal
pub fn render_checkout(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Checkout ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(9), // Fields
            Constraint::Length(2), // Total
            Constraint::Min(3),    // Payment status
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    render_fields(frame, chunks[0], app);
    render_total(frame, chunks[1], app);
    render_payment_status(frame, chunks[2], app);
    render_footer(frame, chunks[3]);
}

fn render_fields(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.current_field();
    let mut lines = Vec::new();

    for field in ContactField::ALL {
        let is_selected = field == current;
        let label_style = if is_selected { Theme::selected() } else { Theme::text_secondary() };
        let value = app.contact.field(field);

        lines.push(Line::from(Span::styled(format!("{} *", field.label()), label_style)));

        let mut spans = vec![Span::raw("  ")];
        if value.is_empty() && !is_selected {
            spans.push(Span::styled("(required)", Theme::text_dim()));
        } else {
            spans.push(Span::styled(format!("[{}]", value), if is_selected { Theme::warning() } else { Theme::text() }));
        }
        if is_selected {
            spans.push(Span::styled(Icons::CURSOR, Theme::active()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_total(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("Total: ", Theme::heading()),
        Span::styled(format!("${}", app.store.cart_total()), Theme::price()),
        Span::styled(format!("  {}", app.config.payment.currency), Theme::text_dim()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_payment_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.form_error {
        Line::from(Span::styled(format!("{} {}", Icons::ERROR, error), Theme::error()))
    } else {
        match &app.payment {
            PaymentStatus::Idle => Line::from(Span::styled(
                "Press Enter to pay with the payment widget",
                Theme::text_secondary(),
            )),
            PaymentStatus::Processing(amount) => Line::from(Span::styled(
                format!("Waiting for payment approval ({} {})...", amount.value, amount.currency_code),
                Theme::active(),
            )),
            PaymentStatus::Approved(confirmation) => Line::from(Span::styled(
                format!(
                    "{} Payment completed: order {} ({} {})",
                    Icons::COMPLETE,
                    confirmation.order_id,
                    confirmation.amount.value,
                    confirmation.amount.currency_code
                ),
                Theme::success(),
            )),
            PaymentStatus::NotCompleted(reason) => Line::from(Span::styled(
                format!("{} Payment not completed: {}", Icons::PENDING, reason),
                Theme::warning(),
            )),
        }
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("[Tab]", Theme::shortcut_key()),
        Span::styled(" Next field ", Theme::shortcut_desc()),
        Span::styled("[Enter]", Theme::shortcut_key()),
        Span::styled(" Pay ", Theme::shortcut_desc()),
        Span::styled("[Esc]", Theme::shortcut_key()),
        Span::styled(" Close", Theme::shortcut_desc()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
