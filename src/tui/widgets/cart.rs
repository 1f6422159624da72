//! Cart Drawer
//!
//! Right-hand drawer listing line items with their quantities and the total.

use crate::cart::Cart;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the cart drawer over the right side of `area`
pub fn render_cart(frame: &mut Frame, area: Rect, cart: &Cart, cursor: usize) {
    let drawer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area)[1];
    frame.render_widget(Clear, drawer);

    let block = Block::default()
        .title(format!(" {} Shopping Cart ", Icons::CART))
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(drawer);
    frame.render_widget(block, drawer);

    if cart.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Your cart is empty", Theme::text_secondary())),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Line items
            Constraint::Length(4), // Total + actions
        ])
        .split(inner);

    let mut lines = Vec::new();
    for (i, item) in cart.items().iter().enumerate() {
        let is_selected = i == cursor;
        let style = if is_selected { Theme::selected() } else { Theme::text() };
        let prefix = if is_selected { Icons::SELECTED } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", prefix), style),
            Span::styled(item.product.name.clone(), style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("${} x {}", item.product.price, item.quantity), Theme::text_secondary()),
            Span::raw("  "),
            Span::styled(format!("${}", item.subtotal()), Theme::price()),
        ]));
    }

    let visible = chunks[0].height.max(1) as usize;
    let scroll = (cursor * 2 + 2).saturating_sub(visible) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[0]);

    let footer = vec![
        Line::from(Span::styled("─".repeat(chunks[1].width as usize), Theme::border())),
        Line::from(vec![
            Span::styled("Total: ", Theme::heading()),
            Span::styled(format!("${}", cart.total()), Theme::price()),
        ]),
        Line::from(vec![
            Span::styled("[+/-]", Theme::shortcut_key()),
            Span::styled(" Qty ", Theme::shortcut_desc()),
            Span::styled("[d]", Theme::shortcut_key()),
            Span::styled(" Remove ", Theme::shortcut_desc()),
            Span::styled("[x]", Theme::shortcut_key()),
            Span::styled(" Checkout ", Theme::shortcut_desc()),
            Span::styled("[Esc]", Theme::shortcut_key()),
            Span::styled(" Close", Theme::shortcut_desc()),
        ]),
    ];
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
