//! Product Widgets
//!
//! Product listing rows and the single-product detail pane.

use crate::models::Product;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render a titled list of products with the cursor row highlighted
pub fn render_product_list(frame: &mut Frame, area: Rect, title: &str, products: &[&Product], cursor: usize) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if products.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No products match your search.",
            Theme::text_dim(),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let name_width = (inner.width as usize).saturating_sub(34).max(12);
    let lines: Vec<Line> = products
        .iter()
        .enumerate()
        .map(|(i, product)| product_row(product, i == cursor, name_width))
        .collect();

    // Keep the cursor row on screen
    let visible = inner.height.max(1) as usize;
    let scroll = cursor.saturating_sub(visible.saturating_sub(1)) as u16;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn product_row(product: &Product, is_selected: bool, name_width: usize) -> Line<'static> {
    let prefix = if is_selected { Icons::SELECTED } else { " " };
    let name_style = if is_selected { Theme::selected() } else { Theme::text() };

    let mut spans = vec![
        Span::styled(format!("{} ", prefix), name_style),
        Span::styled(
            format!("{:<width$}", truncate(&product.name, name_width), width = name_width),
            name_style,
        ),
        Span::styled(format!(" ${:>9}", product.price), Theme::price()),
        Span::styled(format!("  {:<12}", truncate(&product.category, 12)), Theme::chip()),
    ];
    if let Some(rating) = product.rating {
        spans.push(Span::styled(format!(" {} {:.1}", Icons::STAR, rating), Theme::warning()));
    }
    Line::from(spans)
}

/// Render the detail pane for one product
pub fn render_product_detail(frame: &mut Frame, area: Rect, product: &Product) {
    let block = Block::default()
        .title(" Product Details ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let mut lines = vec![
        Line::from(Span::styled(product.name.clone(), Theme::heading())),
        Line::from(vec![
            Span::styled(format!("${}", product.price), Theme::price()),
            Span::raw("  "),
            Span::styled(format!("[{}]", product.category), Theme::chip()),
        ]),
    ];

    if let Some(rating) = product.rating {
        lines.push(Line::from(Span::styled(
            format!("{} {:.1} / 5", Icons::STAR, rating),
            Theme::warning(),
        )));
    }
    if let Some(stock) = product.stock {
        lines.push(Line::from(Span::styled(format!("{} in stock", stock), Theme::text_secondary())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(product.description.clone(), Theme::text())));

    if !product.image.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(product.image.clone(), Theme::text_dim())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter/a]", Theme::shortcut_key()),
        Span::styled(" Add to cart  ", Theme::shortcut_desc()),
        Span::styled("[Esc]", Theme::shortcut_key()),
        Span::styled(" Back", Theme::shortcut_desc()),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long product name", 8), "a very …");
    }
}
