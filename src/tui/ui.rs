//! UI Rendering
//!
//! Main storefront layout and rendering logic.

use crate::tui::app::{App, Modal, PaymentStatus};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use crate::view::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search
            Constraint::Length(1), // Categories
            Constraint::Min(6),    // Products
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_search(frame, chunks[1], app);
    render_categories(frame, chunks[2], app);
    render_main(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    if app.store.is_cart_open() {
        widgets::render_cart(frame, chunks[3], app.store.cart(), app.cart_cursor);
    }

    match app.modal {
        Modal::Checkout => widgets::render_checkout(frame, app),
        Modal::Help => render_help(frame),
        Modal::None => {}
    }
}

/// Header with navigation and the cart badge
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let nav_style = |screen: Screen| {
        if app.store.screen() == screen {
            Theme::selected()
        } else {
            Theme::text_secondary()
        }
    };

    let title = Line::from(vec![
        Span::styled("Storefront", Theme::title()),
        Span::raw("   "),
        Span::styled("[h] Home", nav_style(Screen::Home)),
        Span::raw("  "),
        Span::styled("[p] Products", nav_style(Screen::CategoryListing)),
        Span::raw("  "),
        Span::styled(format!(" {} {} ", Icons::CART, app.store.cart_count()), Theme::badge()),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Search [/] ")
        .borders(Borders::ALL)
        .border_style(if app.search_active {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.search, inner);
}

/// Category chips; the active one is highlighted
fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for category in app.category_tabs() {
        let style = if category == app.store.category() {
            Theme::chip_active()
        } else {
            Theme::chip()
        };
        let label = if category.is_empty() { "All".to_string() } else { category };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[Tab] category", Theme::text_dim()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    match app.store.screen() {
        Screen::Home => {
            let products = app.store.featured_products();
            widgets::render_product_list(frame, area, "Featured Products", &products, app.product_cursor);
        }
        Screen::CategoryListing => {
            let products = app.store.visible_products();
            let title = if app.store.category().is_empty() {
                format!("All Products ({})", products.len())
            } else {
                format!("{} ({})", app.store.category(), products.len())
            };
            widgets::render_product_list(frame, area, &title, &products, app.product_cursor);
        }
        Screen::ProductDetail => match app.store.selected_product() {
            Some(product) => widgets::render_product_detail(frame, area, product),
            None => frame.render_widget(
                Paragraph::new("Product unavailable").block(Block::default().borders(Borders::ALL)),
                area,
            ),
        },
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = match &app.payment {
        PaymentStatus::Idle => Span::styled(
            format!("{} items | ${}", app.store.cart_count(), app.store.cart_total()),
            Theme::text_secondary(),
        ),
        PaymentStatus::Processing(_) if app.quit_pending => {
            Span::styled("Payment processing, press Ctrl+Q again to quit", Theme::warning())
        }
        PaymentStatus::Processing(_) => Span::styled("Payment processing...", Theme::active()),
        PaymentStatus::Approved(c) => Span::styled(format!("Paid: order {}", c.order_id), Theme::success()),
        PaymentStatus::NotCompleted(_) => Span::styled("Payment not completed", Theme::warning()),
    };

    let shortcuts = vec![
        Span::styled(" [Enter]", Theme::shortcut_key()),
        Span::styled(" Open ", Theme::shortcut_desc()),
        Span::styled("[a]", Theme::shortcut_key()),
        Span::styled(" Add ", Theme::shortcut_desc()),
        Span::styled("[c]", Theme::shortcut_key()),
        Span::styled(" Cart ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+Q]", Theme::shortcut_key()),
        Span::styled(" Quit ", Theme::shortcut_desc()),
        Span::styled("[F1]", Theme::shortcut_key()),
        Span::styled(" Help", Theme::shortcut_desc()),
    ];

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help modal
fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let shortcuts = [
        ("h / p        ", "Home / all products"),
        ("↑/↓          ", "Move selection"),
        ("Enter        ", "Open product / add to cart / confirm"),
        ("a            ", "Add selected product to cart"),
        ("/            ", "Search products"),
        ("Tab          ", "Next category (next field in checkout)"),
        ("c            ", "Open / close cart"),
        ("+ / - / d    ", "Change quantity / remove (in cart)"),
        ("x            ", "Checkout (in cart)"),
        ("Esc          ", "Back / close"),
        ("Ctrl+Q       ", "Quit application"),
        ("Ctrl+C       ", "Force quit"),
    ];

    let mut help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
    ];
    help_lines.extend(shortcuts.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(*key, Theme::shortcut_key()),
            Span::styled(*desc, Theme::text()),
        ])
    }));
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled("Press any key to close", Theme::text_dim())));

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::models::ProductId;
    use crate::state::StoreAction;
    use crate::view::NavAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(Config::default(), Catalog::builtin().unwrap())
    }

    #[tokio::test]
    async fn test_home_shows_featured_products() {
        let app = app();
        let text = screen_text(&app);
        assert!(text.contains("Featured Products"));
        assert!(text.contains("Crimson Wireless Headphones"));
    }

    #[tokio::test]
    async fn test_empty_cart_drawer() {
        let mut app = app();
        app.store.apply(StoreAction::OpenCart);
        assert!(screen_text(&app).contains("Your cart is empty"));
    }

    #[tokio::test]
    async fn test_cart_drawer_shows_total() {
        let mut app = app();
        app.store.apply(StoreAction::AddToCart(ProductId(3)));
        app.store.apply(StoreAction::AddToCart(ProductId(3)));
        assert!(screen_text(&app).contains("$178.00"));
    }

    #[tokio::test]
    async fn test_detail_and_checkout_render() {
        let mut app = app();
        app.store.apply(StoreAction::Navigate(NavAction::SelectProduct(ProductId(5))));
        assert!(screen_text(&app).contains("Product Details"));

        app.modal = Modal::Checkout;
        let text = screen_text(&app);
        assert!(text.contains("Checkout"));
        assert!(text.contains("Phone Number"));
    }
}
