//! Application State
//!
//! Terminal front end over [`StoreState`]: cursors, the search box, the
//! checkout form and payment notifications. Store mutations all go through
//! `StoreState::apply`.

use crate::catalog::Catalog;
use crate::checkout::{CheckoutAdapter, ContactDetails, ContactField};
use crate::config::Config;
use crate::models::{Money, ProductId};
use crate::payment::{OrderAmount, PaymentConfirmation, PaymentWidget, PaymentWidgetConfig, SandboxWidget};
use crate::state::{StoreAction, StoreState};
use crate::tui::event::AppAction;
use crate::view::{NavAction, Screen};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tui_textarea::TextArea;

const SEARCH_PLACEHOLDER: &str = "Search products...";

/// Modal layered over the storefront
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Modal {
    #[default]
    None,
    Checkout,
    Help,
}

/// Where the last payment attempt stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing(OrderAmount),
    Approved(PaymentConfirmation),
    NotCompleted(String),
}

/// Notifications from the payment widget
#[derive(Debug)]
pub enum AppEvent {
    PaymentApproved(PaymentConfirmation),
    PaymentNotCompleted(String),
}

/// Main application state
pub struct App {
    pub config: Config,
    pub store: StoreState,

    // UI State
    pub modal: Modal,
    pub should_quit: bool,
    pub search: TextArea<'static>,
    pub search_active: bool,
    pub product_cursor: usize,
    pub cart_cursor: usize,

    // Checkout State
    pub contact: ContactDetails,
    pub contact_field: usize,
    pub form_error: Option<String>,
    pub payment: PaymentStatus,
    /// Set after a first quit request while a payment is processing
    pub quit_pending: bool,

    widget: Arc<dyn PaymentWidget>,
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    /// Create the application with the sandbox payment widget from config
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let widget = Arc::new(SandboxWidget::new(
            config.payment.client_id.clone(),
            config.payment.sandbox_outcome,
            config.payment.sandbox_latency,
        ));
        Self::with_widget(config, catalog, widget)
    }

    pub fn with_widget(config: Config, catalog: Catalog, widget: Arc<dyn PaymentWidget>) -> Self {
        let store = StoreState::new(catalog).with_featured_count(config.catalog.featured_count);
        let (tx, rx) = mpsc::channel(16);

        Self {
            config,
            store,
            modal: Modal::None,
            should_quit: false,
            search: new_search_box(),
            search_active: false,
            product_cursor: 0,
            cart_cursor: 0,
            contact: ContactDetails::default(),
            contact_field: 0,
            form_error: None,
            payment: PaymentStatus::Idle,
            quit_pending: false,
            widget,
            event_rx: rx,
            event_tx: tx,
        }
    }

    /// Quit immediately unless a payment is processing; then a second
    /// request is needed. Quitting does not cancel the widget's order.
    pub fn confirm_quit(&mut self) -> bool {
        if !matches!(self.payment, PaymentStatus::Processing(_)) {
            return true;
        }
        if self.quit_pending {
            warn!("Quitting while a payment is still processing");
            return true;
        }
        self.quit_pending = true;
        false
    }

    /// Category tabs: "" (all) followed by the catalog's categories
    pub fn category_tabs(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.store.catalog().categories().into_iter().map(str::to_string))
            .collect()
    }

    pub fn current_field(&self) -> ContactField {
        ContactField::ALL[self.contact_field]
    }

    /// Product under the cursor, or the one on the detail screen
    pub fn focused_product(&self) -> Option<ProductId> {
        match self.store.screen() {
            Screen::ProductDetail => self.store.selected_product().map(|p| p.id),
            _ => self
                .store
                .listed_products()
                .get(self.product_cursor)
                .map(|p| p.id),
        }
    }

    /// Drain payment notifications
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PaymentApproved(confirmation) => {
                info!(
                    "Order {} approved for {} {}",
                    confirmation.order_id, confirmation.amount.value, confirmation.amount.currency_code
                );
                self.payment = PaymentStatus::Approved(confirmation);
            }
            AppEvent::PaymentNotCompleted(reason) => {
                self.payment = PaymentStatus::NotCompleted(reason);
            }
        }
    }

    /// Handle a user action
    pub async fn handle_action(&mut self, action: AppAction) {
        if !matches!(action, AppAction::Tick) {
            self.quit_pending = false;
        }
        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::ToggleHelp => {
                self.modal = if self.modal == Modal::Help {
                    Modal::None
                } else {
                    Modal::Help
                };
            }
            AppAction::Escape => self.escape(),
            AppAction::Up => self.move_cursor(-1),
            AppAction::Down => self.move_cursor(1),
            AppAction::NextField => self.cycle(1),
            AppAction::PrevField => self.cycle(-1),
            AppAction::Submit => self.submit(),
            AppAction::DeleteKey => self.delete(),
            AppAction::Input(key) => self.handle_input(key),
            AppAction::Tick => {}
        }
    }

    fn escape(&mut self) {
        if self.modal != Modal::None {
            self.modal = Modal::None;
            self.form_error = None;
        } else if self.search_active {
            self.search_active = false;
        } else if self.store.is_cart_open() {
            self.store.apply(StoreAction::CloseCart);
        } else if self.store.screen() == Screen::ProductDetail {
            self.navigate(NavAction::Back);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.modal {
            Modal::Checkout => self.cycle(delta),
            Modal::Help => {}
            Modal::None if self.store.is_cart_open() => {
                self.cart_cursor = step(self.cart_cursor, delta, self.store.cart().len());
            }
            Modal::None => {
                self.product_cursor = step(self.product_cursor, delta, self.store.listed_products().len());
            }
        }
    }

    /// Tab cycles form fields inside checkout, categories elsewhere
    fn cycle(&mut self, delta: isize) {
        match self.modal {
            Modal::Checkout => {
                let len = ContactField::ALL.len() as isize;
                self.contact_field = (self.contact_field as isize + delta).rem_euclid(len) as usize;
            }
            Modal::Help => {}
            Modal::None => {
                let tabs = self.category_tabs();
                let current = tabs
                    .iter()
                    .position(|c| c == self.store.category())
                    .unwrap_or(0) as isize;
                let next = (current + delta).rem_euclid(tabs.len() as isize) as usize;
                self.store.apply(StoreAction::SetCategory(tabs[next].clone()));
                self.product_cursor = 0;
            }
        }
    }

    fn submit(&mut self) {
        match self.modal {
            Modal::Checkout => self.submit_checkout(),
            Modal::Help => self.modal = Modal::None,
            Modal::None if self.search_active => self.search_active = false,
            Modal::None if self.store.is_cart_open() => self.open_checkout(),
            Modal::None => match self.store.screen() {
                Screen::ProductDetail => self.add_focused_to_cart(),
                Screen::Home | Screen::CategoryListing => {
                    if let Some(id) = self.focused_product() {
                        self.navigate(NavAction::SelectProduct(id));
                    }
                }
            },
        }
    }

    fn delete(&mut self) {
        match self.modal {
            Modal::Checkout => {
                let field = self.current_field();
                self.contact.field_mut(field).pop();
            }
            Modal::Help => {}
            Modal::None if self.search_active => {
                self.search.delete_char();
                self.sync_query();
            }
            Modal::None if self.store.is_cart_open() => self.change_quantity_by(i64::MIN),
            Modal::None => {
                if self.store.screen() == Screen::ProductDetail {
                    self.navigate(NavAction::Back);
                }
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if self.modal == Modal::Checkout {
            if let KeyCode::Char(c) = key.code {
                let field = self.current_field();
                self.contact.field_mut(field).push(c);
                self.form_error = None;
            }
            return;
        }

        if self.modal == Modal::Help {
            self.modal = Modal::None;
            return;
        }

        if self.search_active {
            self.search.input(key);
            self.sync_query();
            return;
        }

        let KeyCode::Char(c) = key.code else {
            return;
        };

        if self.store.is_cart_open() {
            match c {
                '+' | '=' => self.change_quantity_by(1),
                '-' => self.change_quantity_by(-1),
                'd' => self.change_quantity_by(i64::MIN),
                'x' => self.open_checkout(),
                'c' => self.store.apply(StoreAction::CloseCart),
                _ => {}
            }
            return;
        }

        match c {
            '/' => self.search_active = true,
            'h' => self.navigate(NavAction::GoHome),
            'p' => self.navigate(NavAction::BrowseProducts),
            'a' => self.add_focused_to_cart(),
            'c' => self.store.apply(StoreAction::OpenCart),
            '?' => self.modal = Modal::Help,
            _ => {}
        }
    }

    fn navigate(&mut self, action: NavAction) {
        self.store.apply(StoreAction::Navigate(action));
        self.product_cursor = 0;
    }

    fn add_focused_to_cart(&mut self) {
        if let Some(id) = self.focused_product() {
            self.store.apply(StoreAction::AddToCart(id));
            if let Some(pos) = self.store.cart().items().iter().position(|i| i.id() == id) {
                self.cart_cursor = pos;
            }
        }
    }

    /// Adjust the quantity of the cart line under the cursor. A result of zero
    /// or less removes the line.
    fn change_quantity_by(&mut self, delta: i64) {
        let Some(item) = self.store.cart().items().get(self.cart_cursor) else {
            return;
        };
        let id = item.id();
        let quantity = i64::from(item.quantity).saturating_add(delta);
        self.store.apply(StoreAction::SetQuantity(id, quantity));
        self.cart_cursor = self.cart_cursor.min(self.store.cart().len().saturating_sub(1));
    }

    fn sync_query(&mut self) {
        let query = self.search.lines().join(" ");
        if query != self.store.query() {
            self.store.apply(StoreAction::SetQuery(query));
            self.product_cursor = 0;
        }
    }

    fn open_checkout(&mut self) {
        if self.store.cart().is_empty() {
            return;
        }
        self.modal = Modal::Checkout;
        self.contact_field = 0;
        self.form_error = None;
        if !matches!(self.payment, PaymentStatus::Processing(_)) {
            self.payment = PaymentStatus::Idle;
        }
    }

    /// Validate the form and hand the cart total to the payment widget
    fn submit_checkout(&mut self) {
        if matches!(self.payment, PaymentStatus::Processing(_)) {
            return;
        }
        if let Err(e) = self.contact.check() {
            self.form_error = Some(e.to_string());
            return;
        }
        self.form_error = None;

        let adapter = self.checkout_adapter(self.store.cart_total());
        let amount = adapter.order_amount();
        info!(
            "Handing {} {} to the {} payment widget",
            amount.value,
            amount.currency_code,
            adapter.widget_name()
        );
        self.payment = PaymentStatus::Processing(amount);

        let contact = self.contact.clone();
        tokio::spawn(async move {
            if let Err(e) = adapter.submit(&contact).await {
                warn!("Checkout did not complete: {}", e);
            }
        });
    }

    /// Adapter for one checkout attempt. The amount is the total at submission;
    /// later cart edits do not change an order already handed to the widget.
    fn checkout_adapter(&self, total: Money) -> CheckoutAdapter {
        let approve_tx = self.event_tx.clone();
        let cancel_tx = self.event_tx.clone();

        let config = PaymentWidgetConfig::new(self.config.payment.currency.clone(), move || total)
            .on_approve(move |confirmation| {
                approve_tx
                    .try_send(AppEvent::PaymentApproved(confirmation.clone()))
                    .ok();
            })
            .on_cancel(move |reason| {
                cancel_tx
                    .try_send(AppEvent::PaymentNotCompleted(reason.to_string()))
                    .ok();
            });

        CheckoutAdapter::new(self.widget.clone(), config)
    }
}

fn new_search_box() -> TextArea<'static> {
    let mut search = TextArea::default();
    search.set_cursor_line_style(ratatui::style::Style::default());
    search.set_placeholder_text(SEARCH_PLACEHOLDER);
    search
}

/// Move a cursor within `0..len`, clamping at both ends
fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + delta).clamp(0, len as isize - 1) as usize
}
