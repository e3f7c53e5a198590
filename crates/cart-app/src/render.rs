//! # Checkout Renderer
//!
//! Pure projection of the cart into a checkout page view model. The
//! renderer holds no state: the same cart and policy always produce the
//! same page, so re-rendering after every mutation is safe and cheap.
//!
//! Per-row controls are emitted as `data-action`/`data-id` attributes;
//! the host page wires those back into the matching `Storefront` calls.

use cart_core::{compute_totals, Cart, ShippingPolicy};

/// One rendered cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// `unit_price * quantity`, formatted ("₹1200.00")
    pub line_total_text: String,
}

/// The full checkout view model
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPage {
    pub rows: Vec<CartRow>,
    /// Markup for the item-list mount point
    pub items_html: String,
    pub empty: bool,
    /// The checkout control is disabled while the cart is empty
    pub checkout_enabled: bool,
    pub subtotal_text: String,
    pub shipping_text: String,
    pub total_text: String,
    /// Header badge number (sum of quantities)
    pub item_count: u32,
}

const EMPTY_CART_HTML: &str =
    r#"<div class="empty-cart-message">Your cart is empty. <a href="/products">Start shopping!</a></div>"#;

/// Render the checkout page for the current cart state. Idempotent.
pub fn render(cart: &Cart, policy: &ShippingPolicy) -> CheckoutPage {
    let totals = compute_totals(cart, policy);

    let rows: Vec<CartRow> = cart
        .items()
        .iter()
        .map(|item| CartRow {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            line_total_text: item.line_total().display(),
        })
        .collect();

    let items_html = if rows.is_empty() {
        EMPTY_CART_HTML.to_string()
    } else {
        let mut html = String::new();
        for row in &rows {
            html.push_str(&format!(
                r#"<div class="cart-item" data-id="{id}"><span class="item-name">{name}</span><span class="item-price">{total}</span><div class="item-controls"><button data-action="decrement" data-id="{id}">-</button><span class="quantity-display">{quantity}</span><button data-action="increment" data-id="{id}">+</button><button data-action="remove" data-id="{id}">Remove</button></div></div>"#,
                id = escape_html(&row.id),
                name = escape_html(&row.name),
                total = row.line_total_text,
                quantity = row.quantity,
            ));
        }
        html
    };

    CheckoutPage {
        empty: rows.is_empty(),
        checkout_enabled: !rows.is_empty(),
        rows,
        items_html,
        subtotal_text: totals.subtotal.display(),
        shipping_text: totals.shipping.display(),
        total_text: totals.grand_total.display(),
        item_count: cart.item_count(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The host page's mount points. Every method defaults to a no-op, so a
/// page without a given mount (no cart badge, say) simply skips it.
pub trait CheckoutView {
    fn set_items_html(&mut self, _html: &str) {}
    fn set_cart_count(&mut self, _count: u32) {}
    fn set_subtotal(&mut self, _text: &str) {}
    fn set_shipping(&mut self, _text: &str) {}
    fn set_total(&mut self, _text: &str) {}
    fn set_checkout_enabled(&mut self, _enabled: bool) {}
}

/// Write a rendered page into a view.
pub fn apply(page: &CheckoutPage, view: &mut dyn CheckoutView) {
    view.set_items_html(&page.items_html);
    view.set_cart_count(page.item_count);
    view.set_subtotal(&page.subtotal_text);
    view.set_shipping(&page.shipping_text);
    view.set_total(&page.total_text);
    view.set_checkout_enabled(page.checkout_enabled);
}

/// A view with no mount points at all.
pub struct NullView;

impl CheckoutView for NullView {}
