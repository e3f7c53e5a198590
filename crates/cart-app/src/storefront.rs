//! # Storefront Controller
//!
//! Owns the cart model and coordinates persistence, rendering, and the
//! payment handoff. Every mutation is written through to the store before
//! the operation returns, so the persisted state is never behind the
//! in-memory cart. Navigation is returned to the caller as a command,
//! never performed as a hidden side effect.

use crate::config::StorefrontConfig;
use crate::render::{self, CheckoutPage};
use cart_core::{
    compute_totals, Cart, CartError, CartResult, CartStore, FileBackend, MemoryBackend, Price,
    PricingSnapshot, QuantityChange, ShippingPolicy,
};
use cart_razorpay::{
    MerchantInfo, PaymentOutcome, Prefill, RazorpayConfig, SharedPaymentWidget, WidgetOptions,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Navigation command returned to the hosting page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Go to the checkout view
    Checkout,
    /// Go to the landing view
    Landing,
}

/// A checkout attempt handed to the payment widget.
#[derive(Debug, Clone)]
pub struct CheckoutAttempt {
    /// Order reference carried in the widget notes
    pub order_ref: String,
    /// Amount handed to the widget
    pub amount: Price,
}

/// The storefront session: cart model, store, pricing policy, and the
/// payment widget seam.
pub struct Storefront {
    cart: Cart,
    store: CartStore,
    shipping: ShippingPolicy,
    merchant: MerchantInfo,
    prefill: Prefill,
    razorpay: RazorpayConfig,
    widget: SharedPaymentWidget,
    /// Order ref of the attempt currently out with the widget, if any
    pending_order: Option<String>,
}

impl Storefront {
    /// Build a storefront from configuration, hydrating the cart from the
    /// persisted store.
    pub fn new(
        config: StorefrontConfig,
        razorpay: RazorpayConfig,
        widget: SharedPaymentWidget,
    ) -> anyhow::Result<Self> {
        let backend: Box<dyn cart_core::StorageBackend> = match &config.storage_dir {
            Some(dir) => Box::new(FileBackend::new(dir)?),
            None => Box::new(MemoryBackend::new()),
        };
        let store = CartStore::new(backend, config.storage_key.clone());
        let cart = store.load();

        info!(
            items = cart.len(),
            count = cart.item_count(),
            "storefront ready"
        );

        Ok(Self {
            cart,
            store,
            shipping: config.shipping,
            merchant: config.merchant,
            prefill: config.prefill,
            razorpay,
            widget,
            pending_order: None,
        })
    }

    /// Add a product to the cart (find-or-create), persist, and send the
    /// shopper to checkout. The navigation is the deliberate
    /// single-item-then-checkout flow, surfaced as a command.
    #[instrument(skip_all, fields(id = %id.as_ref()))]
    pub fn add_to_cart(
        &mut self,
        id: impl AsRef<str>,
        name: impl Into<String>,
        unit_price: Price,
    ) -> CartResult<Nav> {
        let quantity = self.cart.add(id.as_ref(), name, unit_price);
        self.store.save(&self.cart)?;

        info!(quantity, count = self.cart.item_count(), "added to cart");
        Ok(Nav::Checkout)
    }

    /// Add `delta` to an item's quantity; dropping below 1 removes it.
    /// Unknown ids are a no-op.
    #[instrument(skip(self))]
    pub fn change_quantity(&mut self, id: &str, delta: i32) -> CartResult<()> {
        match self.cart.change_quantity(id, delta) {
            QuantityChange::NotFound => {
                debug!(%id, "quantity change for unknown item ignored");
                Ok(())
            }
            change => {
                debug!(%id, ?change, "quantity changed");
                self.store.save(&self.cart)
            }
        }
    }

    /// Remove an item entirely. No-op if absent.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &str) -> CartResult<()> {
        if self.cart.remove(id) {
            self.store.save(&self.cart)?;
        }
        Ok(())
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) -> CartResult<()> {
        self.cart.clear();
        self.store.save(&self.cart)
    }

    /// Header badge number.
    pub fn cart_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Current cart contents (read-only).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Recompute the pricing snapshot from the current cart.
    pub fn totals(&self) -> PricingSnapshot {
        compute_totals(&self.cart, &self.shipping)
    }

    /// Project the current cart into the checkout view model.
    pub fn render(&self) -> CheckoutPage {
        render::render(&self.cart, &self.shipping)
    }

    /// Start a payment. Recomputes totals first (stale totals from an
    /// earlier render must never reach the widget), refuses a zero or
    /// negative amount, and otherwise opens the widget with the payload.
    #[instrument(skip(self))]
    pub async fn pay_now(&mut self) -> CartResult<CheckoutAttempt> {
        let totals = self.totals();

        if totals.nothing_to_pay() {
            warn!("checkout attempted with nothing to pay");
            return Err(CartError::NothingToPay);
        }

        let order_ref = Uuid::new_v4().to_string();
        let options = WidgetOptions::build(
            &self.razorpay,
            &self.merchant,
            totals.grand_total,
            &order_ref,
        )
        .with_prefill(self.prefill.clone());

        info!(
            amount = options.amount,
            %order_ref,
            provider = self.widget.provider_name(),
            "opening checkout widget"
        );
        self.widget.open(&options).await?;

        self.pending_order = Some(order_ref.clone());
        Ok(CheckoutAttempt {
            order_ref,
            amount: totals.grand_total,
        })
    }

    /// Apply a terminal widget outcome.
    ///
    /// Success clears and persists the cart and sends the shopper to the
    /// landing view. Failure surfaces a distinguishable error and leaves
    /// the cart intact so the shopper can retry. Dismissal changes
    /// nothing.
    #[instrument(skip(self, outcome))]
    pub fn on_payment_outcome(&mut self, outcome: PaymentOutcome) -> CartResult<Option<Nav>> {
        match outcome {
            PaymentOutcome::Completed(confirmation) => {
                if let Some(pending) = self.pending_order.take() {
                    if pending != confirmation.order_ref {
                        warn!(
                            expected = %pending,
                            got = %confirmation.order_ref,
                            "confirmation order ref does not match pending attempt"
                        );
                    }
                }

                self.cart.clear();
                self.store.save(&self.cart)?;

                info!(payment_id = %confirmation.payment_id, "payment confirmed, cart cleared");
                Ok(Some(Nav::Landing))
            }
            PaymentOutcome::Failed { code, description } => {
                self.pending_order = None;
                Err(CartError::PaymentFailed { code, description })
            }
            PaymentOutcome::Dismissed => {
                debug!("widget dismissed, cart unchanged");
                self.pending_order = None;
                Ok(None)
            }
        }
    }
}
