//! End-to-end checkout scenarios: add, persist, render, pay, confirm.

use async_trait::async_trait;
use cart_app::{Nav, Storefront, StorefrontConfig};
use cart_core::{CartError, CartResult, Price};
use cart_razorpay::{
    PaymentConfirmation, PaymentOutcome, PaymentWidget, RazorpayConfig, WidgetOptions,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Widget double recording every payload it is asked to open.
#[derive(Default)]
struct RecordingWidget {
    opened: Mutex<Vec<WidgetOptions>>,
}

impl RecordingWidget {
    fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    fn last(&self) -> WidgetOptions {
        self.opened.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl PaymentWidget for RecordingWidget {
    async fn open(&self, options: &WidgetOptions) -> CartResult<()> {
        self.opened.lock().unwrap().push(options.clone());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

fn storefront_at(dir: &Path, widget: Arc<RecordingWidget>) -> Storefront {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = StorefrontConfig {
        storage_dir: Some(dir.to_path_buf()),
        ..StorefrontConfig::default()
    };
    Storefront::new(config, RazorpayConfig::new("rzp_test_abc123"), widget).unwrap()
}

#[tokio::test]
async fn shoe_scenario_reaches_widget_in_paise() {
    let dir = tempfile::tempdir().unwrap();
    let widget = Arc::new(RecordingWidget::default());
    let mut front = storefront_at(dir.path(), widget.clone());

    let nav = front
        .add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))
        .unwrap();
    assert_eq!(nav, Nav::Checkout);

    let totals = front.totals();
    assert_eq!(totals.subtotal, Price::from_rupees(600.0));
    assert_eq!(totals.shipping, Price::from_rupees(50.0));
    assert_eq!(totals.grand_total, Price::from_rupees(650.0));

    front.pay_now().await.unwrap();
    assert_eq!(widget.open_count(), 1);
    assert_eq!(widget.last().amount, 65000);
    assert_eq!(widget.last().currency, "INR");
}

#[tokio::test]
async fn empty_cart_never_reaches_the_widget() {
    let dir = tempfile::tempdir().unwrap();
    let widget = Arc::new(RecordingWidget::default());
    let mut front = storefront_at(dir.path(), widget.clone());

    let err = front.pay_now().await.unwrap_err();
    assert!(matches!(err, CartError::NothingToPay));
    assert_eq!(widget.open_count(), 0);
}

#[tokio::test]
async fn successful_payment_clears_and_persists_the_cart() {
    let dir = tempfile::tempdir().unwrap();
    let widget = Arc::new(RecordingWidget::default());
    let mut front = storefront_at(dir.path(), widget.clone());

    front
        .add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))
        .unwrap();
    let attempt = front.pay_now().await.unwrap();

    let nav = front
        .on_payment_outcome(PaymentOutcome::Completed(PaymentConfirmation::new(
            "pay_29QQoUBi66xm2f",
            attempt.order_ref.clone(),
        )))
        .unwrap();

    assert_eq!(nav, Some(Nav::Landing));
    assert_eq!(front.cart_count(), 0);
    assert!(front.render().empty);

    // A fresh storefront over the same directory sees the cleared cart
    let reopened = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));
    assert_eq!(reopened.cart_count(), 0);
    assert!(reopened.cart().is_empty());
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut front = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));
        front
            .add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))
            .unwrap();
        front
            .add_to_cart("sku2", "Boot", Price::from_rupees(900.0))
            .unwrap();
        front
            .add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))
            .unwrap();
    }

    let front = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));
    assert_eq!(front.cart_count(), 3);

    let ids: Vec<_> = front.cart().items().iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, vec!["sku1", "sku2"]);
    assert_eq!(front.cart().get("sku1").unwrap().quantity, 2);
}

#[tokio::test]
async fn declined_payment_is_surfaced_and_cart_kept() {
    let dir = tempfile::tempdir().unwrap();
    let mut front = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));

    front
        .add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))
        .unwrap();
    front.pay_now().await.unwrap();

    let outcome = PaymentOutcome::from_failure_json(
        r#"{"error": {"code": "BAD_REQUEST_ERROR", "description": "Payment declined"}}"#,
    )
    .unwrap();
    let err = front.on_payment_outcome(outcome).unwrap_err();

    assert!(matches!(err, CartError::PaymentFailed { .. }));
    assert!(err.is_user_notice());
    assert_eq!(front.cart_count(), 1);

    // The cart is still there after a reload, ready for a retry
    let reopened = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));
    assert_eq!(reopened.cart_count(), 1);
}

#[tokio::test]
async fn decrementing_to_zero_removes_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut front = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));

    front
        .add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))
        .unwrap();
    front.change_quantity("sku1", -1).unwrap();

    assert!(front.cart().is_empty());

    let reopened = storefront_at(dir.path(), Arc::new(RecordingWidget::default()));
    assert!(reopened.cart().is_empty());
}
