use std::fmt::Write;

use crate::models::{Address, LineItem, WooOrder};

/// The line printed when the snapshot carries no usable order data.
pub const NO_DATA_MESSAGE: &str = "No WooCommerce debug data found";

/// Renders the line-oriented text report for a single order. Output labels
/// and ordering are stable; downstream scripts scrape this text.
pub struct OrderReport;

impl OrderReport {
    pub fn new() -> Self {
        OrderReport
    }

    pub fn render(&self, order: &WooOrder) -> String {
        let mut out = String::new();

        self.render_basic_info(&mut out, order);
        self.render_customer(&mut out, order);
        self.render_line_items(&mut out, order);
        self.render_shipping_lines(&mut out, order);
        self.render_order_meta(&mut out, order);

        out
    }

    fn render_basic_info(&self, out: &mut String, order: &WooOrder) {
        writeln!(out, "=== BASIC ORDER INFO ===").ok();
        writeln!(out, "Order ID: {}", opt_num(order.id)).ok();
        writeln!(out, "Order Date: {}", opt_text(&order.date_created)).ok();
        writeln!(out, "Total: ${}", opt_text(&order.total)).ok();
        writeln!(out, "Status: {}", opt_text(&order.status)).ok();
        // Newer snapshots also carry the order number and currency
        if let Some(number) = &order.number {
            writeln!(out, "Order Number: {}", number).ok();
        }
        if let Some(currency) = &order.currency {
            writeln!(out, "Currency: {}", currency).ok();
        }
        writeln!(out).ok();
    }

    fn render_customer(&self, out: &mut String, order: &WooOrder) {
        if order.billing.is_none() && order.shipping.is_none() {
            return;
        }

        writeln!(out, "=== CUSTOMER ===").ok();
        if let Some(billing) = &order.billing {
            self.render_billing(out, billing);
        }
        if let Some(shipping) = &order.shipping {
            let summary = shipping.summary();
            if !summary.is_empty() {
                writeln!(out, "Ships To: {}", summary).ok();
            }
        }
        writeln!(out).ok();
    }

    fn render_billing(&self, out: &mut String, billing: &Address) {
        let name = billing.full_name();
        if !name.is_empty() {
            writeln!(out, "Billed To: {}", name).ok();
        }
        if let Some(email) = &billing.email {
            writeln!(out, "Email: {}", email).ok();
        }
        if let Some(phone) = &billing.phone {
            writeln!(out, "Phone: {}", phone).ok();
        }
    }

    fn render_line_items(&self, out: &mut String, order: &WooOrder) {
        writeln!(out, "=== LINE ITEMS ===").ok();
        for (i, item) in order.line_items.iter().enumerate() {
            self.render_line_item(out, i + 1, item);
        }
    }

    fn render_line_item(&self, out: &mut String, index: usize, item: &LineItem) {
        writeln!(out, "Item {}:", index).ok();
        writeln!(out, "  Name: {}", opt_text(&item.name)).ok();
        writeln!(out, "  Product ID: {}", opt_num(item.product_id)).ok();
        writeln!(out, "  Variation ID: {}", opt_num(item.variation_id)).ok();
        writeln!(out, "  SKU: {}", opt_text(&item.sku)).ok();
        writeln!(out, "  Total: ${}", opt_text(&item.total)).ok();
        writeln!(out, "  Quantity: {}", opt_num(item.quantity)).ok();
        writeln!(out, "  Subtotal: ${}", opt_text(&item.subtotal)).ok();

        if !item.meta_data.is_empty() {
            writeln!(out, "  Meta Data:").ok();
            for meta in &item.meta_data {
                writeln!(
                    out,
                    "    {}: {}",
                    opt_text(&meta.key),
                    meta.display_value()
                )
                .ok();
            }
        }
        writeln!(out).ok();
    }

    fn render_shipping_lines(&self, out: &mut String, order: &WooOrder) {
        if order.shipping_lines.is_empty() {
            return;
        }

        writeln!(out, "=== SHIPPING ===").ok();
        for line in &order.shipping_lines {
            writeln!(
                out,
                "{}: ${}",
                opt_text(&line.method_title),
                opt_text(&line.total)
            )
            .ok();
        }
        writeln!(out).ok();
    }

    fn render_order_meta(&self, out: &mut String, order: &WooOrder) {
        writeln!(out, "=== ORDER META DATA ===").ok();
        for meta in &order.meta_data {
            writeln!(out, "{}: {}", opt_text(&meta.key), meta.display_value()).ok();
        }
    }
}

impl Default for OrderReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform accessor for optional text fields: missing keys render as the
/// empty placeholder instead of failing.
fn opt_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn opt_num(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderSnapshot;
    use serde_json::json;

    fn order_from(value: serde_json::Value) -> WooOrder {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_report_for_sample_snapshot() {
        let snapshot: OrderSnapshot = serde_json::from_value(json!({
            "debug_woocommerce_raw": [{
                "id": 5,
                "date_created": "2024-01-01",
                "total": "10.00",
                "status": "processing",
                "line_items": [{
                    "name": "Widget",
                    "product_id": 1,
                    "quantity": 2,
                    "meta_data": [{"key": "color", "value": "red"}]
                }],
                "meta_data": []
            }]
        }))
        .unwrap();

        let report = OrderReport::new().render(snapshot.first_order().unwrap());
        // Absent fields render as the empty placeholder after the label,
        // which leaves a trailing space on those lines.
        let expected = concat!(
            "=== BASIC ORDER INFO ===\n",
            "Order ID: 5\n",
            "Order Date: 2024-01-01\n",
            "Total: $10.00\n",
            "Status: processing\n",
            "\n",
            "=== LINE ITEMS ===\n",
            "Item 1:\n",
            "  Name: Widget\n",
            "  Product ID: 1\n",
            "  Variation ID: \n",
            "  SKU: \n",
            "  Total: $\n",
            "  Quantity: 2\n",
            "  Subtotal: $\n",
            "  Meta Data:\n",
            "    color: red\n",
            "\n",
            "=== ORDER META DATA ===\n",
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_item_headers_follow_input_order() {
        let order = order_from(json!({
            "line_items": [
                {"name": "First"},
                {"name": "Second"},
                {"name": "Third"}
            ]
        }));

        let report = OrderReport::new().render(&order);
        let headers: Vec<&str> = report
            .lines()
            .filter(|line| line.starts_with("Item "))
            .collect();
        assert_eq!(headers, vec!["Item 1:", "Item 2:", "Item 3:"]);

        let first = report.find("Name: First").unwrap();
        let second = report.find("Name: Second").unwrap();
        let third = report.find("Name: Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_no_meta_subheader_for_items_without_meta() {
        let order = order_from(json!({
            "line_items": [
                {"name": "Plain"},
                {"name": "Annotated", "meta_data": [{"key": "size", "value": "L"}]}
            ]
        }));

        let report = OrderReport::new().render(&order);
        assert_eq!(report.matches("Meta Data:").count(), 1);
        assert!(report.contains("    size: L"));
    }

    #[test]
    fn test_missing_field_only_affects_its_own_line() {
        let with_sku = order_from(json!({
            "line_items": [{"name": "Widget", "sku": "W-1", "quantity": 3}]
        }));
        let without_sku = order_from(json!({
            "line_items": [{"name": "Widget", "quantity": 3}]
        }));

        let report_a = OrderReport::new().render(&with_sku);
        let report_b = OrderReport::new().render(&without_sku);

        let lines_a: Vec<&str> = report_a.lines().collect();
        let lines_b: Vec<&str> = report_b.lines().collect();
        assert_eq!(lines_a.len(), lines_b.len());

        for (a, b) in lines_a.iter().zip(&lines_b) {
            if a.trim_start().starts_with("SKU:") {
                assert_eq!(*a, "  SKU: W-1");
                assert_eq!(*b, "  SKU: ");
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_order_meta_lines() {
        let order = order_from(json!({
            "meta_data": [
                {"key": "_payment_method", "value": "stripe"},
                {"key": "_split_payment", "value": true}
            ]
        }));

        let report = OrderReport::new().render(&order);
        assert!(report.contains("_payment_method: stripe"));
        assert!(report.contains("_split_payment: true"));
    }

    #[test]
    fn test_customer_and_shipping_blocks_only_when_present() {
        let bare = order_from(json!({"id": 1}));
        let bare_report = OrderReport::new().render(&bare);
        assert!(!bare_report.contains("=== CUSTOMER ==="));
        assert!(!bare_report.contains("=== SHIPPING ==="));

        let full = order_from(json!({
            "id": 2,
            "billing": {
                "first_name": "Jane",
                "last_name": "Doe",
                "email": "jane@example.com"
            },
            "shipping": {"city": "Austin", "state": "TX", "country": "US"},
            "shipping_lines": [{"method_title": "Flat rate", "total": "5.00"}]
        }));
        let full_report = OrderReport::new().render(&full);
        assert!(full_report.contains("=== CUSTOMER ==="));
        assert!(full_report.contains("Billed To: Jane Doe"));
        assert!(full_report.contains("Email: jane@example.com"));
        assert!(full_report.contains("Ships To: Austin, TX, US"));
        assert!(full_report.contains("=== SHIPPING ==="));
        assert!(full_report.contains("Flat rate: $5.00"));
    }

    #[test]
    fn test_extra_header_fields_render_after_status() {
        let order = order_from(json!({
            "id": 9,
            "number": "WC-1009",
            "currency": "USD",
            "status": "completed"
        }));

        let report = OrderReport::new().render(&order);
        let status = report.find("Status: completed").unwrap();
        let number = report.find("Order Number: WC-1009").unwrap();
        let currency = report.find("Currency: USD").unwrap();
        assert!(status < number && number < currency);
    }
}
