use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accepts an explicit JSON null wherever a sequence is expected, since the
/// upstream endpoint emits null for empty debug payloads.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Top-level shape of a cached order-lookup response. Only the debug payload
/// is recognized; every other key in the document is ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OrderSnapshot {
    #[serde(default, deserialize_with = "null_default")]
    pub debug_woocommerce_raw: Vec<WooOrder>,
}

impl OrderSnapshot {
    /// Presence-and-non-emptiness check over the debug payload. An absent
    /// key, a null value and an empty array all count as "no data".
    pub fn has_orders(&self) -> bool {
        !self.debug_woocommerce_raw.is_empty()
    }

    pub fn first_order(&self) -> Option<&WooOrder> {
        self.debug_woocommerce_raw.first()
    }

    pub fn order_count(&self) -> usize {
        self.debug_woocommerce_raw.len()
    }
}

/// Raw WooCommerce order as cached by the upstream lookup endpoint. None of
/// the fields are required: the report degrades per-field instead of failing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WooOrder {
    pub id: Option<i64>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub currency: Option<String>,
    pub total: Option<String>,
    pub date_created: Option<String>,
    pub billing: Option<Address>,
    pub shipping: Option<Address>,
    #[serde(default, deserialize_with = "null_default")]
    pub line_items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_default")]
    pub shipping_lines: Vec<ShippingLine>,
    #[serde(default, deserialize_with = "null_default")]
    pub meta_data: Vec<MetaEntry>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LineItem {
    pub name: Option<String>,
    pub product_id: Option<i64>,
    pub variation_id: Option<i64>,
    pub sku: Option<String>,
    pub total: Option<String>,
    pub quantity: Option<i64>,
    pub subtotal: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub meta_data: Vec<MetaEntry>,
}

/// Arbitrary key/value annotation attached to an order or a line item.
/// Values are arbitrary JSON, so they stay untyped.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl MetaEntry {
    /// Scalar rendering for report lines: strings print without quotes,
    /// null prints as empty, anything else prints as compact JSON.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Address {
    pub fn full_name(&self) -> String {
        let mut name = String::new();
        if let Some(first) = &self.first_name {
            name.push_str(first);
        }
        if let Some(last) = &self.last_name {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(last);
        }
        name
    }

    /// Single-line "address_1, city, state postcode, country" summary,
    /// skipping whatever is missing.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(line) = &self.address_1 {
            if !line.is_empty() {
                parts.push(line.clone());
            }
        }
        if let Some(city) = &self.city {
            if !city.is_empty() {
                parts.push(city.clone());
            }
        }
        let mut region = String::new();
        if let Some(state) = &self.state {
            region.push_str(state);
        }
        if let Some(postcode) = &self.postcode {
            if !region.is_empty() {
                region.push(' ');
            }
            region.push_str(postcode);
        }
        if !region.is_empty() {
            parts.push(region);
        }
        if let Some(country) = &self.country {
            if !country.is_empty() {
                parts.push(country.clone());
            }
        }
        parts.join(", ")
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShippingLine {
    pub method_title: Option<String>,
    pub total: Option<String>,
}
