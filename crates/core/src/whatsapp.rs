//! Order message formatter and WhatsApp deep-link builder.
//!
//! The receiving party is a human reading raw text in WhatsApp, not a
//! machine parser, so the exact line order and labels of the message are an
//! external contract. Any change here is user-visible.

use rust_decimal::Decimal;

use crate::cart::{CartItem, CustomerDraft};
use crate::types::price;

/// Build the human-readable order summary sent over WhatsApp.
///
/// One bullet line per item in cart order, followed by the bold total and
/// the four labeled customer fields. Items with a customization note get an
/// extra indented line.
#[must_use]
pub fn order_message(items: &[CartItem], customer: &CustomerDraft, total: Decimal) -> String {
    let items_list = items
        .iter()
        .map(|item| {
            let mut line = format!(
                "\u{2022} {}x {} (Talla: {}, Color: {}) - {}",
                item.quantity,
                item.name,
                item.size,
                item.color,
                price::usd(item.line_total()),
            );
            if !item.custom_note.is_empty() {
                line.push_str(&format!(
                    "\n  \u{1f4dd} Personalizaci\u{f3}n: {}",
                    item.custom_note
                ));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\u{a1}Hola! Quiero hacer un pedido:\n\
         \n\
         {items_list}\n\
         \n\
         *Total: {total}*\n\
         \n\
         *Mis datos:*\n\
         \u{1f464} Nombre: {name}\n\
         \u{1f4f1} WhatsApp: {whatsapp}\n\
         \u{1f4e7} Email: {email}\n\
         \u{1f4cd} Direcci\u{f3}n: {address}",
        total = price::usd(total),
        name = customer.name,
        whatsapp = customer.whatsapp,
        email = customer.email,
        address = customer.address,
    )
}

/// Build the `wa.me` deep link that opens WhatsApp with the message
/// pre-filled for the given destination number.
///
/// The message is percent-encoded for use as a URL query value; spaces,
/// newlines, `&`, `%`, and non-ASCII characters all get escaped.
#[must_use]
pub fn order_url(message: &str, destination_number: &str) -> String {
    let encoded = urlencoding::encode(message);
    format!("https://wa.me/{destination_number}?text={encoded}")
}
