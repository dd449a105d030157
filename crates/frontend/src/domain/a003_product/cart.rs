//! Shopping cart kept in `sessionStorage`, so it survives reloads but not the tab.

use contracts::domain::a003_product::{CartItem, Product};
use web_sys::window;

const CART_STORAGE_KEY: &str = "cartItems";

/// Result of clicking "add to cart" on a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartToggle {
    Added,
    Removed,
    OutOfStock,
}

/// Adds the product with quantity 1, or removes it when already in the cart.
pub fn toggle(cart: &mut Vec<CartItem>, product: &Product) -> CartToggle {
    if let Some(pos) = cart.iter().position(|item| item.product.id == product.id) {
        cart.remove(pos);
        return CartToggle::Removed;
    }
    if !product.in_stock() {
        return CartToggle::OutOfStock;
    }
    cart.push(CartItem {
        product: product.clone(),
        quantity: 1,
    });
    CartToggle::Added
}

/// Keeps a quantity within `[1, stock]`.
pub fn clamp_quantity(quantity: i64, stock: i64) -> i64 {
    quantity.clamp(1, stock.max(1))
}

pub fn set_quantity(cart: &mut [CartItem], product_id: i64, quantity: i64) {
    if let Some(item) = cart.iter_mut().find(|item| item.product.id == product_id) {
        item.quantity = clamp_quantity(quantity, item.product.quantity);
    }
}

pub fn contains(cart: &[CartItem], product_id: i64) -> bool {
    cart.iter().any(|item| item.product.id == product_id)
}

pub fn total(cart: &[CartItem]) -> f64 {
    cart.iter().map(CartItem::line_total).sum()
}

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

pub fn load_cart() -> Vec<CartItem> {
    let Some(raw) = session_storage().and_then(|s| s.get_item(CART_STORAGE_KEY).ok().flatten()) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding stored cart: {}", e);
        Vec::new()
    })
}

pub fn save_cart(cart: &[CartItem]) {
    let Some(storage) = session_storage() else {
        return;
    };
    match serde_json::to_string(cart) {
        Ok(json) => {
            let _ = storage.set_item(CART_STORAGE_KEY, &json);
        }
        Err(e) => log::error!("Failed to serialize cart: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i64) -> Product {
        Product {
            id,
            product_name: format!("Product {}", id),
            category_name: None,
            image: None,
            price,
            des: None,
            quantity: stock,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut cart = Vec::new();
        let p = product(1, 1000.0, 3);
        assert_eq!(toggle(&mut cart, &p), CartToggle::Added);
        assert_eq!(cart[0].quantity, 1);
        assert_eq!(toggle(&mut cart, &p), CartToggle::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_out_of_stock_is_not_added() {
        let mut cart = Vec::new();
        assert_eq!(toggle(&mut cart, &product(2, 500.0, 0)), CartToggle::OutOfStock);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_is_clamped_to_stock() {
        assert_eq!(clamp_quantity(0, 5), 1);
        assert_eq!(clamp_quantity(9, 5), 5);
        assert_eq!(clamp_quantity(3, 5), 3);

        let mut cart = Vec::new();
        toggle(&mut cart, &product(1, 1000.0, 4));
        set_quantity(&mut cart, 1, 10);
        assert_eq!(cart[0].quantity, 4);
    }

    #[test]
    fn test_total() {
        let mut cart = Vec::new();
        toggle(&mut cart, &product(1, 1000.0, 4));
        toggle(&mut cart, &product(2, 2500.0, 4));
        set_quantity(&mut cart, 1, 3);
        assert_eq!(total(&cart), 5500.0);
        assert!(contains(&cart, 2));
    }
}
