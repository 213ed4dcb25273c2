//! A storefront backed by the file store, reopened between steps the way
//! the CLI reopens it on every command.

use gamegear_sdk::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn open(dir: &Path) -> Storefront<FileStore> {
    let mut config = StorefrontConfig::default().with_base_dir(dir);
    config.cart.persist = true;
    let store = FileStore::open(config.storage.store_path()).unwrap();
    Storefront::new(config, store)
}

#[tokio::test]
async fn test_session_and_cart_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut shop = open(dir.path());
        assert!(shop.auth_mut().login("user@example.com", "user123").await);
        assert!(shop.add_to_cart(&ProductId::new("4"), 3));
        shop.save_cart().unwrap();
    }

    let mut shop = open(dir.path());
    assert_eq!(shop.auth().current_user().unwrap().name, "Regular User");
    assert_eq!(shop.cart().item_count(), 3);

    let form = CheckoutForm {
        first_name: "Regular".to_string(),
        last_name: "User".to_string(),
        email: "user@example.com".to_string(),
        address: "1 Loop".to_string(),
        city: "Reno".to_string(),
        state: "NV".to_string(),
        zip_code: "89501".to_string(),
        payment: PaymentMethod::card("4111111111111111", "10/28", "321"),
    };
    let order = shop.checkout(&form).unwrap();
    assert_eq!(order.item_count(), 3);
    assert_eq!(order.total.display(), "$119.97");

    let reopened = open(dir.path());
    assert!(reopened.cart().is_empty());
    assert!(reopened.auth().is_authenticated());
}

#[test]
fn test_admin_edits_do_not_persist() {
    let dir = TempDir::new().unwrap();

    let mut shop = open(dir.path());
    let removed = shop.products_mut().remove(&ProductId::new("6"));
    assert!(removed.is_some());
    assert_eq!(shop.products().len(), 5);

    let reopened = open(dir.path());
    assert_eq!(reopened.products().len(), 6);
}
