//! In-memory user store with per-user carts.

use std::collections::HashMap;
use std::sync::RwLock;

use sunglasses_core::{Email, ProductId};

use crate::models::{Product, User};

use super::StoreError;

/// User accounts and their carts.
///
/// The set of accounts is fixed at startup; only carts change. All cart
/// access goes through one `RwLock` over the user list, and mutations
/// hold the write lock for the whole read-modify-write, so concurrent
/// adds to the same cart cannot drop entries.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    // Email -> position in `users`. Built once; positions never move.
    by_email: HashMap<Email, usize>,
}

impl UserStore {
    /// Build the store from the dataset's user list.
    ///
    /// A duplicate email keeps its first occurrence, matching a linear
    /// scan of the file.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        let mut by_email = HashMap::new();
        for (idx, user) in users.iter().enumerate() {
            by_email.entry(user.email.clone()).or_insert(idx);
        }

        Self {
            users: RwLock::new(users),
            by_email,
        }
    }

    /// Find the first account matching the submitted credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(users
            .iter()
            .find(|user| user.login.matches(username, password))
            .cloned())
    }

    /// A snapshot of the user's cart, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the user is unknown.
    pub fn cart(&self, email: &Email) -> Result<Vec<Product>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;

        let user = self.get(&users, email)?;
        Ok(user.cart.clone())
    }

    /// Append a product to the user's cart.
    ///
    /// Adding the same product twice appends a second entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the user is unknown.
    pub fn add_to_cart(&self, email: &Email, product: Product) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;

        let user = self.get_mut(&mut users, email)?;
        user.cart.push(product);
        Ok(())
    }

    /// Remove the first cart entry with the given product id.
    ///
    /// Returns `false` if no entry matched; remaining entries keep their
    /// order either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the user is unknown.
    pub fn remove_from_cart(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> Result<bool, StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;

        let user = self.get_mut(&mut users, email)?;
        match user.cart.iter().position(|product| &product.id == product_id) {
            Some(pos) => {
                user.cart.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of accounts in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// Whether the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    fn get<'a>(&self, users: &'a [User], email: &Email) -> Result<&'a User, StoreError> {
        self.by_email
            .get(email)
            .and_then(|&idx| users.get(idx))
            .ok_or_else(|| StoreError::UnknownUser(email.to_string()))
    }

    fn get_mut<'a>(
        &self,
        users: &'a mut [User],
        email: &Email,
    ) -> Result<&'a mut User, StoreError> {
        let idx = self
            .by_email
            .get(email)
            .copied()
            .ok_or_else(|| StoreError::UnknownUser(email.to_string()))?;
        users
            .get_mut(idx)
            .ok_or_else(|| StoreError::UnknownUser(email.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use sunglasses_core::BrandId;

    use super::*;

    fn test_user(username: &str, password: &str, email: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "name": { "title": "mrs", "first": "susanna", "last": "richards" },
            "email": email,
            "login": { "username": username, "password": password }
        }))
        .unwrap()
    }

    fn test_product(id: &str) -> Product {
        Product {
            id: ProductId::from(id),
            category_id: BrandId::from("1"),
            name: format!("Product {id}"),
            description: "Glasses".to_string(),
            price: 100,
            image_urls: Vec::new(),
        }
    }

    fn test_store() -> (UserStore, Email) {
        let email: Email = "susanna.richards@example.com".parse().unwrap();
        let store = UserStore::new(vec![test_user(
            "yellowleopard753",
            "jonjon",
            email.as_str(),
        )]);
        (store, email)
    }

    #[test]
    fn test_find_by_credentials() {
        let (store, email) = test_store();

        let user = store
            .find_by_credentials("yellowleopard753", "jonjon")
            .unwrap()
            .unwrap();
        assert_eq!(user.email, email);

        assert!(store
            .find_by_credentials("yellowleopard753", "wrong")
            .unwrap()
            .is_none());
        assert!(store
            .find_by_credentials("nobody", "jonjon")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_duplicate_usernames_resolve_to_first_occurrence() {
        let store = UserStore::new(vec![
            test_user("shared", "pw", "first@example.com"),
            test_user("shared", "pw", "second@example.com"),
        ]);

        let user = store.find_by_credentials("shared", "pw").unwrap().unwrap();
        assert_eq!(user.email.as_str(), "first@example.com");
    }

    #[test]
    fn test_cart_starts_empty_and_preserves_add_order() {
        let (store, email) = test_store();

        assert!(store.cart(&email).unwrap().is_empty());

        store.add_to_cart(&email, test_product("1")).unwrap();
        store.add_to_cart(&email, test_product("2")).unwrap();
        store.add_to_cart(&email, test_product("1")).unwrap();

        let cart = store.cart(&email).unwrap();
        let ids: Vec<&str> = cart.iter().map(|product| product.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "1"]);
    }

    #[test]
    fn test_remove_deletes_only_first_match() {
        let (store, email) = test_store();

        store.add_to_cart(&email, test_product("1")).unwrap();
        store.add_to_cart(&email, test_product("2")).unwrap();
        store.add_to_cart(&email, test_product("1")).unwrap();

        assert!(store.remove_from_cart(&email, &ProductId::from("1")).unwrap());

        let cart = store.cart(&email).unwrap();
        let ids: Vec<&str> = cart.iter().map(|product| product.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_remove_missing_product_returns_false() {
        let (store, email) = test_store();

        store.add_to_cart(&email, test_product("1")).unwrap();
        assert!(!store.remove_from_cart(&email, &ProductId::from("2")).unwrap());
        assert_eq!(store.cart(&email).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_user_is_an_error() {
        let (store, _) = test_store();
        let stranger: Email = "stranger@example.com".parse().unwrap();

        assert!(matches!(
            store.cart(&stranger),
            Err(StoreError::UnknownUser(_))
        ));
        assert!(matches!(
            store.add_to_cart(&stranger, test_product("1")),
            Err(StoreError::UnknownUser(_))
        ));
    }

    #[test]
    fn test_concurrent_adds_do_not_drop_entries() {
        let (store, email) = test_store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let email = email.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.add_to_cart(&email, test_product("1")).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.cart(&email).unwrap().len(), 200);
    }
}
