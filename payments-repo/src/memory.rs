//! In-memory repository adapters.
//!
//! Both stores guard their map with a single `Mutex`, which is enough to
//! keep at-most-one-save-per-id and read-your-writes if a store is ever
//! shared. The payment store also keeps an insertion-order index so that
//! enumeration is deterministic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use payments_types::{
    InvalidArgument, NotFound, Payment, PaymentError, PaymentId, PaymentRepository, User,
    UserId, UserRepository,
};

#[derive(Default)]
struct PaymentStore {
    payments: HashMap<PaymentId, Payment>,
    order: Vec<PaymentId>,
}

/// Process-local store of payment records.
#[derive(Default)]
pub struct InMemoryPaymentRepository {
    store: Mutex<PaymentStore>,
}

impl InMemoryPaymentRepository {
    /// Creates a new, empty payment store.
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, PaymentStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, PaymentError> {
        let id = id.ok_or(InvalidArgument::PaymentIdMissing)?;
        Ok(self.store().payments.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Payment>, PaymentError> {
        let store = self.store();
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.payments.get(id).cloned())
            .collect())
    }

    fn save(&self, payment: Option<Payment>) -> Result<Payment, PaymentError> {
        let payment = payment.ok_or(InvalidArgument::PaymentMissing)?;

        let mut store = self.store();
        if store.payments.contains_key(&payment.id) {
            return Err(InvalidArgument::AlreadySaved(payment.id).into());
        }

        debug!(payment_id = %payment.id, user_id = %payment.user_id, "payment saved");
        store.order.push(payment.id);
        store.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    fn edit_message(&self, id: PaymentId, message: String) -> Result<Payment, PaymentError> {
        let mut store = self.store();
        let payment = store
            .payments
            .get_mut(&id)
            .ok_or(NotFound::Payment(id))?;

        debug!(payment_id = %id, "payment message edited");
        payment.set_message(message);
        Ok(payment.clone())
    }
}

/// Process-local user directory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates a new, empty user directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with the given users.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.insert(user);
        }
        repo
    }

    /// Adds a user to the directory, replacing any previous entry
    /// with the same id.
    pub fn insert(&self, user: User) {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id, user);
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, PaymentError> {
        Ok(self
            .users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned())
    }
}
