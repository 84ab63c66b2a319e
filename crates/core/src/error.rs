//! Cart error model.

use thiserror::Error;

/// Result type used across the cart and checkout layers.
pub type CartResult<T> = Result<T, CartError>;

/// Failure reported by a persistence adapter (cart store, catalog, user ledger).
///
/// These are infrastructure errors; they always surface to callers as
/// [`ErrorKind::StorageFailure`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend could not be reached or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A record failed required-field validation at the store boundary.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }
}

/// Which operation observed a missing cart.
///
/// The kind is the same for all of them; only the human message differs so
/// the caller gets a hint that fits what they were trying to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoCartContext {
    Read,
    Update,
    Remove,
    Checkout,
}

impl NoCartContext {
    pub fn message(self) -> &'static str {
        match self {
            NoCartContext::Update => {
                "User does not have a cart. Use POST to create cart and add a product"
            }
            NoCartContext::Read | NoCartContext::Remove | NoCartContext::Checkout => {
                "User does not have a cart"
            }
        }
    }
}

/// Cart/checkout error.
///
/// Every condition maps to exactly one [`ErrorKind`]; the display string is the
/// human message returned to API callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Product already in cart. Use the cart sidebar to update or remove product from cart")]
    DuplicateItem,

    #[error("Product doesn't exist in database")]
    UnknownProduct,

    #[error("{}", .0.message())]
    NoCart(NoCartContext),

    #[error("Product not in cart")]
    ItemNotInCart,

    #[error("Users cart is empty")]
    EmptyCart,

    #[error("Address not set")]
    AddressNotSet,

    #[error("Insufficient Balance")]
    InsufficientBalance,

    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl CartError {
    /// Wrap a storage failure with a short description of what was being done.
    pub fn storage(context: &'static str, source: StorageError) -> Self {
        Self::Storage { context, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::DuplicateItem => ErrorKind::DuplicateItem,
            CartError::UnknownProduct => ErrorKind::UnknownProduct,
            CartError::NoCart(_) => ErrorKind::NoCart,
            CartError::ItemNotInCart => ErrorKind::ItemNotInCart,
            CartError::EmptyCart => ErrorKind::EmptyCart,
            CartError::AddressNotSet => ErrorKind::AddressNotSet,
            CartError::InsufficientBalance => ErrorKind::InsufficientBalance,
            CartError::InvalidQuantity => ErrorKind::InvalidQuantity,
            CartError::Storage { .. } => ErrorKind::StorageFailure,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.kind().class() == ErrorClass::Client
    }
}

/// Stable, machine-readable error kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateItem,
    UnknownProduct,
    NoCart,
    ItemNotInCart,
    EmptyCart,
    AddressNotSet,
    InsufficientBalance,
    InvalidQuantity,
    StorageFailure,
}

/// Who can fix the failure: the caller (client) or the operator (server).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    Server,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::DuplicateItem => "duplicate_item",
            ErrorKind::UnknownProduct => "unknown_product",
            ErrorKind::NoCart => "no_cart",
            ErrorKind::ItemNotInCart => "item_not_in_cart",
            ErrorKind::EmptyCart => "empty_cart",
            ErrorKind::AddressNotSet => "address_not_set",
            ErrorKind::InsufficientBalance => "insufficient_balance",
            ErrorKind::InvalidQuantity => "invalid_quantity",
            ErrorKind::StorageFailure => "storage_failure",
        }
    }

    pub fn class(self) -> ErrorClass {
        match self {
            ErrorKind::StorageFailure => ErrorClass::Server,
            _ => ErrorClass::Client,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
