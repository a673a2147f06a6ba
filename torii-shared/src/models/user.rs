use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User roles on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Buyer,
    Seller,
    Admin,
}

/// A marketplace user profile.
///
/// This is exactly the object the profile store persists under its single
/// storage key: it is read once at startup and rewritten on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub location: Option<String>,
    pub favorites: Vec<Uuid>,
    pub cart: Vec<Uuid>,
}

impl User {
    pub fn new(name: String, email: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            avatar: None,
            role,
            location: None,
            favorites: Vec::new(),
            cart: Vec::new(),
        }
    }

    /// Check if a vehicle is in the user's favorites
    pub fn has_favorite(&self, vehicle_id: &Uuid) -> bool {
        self.favorites.contains(vehicle_id)
    }

    /// Check if a vehicle is in the user's cart
    pub fn has_in_cart(&self, vehicle_id: &Uuid) -> bool {
        self.cart.contains(vehicle_id)
    }
}

/// Seller summary embedded in vehicle listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerRef {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub verified: bool,
}
