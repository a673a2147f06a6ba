use crate::identity::CredentialVerifier;
use crate::repository::ProfileStore;
use crate::{CoreError, CoreResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use torii_shared::events::{CartChange, CartChangedEvent, FavoriteToggledEvent};
use torii_shared::{Masked, User};
use uuid::Uuid;

/// Actions the session reducer understands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionAction {
    /// Sign the resolved profile in (credentials are checked upstream)
    Login(User),
    Logout,
    ToggleFavorite(Uuid),
    AddToCart(Uuid),
    RemoveFromCart(Uuid),
    ClearCart,
}

/// Events published when session state changes
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Favorite(FavoriteToggledEvent),
    Cart(CartChangedEvent),
}

/// The whole client-visible session state.
///
/// Mutation happens only through [`SessionState::apply`], which returns a
/// fresh state and never touches the receiver.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Pure reducer: current state x action -> next state.
    ///
    /// Cart and favorite actions on a logged-out session are no-ops. Cart
    /// adds are idempotent; favorites toggle between present and absent.
    pub fn apply(&self, action: &SessionAction) -> SessionState {
        match action {
            SessionAction::Login(profile) => SessionState {
                user: Some(profile.clone()),
            },
            SessionAction::Logout => SessionState { user: None },
            SessionAction::ToggleFavorite(vehicle_id) => self.with_user(|user| {
                if let Some(pos) = user.favorites.iter().position(|id| id == vehicle_id) {
                    user.favorites.remove(pos);
                } else {
                    user.favorites.push(*vehicle_id);
                }
            }),
            SessionAction::AddToCart(vehicle_id) => self.with_user(|user| {
                if !user.cart.contains(vehicle_id) {
                    user.cart.push(*vehicle_id);
                }
            }),
            SessionAction::RemoveFromCart(vehicle_id) => self.with_user(|user| {
                user.cart.retain(|id| id != vehicle_id);
            }),
            SessionAction::ClearCart => self.with_user(|user| {
                user.cart.clear();
            }),
        }
    }

    fn with_user(&self, mutate: impl FnOnce(&mut User)) -> SessionState {
        match &self.user {
            Some(user) => {
                let mut next = user.clone();
                mutate(&mut next);
                SessionState { user: Some(next) }
            }
            None => self.clone(),
        }
    }
}

/// Owns the session state and wires the reducer to persistence.
pub struct SessionManager {
    state: SessionState,
    store: Arc<dyn ProfileStore>,
    verifier: Arc<dyn CredentialVerifier>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    /// Build a manager, rehydrating any persisted profile.
    ///
    /// A missing or unreadable profile simply starts a logged-out session.
    pub async fn hydrate(
        store: Arc<dyn ProfileStore>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let user = match store.load().await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "profile rehydration failed; starting logged out");
                None
            }
        };

        if let Some(user) = &user {
            tracing::info!(user_id = %user.id, "session rehydrated");
        }

        let (events, _) = broadcast::channel(64);
        Self {
            state: SessionState { user },
            store,
            verifier,
            events,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Observe favorite/cart changes
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Attempt a sign-in. Reports success as a boolean; a persistence
    /// hiccup after a successful check is logged and absorbed.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        if !self.verifier.verify(email, password).await {
            return false;
        }
        let Some(profile) = self.verifier.profile_for(email).await else {
            return false;
        };

        self.state = self.state.apply(&SessionAction::Login(profile));
        if let Some(user) = &self.state.user {
            if let Err(err) = self.store.save(user).await {
                tracing::warn!(error = %err, "failed to persist profile after login");
            }
            tracing::info!(email = %Masked(email.to_string()), "signed in");
        }
        true
    }

    /// Sign out and destroy the persisted profile
    pub async fn logout(&mut self) -> CoreResult<()> {
        self.state = self.state.apply(&SessionAction::Logout);
        self.store
            .clear()
            .await
            .map_err(|err| CoreError::InternalError(err.to_string()))?;
        tracing::info!("signed out");
        Ok(())
    }

    pub async fn toggle_favorite(&mut self, vehicle_id: Uuid) -> CoreResult<()> {
        let action = SessionAction::ToggleFavorite(vehicle_id);
        self.dispatch(action).await?;

        if let Some(user) = &self.state.user {
            let _ = self.events.send(SessionEvent::Favorite(FavoriteToggledEvent {
                user_id: user.id,
                vehicle_id,
                favorited: user.has_favorite(&vehicle_id),
                timestamp: Utc::now().timestamp(),
            }));
        }
        Ok(())
    }

    pub async fn add_to_cart(&mut self, vehicle_id: Uuid) -> CoreResult<()> {
        self.dispatch(SessionAction::AddToCart(vehicle_id)).await?;
        self.publish_cart_event(Some(vehicle_id), CartChange::Added);
        Ok(())
    }

    pub async fn remove_from_cart(&mut self, vehicle_id: Uuid) -> CoreResult<()> {
        self.dispatch(SessionAction::RemoveFromCart(vehicle_id))
            .await?;
        self.publish_cart_event(Some(vehicle_id), CartChange::Removed);
        Ok(())
    }

    pub async fn clear_cart(&mut self) -> CoreResult<()> {
        self.dispatch(SessionAction::ClearCart).await?;
        self.publish_cart_event(None, CartChange::Cleared);
        Ok(())
    }

    /// Run an action through the reducer and persist the outcome
    async fn dispatch(&mut self, action: SessionAction) -> CoreResult<()> {
        let next = self.state.apply(&action);
        if next == self.state {
            return Ok(());
        }
        self.state = next;

        if let Some(user) = &self.state.user {
            self.store
                .save(user)
                .await
                .map_err(|err| CoreError::InternalError(err.to_string()))?;
        }
        Ok(())
    }

    fn publish_cart_event(&self, vehicle_id: Option<Uuid>, change: CartChange) {
        if let Some(user) = &self.state.user {
            let _ = self.events.send(SessionEvent::Cart(CartChangedEvent {
                user_id: user.id,
                vehicle_id,
                change,
                cart_size: user.cart.len(),
                timestamp: Utc::now().timestamp(),
            }));
        }
    }
}
