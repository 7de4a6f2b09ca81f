/// Notification Coordinator
///
/// This module provides the coordinator that bridges OS/provider callbacks
/// into two outbound actions:
/// 1. Sync the provider registration token to the application backend
/// 2. Resolve a received notification into a presentation decision or a
///    routing intent for the presentation layer to act on
///
/// One instance is constructed at startup and handed to whatever registers
/// the OS callbacks; there is no global accessor.
use crate::config::CoordinatorConfig;
use crate::error::{CoordinatorError, Result};
use crate::models::{HandshakePhase, NotificationEvent, PresentationDecision, RoutingIntent};
use crate::services::routing::IntentResolver;
use crate::services::sign_in::SignInRedirect;
use crate::services::token_sync::TokenSyncBackend;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use messaging_gateway::{
    DeviceToken, GatewayDelegate, GatewayError, MessagingGateway, RegistrationToken,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Token handshake state. Written only from the callback-delivery context;
/// the lock is never held across an await.
#[derive(Debug, Default)]
struct HandshakeState {
    phase: HandshakePhase,
    device_token: Option<DeviceToken>,
    /// Last registration token accepted for sync. Recorded at attempt time:
    /// at most one outbound sync per distinct token value, and a failed sync
    /// is not retried when the same value is observed again.
    accepted_token: Option<RegistrationToken>,
    last_sync_at: Option<DateTime<Utc>>,
}

/// Bridges OS and messaging-provider callbacks into token sync and routing.
pub struct NotificationCoordinator {
    config: CoordinatorConfig,
    gateway: Arc<dyn MessagingGateway>,
    sync_backend: Arc<dyn TokenSyncBackend>,
    sign_in: Option<Arc<dyn SignInRedirect>>,
    resolver: IntentResolver,
    state: Mutex<HandshakeState>,
}

impl NotificationCoordinator {
    /// Create a new coordinator.
    ///
    /// Fails only on invalid configuration; the injected boundaries are
    /// taken as-is.
    pub fn new(
        config: CoordinatorConfig,
        gateway: Arc<dyn MessagingGateway>,
        sync_backend: Arc<dyn TokenSyncBackend>,
    ) -> Result<Self> {
        config.validate()?;
        let resolver = IntentResolver::from_config(&config);
        Ok(Self {
            config,
            gateway,
            sync_backend,
            sign_in: None,
            resolver,
            state: Mutex::new(HandshakeState::default()),
        })
    }

    /// Attach the sign-in SDK boundary for URL-scheme redirects.
    pub fn with_sign_in(mut self, sign_in: Arc<dyn SignInRedirect>) -> Self {
        self.sign_in = Some(sign_in);
        self
    }

    /// OS callback: a device token was issued.
    ///
    /// Forwards the token to the provider, waits out the propagation delay,
    /// then fetches a registration token. A failure anywhere on this path is
    /// logged and swallowed; push registration never blocks the app.
    pub async fn device_token_registered(&self, token: DeviceToken) {
        if let Err(e) = self.register_and_fetch(token).await {
            warn!("Token handshake halted: {}", e);
        }
    }

    /// OS callback: push registration was refused. Log-only; no retry.
    pub fn device_token_registration_failed(&self, reason: &GatewayError) {
        warn!("Push registration failed: {}", reason);
    }

    /// Provider reported a registration token (fetch result or refresh).
    ///
    /// Absence is valid and logged. A token identical to the last one
    /// accepted for sync is redundant and suppressed.
    pub async fn registration_token_received(&self, token: Option<RegistrationToken>) {
        let Some(token) = token else {
            debug!("Provider reported no registration token");
            return;
        };

        {
            let mut state = self.state();
            if state.accepted_token.as_ref() == Some(&token) {
                debug!("Registration token unchanged, skipping sync");
                return;
            }
            state.phase = HandshakePhase::ServiceTokenKnown;
            state.accepted_token = Some(token.clone());
        }

        self.sync_token(&token).await;
    }

    /// Foreground delivery: decide how to present the notification.
    ///
    /// Always alert + badge + sound, regardless of payload content. No
    /// suppression or filtering happens here, and the decision never
    /// consults token-handshake state.
    pub fn notification_received(&self, event: &NotificationEvent) -> PresentationDecision {
        debug!(
            "Foreground notification {} ({})",
            event.id,
            event.context.as_str()
        );
        PresentationDecision::all()
    }

    /// The user tapped a notification: derive the navigation target.
    pub fn notification_responded(&self, event: &NotificationEvent) -> RoutingIntent {
        let intent = self.resolver.resolve(event);
        info!(
            "Notification {} tapped, routing to {}",
            event.id,
            intent.as_str()
        );
        intent
    }

    /// Pass a sign-in redirect URL through to the sign-in SDK.
    pub fn handle_redirect_url(&self, url: &str) -> bool {
        match &self.sign_in {
            Some(sign_in) => sign_in.handle_redirect_url(url),
            None => false,
        }
    }

    /// Current handshake phase.
    pub fn phase(&self) -> HandshakePhase {
        self.state().phase
    }

    /// Device token last handed to the gateway, if any.
    pub fn last_device_token(&self) -> Option<DeviceToken> {
        self.state().device_token.clone()
    }

    /// When the last successful sync completed, if any.
    pub fn last_sync_at(&self) -> Option<DateTime<Utc>> {
        self.state().last_sync_at
    }

    async fn register_and_fetch(&self, token: DeviceToken) -> Result<()> {
        if token.is_empty() {
            return Err(CoordinatorError::Registration(
                "empty device token".to_string(),
            ));
        }

        info!("Device token registered: {}", token);
        self.gateway
            .set_device_token(&token)
            .await
            .map_err(|e| CoordinatorError::Registration(e.to_string()))?;

        {
            // A fresh device token restarts the handshake. The accepted
            // registration token is kept: dedup is per distinct value
            // observed over the process lifetime.
            let mut state = self.state();
            state.phase = HandshakePhase::DeviceTokenKnown;
            state.device_token = Some(token);
        }

        // Give the messaging backend time to propagate the device token
        // before the first fetch; querying too early yields no token.
        tokio::time::sleep(self.config.propagation_delay()).await;

        let fetched = self
            .gateway
            .fetch_registration_token()
            .await
            .map_err(|e| CoordinatorError::TokenFetch(e.to_string()))?;

        self.registration_token_received(fetched).await;
        Ok(())
    }

    async fn sync_token(&self, token: &RegistrationToken) {
        info!("Syncing registration token to backend");
        match self.sync_backend.update_registration_token(token).await {
            Ok(()) => {
                let mut state = self.state();
                state.phase = HandshakePhase::Synced;
                state.last_sync_at = Some(Utc::now());
                info!("Registration token synced");
            }
            Err(e) => {
                let err: CoordinatorError = e.into();
                warn!("{}", err);
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, HandshakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GatewayDelegate for NotificationCoordinator {
    async fn registration_token_refreshed(&self, token: Option<RegistrationToken>) {
        debug!("Provider refreshed registration token");
        self.registration_token_received(token).await;
    }
}
