//! One-shot messages carried across a redirect in a signed cookie.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap,
    },
    response::{Html, IntoResponse, Response},
};
use std::{convert::Infallible, sync::Arc};

pub const COOKIE_NAME: &str = "fyyur_flash";

#[derive(Clone)]
pub struct FlashKey(Arc<str>);

impl FlashKey {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }

    fn sign(&self, message: &str) -> String {
        sha256::digest(format!("{}{}", self.0, message))
    }

    pub fn cookie(&self, message: &str) -> String {
        format!(
            "{}={}.{}; Path=/; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            urlencoding::encode(message),
            self.sign(message)
        )
    }

    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        let value = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .map(|(_, value)| value)?;
        let (encoded, signature) = value.rsplit_once('.')?;
        let message = urlencoding::decode(encoded).ok()?;
        if self.sign(&message) != signature {
            tracing::debug!("Ignoring flash cookie with an invalid signature");
            return None;
        }
        Some(message.into_owned())
    }
}

pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0", COOKIE_NAME)
}

/// Pending message for the page being rendered, if any.
pub struct Flash(pub Option<String>);

impl Flash {
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Sends the page, dropping the cookie once its message has been shown.
    pub fn respond(self, page: Html<String>) -> Response {
        match self.0 {
            Some(_) => ([(SET_COOKIE, clear_cookie())], page).into_response(),
            None => page.into_response(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    FlashKey: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let key = FlashKey::from_ref(state);
        Ok(Flash(key.read(&parts.headers)))
    }
}
