//! Per-request binding of the API client to the visitor's session.
//!
//! The browser's `blog_token` cookie seeds a [`MemorySession`]; a
//! [`PendingNavigator`] collects any redirect the client asks for. When the
//! handler is done, [`RequestContext::finish`] turns both back into HTTP:
//! a pending redirect replaces the response, and a session change becomes a
//! `Set-Cookie`.

use crate::error::FrontendError;
use crate::state::AppState;

use client_core::BlogApiClient;
use client_core::navigation::PendingNavigator;
use client_core::session::{MemorySession, SessionChange, SessionStore};

use common::BearerToken;

use std::sync::Arc;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::http::header::LOCATION;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use futures_util::future::{Ready, ready};
use log::{debug, warn};

pub const SESSION_COOKIE: &str = "blog_token";

pub struct RequestContext {
    pub api: BlogApiClient,
    session: Arc<MemorySession>,
    navigator: Arc<PendingNavigator>,
    path: String,
    secure_cookies: bool,
}

impl RequestContext {
    pub fn new(state: &AppState, path: &str, token: Option<BearerToken>) -> Self {
        let session = Arc::new(MemorySession::new(token));
        let navigator = Arc::new(PendingNavigator::new(path));
        let api = state.api.with_context(session.clone(), navigator.clone());

        Self {
            api,
            session,
            navigator,
            path: path.to_string(),
            secure_cookies: state.secure_cookies,
        }
    }

    pub(crate) fn from_http_request(req: &HttpRequest) -> Result<Self, FrontendError> {
        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| FrontendError::frontend("AppState is not registered"))?;

        Ok(Self::new(state, req.path(), token_from_request(req)))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn session(&self) -> &MemorySession {
        &self.session
    }

    pub fn navigator(&self) -> &PendingNavigator {
        &self.navigator
    }

    /// Apply pending navigation and session changes to `response`.
    pub fn finish(self, response: HttpResponse) -> HttpResponse {
        let mut response = match self.navigator.take_pending() {
            Some(target) => {
                debug!("Redirecting {} to {}", self.path, target);
                see_other(&target)
            }
            None => response,
        };

        let outcome = match self.session.change() {
            SessionChange::Unchanged => Ok(()),
            SessionChange::Stored => match self.session.token() {
                Some(token) => response.add_cookie(&self.session_cookie(token.as_str().to_string())),
                None => Ok(()),
            },
            SessionChange::Cleared => {
                response.add_removal_cookie(&self.session_cookie(String::new()))
            }
        };

        if let Err(e) = outcome {
            warn!("Failed to write session cookie: {e}");
        }

        response
    }

    /// `303 See Other` to `target`, with session changes applied.
    pub fn redirect(self, target: &str) -> HttpResponse {
        self.finish(see_other(target))
    }

    fn session_cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .finish()
    }
}

pub fn see_other(target: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, target.to_string()))
        .finish()
}

/// Token carried by the session cookie, if it holds a non-blank value.
pub fn token_from_request(req: &HttpRequest) -> Option<BearerToken> {
    req.cookie(SESSION_COOKIE)
        .and_then(|cookie| BearerToken::parse(cookie.value()))
}

impl FromRequest for RequestContext {
    type Error = FrontendError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_http_request(req))
    }
}
