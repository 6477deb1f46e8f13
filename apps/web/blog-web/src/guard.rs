//! Admin route gating, evaluated before the handler runs.

use crate::context::RequestContext;
use crate::error::FrontendError;

use client_core::guard::{Access, Capability, authorize};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use log::debug;

/// A [`RequestContext`] whose visitor is allowed on the requested route.
///
/// Extraction fails with [`FrontendError::LoginRequired`] (a redirect to the
/// login page) before any page loader is called.
pub struct AdminSession(pub RequestContext);

impl AdminSession {
    pub fn into_inner(self) -> RequestContext {
        self.0
    }

    fn check(ctx: RequestContext) -> Result<Self, FrontendError> {
        match authorize(ctx.path(), Capability::of(ctx.session())) {
            Access::Granted => Ok(Self(ctx)),
            Access::Redirect(target) => {
                debug!("Anonymous visitor on {}, redirecting to {target}", ctx.path());
                Err(FrontendError::LoginRequired)
            }
        }
    }
}

impl FromRequest for AdminSession {
    type Error = FrontendError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(RequestContext::from_http_request(req).and_then(Self::check))
    }
}
