//! Auth middleware.
//!
//! Reads stay open: GET, HEAD and OPTIONS requests pass straight through.
//! Every other method must carry `Authorization: Bearer <key>`. All credential
//! rejections render the same 401 so the failure mode never leaks; the reason
//! lands in the logs only.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::{Method, header::AUTHORIZATION},
    prelude::*,
};
use tracing::{debug, error};

use crate::{auth::errors::AuthError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if is_read_method(req.method()) {
        ctrl.call_next(req, depot, res).await;

        return;
    }

    let Some(key) = extract_bearer_token(req) else {
        res.render(unauthorized());

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    match state
        .tokens
        .authenticate(state.auth.as_ref(), key, Timestamp::now())
        .await
    {
        Ok((user, _token)) => {
            debug!(user = %user.username, "authenticated write request");
        }
        Err(
            rejection @ (AuthError::InvalidCredential
            | AuthError::InactiveAccount
            | AuthError::ExpiredCredential),
        ) => {
            debug!("rejected write request: {rejection}");

            res.render(unauthorized());

            return;
        }
        Err(error) => {
            error!("failed to authenticate token: {error}");

            res.render(StatusError::internal_server_error());

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

fn is_read_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

// One message for every rejection kind.
fn unauthorized() -> StatusError {
    StatusError::unauthorized().brief("Invalid or expired token")
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
