use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::{auth::token::verify_token, config::AuthConfig, error::AppError};

/// Requires a valid `Authorization: Bearer <token>` header on every route except
/// the public ones, and stores the decoded `Claims` in the request extensions.
///
/// The signing key is read from the `web::Data<AuthConfig>` registered on the app.
pub struct AuthMiddleware;

/// Routes reachable without a token.
pub fn is_public(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS {
        return true;
    }
    match path.trim_end_matches('/') {
        "/health" => true,
        "/auth/login" | "/auth/register" | "/users" => method == Method::POST,
        _ => false,
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public(req.method(), req.path()) {
            return self.forward(req);
        }

        let config = match req.app_data::<web::Data<AuthConfig>>() {
            Some(config) => config.clone(),
            None => {
                log::error!("AuthConfig is not registered as app data");
                let err = AppError::InternalServerError("Authentication is not configured".into());
                return reject(req, err);
            }
        };

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let claims = match token {
            Some(token) => verify_token(&config, token),
            None => Err(AppError::Unauthorized("Missing token".into())),
        };

        match claims {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                self.forward(req)
            }
            Err(err) => {
                log::debug!("rejected request to {}: {}", req.path(), err);
                reject(req, err)
            }
        }
    }
}

impl<S, B> AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    fn forward(
        &self,
        req: ServiceRequest,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse, Error>> {
        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_boxed_body()) })
    }
}

/// Rejections are rendered here rather than returned as `Err`, so outer
/// middleware (CORS, access log) still sees a regular response.
fn reject(
    req: ServiceRequest,
    err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse, Error>> {
    let response = req.into_response(err.error_response());
    Box::pin(async move { Ok(response) })
}
