//! Redirects unauthorized responses to the login page.

use std::future::{Ready, ready};
use std::pin::Pin;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};

pub const LOGIN_URL: &str = "/login";

/// Converts any 401 produced by a protected route (usually a missing or
/// stale identity cookie) into a 303 redirect to the login page.
pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request = req.request().clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let redirect = || {
                HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, LOGIN_URL))
                    .finish()
                    .map_into_right_body()
            };

            match fut.await {
                Ok(res) if res.status() == StatusCode::UNAUTHORIZED => {
                    Ok(ServiceResponse::new(request, redirect()))
                }
                Ok(res) => Ok(res.map_into_left_body()),
                Err(err) if err.as_response_error().status_code() == StatusCode::UNAUTHORIZED => {
                    Ok(ServiceResponse::new(request, redirect()))
                }
                Err(err) => Err(err),
            }
        })
    }
}
