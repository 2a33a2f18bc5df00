use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Request},
};

use crate::core::error::AppError;

/// Multipart extractor whose rejections surface as upload errors
///
/// A body that is not `multipart/form-data` (or lacks a boundary) is rejected
/// the same way the upload gate rejects a bad file.
pub struct AppMultipart(pub Multipart);

impl<S> FromRequest<S> for AppMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Multipart::from_request(req, state).await {
            Ok(multipart) => Ok(Self(multipart)),
            Err(rejection) => Err(AppError::Upload(rejection.body_text())),
        }
    }
}
