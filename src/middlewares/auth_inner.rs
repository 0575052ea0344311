//! AuthMiddleware의 요청 처리 로직

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();
            let auth_result = authenticate(&req, &token_service);

            match (&mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {} ({})", err, req.path());
                    return Ok(reject(req, err));
                }
                (AuthMode::Required, Ok(user)) => {
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(&user.roles) {
                            log::warn!(
                                "권한 부족: {} ({:?}), 필요 권한: {:?}",
                                user.username,
                                user.roles,
                                required
                            );
                            return Ok(reject(
                                req,
                                AppError::AuthorizationError("접근 권한이 부족합니다".to_string()),
                            ));
                        }
                    }

                    log::debug!("인증 성공: {}", user.username);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Ok(user)) => {
                    let allowed = required_role
                        .as_ref()
                        .is_none_or(|required| required.is_satisfied(&user.roles));

                    if allowed {
                        log::debug!("선택적 인증 성공: {}", user.username);
                        req.extensions_mut().insert(user);
                    }
                }
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, error: AppError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, error.error_response()).map_into_right_body()
}

/// Authorization 헤더의 Bearer 토큰을 검증하고 사용자 식별 정보를 만듭니다.
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(AuthenticatedUser::new(claims.sub, claims.roles))
}
