//! JWT 인증 미들웨어
//!
//! 스코프 단위로 감싸서 사용합니다. 인증에 성공하면 [`AuthenticatedUser`]가
//! request extensions에 들어가고, 핸들러는 이를 인자로 추출합니다.
//!
//! ```rust,ignore
//! web::scope("/admin")
//!     .wrap(AuthMiddleware::admin())
//!     .service(handlers::orders::all_orders)
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode, required_role: Option<RequiredRole>) -> Self {
        Self {
            mode,
            required_role,
        }
    }

    /// 로그인만 요구
    pub fn required() -> Self {
        Self::new(AuthMode::Required, None)
    }

    /// 토큰이 있으면 검증, 없어도 통과
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional, None)
    }

    /// 일반 사용자 또는 관리자
    pub fn member() -> Self {
        Self::new(AuthMode::Required, Some(RequiredRole::member()))
    }

    /// 관리자 전용
    pub fn admin() -> Self {
        Self::new(AuthMode::Required, Some(RequiredRole::admin()))
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::repositories::memory::verified_user;
    use crate::services::auth::TokenService;
    use actix_web::{App, HttpResponse, get, http::StatusCode, test};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    #[get("/maybe")]
    async fn maybe_whoami(user: Option<AuthenticatedUser>) -> HttpResponse {
        let name = user.map(|u| u.username).unwrap_or_else(|| "anonymous".to_string());
        HttpResponse::Ok().body(name)
    }

    fn bearer_for(username: &str, admin: bool) -> String {
        let mut user = verified_user(username);
        if admin {
            user.roles = vec!["admin".to_string()];
        }
        let token = TokenService::instance().generate_access_token(&user).unwrap();
        format!("Bearer {}", token)
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = test::init_service(App::new().wrap(AuthMiddleware::member()).service(whoami)).await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_identity() {
        let app = test::init_service(App::new().wrap(AuthMiddleware::member()).service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer_for("budi", false)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, actix_web::web::Bytes::from_static(b"budi"));
    }

    #[actix_web::test]
    async fn test_admin_scope_rejects_plain_user() {
        let app = test::init_service(App::new().wrap(AuthMiddleware::admin()).service(whoami)).await;

        let user_req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer_for("budi", false)))
            .to_request();
        assert_eq!(test::call_service(&app, user_req).await.status(), StatusCode::FORBIDDEN);

        let admin_req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer_for("root", true)))
            .to_request();
        assert_eq!(test::call_service(&app, admin_req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_required_mode_accepts_any_role() {
        let app = test::init_service(App::new().wrap(AuthMiddleware::required()).service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer_for("root", true)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let bad = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        assert_eq!(test::call_service(&app, bad).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_mode_lets_anonymous_through() {
        let app =
            test::init_service(App::new().wrap(AuthMiddleware::optional()).service(maybe_whoami))
                .await;

        let anonymous = test::TestRequest::get().uri("/maybe").to_request();
        let body = test::call_and_read_body(&app, anonymous).await;
        assert_eq!(body, actix_web::web::Bytes::from_static(b"anonymous"));

        let known = test::TestRequest::get()
            .uri("/maybe")
            .insert_header(("Authorization", bearer_for("budi", false)))
            .to_request();
        let body = test::call_and_read_body(&app, known).await;
        assert_eq!(body, actix_web::web::Bytes::from_static(b"budi"));
    }
}
