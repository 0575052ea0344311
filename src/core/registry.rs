//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 인프라 컴포넌트(`Database`, `RedisClient`)는 `ServiceLocator::set()`으로
//! 직접 등록하고, 리포지토리와 서비스는 각자 `instance()` 싱글톤을 가지며
//! `inventory::submit!`으로 등록 정보를 제출합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ inventory::submit!(RepositoryRegistration { .. })
//!    ├─ inventory::submit!(ServiceRegistration { .. })
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화
//!    ├─ ServiceLocator::set(database), ServiceLocator::set(redis)
//!    └─ ServiceLocator::initialize_all() → 리포지토리, 서비스 순으로 생성
//!
//! 3. 요청 처리
//!    └─ OrderService::instance() → 캐시된 Arc 반환
//! ```
//!
//! ## 등록 예제
//!
//! ```rust,ignore
//! fn order_repository_constructor() -> Box<dyn Any + Send + Sync> {
//!     Box::new(OrderRepository::instance() as Arc<dyn Any + Send + Sync>)
//! }
//!
//! inventory::submit! {
//!     RepositoryRegistration {
//!         name: "order_repository",
//!         constructor: order_repository_constructor,
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 서비스 등록 정보
///
/// `inventory` 크레이트를 통해 컴파일 타임에 수집됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스를 생성(또는 반환)하는 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// ServiceRegistration과 동일한 구조를 가지지만 초기화 순서를 위해 별도 타입으로 관리됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스를 생성(또는 반환)하는 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 인프라 컴포넌트 컨테이너
///
/// `TypeId`를 키로 각 타입당 하나의 인스턴스를 보관합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 외부에서 생성된 인스턴스를 등록합니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = Self::short_type_name(std::any::type_name::<T>());
        println!("📦 Registering: {}", type_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 조회합니다. 등록되지 않았다면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Panics
    ///
    /// 애플리케이션 시작 시 `set()`으로 등록하지 않은 타입을 요청하면 패닉합니다.
    /// 인프라 등록 누락은 복구 불가능한 부트스트랩 오류입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => {
                let type_name = std::any::type_name::<T>();
                log::error!("❌ 등록되지 않은 컴포넌트 요청: {}", type_name);
                panic!(
                    "Component not registered: {}. Register it with ServiceLocator::set() before use",
                    type_name
                );
            }
        }
    }

    /// `auth_service::db::Database` → `Database`
    fn short_type_name(type_name: &str) -> &str {
        type_name
            .rfind("::")
            .map(|pos| &type_name[pos + 2..])
            .unwrap_or(type_name)
    }

    /// 모든 리포지토리와 서비스 싱글톤을 미리 생성합니다.
    ///
    /// 리포지토리가 먼저, 서비스가 나중에 생성됩니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(u32);

    #[test]
    fn test_set_and_get_roundtrip() {
        ServiceLocator::set(Arc::new(Marker(7)));
        let marker = ServiceLocator::get::<Marker>();
        assert_eq!(marker.0, 7);
    }

    #[test]
    fn test_try_get_unregistered_returns_none() {
        struct NeverRegistered;
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(
            ServiceLocator::short_type_name("easyclass_backend::db::Database"),
            "Database"
        );
        assert_eq!(ServiceLocator::short_type_name("Plain"), "Plain");
    }
}
