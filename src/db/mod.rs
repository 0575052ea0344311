//! Database Connection Management Module
//!
//! MongoDB 연결을 관리합니다. 연결 정보는 [`DatabaseConfig`]에서 읽습니다.
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! ServiceLocator::set(Arc::new(database));
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = DatabaseConfig::uri();
        let database_name = DatabaseConfig::name();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("easyclass".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용하는 `mongodb::Database`
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
