//! 产品业务服务

use sqlx::SqlitePool;
use tracing::{debug, info};
use validator::Validate;

use super::model::{CreateProduct, Product};
use crate::core::error::ApiError;

const SELECT_ALL: &str =
    "SELECT id, name, category, COALESCE(quantity, 0) AS quantity, price FROM products ORDER BY id";

const INSERT_RETURNING: &str = "INSERT INTO products (name, category, quantity, price) \
     VALUES (?, ?, ?, ?) \
     RETURNING id, name, category, COALESCE(quantity, 0) AS quantity, price";

const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = ?";

#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 按 id 升序返回全部产品
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!("Listed {} products", products.len());
        Ok(products)
    }

    /// 插入一行并返回存储层实际写入的记录（含分配的 id）
    pub async fn create_product(&self, input: CreateProduct) -> Result<Product, ApiError> {
        input.validate()?;

        let product = sqlx::query_as::<_, Product>(INSERT_RETURNING)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.quantity.unwrap_or(0))
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;

        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 返回实际删除的行数；id 不存在时为 0，不视为错误
    pub async fn delete_product(&self, id: i64) -> Result<u64, ApiError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let changes = result.rows_affected();
        if changes == 0 {
            debug!("Delete of product {} matched no rows", id);
        } else {
            info!("Deleted product: {}", id);
        }

        Ok(changes)
    }

    /// 存储连通性检查
    pub async fn ping(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::DatabaseConfig, database::DatabaseManager};
    use tempfile::TempDir;

    async fn create_test_service() -> (ProductService, DatabaseManager, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("test.db").display()),
            max_connections: 2,
        };

        let db = DatabaseManager::connect(&config).await.unwrap();
        db.init_schema().await.unwrap();

        (ProductService::new(db.pool().clone()), db, dir)
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let (service, _db, _dir) = create_test_service().await;

        let products = service.list_products().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let (service, _db, _dir) = create_test_service().await;

        let product = service
            .create_product(
                CreateProduct::new("Widget")
                    .with_category("Tools")
                    .with_quantity(5)
                    .with_price(9.99),
            )
            .await
            .unwrap();

        assert_eq!(
            product,
            Product {
                id: 1,
                name: "Widget".to_string(),
                category: Some("Tools".to_string()),
                quantity: 5,
                price: Some(9.99),
            }
        );

        let products = service.list_products().await.unwrap();
        assert_eq!(products, vec![product]);
    }

    #[tokio::test]
    async fn test_quantity_defaults_to_zero() {
        let (service, _db, _dir) = create_test_service().await;

        let product = service
            .create_product(CreateProduct::new("Bolt"))
            .await
            .unwrap();

        assert_eq!(product.quantity, 0);
        assert_eq!(product.category, None);
        assert_eq!(product.price, None);
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let (service, _db, _dir) = create_test_service().await;

        let first = service.create_product(CreateProduct::new("A")).await.unwrap();
        let second = service.create_product(CreateProduct::new("B")).await.unwrap();
        assert!(second.id > first.id);

        // 删除后 id 不会被复用
        service.delete_product(second.id).await.unwrap();
        let third = service.create_product(CreateProduct::new("C")).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_missing_name_rejected_by_store() {
        let (service, _db, _dir) = create_test_service().await;

        let err = service
            .create_product(CreateProduct::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Store(_)));
        assert!(err.to_string().contains("NOT NULL"));
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let (service, _db, _dir) = create_test_service().await;

        let err = service
            .create_product(CreateProduct::new(""))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_changes() {
        let (service, _db, _dir) = create_test_service().await;

        let product = service.create_product(CreateProduct::new("Gear")).await.unwrap();

        assert_eq!(service.delete_product(product.id).await.unwrap(), 1);
        assert_eq!(service.delete_product(product.id).await.unwrap(), 0);
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_fails_when_table_dropped() {
        let (service, db, _dir) = create_test_service().await;

        sqlx::query("DROP TABLE products")
            .execute(db.pool())
            .await
            .unwrap();

        let err = service.list_products().await.unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }
}
