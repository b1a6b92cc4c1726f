//! `MySQL` product repository.
//!
//! Queries are built at runtime with `sqlx::query`/`query_as` and bound
//! positionally. Ids from the request are bound as text; `MySQL` coerces them
//! when comparing against the integer key, so malformed ids match nothing.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use cardapio_core::{Price, ProductId};

use super::{Catalog, RepositoryError};
use crate::models::{Product, ProductInput};

/// A `produtos` row as stored.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: Decimal,
    image: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::from_decimal(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("product {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            price,
            image: row.image.unwrap_or_default(),
        })
    }
}

const SELECT_PRODUCT: &str = r"
    SELECT id, nome AS name, descricao AS description, preco AS price, imagem AS image
    FROM produtos
";

/// Catalog backed by the `produtos` table.
#[derive(Debug, Clone)]
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    /// Create a catalog over an open pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Catalog for MySqlCatalog {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    async fn insert(&self, input: &ProductInput) -> Result<ProductId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO produtos (nome, descricao, preco, imagem)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(input.name.as_str())
        .bind(input.description.as_str())
        .bind(input.price.as_str())
        .bind(input.image.as_str())
        .execute(&self.pool)
        .await?;

        let id = i32::try_from(result.last_insert_id()).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "insert id {} out of range",
                result.last_insert_id()
            ))
        })?;

        Ok(ProductId::new(id))
    }

    async fn update_by_id(&self, id: &str, input: &ProductInput) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            UPDATE produtos
            SET nome = ?, descricao = ?, preco = ?, imagem = ?
            WHERE id = ?
            ",
        )
        .bind(input.name.as_str())
        .bind(input.description.as_str())
        .bind(input.price.as_str())
        .bind(input.image.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM produtos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(price: Decimal) -> ProductRow {
        ProductRow {
            id: ProductId::new(1),
            name: "Bolo".to_string(),
            description: None,
            price,
            image: Some("bolo.jpg".to_string()),
        }
    }

    #[test]
    fn test_row_price_is_normalized_to_float() {
        let product = Product::try_from(row(Decimal::new(2550, 2))).unwrap();
        assert!((product.price.amount() - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_row_null_columns_become_empty() {
        let product = Product::try_from(row(Decimal::new(100, 2))).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.image, "bolo.jpg");
    }
}
