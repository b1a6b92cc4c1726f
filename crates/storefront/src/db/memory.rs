//! In-process catalog.
//!
//! Keeps products in a `Vec` behind an async lock. Prices are kept as the
//! submitted text, the way a `DECIMAL` column keeps them, and normalized on
//! every read. Used with `CARDAPIO_STORE=memory` and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use cardapio_core::{Price, ProductId};

use super::{Catalog, RepositoryError};
use crate::models::{Product, ProductInput};

#[derive(Debug, Clone)]
struct StoredProduct {
    id: i32,
    name: String,
    description: String,
    price: String,
    image: String,
}

impl StoredProduct {
    fn to_product(&self) -> Result<Product, RepositoryError> {
        let price = Price::parse(&self.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("product {}: {e}", self.id))
        })?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            image: self.image.clone(),
        })
    }

    fn overwrite(&mut self, input: &ProductInput) {
        self.name.clone_from(&input.name);
        self.description.clone_from(&input.description);
        self.price.clone_from(&input.price);
        self.image.clone_from(&input.image);
    }
}

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: Vec<StoredProduct>,
}

/// Catalog held in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    table: RwLock<Table>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-filled with products, ids assigned from 1.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Rejected` if any price is not a decimal.
    pub fn with_products(products: &[ProductInput]) -> Result<Self, RepositoryError> {
        let mut table = Table::default();
        for input in products {
            insert_row(&mut table, input)?;
        }
        Ok(Self {
            table: RwLock::new(table),
        })
    }
}

/// Parse a text id as a base-10 integer after trimming.
///
/// Stricter than `MySQL`, which casts the text to a number before comparing
/// with the integer key: there `'1abc'` and `'1.0'` also find id 1, here they
/// find nothing. Leading zeros (`'01'`) find id 1 in both.
fn parse_id(id: &str) -> Option<i32> {
    id.trim().parse().ok()
}

fn insert_row(table: &mut Table, input: &ProductInput) -> Result<ProductId, RepositoryError> {
    check_price(input)?;
    table.next_id += 1;
    table.rows.push(StoredProduct {
        id: table.next_id,
        name: input.name.clone(),
        description: input.description.clone(),
        price: input.price.clone(),
        image: input.image.clone(),
    });
    Ok(ProductId::new(table.next_id))
}

fn check_price(input: &ProductInput) -> Result<(), RepositoryError> {
    Price::parse(&input.price)
        .map(|_| ())
        .map_err(|e| RepositoryError::Rejected(e.to_string()))
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self.table.read().await;
        table.rows.iter().map(StoredProduct::to_product).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|row| row.id == id)
            .map(StoredProduct::to_product)
            .transpose()
    }

    async fn insert(&self, input: &ProductInput) -> Result<ProductId, RepositoryError> {
        let mut table = self.table.write().await;
        insert_row(&mut table, input)
    }

    async fn update_by_id(&self, id: &str, input: &ProductInput) -> Result<(), RepositoryError> {
        check_price(input)?;
        let Some(id) = parse_id(id) else {
            return Ok(());
        };
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.iter_mut().find(|row| row.id == id) {
            row.overwrite(input);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };
        self.table.write().await.rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
