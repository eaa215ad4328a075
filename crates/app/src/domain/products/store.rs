//! Product store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use shopfront::{NewProduct, ProductUpdate};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::products::{
    errors::ProductStoreError,
    records::{ProductId, ProductRecord},
    slug::slugify,
};

#[derive(Debug, Default)]
struct Inventory {
    last_id: u64,
    products: BTreeMap<ProductId, ProductRecord>,
    slugs: FxHashMap<String, ProductId>,
}

impl Inventory {
    fn next_id(&self) -> ProductId {
        ProductId::new(self.last_id + 1)
    }

    fn ensure_slug_free(&self, slug: &str, owner: ProductId) -> Result<(), ProductStoreError> {
        match self.slugs.get(slug) {
            Some(existing) if *existing != owner => {
                Err(ProductStoreError::SlugTaken(slug.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Process-local product store.
///
/// Ids are allocated sequentially from 1 and never reused. Slugs are unique
/// across live products.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inventory: RwLock<Inventory>,
}

impl InMemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductStoreError> {
        let inventory = self.inventory.read().await;

        Ok(inventory.products.values().cloned().collect())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<ProductRecord>, ProductStoreError> {
        let needle = query.trim().to_lowercase();

        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let inventory = self.inventory.read().await;

        let matches: Vec<ProductRecord> = inventory
            .products
            .values()
            .filter(|product| product.mentions(&needle))
            .cloned()
            .collect();

        debug!(query, matches = matches.len(), "searched products");

        Ok(matches)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductStoreError> {
        self.inventory
            .read()
            .await
            .products
            .get(&product)
            .cloned()
            .ok_or(ProductStoreError::NotFound)
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, ProductStoreError> {
        let mut inventory = self.inventory.write().await;

        let id = inventory.next_id();

        let slug = product
            .slug
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| slugify(&product.title));

        let slug = if slug.is_empty() {
            format!("product-{id}")
        } else {
            slug
        };

        inventory.ensure_slug_free(&slug, id)?;

        let now = Timestamp::now();

        let record = ProductRecord {
            id,
            title: product.title,
            description: product.description,
            slug,
            poster: product.poster,
            categories: product.categories,
            variations: product.variations,
            form: product.form,
            published: product.published,
            created_at: now,
            updated_at: now,
        };

        inventory.last_id = id.into_inner();
        inventory.slugs.insert(record.slug.clone(), id);
        inventory.products.insert(id, record.clone());

        info!(product_id = %id, slug = %record.slug, "created product");

        Ok(record)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductStoreError> {
        let mut inventory = self.inventory.write().await;

        if !inventory.products.contains_key(&product) {
            return Err(ProductStoreError::NotFound);
        }

        inventory.ensure_slug_free(&update.slug, product)?;

        let Some(record) = inventory.products.get_mut(&product) else {
            return Err(ProductStoreError::NotFound);
        };

        let previous_slug = std::mem::replace(&mut record.slug, update.slug);

        record.title = update.title;
        record.description = update.description;
        record.poster = update.poster;
        record.categories = update.categories;
        record.variations = update.variations;
        record.form = update.form;
        record.published = update.published;
        record.updated_at = Timestamp::now();

        let updated = record.clone();

        if previous_slug != updated.slug {
            inventory.slugs.remove(&previous_slug);
            inventory.slugs.insert(updated.slug.clone(), product);
        }

        info!(product_id = %product, slug = %updated.slug, "updated product");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductStoreError> {
        let mut inventory = self.inventory.write().await;

        let removed = inventory
            .products
            .remove(&product)
            .ok_or(ProductStoreError::NotFound)?;

        inventory.slugs.remove(&removed.slug);

        info!(product_id = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductStoreError>;

    /// Retrieves products whose title, slug, description or categories
    /// contain `query`, ignoring case.
    async fn search_products(&self, query: &str) -> Result<Vec<ProductRecord>, ProductStoreError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductStoreError>;

    /// Stores a new product under the next free id.
    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, ProductStoreError>;

    /// Replaces every field of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductStoreError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductStoreError>;
}
