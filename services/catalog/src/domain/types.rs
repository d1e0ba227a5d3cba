use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product with its category links resolved. `price_cents` is the price in
/// minor units and never negative; `quantity` is stock on hand.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub title: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub brand_id: Uuid,
    pub category_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial product update; `None` fields are left untouched. A `Some`
/// `category_ids` replaces the full link set.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub sku: Option<String>,
    pub title: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity: Option<i32>,
    pub brand_id: Option<Uuid>,
    pub category_ids: Option<Vec<Uuid>>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.sku.is_none()
            && self.title.is_none()
            && self.price_cents.is_none()
            && self.quantity.is_none()
            && self.brand_id.is_none()
            && self.category_ids.is_none()
    }
}
