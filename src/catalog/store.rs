use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One marketplace listing. `imageUrl` serializes as null when absent,
/// `createdBy` is omitted entirely for anonymous listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub condition: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub seller: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// A product before the store has assigned its id.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub image_url: Option<String>,
    pub seller: String,
    pub location: String,
    pub created_by: Option<String>,
}

/// The authoritative in-memory catalog for the process lifetime. Newest
/// listings sit at the front; nothing survives a restart.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// The demo listings the service starts with.
    pub fn seeded() -> Self {
        Self::with_products(vec![
            Product {
                id: 1,
                name: "Macbook Air".into(),
                price: 4500.0,
                description: "Laptop en buen estado. Ideal para tareas y trabajos.".into(),
                category: "Tecnología".into(),
                condition: "Usado".into(),
                image_url: Some("https://images.pexels.com/photos/18105/pexels-photo.jpg".into()),
                seller: "Diego L.".into(),
                location: "Anáhuac Cancún".into(),
                created_by: None,
            },
            Product {
                id: 2,
                name: "iPhone 15".into(),
                price: 6900.0,
                description: "128 GB, excelente batería y cámara.".into(),
                category: "Celulares".into(),
                condition: "Nuevo".into(),
                image_url: Some(
                    "https://images.pexels.com/photos/47261/pexels-photo-47261.jpeg".into(),
                ),
                seller: "Ana R.".into(),
                location: "Anáhuac Cancún".into(),
                created_by: None,
            },
            Product {
                id: 3,
                name: "Bocina JBL".into(),
                price: 800.0,
                description: "Excelente sonido, buen volumen.".into(),
                category: "Audio".into(),
                condition: "Usado".into(),
                image_url: Some(
                    "https://images.pexels.com/photos/3394664/pexels-photo-3394664.jpeg".into(),
                ),
                seller: "Carlos M.".into(),
                location: "Anáhuac Cancún".into(),
                created_by: None,
            },
        ])
    }

    fn with_products(products: Vec<Product>) -> Self {
        // Ids keep a timestamp shape, but the counter only ever moves
        // forward, so two inserts landing in the same millisecond can
        // never collide.
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let max_seeded = products.iter().map(|p| p.id + 1).max().unwrap_or(0);
        Self {
            products,
            next_id: now_ms.max(max_seeded),
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Assigns the next id, prepends, and returns the stored record.
    pub fn insert(&mut self, draft: ProductDraft) -> Product {
        let id = self.next_id;
        self.next_id += 1;
        let product = Product {
            id,
            name: draft.name,
            price: draft.price,
            description: draft.description,
            category: draft.category,
            condition: draft.condition,
            image_url: draft.image_url,
            seller: draft.seller,
            location: draft.location,
            created_by: draft.created_by,
        };
        self.products.insert(0, product.clone());
        product
    }

    /// Removes the listing with the given id, echoing it back.
    pub fn remove(&mut self, id: i64) -> Option<Product> {
        let pos = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(pos))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
