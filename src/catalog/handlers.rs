use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::WriteAuth,
    catalog::{
        dto::{CreateProductRequest, DeletedProduct},
        store::{Product, ProductDraft},
    },
    error::ApiError,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", delete(delete_product))
}

fn not_found() -> ApiError {
    ApiError::NotFound("Producto no encontrado".into())
}

// The path id is parsed leniently: anything that is not a number behaves
// like an id with no match, not a malformed request.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list().to_vec())
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let catalog = state.catalog.read().await;
    parse_id(&id)
        .and_then(|id| catalog.get(id).cloned())
        .map(Json)
        .ok_or_else(not_found)
}

#[instrument(skip(state, identity, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    WriteAuth(identity): WriteAuth,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let name = payload.name.filter(|n| !n.is_empty());
    let price = payload.price.as_ref().and_then(Value::as_f64);
    let (Some(name), Some(price)) = (name, price) else {
        warn!("create rejected: name/price missing or invalid");
        return Err(ApiError::Validation(
            "name y price son obligatorios y válidos".into(),
        ));
    };

    let draft = ProductDraft {
        name,
        price,
        description: payload
            .description
            .unwrap_or_else(|| "Sin descripción".into()),
        category: payload.category.unwrap_or_else(|| "Sin categoría".into()),
        condition: payload.condition.unwrap_or_else(|| "Usado".into()),
        image_url: payload.image_url,
        seller: payload.seller.unwrap_or_else(|| "Vendedor Anónimo".into()),
        location: payload.location.unwrap_or_else(|| "Anáhuac".into()),
        created_by: identity.map(|claims| claims.email),
    };

    let mut catalog = state.catalog.write().await;
    let product = catalog.insert(draft);
    info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, _identity))]
pub async fn delete_product(
    State(state): State<AppState>,
    WriteAuth(_identity): WriteAuth,
    Path(id): Path<String>,
) -> Result<Json<DeletedProduct>, ApiError> {
    let mut catalog = state.catalog.write().await;
    let product = parse_id(&id)
        .and_then(|id| catalog.remove(id))
        .ok_or_else(not_found)?;
    info!(id = product.id, "product deleted");
    Ok(Json(DeletedProduct {
        message: "Producto eliminado".into(),
        product,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::Claims;
    use serde_json::json;

    fn chair() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Chair".into()),
            price: Some(json!(100)),
            description: None,
            image_url: None,
            category: None,
            condition: None,
            seller: None,
            location: None,
        }
    }

    fn demo_claims() -> Claims {
        Claims {
            sub: 1,
            email: "demo@anahuac.mx".into(),
            iat: 0,
            exp: usize::MAX,
        }
    }

    #[tokio::test]
    async fn create_fills_defaults_and_lands_first_in_listing() {
        let state = AppState::fake();
        let (status, Json(product)) =
            create_product(State(state.clone()), WriteAuth(None), Json(chair()))
                .await
                .expect("create ok");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(product.name, "Chair");
        assert_eq!(product.price, 100.0);
        assert_eq!(product.description, "Sin descripción");
        assert_eq!(product.category, "Sin categoría");
        assert_eq!(product.condition, "Usado");
        assert_eq!(product.seller, "Vendedor Anónimo");
        assert_eq!(product.location, "Anáhuac");
        assert!(product.image_url.is_none());
        assert!(product.created_by.is_none());

        let Json(listing) = list_products(State(state)).await;
        assert_eq!(listing.first().map(|p| p.id), Some(product.id));
        let unique: std::collections::HashSet<i64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), listing.len());
    }

    #[tokio::test]
    async fn create_stamps_the_authenticated_creator() {
        let state = AppState::fake();
        let (_, Json(product)) = create_product(
            State(state),
            WriteAuth(Some(demo_claims())),
            Json(chair()),
        )
        .await
        .expect("create ok");
        assert_eq!(product.created_by.as_deref(), Some("demo@anahuac.mx"));
    }

    #[tokio::test]
    async fn create_rejects_missing_or_non_numeric_price() {
        let state = AppState::fake();

        let mut no_price = chair();
        no_price.price = None;
        let err = create_product(State(state.clone()), WriteAuth(None), Json(no_price))
            .await
            .expect_err("price omitted");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name y price son obligatorios y válidos");

        let mut string_price = chair();
        string_price.price = Some(json!("100"));
        let err = create_product(State(state.clone()), WriteAuth(None), Json(string_price))
            .await
            .expect_err("price as string");
        assert_eq!(err.to_string(), "name y price son obligatorios y válidos");

        let mut empty_name = chair();
        empty_name.name = Some(String::new());
        let err = create_product(State(state), WriteAuth(None), Json(empty_name))
            .await
            .expect_err("empty name");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_round_trips_a_created_product() {
        let state = AppState::fake();
        let (_, Json(created)) = create_product(State(state.clone()), WriteAuth(None), Json(chair()))
            .await
            .expect("create ok");

        let Json(fetched) = get_product(State(state), Path(created.id.to_string()))
            .await
            .expect("get ok");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.seller, created.seller);
    }

    #[tokio::test]
    async fn get_misses_on_unknown_and_non_numeric_ids() {
        let state = AppState::fake();

        let err = get_product(State(state.clone()), Path("999999".into()))
            .await
            .expect_err("unknown id");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Producto no encontrado");

        let err = get_product(State(state), Path("abc".into()))
            .await
            .expect_err("non-numeric id");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Producto no encontrado");
    }

    #[tokio::test]
    async fn delete_echoes_once_then_returns_not_found() {
        let state = AppState::fake();
        let (_, Json(created)) = create_product(State(state.clone()), WriteAuth(None), Json(chair()))
            .await
            .expect("create ok");

        let Json(deleted) = delete_product(
            State(state.clone()),
            WriteAuth(None),
            Path(created.id.to_string()),
        )
        .await
        .expect("first delete ok");
        assert_eq!(deleted.message, "Producto eliminado");
        assert_eq!(deleted.product.id, created.id);

        let err = delete_product(State(state), WriteAuth(None), Path(created.id.to_string()))
            .await
            .expect_err("second delete misses");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
