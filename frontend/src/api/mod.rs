//! Bindings for the persistence API consumed by the pages.
//!
//! Every endpoint answers with the shared [`ApiResponse`] envelope. Transport
//! failures (connection refused, malformed body) surface as
//! [`gloo_net::Error`] and are logged to the browser console here, so callers
//! only have to map them to a user-facing message.

use common::model::purchase_order::PurchaseOrder;
use common::requests::ApiResponse;
use gloo_console::error;
use gloo_net::http::Request;
use gloo_net::Error;

/// User-facing message for transport-level failures, shared by the pages.
pub const CONNECTIVITY_MESSAGE: &str = "Could not reach the server. Please try again.";

pub async fn fetch_orders() -> Result<ApiResponse<Vec<PurchaseOrder>>, Error> {
    let result = async { Request::get("/api/orders").send().await?.json().await }.await;
    logged("GET /api/orders", result)
}

/// Reads a single order. A plain 404 is folded into an unsuccessful envelope
/// so callers see one "no such record" shape regardless of how the server
/// reports it.
pub async fn fetch_order(id: &str) -> Result<ApiResponse<PurchaseOrder>, Error> {
    let url = format!("/api/orders/{}", id);
    let result = async {
        let response = Request::get(&url).send().await?;
        if response.status() == 404 {
            return Ok(ApiResponse {
                success: false,
                data: None,
                message: None,
            });
        }
        response.json().await
    }
    .await;
    logged("GET /api/orders/{id}", result)
}

pub async fn create_order(order: &PurchaseOrder) -> Result<ApiResponse<PurchaseOrder>, Error> {
    let result = async {
        Request::post("/api/orders")
            .json(order)?
            .send()
            .await?
            .json()
            .await
    }
    .await;
    logged("POST /api/orders", result)
}

pub async fn update_order(
    id: &str,
    order: &PurchaseOrder,
) -> Result<ApiResponse<PurchaseOrder>, Error> {
    let url = format!("/api/orders/{}", id);
    let result = async { Request::put(&url).json(order)?.send().await?.json().await }.await;
    logged("PUT /api/orders/{id}", result)
}

fn logged<T>(context: &'static str, result: Result<T, Error>) -> Result<T, Error> {
    if let Err(err) = &result {
        error!(context, err.to_string());
    }
    result
}
