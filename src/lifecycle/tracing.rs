//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown and final store size, tagged with `entity_type`
//! - **Requests**: every create/get/action at `debug`, outcomes at `info`
//! - **Rejections**: stock shortfalls, catalog and storage failures at `warn`
//! - **Client spans**: `#[instrument]` on [`CartClient`](crate::clients::CartClient) methods
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes and rejections
//! RUST_LOG=info cargo run
//!
//! # Request payloads and catalog URLs
//! RUST_LOG=debug cargo run
//!
//! # Only the actor loop
//! RUST_LOG=cart_store::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, adding a product twice past its stock looks like:
//!
//! ```text
//! INFO Actor started entity_type="Cart"
//! INFO Cart restored cart_id=cart_1 lines=0
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! INFO Action ok entity_type="Cart" id=cart_1 outcome=Committed
//! WARN Action failed entity_type="Cart" id=cart_1 error=Insufficient stock for 1: requested 2, ...
//! WARN add_product{product_id=ProductId(1)}: Cart operation rejected error=... notice=OutOfStock
//! ```

/// Initializes the tracing subscriber for the application.
///
/// Call once, at the start of `main`. Tests should not call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
