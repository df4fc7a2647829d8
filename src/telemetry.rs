//! # Observability & Tracing
//!
//! Every controller operation runs inside its own span and logs structured
//! fields (`id`, `found`, `count`, `error`), so a request can be followed from
//! entry to the store call and back.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable:
//!
//! ```bash
//! # One line per completed operation
//! RUST_LOG=info cargo test
//!
//! # Also show incoming ids and payloads
//! RUST_LOG=debug cargo test
//!
//! # Only this crate
//! RUST_LOG=book_resource=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` an update that matches nothing reads:
//!
//! ```text
//! DEBUG update{id="99"}: Update id=99 payload={"titulo": String("libro Actualizado")}
//!  WARN update{id="99"}: Not found id=99
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
