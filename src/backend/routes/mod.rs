//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - API endpoints (auth, configs, public gallery)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # Route Organization
//!
//! 1. **Health** - `GET /api/health`
//! 2. **API Routes** - Authentication, configs, public gallery
//! 3. **Fallback Handler** - JSON 404 errors

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use api_routes::configure_api_routes;
pub use router::create_router;
