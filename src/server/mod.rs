//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for cookie sessions.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic: catalog listing, ownership merge, pagination
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and their error codes
//! - **Middleware** (`middleware/`) - Identity resolution, sessions and authorization guards
//! - **Envelope** (`envelope`) - Response shapes and the only place status codes are chosen
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** resolves the caller's identity from a bearer token or the session
//! 3. **Controller** checks access, parses query/body into params, calls a service
//! 4. **Service** runs the business logic over one or more repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the result to DTOs wrapped in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
