//! Server-rendered customer pages.
//!
//! Uses Askama templates for rendering.
//!
//! # Modules
//!
//! - [`controller`] - Route-to-view mapping on top of the customer service
//! - [`form`] - Form field binding
//! - [`handlers`] - Axum handlers wiring extraction, controller and views
//! - [`model`] - View names and model attributes
//! - [`routes`] - Route table
//! - [`views`] - Template registry and redirect responses

pub mod controller;
pub mod form;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod views;
