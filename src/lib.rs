//! Chekku
//!
//! Chekku prices cold-pressed oil by weight and renders a one-page bill for
//! each sale.

pub mod billing;
pub mod catalog;
pub mod invoice;
pub mod layout;
pub mod payment;
pub mod prelude;
pub mod pricing;
pub mod renderers;
pub mod request;
pub mod seller;
pub mod weight;
