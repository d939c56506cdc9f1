//! `fibertech-catalog` — product catalog domain model.
//!
//! Everything the public site and the admin panel agree on: the product
//! record and its JSON shape, the fixed category vocabulary, the seed
//! list, admin form validation, and the CSV transcoder.

pub mod category;
pub mod csv;
pub mod product;
pub mod seed;

pub use category::{CATEGORIES, ProductCategory, category_by_id};
pub use product::{DocumentLink, Product, ProductDraft, Specification};
pub use seed::seed_products;
