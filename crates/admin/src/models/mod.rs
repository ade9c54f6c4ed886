//! Domain models for the card shop schema.
//!
//! Each model maps one-to-one onto a table row (column names match field
//! names). `*Option` types are the id + display-name projections used to
//! populate selection widgets and resolve foreign keys on list pages.
//! `New*` types are write inputs; they carry every editable column.

pub mod customer;
pub mod order;
pub mod payment;
pub mod product;

pub use customer::{Customer, CustomerInput, CustomerOption};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderOption};
pub use payment::{NewPayment, Payment};
pub use product::{CardSet, NewCardSet, NewProduct, Product, ProductOption, SetOption};
