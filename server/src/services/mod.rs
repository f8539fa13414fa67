//! Background services behind the HTTP layer.

pub mod feed;
