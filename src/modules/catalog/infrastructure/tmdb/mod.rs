//! TMDB v3 online source

pub mod client;
pub mod models;

pub use client::TmdbCatalogSource;
