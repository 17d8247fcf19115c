pub mod dto;
pub mod mapper;
pub mod ports;
pub mod repository;

pub use mapper::CatalogMapper;
pub use ports::{LocalStore, OnlineSource};
pub use repository::MovieRepository;
