pub mod local_store;
pub mod online_source;

pub use local_store::LocalStore;
pub use online_source::OnlineSource;

#[cfg(test)]
pub use local_store::MockLocalStore;
#[cfg(test)]
pub use online_source::MockOnlineSource;
