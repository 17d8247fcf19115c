//! Shared helpers for integration tests
#![allow(dead_code)]

pub mod fakes;
pub mod fixtures;

use std::sync::Arc;

use cinedex_lib::modules::catalog::application::MovieRepository;
use cinedex_lib::shared::TokenPersistence;
use fakes::{FakeOnlineSource, RecordingLocalStore};

/// Repository over the given fakes, keeping handles for inspection
pub fn build_repository(
    online: FakeOnlineSource,
    local: RecordingLocalStore,
    policy: TokenPersistence,
) -> (MovieRepository, Arc<FakeOnlineSource>, Arc<RecordingLocalStore>) {
    let online = Arc::new(online);
    let local = Arc::new(local);
    let repository = MovieRepository::new(local.clone(), online.clone()).with_token_policy(policy);
    (repository, online, local)
}
