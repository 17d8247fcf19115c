use super::AppResult;

/// Collection-level transform over a successful list payload.
///
/// Every element is mapped independently and the order is kept. An `Err`
/// passes through as-is.
pub trait MapEach<T> {
    fn map_each<U, F>(self, f: F) -> AppResult<Vec<U>>
    where
        F: FnMut(T) -> U;
}

impl<T> MapEach<T> for AppResult<Vec<T>> {
    fn map_each<U, F>(self, f: F) -> AppResult<Vec<U>>
    where
        F: FnMut(T) -> U,
    {
        self.map(|items| items.into_iter().map(f).collect())
    }
}
