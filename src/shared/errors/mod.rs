pub mod app_error;
pub mod result_ext;

pub use app_error::{AppError, AppResult};
pub use result_ext::MapEach;
