/// TMDB image CDN
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Build a full image URL from a TMDB file path, e.g. `("w500", "/abc.jpg")`
pub fn image_url(size: &str, file_path: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, file_path)
}
