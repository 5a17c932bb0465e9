pub mod get_download;

pub use get_download::{DownloadError, get_download};
