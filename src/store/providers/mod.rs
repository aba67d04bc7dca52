mod http;

pub use http::HttpStore;
