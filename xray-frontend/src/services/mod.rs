pub mod backend;
pub mod http_backend;
pub mod preview;

pub use backend::DiagnosisBackend;
pub use http_backend::HttpBackend;
