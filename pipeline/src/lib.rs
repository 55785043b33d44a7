pub mod encoder;
pub mod flow;
pub mod interpret;
pub mod multipart;
pub mod transport;
pub mod uploader;

pub use flow::ScanFlow;
pub use interpret::{interpret, ResponseShape, STRATEGY_ORDER};
pub use multipart::MultipartBody;
pub use transport::TransportClient;
pub use uploader::{MenuUploader, UPLOAD_FILENAME};
