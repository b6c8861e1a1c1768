//! Encoders, decoders and digests.

pub mod base64;
pub mod html_entities;
pub mod jwt;
pub mod md5;
pub mod sha256;
pub mod url;

pub use base64::base64_encoder;
pub use html_entities::html_entities_encoder;
pub use jwt::jwt_decoder;
pub use md5::md5_generator;
pub use sha256::sha256_generator;
pub use url::url_encoder;
