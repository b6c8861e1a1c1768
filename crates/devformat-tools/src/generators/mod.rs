//! Generate-mode tools. Input is an optional count or value.

pub mod color;
pub mod lorem;
pub mod password;
pub mod timestamp;
pub mod uuid;

pub use color::color_generator;
pub use lorem::lorem_ipsum_generator;
pub use password::password_generator;
pub use timestamp::timestamp_converter;
pub use uuid::uuid_generator;
