pub mod routing;

pub use routing::{dynamic_rendering_middleware, is_dynamic_path};
