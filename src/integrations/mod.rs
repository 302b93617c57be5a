//! External service integrations.

pub mod weather_client {
    pub use crate::weather_client::*;
}

pub mod geocoding_client {
    pub use crate::geocoding_client::*;
}

pub mod air_quality_client {
    pub use crate::air_quality_client::*;
}

pub mod uv_client {
    pub use crate::uv_client::*;
}

pub mod upstream {
    pub use crate::upstream::*;
}
