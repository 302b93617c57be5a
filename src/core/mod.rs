// Domain-layer modules and shared errors/models
pub mod aggregation {
    pub use crate::aggregation::*;
}

pub mod classifiers {
    pub use crate::classifiers::*;
}

pub mod traffic {
    pub use crate::traffic::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
