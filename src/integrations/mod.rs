//! External service integrations.

pub mod gemini_client {
    pub use crate::gemini_client::*;
}

pub mod services {
    pub use crate::services::*;
}

pub mod enrichment {
    pub use crate::enrichment::*;
}
