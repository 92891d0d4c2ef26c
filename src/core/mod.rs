// Domain-layer modules: request models, prompt and email generation
pub mod models {
    pub use crate::models::*;
}

pub mod prompts {
    pub use crate::prompts::*;
}

pub mod generator {
    pub use crate::generator::*;
}

pub mod fallback {
    pub use crate::fallback::*;
}

pub mod errors {
    pub use crate::errors::*;
}
