//!
//! globally-available parts
//!
pub use crate::common::{Label, Sequence};
pub use crate::error::{HmmError, Result};
pub use crate::hmm::{gc_isochore, generate, GeneratedSequence, HmmModel};
pub use crate::io::model_file::{load_model, ModelFile};
