//! C header generation modules.

pub mod callbacks;
pub mod comments;
pub mod constants;
pub mod enums;
pub mod forward;
pub mod preamble;
pub mod procs;
pub mod structs;
pub mod types;

pub use callbacks::CallbackGenerator;
pub use constants::ConstantGenerator;
pub use enums::EnumGenerator;
pub use forward::ForwardDeclGenerator;
pub use procs::ProcGenerator;
pub use structs::StructGenerator;
