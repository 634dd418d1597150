pub mod modal;
pub mod shell;

pub use modal::ModalManager;
pub use shell::DomSurface;
