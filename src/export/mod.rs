//! Renderers that turn core output into shareable artefacts.

pub mod chart;
pub mod csv;
pub mod invoice;
pub mod qr;
pub mod summary;
