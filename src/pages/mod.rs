//! Page Containers
//!
//! Each page owns one content record, supplies placeholder content when
//! the backend has none, and wires field-scoped save closures into the
//! editable bindings.

mod about;
mod conclusion;
mod home;
mod stage;

pub use about::AboutPage;
pub use conclusion::ConclusionPage;
pub use home::HomePage;
pub use stage::StagePage;
