//! Application layer for Cookbook.
//!
//! `ProfileScreen` drives the three flows of the profile screen (loading the
//! profile, saving it, listing recipes) against injected collaborators and
//! keeps the in-memory state the view renders.

pub mod logging;
pub mod notice;
pub mod profile_saver;
pub mod profile_screen;
pub mod screen_state;

pub use notice::{Notice, NoticeCallback, NoticeLevel};
pub use profile_saver::{ImageSource, ProfileSaver, SaveOutcome};
pub use profile_screen::ProfileScreen;
pub use screen_state::{ScreenSnapshot, ScreenState};
