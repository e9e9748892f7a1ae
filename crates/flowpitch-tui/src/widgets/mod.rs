mod controls;
mod help;
mod slide;
mod status_bar;
mod toast;
mod track;

pub use controls::ControlsWidget;
pub use help::HelpWidget;
pub use slide::SlideWidget;
pub use status_bar::StatusBarWidget;
pub use toast::ToastWidget;
pub use track::SlideTrackWidget;
