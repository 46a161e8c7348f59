use thiserror::Error;

pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Error, Debug)]
pub enum PanelError {
    /// Caller passed a panel type name the classifier does not know
    #[error("Unknown panel type: {0} (expected blue, left_field or red_team)")]
    UnknownPanelType(String),

    #[error("Profile '{0}' is not bundled")]
    UnknownProfile(String),
}
