pub mod avatar_field;
pub mod email_field;
pub mod name_field;
pub mod password_field;
pub mod techs_field;

pub use avatar_field::AvatarField;
pub use email_field::EmailField;
pub use name_field::NameField;
pub use password_field::PasswordField;
pub use techs_field::{KnowledgeField, TechsField, TitleField};
