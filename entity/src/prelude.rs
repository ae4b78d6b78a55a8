pub use super::contact::Entity as Contact;
pub use super::contact_group::Entity as ContactGroup;
pub use super::group::Entity as Group;
