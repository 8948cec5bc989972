pub use super::bill::Entity as Bill;
