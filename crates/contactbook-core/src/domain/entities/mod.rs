pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Deletion, Insertion};
pub use record::{PhoneAdded, PhoneEdited, Record};
