//! Form features and their validation logic. Routes import these modules to
//! keep view code focused on markup and signal wiring.

pub(crate) mod forms;
pub(crate) mod login;
pub(crate) mod register;
