pub mod controller;
pub mod directory;
pub mod router;
