pub mod agenda;
pub mod case;
pub mod cases;
pub mod clients;
pub mod dashboard;
pub mod deadlines;
pub mod dispatch;
pub mod find;
pub mod shared;
