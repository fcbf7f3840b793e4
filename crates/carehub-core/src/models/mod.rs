pub mod flag;
pub mod kind;
pub mod magnitude;
