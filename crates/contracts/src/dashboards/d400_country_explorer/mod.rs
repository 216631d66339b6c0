pub mod dto;
pub mod table;
