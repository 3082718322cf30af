pub mod domain;
pub mod dto;
pub mod html;
pub mod image;
