//! Data models for the bookstore API

pub mod book;

pub use book::Book;
