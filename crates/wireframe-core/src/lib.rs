//! Wireframe Core Types and Definitions
//!
//! This crate provides the foundational types used to describe wireframe
//! mockups as Excalidraw drawings. It includes:
//!
//! - **Colors**: Validated colors serialised as hex strings ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Theme**: Palette and layout constants shared by every screen ([`theme`] module)
//! - **Shapes**: The pure layout record and its constructors ([`shape`] module)
//! - **Noise**: Cosmetic randomness kept apart from layout ([`noise`] module)
//! - **Elements**: Stamped, serialisable drawing elements ([`element`] module)

pub mod color;
pub mod element;
pub mod geometry;
pub mod noise;
pub mod shape;
pub mod theme;
