//! Database repository layer for leagues and member records.
//!
//! Repositories use SeaORM entity models internally and return domain models so that
//! services never handle entity models. Every repository is generic over
//! `ConnectionTrait`, so the same repository works on a pooled connection or inside a
//! transaction opened by a service.

pub mod league;
pub mod member;
