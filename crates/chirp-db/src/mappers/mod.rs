//! Entity <-> model mappers
//!
//! `From` conversions from database models to domain entities. Conversions
//! live here so the models stay plain `FromRow` structs.

mod follow;
mod like;
mod media;
mod tweet;
mod user;
