/// Database models for Recipebox
///
/// This module contains all database models and their CRUD operations.
/// Every query against an owned record (tag, ingredient, recipe) takes
/// the owner's user id as an explicit parameter; there is no ambient
/// "current user" anywhere in this crate.
///
/// # Models
///
/// - `user`: User accounts and authentication
/// - `tag`: Recipe tags, owned per user
/// - `ingredient`: Ingredients, owned per user
/// - `recipe`: Recipes with a many-to-many link to ingredients

pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
