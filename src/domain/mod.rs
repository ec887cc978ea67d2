pub mod article;
pub mod channel;
pub mod choices;
pub mod errors;
pub mod mixins;
pub mod record;
pub mod repository;
pub mod schema;
pub mod slug;
pub mod status;
pub mod user;
