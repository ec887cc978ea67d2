mod guard;

pub use guard::AuthorshipGuard;
