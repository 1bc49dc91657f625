//! Repositories: one zero-sized struct per table exposing async query
//! functions that take the pool explicitly.

pub mod note_repo;

pub use note_repo::NoteRepo;
