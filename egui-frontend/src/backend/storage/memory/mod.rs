pub mod connection;
pub mod user_repository;
pub mod event_repository;
pub mod result_repository;

pub use connection::MemoryConnection;
pub use user_repository::UserRepository;
pub use event_repository::EventRepository;
pub use result_repository::ResultRepository;
