//! Process-local adapters.

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
