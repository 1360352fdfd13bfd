//! In-memory storage adapters.

mod in_memory_patient_repository;

pub use in_memory_patient_repository::InMemoryPatientRepository;
